// SPDX-License-Identifier: GPL-3.0-only

use space_types::SpaceId;
use thiserror::Error;

/// Error types for hierarchy lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("cyclical space hierarchy detected at space {0}")]
    CyclicHierarchy(SpaceId),

    #[error("no such space found with id {0}")]
    SpaceNotFound(SpaceId),

    #[error("selection holds {found} but the picker expects {expected}")]
    SelectionShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for hierarchy operations
pub type Result<T> = std::result::Result<T, HierarchyError>;
