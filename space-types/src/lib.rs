// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for space hierarchy tooling
//!
//! This crate defines the shared types used by the hierarchy helpers and the
//! command line front end:
//!
//! - **space-hierarchy**: Consumes these types, flattening and filtering them
//! - **space-cli**: Deserializes them from API payloads and prints them back
//!
//! ## Architecture
//!
//! The type system supports two shapes of the same data:
//!
//! ### Flat records (as listed by the API)
//! - `Space` → one location with a `parent_id` link
//!
//! ### Tree (as returned by the hierarchy endpoint)
//! - `HierarchyNode` → recursive structure of campus → building → floor → space
//!
//! `DisplayItem` is the flattened, depth-annotated view the formatter derives
//! from a tree.

pub mod error;
pub mod space;
pub mod units;

pub use error::{Result, UnitError};
pub use space::{DisplayItem, HierarchyNode, Space, SpaceId, SpaceType};
pub use units::{ConvertOptions, Dimension, Unit, convert};
