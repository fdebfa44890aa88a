// SPDX-License-Identifier: GPL-3.0-only

//! Space hierarchy helpers
//!
//! Pure functions over the location models in `space-types`:
//!
//! - `formatter`: flattens a `HierarchyNode` forest into depth-annotated rows
//! - `searcher`: narrows those rows by a fuzzy query, keeping their context
//! - `fuzzy`: the subsequence matcher used by the searcher
//! - `index`: ancestry lookups over flat `Space` records
//! - `tree`: rebuilds a forest from flat records
//! - `flat`: listing of flat records with placeholder rows for empty levels
//! - `selection`: normalizes the values a space picker can hold
//!
//! Nothing here keeps state between calls.

pub mod error;
pub mod flat;
pub mod formatter;
pub mod fuzzy;
pub mod index;
pub mod searcher;
pub mod selection;
pub mod tree;

pub use error::{HierarchyError, Result};
pub use flat::{FlatFormatOptions, FlatItem, format_flat};
pub use formatter::format;
pub use fuzzy::{FilterMatch, FuzzyMatch, fuzzy_filter, fuzzy_match};
pub use index::SpaceIndex;
pub use searcher::{search, search_ranked};
pub use selection::{SpaceSelection, toggle};
pub use tree::build_tree;
