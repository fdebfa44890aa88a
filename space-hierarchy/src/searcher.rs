// SPDX-License-Identifier: GPL-3.0-only

//! Narrow a flattened hierarchy by a text query
//!
//! A row is kept when its own name, the name of any ancestor or the name of
//! any descendant fuzzy-matches the query. Keeping rows that only match
//! through relatives is what lets a hit deep in the tree still show the
//! building and floor that contain it.

use space_types::DisplayItem;
use tracing::debug;

use crate::fuzzy::fuzzy_match;

/// Rows of `items` related to a name matching `query`, in their original order.
///
/// An empty query keeps every row.
pub fn search<'a>(items: &'a [DisplayItem], query: &str) -> Vec<&'a DisplayItem> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let hits: Vec<_> = items
        .iter()
        .filter(|item| related_match(item, query))
        .collect();

    debug!(query, rows = items.len(), hits = hits.len(), "searched space hierarchy");
    hits
}

/// Same rows as [`search`], direct name matches first by score.
///
/// Rows kept only because of a relative follow, in their original order.
pub fn search_ranked<'a>(items: &'a [DisplayItem], query: &str) -> Vec<&'a DisplayItem> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let mut scored: Vec<(Option<u64>, &DisplayItem)> = search(items, query)
        .into_iter()
        .map(|item| (fuzzy_match(query, item.name()).map(|m| m.score), item))
        .collect();

    // `None` sorts below every `Some`; the sort is stable for ties
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}

fn related_match(item: &DisplayItem, query: &str) -> bool {
    let matches = |name: &str| fuzzy_match(query, name).is_some();

    matches(item.name())
        || item.ancestry.iter().any(|space| matches(&space.name))
        || item.children.iter().any(|space| matches(&space.name))
}
