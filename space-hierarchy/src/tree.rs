// SPDX-License-Identifier: GPL-3.0-only

//! Rebuild a location tree from flat records

use std::collections::{HashMap, HashSet};

use space_types::{HierarchyNode, Space, SpaceId, SpaceType};
use tracing::warn;

/// Nest flat records under their parents, siblings sorted by name.
///
/// Root records of type `space` (not placed in any building) are listed after
/// the campus, building and floor roots. Records that never reach a root,
/// because a parent is missing or the links loop, are left out.
pub fn build_tree(spaces: &[Space]) -> Vec<HierarchyNode> {
    let mut sorted: Vec<&Space> = spaces.iter().collect();
    sorted.sort_by(|a, b| compare_names(&a.name, &b.name));

    let mut children: HashMap<&SpaceId, Vec<&Space>> = HashMap::new();
    let mut roots = Vec::new();
    for space in sorted.iter().copied() {
        match &space.parent_id {
            Some(parent_id) => children.entry(parent_id).or_default().push(space),
            None => roots.push(space),
        }
    }

    let mut placed = HashSet::new();
    let (containers, unplaced): (Vec<_>, Vec<_>) = roots
        .into_iter()
        .filter_map(|root| build_node(root, &children, &mut placed))
        .partition(|node| node.space_type != SpaceType::Space);

    if placed.len() < spaces.len() {
        warn!(
            dropped = spaces.len() - placed.len(),
            "records without a reachable root were left out of the space tree"
        );
    }

    containers.into_iter().chain(unplaced).collect()
}

fn build_node<'a>(
    space: &'a Space,
    children: &HashMap<&SpaceId, Vec<&'a Space>>,
    placed: &mut HashSet<&'a SpaceId>,
) -> Option<HierarchyNode> {
    // a duplicated id would otherwise nest under itself forever
    if !placed.insert(&space.id) {
        return None;
    }

    let nested = children
        .get(&space.id)
        .map(|list| {
            list.iter()
                .filter_map(|child| build_node(child, children, placed))
                .collect()
        })
        .unwrap_or_default();

    Some(HierarchyNode {
        id: space.id.clone(),
        name: space.name.clone(),
        space_type: space.space_type,
        parent_id: space.parent_id.clone(),
        children: nested,
        extra: space.extra.clone(),
    })
}

fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
