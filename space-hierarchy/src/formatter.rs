// SPDX-License-Identifier: GPL-3.0-only

//! Flatten a location tree into display rows
//!
//! Output is a pre-order walk of the forest: every node is followed by all of
//! its descendants before its next sibling, and roots keep their input order.
//! Each row records its depth, its ancestors (nearest first) and the flat list
//! of everything below it.
//!
//! `HierarchyNode` owns its children, so a forest cannot contain cycles and
//! the walk always terminates.

use space_types::{DisplayItem, HierarchyNode, Space, SpaceId};
use tracing::debug;

/// Flatten `forest` into one `DisplayItem` per node.
pub fn format(forest: &[HierarchyNode]) -> Vec<DisplayItem> {
    let total = forest.iter().map(HierarchyNode::node_count).sum();
    let mut items = Vec::with_capacity(total);
    let mut ancestry = Vec::new();

    for root in forest {
        walk(root, None, &mut ancestry, &mut items);
    }

    debug!(roots = forest.len(), items = items.len(), "formatted space hierarchy");
    items
}

// `ancestry` is kept root-first while walking and reversed per row.
fn walk(
    node: &HierarchyNode,
    parent: Option<&SpaceId>,
    ancestry: &mut Vec<Space>,
    items: &mut Vec<DisplayItem>,
) {
    let record = node.record(parent);
    let position = items.len();

    items.push(DisplayItem {
        depth: ancestry.len(),
        space: record.clone(),
        ancestry: ancestry.iter().rev().cloned().collect(),
        children: Vec::new(),
    });

    ancestry.push(record);
    for child in &node.children {
        walk(child, Some(&node.id), ancestry, items);
    }
    ancestry.pop();

    let descendants = items[position + 1..]
        .iter()
        .map(|item| item.space.clone())
        .collect();
    items[position].children = descendants;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use space_types::SpaceType;

    fn names(spaces: &[Space]) -> Vec<&str> {
        spaces.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn empty_forest_formats_to_nothing() {
        assert!(format(&[]).is_empty());
    }

    #[test]
    fn three_level_chain() {
        let forest: Vec<HierarchyNode> = serde_json::from_value(json!([
            {
                "id": 0, "name": "Food", "spaceType": "building",
                "children": [{
                    "id": 1, "name": "Pickled things", "spaceType": "floor",
                    "children": [{"id": 2, "name": "Pickles", "spaceType": "space"}],
                }],
            },
        ]))
        .unwrap();

        let items = format(&forest);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].depth, 0);
        assert_eq!(items[0].name(), "Food");
        assert!(items[0].ancestry.is_empty());
        assert_eq!(items[0].space.parent_id, None);
        assert_eq!(names(&items[0].children), vec!["Pickled things", "Pickles"]);

        assert_eq!(items[1].depth, 1);
        assert_eq!(names(&items[1].ancestry), vec!["Food"]);
        assert_eq!(items[1].space.parent_id, Some(SpaceId::from(0)));

        assert_eq!(items[2].depth, 2);
        assert_eq!(items[2].name(), "Pickles");
        assert_eq!(names(&items[2].ancestry), vec!["Pickled things", "Food"]);
        assert!(items[2].children.is_empty());
    }

    #[test]
    fn empty_children_and_missing_children_are_both_leaves() {
        let forest: Vec<HierarchyNode> = serde_json::from_value(json!([
            {"id": "a", "name": "A", "spaceType": "space", "children": []},
            {"id": "b", "name": "B", "spaceType": "space"},
        ]))
        .unwrap();

        let items = format(&forest);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.depth == 0 && i.children.is_empty()));
    }

    #[test]
    fn roots_keep_input_order_and_siblings_follow_subtrees() {
        let forest = vec![
            HierarchyNode::new("b2", "Second", SpaceType::Building).with_children(vec![
                HierarchyNode::new("f1", "Ground", SpaceType::Floor)
                    .with_children(vec![HierarchyNode::new("s1", "Lobby", SpaceType::Space)]),
                HierarchyNode::new("f2", "Roof", SpaceType::Floor),
            ]),
            HierarchyNode::new("b1", "First", SpaceType::Building),
        ];

        let order: Vec<_> = format(&forest).iter().map(|i| i.id().to_string()).collect();
        assert_eq!(order, vec!["b2", "f1", "s1", "f2", "b1"]);
    }

    #[test]
    fn stored_records_carry_no_nested_children() {
        let forest = vec![
            HierarchyNode::new("b", "HQ", SpaceType::Building)
                .with_children(vec![HierarchyNode::new("f", "One", SpaceType::Floor)]),
        ];

        let items = format(&forest);
        let value = serde_json::to_value(&items[1]).unwrap();
        assert_eq!(value["ancestry"][0], json!({
            "id": "b",
            "name": "HQ",
            "spaceType": "building",
            "parentId": null,
        }));
    }
}
