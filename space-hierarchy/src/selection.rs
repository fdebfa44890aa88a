// SPDX-License-Identifier: GPL-3.0-only

//! Values held by a space picker
//!
//! A picker's value may arrive as raw ids or as formatted rows, singly or as a
//! list. It is resolved into a plain list of ids before anything else looks at
//! it.

use serde::{Deserialize, Serialize};
use space_types::{DisplayItem, SpaceId};

use crate::error::{HierarchyError, Result};

/// Current value of a space picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpaceSelection {
    None,
    SingleId(SpaceId),
    MultipleIds(Vec<SpaceId>),
    SingleItem(Box<DisplayItem>),
    MultipleItems(Vec<DisplayItem>),
}

impl SpaceSelection {
    fn shape(&self) -> &'static str {
        match self {
            SpaceSelection::None => "nothing",
            SpaceSelection::SingleId(_) | SpaceSelection::SingleItem(_) => "a single space",
            SpaceSelection::MultipleIds(_) | SpaceSelection::MultipleItems(_) => "a list of spaces",
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(
            self,
            SpaceSelection::MultipleIds(_) | SpaceSelection::MultipleItems(_)
        )
    }

    /// Selected ids, checking the value's shape against the picker mode.
    ///
    /// A multi-select picker needs a list; a single-select picker needs a
    /// single value or nothing.
    pub fn selected_ids(&self, can_select_multiple: bool) -> Result<Vec<SpaceId>> {
        let shape_fits = match self {
            SpaceSelection::None => !can_select_multiple,
            _ => self.is_multiple() == can_select_multiple,
        };

        if !shape_fits {
            return Err(HierarchyError::SelectionShape {
                expected: if can_select_multiple {
                    "a list of spaces"
                } else {
                    "a single space"
                },
                found: self.shape(),
            });
        }

        Ok(match self {
            SpaceSelection::None => Vec::new(),
            SpaceSelection::SingleId(id) => vec![id.clone()],
            SpaceSelection::SingleItem(item) => vec![item.space.id.clone()],
            SpaceSelection::MultipleIds(ids) => ids.clone(),
            SpaceSelection::MultipleItems(items) => {
                items.iter().map(|item| item.space.id.clone()).collect()
            }
        })
    }
}

/// Selection after `item` is checked or unchecked.
///
/// Multi-select pickers add or remove the item's id and resolve the ids back
/// to rows of `items`, dropping ids not listed there. Single-select pickers
/// simply select `item`.
pub fn toggle(
    items: &[DisplayItem],
    selected: &[SpaceId],
    item: &DisplayItem,
    checked: bool,
    can_select_multiple: bool,
) -> SpaceSelection {
    if !can_select_multiple {
        return SpaceSelection::SingleItem(Box::new(item.clone()));
    }

    let mut ids: Vec<&SpaceId> = selected.iter().filter(|id| *id != item.id()).collect();
    if checked {
        ids.push(item.id());
    }

    SpaceSelection::MultipleItems(
        ids.into_iter()
            .filter_map(|id| items.iter().find(|row| row.id() == id).cloned())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::format;
    use serde_json::json;
    use space_types::{HierarchyNode, SpaceType};

    fn items() -> Vec<DisplayItem> {
        format(&[
            HierarchyNode::new("b", "Tower", SpaceType::Building).with_children(vec![
                HierarchyNode::new("f1", "One", SpaceType::Floor),
                HierarchyNode::new("f2", "Two", SpaceType::Floor),
            ]),
        ])
    }

    fn ids(raw: &[&str]) -> Vec<SpaceId> {
        raw.iter().map(|id| SpaceId::from(*id)).collect()
    }

    #[test]
    fn every_shape_resolves_to_ids() {
        let rows = items();

        assert_eq!(SpaceSelection::None.selected_ids(false).unwrap(), ids(&[]));
        assert_eq!(
            SpaceSelection::SingleId("f1".into()).selected_ids(false).unwrap(),
            ids(&["f1"])
        );
        assert_eq!(
            SpaceSelection::SingleItem(Box::new(rows[2].clone()))
                .selected_ids(false)
                .unwrap(),
            ids(&["f2"])
        );
        assert_eq!(
            SpaceSelection::MultipleIds(ids(&["b", "f2"]))
                .selected_ids(true)
                .unwrap(),
            ids(&["b", "f2"])
        );
        assert_eq!(
            SpaceSelection::MultipleItems(rows.clone())
                .selected_ids(true)
                .unwrap(),
            ids(&["b", "f1", "f2"])
        );
    }

    #[test]
    fn shape_must_match_picker_mode() {
        assert!(matches!(
            SpaceSelection::MultipleIds(vec![]).selected_ids(false),
            Err(HierarchyError::SelectionShape { .. })
        ));
        assert!(SpaceSelection::SingleId("b".into()).selected_ids(true).is_err());
        assert!(SpaceSelection::None.selected_ids(true).is_err());
    }

    #[test]
    fn deserializes_from_any_accepted_shape() {
        let none: SpaceSelection = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(none, SpaceSelection::None);

        let single: SpaceSelection = serde_json::from_value(json!("spc_1")).unwrap();
        assert_eq!(single, SpaceSelection::SingleId("spc_1".into()));

        let many: SpaceSelection = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(many, SpaceSelection::MultipleIds(ids(&["a", "b"])));

        let row = serde_json::to_value(&items()[1]).unwrap();
        let rows: SpaceSelection = serde_json::from_value(json!([row])).unwrap();
        assert_eq!(rows.selected_ids(true).unwrap(), ids(&["f1"]));
    }

    #[test]
    fn toggle_adds_and_removes_in_multi_mode() {
        let rows = items();

        let added = toggle(&rows, &ids(&["b"]), &rows[2], true, true);
        assert_eq!(added.selected_ids(true).unwrap(), ids(&["b", "f2"]));

        let removed = toggle(&rows, &ids(&["b", "f2"]), &rows[0], false, true);
        assert_eq!(removed.selected_ids(true).unwrap(), ids(&["f2"]));
    }

    #[test]
    fn toggle_drops_ids_missing_from_rows() {
        let rows = items();
        let next = toggle(&rows, &ids(&["gone"]), &rows[1], true, true);
        assert_eq!(next.selected_ids(true).unwrap(), ids(&["f1"]));
    }

    #[test]
    fn toggle_selects_item_in_single_mode() {
        let rows = items();
        let next = toggle(&rows, &ids(&["b"]), &rows[1], true, false);
        assert_eq!(next.selected_ids(false).unwrap(), ids(&["f1"]));
    }
}
