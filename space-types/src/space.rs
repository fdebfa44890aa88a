// SPDX-License-Identifier: GPL-3.0-only

//! Location records - flat and hierarchical representations
//!
//! `HierarchyNode` is the recursive tree returned by the hierarchy endpoint.
//! `Space` is a single location without nested children, carrying a link to
//! its parent. Both keep any additional fields of the source payload so that
//! consumers can round-trip records they do not fully model.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Opaque identifier of a location
///
/// API payloads use string ids (`spc_123`), while fixtures and some older
/// endpoints use integers. Both deserialize into the same string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceId(String);

impl SpaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

macro_rules! space_id_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SpaceId {
                fn from(id: $ty) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

space_id_from_integer!(i32, i64, u32, u64);

impl Serialize for SpaceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SpaceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpaceIdVisitor;

        impl Visitor<'_> for SpaceIdVisitor {
            type Value = SpaceId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer space id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<SpaceId, E> {
                Ok(SpaceId::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<SpaceId, E> {
                Ok(SpaceId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<SpaceId, E> {
                Ok(SpaceId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<SpaceId, E> {
                Ok(SpaceId(v.to_string()))
            }
        }

        deserializer.deserialize_any(SpaceIdVisitor)
    }
}

/// Level of a location within the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Campus,
    Building,
    Floor,
    Space,
}

impl SpaceType {
    pub const ALL: [SpaceType; 4] = [
        SpaceType::Campus,
        SpaceType::Building,
        SpaceType::Floor,
        SpaceType::Space,
    ];

    /// Position in the canonical listing order (campus first, space last)
    pub fn rank(self) -> usize {
        match self {
            SpaceType::Campus => 0,
            SpaceType::Building => 1,
            SpaceType::Floor => 2,
            SpaceType::Space => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpaceType::Campus => "campus",
            SpaceType::Building => "building",
            SpaceType::Floor => "floor",
            SpaceType::Space => "space",
        }
    }

    /// Capitalized label used next to names in pickers
    pub fn label(self) -> &'static str {
        match self {
            SpaceType::Campus => "Campus",
            SpaceType::Building => "Building",
            SpaceType::Floor => "Floor",
            SpaceType::Space => "Space",
        }
    }

    /// Whether this level groups other locations
    pub fn is_container(self) -> bool {
        self != SpaceType::Space
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single location record, without nested children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Unique identifier
    pub id: SpaceId,

    /// Display name
    pub name: String,

    /// Level within the hierarchy
    pub space_type: SpaceType,

    /// Immediate parent, or `None` for a root location
    #[serde(default)]
    pub parent_id: Option<SpaceId>,

    /// Any other fields of the source record, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Space {
    pub fn new(id: impl Into<SpaceId>, name: impl Into<String>, space_type: SpaceType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            space_type,
            parent_id: None,
            extra: Map::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<SpaceId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Hierarchical location record (recursive tree structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    /// Unique identifier
    pub id: SpaceId,

    /// Display name
    pub name: String,

    /// Level within the hierarchy
    pub space_type: SpaceType,

    /// Parent link as sent by the API; the tree structure takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<SpaceId>,

    /// Child locations; an absent key is the same as an empty list
    #[serde(default)]
    pub children: Vec<HierarchyNode>,

    /// Any other fields of the source record, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HierarchyNode {
    pub fn new(id: impl Into<SpaceId>, name: impl Into<String>, space_type: SpaceType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            space_type,
            parent_id: None,
            children: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<HierarchyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Recursively count total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| c.node_count())
            .sum::<usize>()
    }

    /// Find a node by id (recursive search)
    pub fn find_by_id(&self, id: &SpaceId) -> Option<&HierarchyNode> {
        if &self.id == id {
            return Some(self);
        }

        for child in &self.children {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }

        None
    }

    /// This node's own attributes as a flat record linked to `parent`
    pub fn record(&self, parent: Option<&SpaceId>) -> Space {
        Space {
            id: self.id.clone(),
            name: self.name.clone(),
            space_type: self.space_type,
            parent_id: parent.cloned(),
            extra: self.extra.clone(),
        }
    }
}

/// One row of a flattened hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Nesting level; roots are at depth 0
    pub depth: usize,

    /// The node itself, with `parent_id` filled from the tree
    pub space: Space,

    /// Ancestors, nearest first and root last
    pub ancestry: Vec<Space>,

    /// Every descendant in pre-order, flattened
    pub children: Vec<Space>,
}

impl DisplayItem {
    pub fn id(&self) -> &SpaceId {
        &self.space.id
    }

    pub fn name(&self) -> &str {
        &self.space.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn space_id_accepts_strings_and_integers() {
        let ids: Vec<SpaceId> = serde_json::from_value(json!(["spc_1", 7, -3])).unwrap();
        assert_eq!(ids, vec![SpaceId::from("spc_1"), SpaceId::from(7), SpaceId::from("-3")]);

        let text = serde_json::to_string(&SpaceId::from(7)).unwrap();
        assert_eq!(text, "\"7\"");
    }

    #[test]
    fn node_without_children_key_is_a_leaf() {
        let node: HierarchyNode = serde_json::from_value(json!({
            "id": "spc_1",
            "name": "Lobby",
            "spaceType": "space",
            "hasPurview": true,
        }))
        .unwrap();

        assert!(node.is_leaf());
        assert_eq!(node.extra.get("hasPurview"), Some(&json!(true)));
        assert!(!node.extra.contains_key("children"));
    }

    #[test]
    fn record_keeps_extra_fields_and_sets_parent() {
        let node: HierarchyNode = serde_json::from_value(json!({
            "id": 4,
            "name": "Kitchen",
            "spaceType": "space",
            "timeZone": "America/New_York",
            "children": [],
        }))
        .unwrap();

        let record = node.record(Some(&SpaceId::from(1)));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "4",
                "name": "Kitchen",
                "spaceType": "space",
                "parentId": "1",
                "timeZone": "America/New_York",
            })
        );
    }

    #[test]
    fn node_count_and_find_by_id_walk_the_tree() {
        let tree = HierarchyNode::new("b", "HQ", SpaceType::Building).with_children(vec![
            HierarchyNode::new("f1", "First", SpaceType::Floor)
                .with_children(vec![HierarchyNode::new("s1", "Desk", SpaceType::Space)]),
            HierarchyNode::new("f2", "Second", SpaceType::Floor),
        ]);

        assert_eq!(tree.node_count(), 4);
        assert_eq!(
            tree.find_by_id(&SpaceId::from("s1")).map(|n| n.name.as_str()),
            Some("Desk")
        );
        assert!(tree.find_by_id(&SpaceId::from("nope")).is_none());
    }

    #[test]
    fn space_type_rank_follows_campus_to_space() {
        let mut types = vec![SpaceType::Space, SpaceType::Campus, SpaceType::Floor, SpaceType::Building];
        types.sort_by_key(|t| t.rank());
        assert_eq!(types, SpaceType::ALL.to_vec());
        assert_eq!(SpaceType::Building.label(), "Building");
    }
}
