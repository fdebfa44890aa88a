// SPDX-License-Identifier: GPL-3.0-only

//! Listing of flat records for select boxes
//!
//! Older screens work directly on the flat `parent_id` records rather than on
//! the hierarchy tree. This lists them parent-before-children, siblings sorted
//! campus → building → floor → space, and can insert disabled placeholder rows
//! announcing that an organization has zero campuses, buildings or floors.

use std::collections::{HashMap, HashSet};

use space_types::{Space, SpaceId, SpaceType};

/// Options for [`format_flat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatFormatOptions {
    pub render_placeholders: bool,
}

impl Default for FlatFormatOptions {
    fn default() -> Self {
        Self {
            render_placeholders: true,
        }
    }
}

/// One row of a flat listing
#[derive(Debug, Clone, PartialEq)]
pub struct FlatItem {
    pub depth: usize,
    pub space: Space,

    /// Disabled row standing in for a level with no records
    pub placeholder: bool,
}

impl FlatItem {
    fn placeholder(space_type: SpaceType) -> Self {
        let id = match space_type {
            SpaceType::Campus => "zerocampuses",
            SpaceType::Building => "zerobuildings",
            SpaceType::Floor => "zerofloors",
            SpaceType::Space => "zerospaces",
        };

        Self {
            depth: 0,
            space: Space::new(id, space_type.label(), space_type),
            placeholder: true,
        }
    }
}

/// List `spaces` parent-first, optionally with placeholder rows.
pub fn format_flat(spaces: &[Space], options: FlatFormatOptions) -> Vec<FlatItem> {
    let mut children: HashMap<&SpaceId, Vec<&Space>> = HashMap::new();
    let mut roots = Vec::new();
    for space in spaces {
        match &space.parent_id {
            Some(parent_id) => children.entry(parent_id).or_default().push(space),
            None => roots.push(space),
        }
    }

    let mut items = Vec::with_capacity(spaces.len());
    let mut listed = HashSet::new();
    insert_level(roots, 0, &children, &mut listed, &mut items);

    if options.render_placeholders {
        // Each placeholder goes before the first root of the level below it.
        let levels = [
            (SpaceType::Floor, SpaceType::Space),
            (SpaceType::Building, SpaceType::Floor),
            (SpaceType::Campus, SpaceType::Building),
        ];
        for (missing, before) in levels {
            if spaces.iter().any(|s| s.space_type == missing) {
                continue;
            }
            let position = items
                .iter()
                .position(|item| item.depth == 0 && item.space.space_type == before)
                .unwrap_or(items.len());
            items.insert(position, FlatItem::placeholder(missing));
        }
    }

    items
}

fn insert_level<'a>(
    mut level: Vec<&'a Space>,
    depth: usize,
    children: &HashMap<&SpaceId, Vec<&'a Space>>,
    listed: &mut HashSet<&'a SpaceId>,
    items: &mut Vec<FlatItem>,
) {
    level.sort_by_key(|space| space.space_type.rank());

    for space in level {
        if !listed.insert(&space.id) {
            continue;
        }

        items.push(FlatItem {
            depth,
            space: space.clone(),
            placeholder: false,
        });

        let below = children.get(&space.id).cloned().unwrap_or_default();
        insert_level(below, depth + 1, children, listed, items);
    }
}
