// SPDX-License-Identifier: GPL-3.0-only

//! Ancestry lookups over flat location records
//!
//! The spaces endpoint returns records linked by `parent_id` rather than a
//! tree. Those links are not guaranteed to be consistent: a parent may be
//! missing from the listing, and corrupted data can form a loop. Every walk
//! here detects repeated ids and stops with an error instead of looping.

use std::collections::{HashMap, HashSet};

use space_types::{Space, SpaceId, SpaceType};

use crate::error::{HierarchyError, Result};

/// Id lookup over a slice of flat records
#[derive(Debug, Clone)]
pub struct SpaceIndex<'a> {
    spaces: &'a [Space],
    by_id: HashMap<&'a SpaceId, &'a Space>,
}

impl<'a> SpaceIndex<'a> {
    pub fn new(spaces: &'a [Space]) -> Self {
        let by_id = spaces.iter().map(|space| (&space.id, space)).collect();
        Self { spaces, by_id }
    }

    pub fn get(&self, id: &SpaceId) -> Option<&'a Space> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Ids from `space` up to its root: the space itself first, the root last.
    ///
    /// When a parent id has no record, `strict` turns that into
    /// [`HierarchyError::SpaceNotFound`]; otherwise the chain ends at the last
    /// record found. A repeated id fails with [`HierarchyError::CyclicHierarchy`].
    pub fn parents_of(&self, space: &Space, strict: bool) -> Result<Vec<SpaceId>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = space;

        loop {
            if !seen.insert(&current.id) {
                return Err(HierarchyError::CyclicHierarchy(current.id.clone()));
            }
            chain.push(current.id.clone());

            let Some(parent_id) = &current.parent_id else {
                return Ok(chain);
            };

            match self.get(parent_id) {
                Some(parent) => current = parent,
                None if strict => return Err(HierarchyError::SpaceNotFound(parent_id.clone())),
                None => return Ok(chain),
            }
        }
    }

    /// Ids of every record below `space`, plus `space` itself when listed.
    pub fn children_of(&self, space: &Space) -> Result<Vec<SpaceId>> {
        let mut children = Vec::new();
        for candidate in self.spaces {
            if self.parents_of(candidate, false)?.contains(&space.id) {
                children.push(candidate.id.clone());
            }
        }
        Ok(children)
    }

    /// Whether any ancestor of `space_id` (not the space itself) is selected.
    ///
    /// Unknown ids are never considered to have a selected parent.
    pub fn is_parent_selected(&self, space_id: &SpaceId, selected: &[SpaceId]) -> Result<bool> {
        let Some(space) = self.get(space_id) else {
            return Ok(false);
        };

        let chain = self.parents_of(space, false)?;
        Ok(chain.iter().skip(1).any(|id| selected.contains(id)))
    }

    /// Records of type `space` anywhere below `parent_id`.
    ///
    /// Uses strict ancestry, so a dangling parent link anywhere in the listing
    /// is reported rather than skipped.
    pub fn spaces_under(&self, parent_id: &SpaceId) -> Result<Vec<&'a Space>> {
        let mut found = Vec::new();
        for space in self.spaces {
            if space.space_type != SpaceType::Space {
                continue;
            }
            let chain = self.parents_of(space, true)?;
            if chain.iter().skip(1).any(|id| id == parent_id) {
                found.push(space);
            }
        }
        Ok(found)
    }
}
