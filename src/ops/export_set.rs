// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::scene::object::ObjectType;
use crate::scene::scene::{ObjectId, Scene};

/// The set of objects participating in one export operation.
///
/// Membership is determined by the caller; this type only queries and
/// reorders it.
#[derive(Debug, Clone, Default)]
pub struct ExportSet {
    members: Vec<ObjectId>,
}

impl ExportSet {
    pub fn new(members: Vec<ObjectId>) -> Self {
        Self { members }
    }

    pub fn contains(&self, ob: ObjectId) -> bool {
        self.members.contains(&ob)
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True if any member is of `otype` and carries a data payload.
    /// Empties never match: they have no data block.
    pub fn has_object_type(&self, scene: &Scene, otype: ObjectType) -> bool {
        self.members
            .iter()
            .any(|&id| scene[id].otype == otype && scene[id].data.is_some())
    }

    /// Sort members ascending by object name, in place.
    ///
    /// Bubble sort with early exit on a swap-free pass; export sets are
    /// small enough that the quadratic worst case does not matter.
    pub fn sort_by_object_name(&mut self, scene: &Scene) {
        if self.members.len() < 2 {
            return;
        }

        let mut sorted = false;
        while !sorted {
            sorted = true;
            for i in 0..self.members.len() - 1 {
                let a = self.members[i];
                let b = self.members[i + 1];
                if scene[a].name > scene[b].name {
                    self.members.swap(i, i + 1);
                    sorted = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(names: &[&str]) -> (Scene, Vec<ObjectId>) {
        let mut scene = Scene::new("Scene");
        let ids = names
            .iter()
            .map(|name| scene.add_object(ObjectType::Mesh, name))
            .collect();
        (scene, ids)
    }

    fn names(set: &ExportSet, scene: &Scene) -> Vec<String> {
        set.iter().map(|id| scene[id].name.clone()).collect()
    }

    #[test]
    fn test_membership() {
        let (_scene, ids) = scene_with(&["A", "B", "C"]);
        let set = ExportSet::new(vec![ids[0], ids[2]]);

        assert!(set.contains(ids[0]));
        assert!(!set.contains(ids[1]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_has_object_type_requires_data() {
        let mut scene = Scene::new("Scene");
        let mesh = scene.add_object(ObjectType::Mesh, "Cube");
        let empty = scene.add_object(ObjectType::Empty, "Anchor");
        let set = ExportSet::new(vec![mesh, empty]);

        assert!(set.has_object_type(&scene, ObjectType::Mesh));
        assert!(!set.has_object_type(&scene, ObjectType::Empty));
        assert!(!set.has_object_type(&scene, ObjectType::Armature));
    }

    #[test]
    fn test_sort_reverse_ordered() {
        let (scene, ids) = scene_with(&["c", "b", "a"]);
        let mut set = ExportSet::new(ids);

        set.sort_by_object_name(&scene);
        assert_eq!(names(&set, &scene), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_already_sorted_and_single() {
        let (scene, ids) = scene_with(&["a", "b", "c"]);
        let mut set = ExportSet::new(ids.clone());
        set.sort_by_object_name(&scene);
        assert_eq!(names(&set, &scene), vec!["a", "b", "c"]);

        let mut single = ExportSet::new(vec![ids[1]]);
        single.sort_by_object_name(&scene);
        assert_eq!(names(&single, &scene), vec!["b"]);

        let mut empty = ExportSet::default();
        empty.sort_by_object_name(&scene);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_sort_preserves_membership() {
        let (scene, ids) = scene_with(&["d", "a", "c", "b"]);
        let mut set = ExportSet::new(ids.clone());

        set.sort_by_object_name(&scene);
        assert_eq!(set.len(), 4);
        for id in ids {
            assert!(set.contains(id));
        }
        assert_eq!(names(&set, &scene), vec!["a", "b", "c", "d"]);
    }
}
