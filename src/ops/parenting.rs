// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::scene::object::ParentType;
use crate::scene::scene::{ObjectId, Scene};

use super::hierarchy::parent_chain_contains;

/// Parent `ob` to `par` as a plain object parent.
///
/// Returns false without touching the scene when the assignment would close
/// a parent loop (including `par == ob`).
///
/// With `in_parent_space` set, `ob`'s matrix is taken to be expressed in the
/// new parent's space: `par`'s world matrix is recomputed and folded into
/// `ob`'s matrix first, preserving the visual result.
///
/// The parent correction matrix is stored so that recomputing the child's
/// world transform from parent x correction x basis reproduces the matrix
/// assigned here. Dependency-graph resorting and notifications are left to
/// the caller, once per import batch.
pub fn set_parent(scene: &mut Scene, ob: ObjectId, par: ObjectId, in_parent_space: bool) -> bool {
    if parent_chain_contains(scene, Some(par), ob) {
        log::debug!(
            "Rejected parenting '{}' to '{}': would create a loop",
            scene[ob].name,
            scene[par].name
        );
        return false;
    }

    scene[ob].parent = Some(par);
    scene[ob].parent_type = ParentType::Object;
    scene[ob].parent_bone.clear();

    if in_parent_space {
        scene.update_world_matrix(par);
        let world = scene[par].matrix_world * scene[ob].matrix_world;
        scene[ob].matrix_world = world;
    }

    let world = scene[ob].matrix_world;
    scene[ob].apply_matrix(world);

    let parent_inverse = scene[par].matrix_world.inverse();
    scene[ob].parent_inverse = parent_inverse;

    scene[ob].recalc.object = true;
    scene[ob].recalc.data = true;
    scene[par].recalc.object = true;

    true
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::scene::object::ObjectType;

    fn scene_with(names: &[&str]) -> (Scene, Vec<ObjectId>) {
        let mut scene = Scene::new("Scene");
        let ids = names
            .iter()
            .map(|name| scene.add_object(ObjectType::Mesh, name))
            .collect();
        (scene, ids)
    }

    #[test]
    fn test_rejects_cycle_forming_assignment() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        let (a, b, c) = (ids[0], ids[1], ids[2]);

        assert!(set_parent(&mut scene, b, a, false));
        assert!(set_parent(&mut scene, c, b, false));

        // C is a descendant of A, and self-parenting is a loop of length one.
        assert!(!set_parent(&mut scene, a, c, false));
        assert!(!set_parent(&mut scene, a, a, false));
        assert_eq!(scene[a].parent, None);
    }

    #[test]
    fn test_success_overwrites_parent_fields() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let (a, b) = (ids[0], ids[1]);
        scene[b].parent_type = ParentType::Armature;
        scene[b].parent_bone = "hand".to_string();

        assert!(set_parent(&mut scene, b, a, false));
        assert_eq!(scene[b].parent, Some(a));
        assert_eq!(scene[b].parent_type, ParentType::Object);
        assert!(scene[b].parent_bone.is_empty());
        assert!(scene[b].recalc.object && scene[b].recalc.data);
        assert!(scene[a].recalc.object);
    }

    #[test]
    fn test_parent_space_transfer_preserves_world_position() {
        let (mut scene, ids) = scene_with(&["Parent", "Child"]);
        let (parent, child) = (ids[0], ids[1]);

        scene[parent].loc = Vec3::new(1.0, 0.0, 0.0);
        // Child matrix expressed in the incoming parent space.
        scene[child].matrix_world = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));

        assert!(set_parent(&mut scene, child, parent, true));

        let expected = Vec3::new(1.0, 1.0, 0.0);
        assert!((scene[child].loc - expected).length() < 1e-5);

        // Recomputing from parent x correction x basis reproduces the
        // assigned world matrix.
        scene.update_world_matrix(child);
        let translation = scene[child].matrix_world.w_axis.truncate();
        assert!((translation - expected).length() < 1e-5);
    }

    #[test]
    fn test_world_space_assignment_keeps_matrix() {
        let (mut scene, ids) = scene_with(&["Parent", "Child"]);
        let (parent, child) = (ids[0], ids[1]);

        scene[parent].loc = Vec3::new(5.0, 0.0, 0.0);
        scene.update_world_matrix(parent);
        scene[child].apply_matrix(Mat4::from_translation(Vec3::new(2.0, 3.0, 4.0)));

        assert!(set_parent(&mut scene, child, parent, false));

        scene.update_world_matrix(child);
        let translation = scene[child].matrix_world.w_axis.truncate();
        assert!((translation - Vec3::new(2.0, 3.0, 4.0)).length() < 1e-5);
    }
}
