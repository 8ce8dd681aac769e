// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::scene::armature::{Armature, BoneId};
use crate::scene::modifier::ModifierKind;
use crate::scene::object::{ObjectType, ParentType};
use crate::scene::scene::{ObjectId, Scene};

use super::export_set::ExportSet;

/// True iff `target` is reachable by following parent links from `start`
/// inclusive. Used to reject cycle-forming parent assignments.
pub fn parent_chain_contains(scene: &Scene, start: Option<ObjectId>, target: ObjectId) -> bool {
    let mut current = start;
    while let Some(id) = current {
        if id == target {
            return true;
        }
        current = scene[id].parent;
    }
    false
}

/// Walk upward from `ob` while the parent is marked for export, returning
/// the highest marked ancestor, or `ob` itself when no ancestor is marked.
///
/// The ascent reads each object's own mark, not membership in `export_set`;
/// the set parameter stays for callers that pass their current set along.
pub fn highest_marked_ancestor_or_self(
    _export_set: &ExportSet,
    scene: &Scene,
    ob: ObjectId,
) -> ObjectId {
    let mut ancestor = ob;
    while let Some(parent) = scene[ancestor].parent {
        if !scene[parent].is_marked() {
            break;
        }
        ancestor = parent;
    }
    ancestor
}

/// True iff `ob` is the root of its exported sub-hierarchy.
pub fn is_base_node(export_set: &ExportSet, scene: &Scene, ob: ObjectId) -> bool {
    highest_marked_ancestor_or_self(export_set, scene, ob) == ob
}

/// The armature object controlling `ob`: either a skeletal parent that is an
/// armature, or the target of the first armature modifier on `ob`.
pub fn assigned_armature(scene: &Scene, ob: ObjectId) -> Option<ObjectId> {
    let object = &scene[ob];

    if let Some(parent) = object.parent {
        if object.parent_type == ParentType::Armature
            && scene[parent].otype == ObjectType::Armature
        {
            return Some(parent);
        }
    }

    object
        .modifiers
        .iter()
        .find_map(|modifier| match modifier.kind {
            ModifierKind::Armature { object: target } => Some(target),
            _ => None,
        })
        .flatten()
}

/// Check whether a bone is the top-most exportable bone in its hierarchy.
///
/// With `deform_bones_only` unset, only parentless bones are roots.
/// Otherwise the highest deform-eligible bone in the chain is the root, and
/// non-deform bones are never roots even when parentless.
pub fn is_root_bone(armature: &Armature, bone: BoneId, deform_bones_only: bool) -> bool {
    if deform_bones_only {
        let mut root = None;
        let mut current = Some(bone);
        while let Some(id) = current {
            if armature.bone(id).deform {
                root = Some(id);
            }
            current = armature.bone(id).parent;
        }
        root == Some(bone)
    } else {
        armature.bone(bone).parent.is_none()
    }
}
