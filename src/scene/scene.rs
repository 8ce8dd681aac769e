// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::armature::Armature;
use super::mesh::Mesh;
use super::object::{Object, ObjectData, ObjectType, Recalc};
use crate::constants::{DEFAULT_LAYER, DEFAULT_SCALE_LENGTH};

/// Handle to an object registered in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    None,
    Metric,
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitSettings {
    #[serde(default)]
    pub system: UnitSystem,

    /// Length of one scene unit in the selected system's base unit.
    #[serde(
        default = "default_scale_length",
        skip_serializing_if = "is_default_scale_length"
    )]
    pub scale_length: f32,
}

fn default_scale_length() -> f32 {
    DEFAULT_SCALE_LENGTH
}

fn is_default_scale_length(v: &f32) -> bool {
    *v == default_scale_length()
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            system: UnitSystem::default(),
            scale_length: default_scale_length(),
        }
    }
}

/// The host scene: object list, unit settings, selection state.
///
/// All utility operations take this context explicitly; there is no global
/// scene access anywhere in the crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<Object>,

    #[serde(default)]
    pub unit: UnitSettings,

    #[serde(default = "default_layers")]
    pub layers: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<ObjectId>,
}

fn default_layers() -> u32 {
    DEFAULT_LAYER
}

impl Scene {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            layers: DEFAULT_LAYER,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.objects.len() as u32).map(ObjectId)
    }

    /// Construct a new object of `otype` with a fresh type-matching data
    /// block, register it on the scene's layers, select it and make it
    /// active, and tag it for full recalculation.
    pub fn add_object(&mut self, otype: ObjectType, name: &str) -> ObjectId {
        let mut ob = Object::new(otype, name);
        ob.data = match otype {
            ObjectType::Mesh => Some(ObjectData::Mesh(Mesh::new(name))),
            ObjectType::Armature => Some(ObjectData::Armature(Armature::new())),
            _ => None,
        };
        ob.layer = self.layers;
        ob.recalc = Recalc::all();
        ob.selected = true;

        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(ob);
        self.active = Some(id);

        log::debug!("Added {} object '{}'", otype.label(), name);
        id
    }

    /// Recompute `ob`'s world matrix from its parent chain and local
    /// channels: world = parent world x parent inverse x basis.
    ///
    /// Uses the parent's stored world matrix; callers refresh the parent
    /// first when it may be stale.
    pub fn update_world_matrix(&mut self, ob: ObjectId) {
        let basis = self[ob].matrix_basis();
        let world = match self[ob].parent {
            Some(par) => self[par].matrix_world * self[ob].parent_inverse * basis,
            None => basis,
        };
        self[ob].matrix_world = world;
    }
}

impl Index<ObjectId> for Scene {
    type Output = Object;

    fn index(&self, id: ObjectId) -> &Object {
        &self.objects[id.index()]
    }
}

impl IndexMut<ObjectId> for Scene {
    fn index_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.index()]
    }
}
