// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Index of a bone inside its armature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoneId(pub u32);

impl BoneId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<BoneId>,

    /// Whether this bone participates in skeletal deformation.
    #[serde(default = "default_deform")]
    pub deform: bool,
}

fn default_deform() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Armature {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bones: Vec<Bone>,
}

impl Armature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bone(&mut self, name: &str, parent: Option<BoneId>, deform: bool) -> BoneId {
        let id = BoneId(self.bones.len() as u32);
        self.bones.push(Bone {
            name: name.to_string(),
            parent,
            deform,
        });
        id
    }

    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.index()]
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}
