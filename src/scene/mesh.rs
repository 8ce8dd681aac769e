// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UvLayer {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uv: Vec<[f32; 2]>,
}

/// Mesh data block: triangle geometry plus any number of UV layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<Vec3>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub normals: Vec<Vec3>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triangles: Vec<[u32; 3]>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uv_layers: Vec<UvLayer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_uv: Option<usize>,
}

impl Mesh {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Index of the active UV layer, if the mesh carries one.
    pub fn active_uv_layer(&self) -> Option<usize> {
        self.active_uv.filter(|&index| index < self.uv_layers.len())
    }
}
