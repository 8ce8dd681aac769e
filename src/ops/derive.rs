// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use crate::constants::EVALUATED_MESH_NAME;
use crate::error::Result;
use crate::scene::mesh::Mesh;
use crate::scene::scene::{ObjectId, Scene};

/// Which evaluation pipeline produces the derived mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshKind {
    /// Interactive viewport evaluation.
    View,
    /// Final render evaluation.
    Render,
}

impl MeshKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Render => "Render",
        }
    }
}

/// The host's modifier evaluation pipeline.
///
/// Modifier evaluation itself lives in the host application; this crate only
/// asks for the finished geometry snapshot.
pub trait MeshEvaluator {
    fn derived_mesh(&self, scene: &Scene, ob: ObjectId, kind: MeshKind) -> Result<Mesh>;
}

/// Request a fully evaluated mesh for `ob` and copy it into a new
/// independent mesh block, which is returned to the caller. The temporary
/// derived mesh is dropped here.
pub fn create_evaluated_mesh(
    scene: &Scene,
    evaluator: &dyn MeshEvaluator,
    ob: ObjectId,
    kind: MeshKind,
) -> Result<Mesh> {
    let derived = evaluator.derived_mesh(scene, ob, kind)?;

    let mesh = Mesh {
        name: EVALUATED_MESH_NAME.to_string(),
        positions: derived.positions,
        normals: derived.normals,
        triangles: derived.triangles,
        uv_layers: derived.uv_layers,
        active_uv: derived.active_uv,
    };

    log::debug!(
        "Materialized {} mesh for '{}': {} triangles",
        kind.label(),
        scene[ob].name,
        mesh.triangles.len()
    );
    Ok(mesh)
}

/// Index of the active UV layer on `ob`'s mesh data, if any.
pub fn active_uv_layer(scene: &Scene, ob: ObjectId) -> Option<usize> {
    scene[ob].mesh().and_then(Mesh::active_uv_layer)
}
