// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

// Mesh materialization
// Name stamped on freshly evaluated mesh blocks; callers rename as needed.
pub const EVALUATED_MESH_NAME: &str = "EvaluatedMesh";

// Unit settings defaults
pub const DEFAULT_SCALE_LENGTH: f32 = 1.0;

// Scene layer defaults
pub const DEFAULT_LAYER: u32 = 1;
