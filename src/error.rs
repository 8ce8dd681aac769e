// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Result type alias using [`SceneError`].
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised by scene utility operations.
///
/// Most operations in this crate report failure through boolean returns or
/// defensive defaults; this enum covers the cases where an external
/// collaborator (the mesh evaluation pipeline) can genuinely fail.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("object '{name}' has no mesh data")]
    NoMeshData { name: String },

    /// Generic pipeline failure reported by a [`MeshEvaluator`]
    /// implementation.
    ///
    /// [`MeshEvaluator`]: crate::ops::derive::MeshEvaluator
    #[error("mesh evaluation failed for '{name}': {message}")]
    Evaluation { name: String, message: String },
}
