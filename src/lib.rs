// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod constants;
pub mod error;
pub mod interchange;
pub mod ops;
pub mod scene;

pub use error::{Result, SceneError};
pub use scene::scene::{ObjectId, Scene};
