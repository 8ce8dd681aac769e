// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod armature;
pub mod exporter;
pub mod loader;
pub mod mesh;
pub mod modifier;
pub mod object;
#[allow(clippy::module_inception)]
pub mod scene;
