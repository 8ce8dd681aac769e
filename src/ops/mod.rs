// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod derive;
pub mod export_set;
pub mod hierarchy;
pub mod parenting;
pub mod rescale;
