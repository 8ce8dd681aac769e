// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Unit information read from the imported document's asset block.
///
/// `linear_meter` is the length of one document unit expressed in meters,
/// e.g. `0.01` for a document authored in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UnitConverter {
    linear_meter: f32,
}

impl UnitConverter {
    pub fn new(linear_meter: f32) -> Self {
        Self { linear_meter }
    }

    pub fn linear_meter(&self) -> f32 {
        self.linear_meter
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self { linear_meter: 1.0 }
    }
}
