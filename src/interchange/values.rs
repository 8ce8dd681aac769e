// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Numeric value array as produced by the interchange library: source
/// documents store either single or double precision, and the importer does
/// not care which.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NumericArray {
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl NumericArray {
    pub fn len(&self) -> usize {
        match self {
            Self::Float(values) => values.len(),
            Self::Double(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index` as f32 regardless of the stored width.
    ///
    /// An out-of-bounds index yields `0.0` rather than failing; malformed
    /// documents routinely under-fill these arrays and the importer treats
    /// missing components as zero.
    pub fn float_value(&self, index: usize) -> f32 {
        match self {
            Self::Float(values) => values.get(index).copied().unwrap_or(0.0),
            Self::Double(values) => values.get(index).copied().unwrap_or(0.0) as f32,
        }
    }
}
