// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::scene::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ModifierKind {
    /// Skeletal deformation driven by `object` (an armature object).
    Armature {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        object: Option<ObjectId>,
    },
    Subdivision {
        levels: u32,
    },
    Triangulate,
}

impl ModifierKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Armature { .. } => "Armature",
            Self::Subdivision { .. } => "Subdivision",
            Self::Triangulate => "Triangulate",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,

    #[serde(flatten)]
    pub kind: ModifierKind,

    #[serde(default = "default_visible")]
    pub show_viewport: bool,

    #[serde(default = "default_visible")]
    pub show_render: bool,
}

fn default_visible() -> bool {
    true
}

impl Modifier {
    pub fn new(name: &str, kind: ModifierKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            show_viewport: true,
            show_render: true,
        }
    }
}
