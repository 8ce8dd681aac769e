// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::armature::Armature;
use super::mesh::Mesh;
use super::modifier::Modifier;
use super::scene::ObjectId;
use crate::constants::DEFAULT_LAYER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Mesh,
    Armature,
    Empty,
    Camera,
    Light,
}

impl ObjectType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mesh => "Mesh",
            Self::Armature => "Armature",
            Self::Empty => "Empty",
            Self::Camera => "Camera",
            Self::Light => "Light",
        }
    }

    pub const ALL: &[Self] = &[
        Self::Mesh,
        Self::Armature,
        Self::Empty,
        Self::Camera,
        Self::Light,
    ];
}

/// How an object follows its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentType {
    /// Plain object parenting.
    Object,
    /// Skeletal parenting: the parent armature deforms the child.
    Armature,
}

impl Default for ParentType {
    fn default() -> Self {
        Self::Object
    }
}

/// Pending recalculation tags, consumed by the host's update pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recalc {
    #[serde(default)]
    pub object: bool,
    #[serde(default)]
    pub data: bool,
    #[serde(default)]
    pub time: bool,
}

impl Recalc {
    pub fn all() -> Self {
        Self {
            object: true,
            data: true,
            time: true,
        }
    }
}

/// Data payload attached to an object. Empties (and cameras/lights in this
/// reduced model) carry no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectData {
    Mesh(Mesh),
    Armature(Armature),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    pub name: String,

    #[serde(rename = "type")]
    pub otype: ObjectType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ObjectId>,

    #[serde(default)]
    pub parent_type: ParentType,

    /// Bone sub-target for bone parenting; empty when unused.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_bone: String,

    #[serde(default, skip_serializing_if = "is_zero_vec3")]
    pub loc: Vec3,

    /// Euler XYZ rotation in radians.
    #[serde(default, skip_serializing_if = "is_zero_vec3")]
    pub rot: Vec3,

    #[serde(default = "default_scale", skip_serializing_if = "is_one_vec3")]
    pub scale: Vec3,

    #[serde(default = "default_mat4", skip_serializing_if = "is_identity_mat4")]
    pub matrix_world: Mat4,

    /// Parent correction matrix: world = parent world x this x basis.
    #[serde(default = "default_mat4", skip_serializing_if = "is_identity_mat4")]
    pub parent_inverse: Mat4,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ObjectData>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    marked: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,

    #[serde(default = "default_layer")]
    pub layer: u32,

    #[serde(default, skip_serializing_if = "is_no_recalc")]
    pub recalc: Recalc,
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}

fn default_mat4() -> Mat4 {
    Mat4::IDENTITY
}

fn default_layer() -> u32 {
    DEFAULT_LAYER
}

fn is_zero_vec3(v: &Vec3) -> bool {
    *v == Vec3::ZERO
}

fn is_one_vec3(v: &Vec3) -> bool {
    *v == Vec3::ONE
}

fn is_identity_mat4(m: &Mat4) -> bool {
    *m == Mat4::IDENTITY
}

fn is_no_recalc(r: &Recalc) -> bool {
    *r == Recalc::default()
}

impl Object {
    pub fn new(otype: ObjectType, name: &str) -> Self {
        Self {
            name: name.to_string(),
            otype,
            parent: None,
            parent_type: ParentType::default(),
            parent_bone: String::new(),
            loc: Vec3::ZERO,
            rot: Vec3::ZERO,
            scale: Vec3::ONE,
            matrix_world: Mat4::IDENTITY,
            parent_inverse: Mat4::IDENTITY,
            modifiers: Vec::new(),
            data: None,
            marked: false,
            selected: false,
            layer: DEFAULT_LAYER,
            recalc: Recalc::default(),
        }
    }

    /// Compose the local channels into a matrix (scale, then rotate, then
    /// translate).
    pub fn matrix_basis(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rot.x, self.rot.y, self.rot.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.loc)
    }

    /// Decompose `mat` into location/rotation/scale channels and store it as
    /// the object's world matrix.
    pub fn apply_matrix(&mut self, mat: Mat4) {
        let (scale, rotation, loc) = mat.to_scale_rotation_translation();
        let (rx, ry, rz) = rotation.to_euler(EulerRot::XYZ);
        self.loc = loc;
        self.rot = Vec3::new(rx, ry, rz);
        self.scale = scale;
        self.matrix_world = mat;
    }

    /// Mark this object as part of the current export operation.
    pub fn set_mark(&mut self) {
        self.marked = true;
    }

    pub fn clear_mark(&mut self) {
        self.marked = false;
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.data {
            Some(ObjectData::Mesh(mesh)) => Some(mesh),
            _ => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.data {
            Some(ObjectData::Mesh(mesh)) => Some(mesh),
            _ => None,
        }
    }

    pub fn armature(&self) -> Option<&Armature> {
        match &self.data {
            Some(ObjectData::Armature(armature)) => Some(armature),
            _ => None,
        }
    }
}
