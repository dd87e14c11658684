// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! URDF robot model types.
//!
//! Field layout mirrors the URDF schema; tag and attribute names in
//! the serialized output must match it bit-exactly for downstream
//! robotics tooling.

use nalgebra::Vector3;

use onshape2urdf_geometry::{Geometry, InertialProperties, Origin};

/// Named material, deduplicated by its original appearance string.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// RGBA in `[0, 1]`.
    pub color: Option<[f64; 4]>,
    pub texture: Option<String>,
}

/// Visual block of a link.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    pub geometry: Geometry,
    /// Name of a robot-level material, when the part had an appearance.
    pub material: Option<String>,
    pub origin: Origin,
}

/// Collision block of a link; always primitive geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub geometry: Geometry,
    pub origin: Origin,
}

/// One rigid body in the kinematic tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub name: String,
    pub visual: Visual,
    pub collision: Option<Collision>,
    pub inertial: Option<InertialProperties>,
}

/// URDF joint kinds. This pipeline only emits `Fixed`; the rest exist
/// for completeness of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointType {
    Fixed,
    Revolute,
    Prismatic,
    Continuous,
    Planar,
    Floating,
}

impl JointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JointType::Fixed => "fixed",
            JointType::Revolute => "revolute",
            JointType::Prismatic => "prismatic",
            JointType::Continuous => "continuous",
            JointType::Planar => "planar",
            JointType::Floating => "floating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimit {
    pub lower: f64,
    pub upper: f64,
    pub effort: f64,
    pub velocity: f64,
}

/// Connection between two links.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub name: String,
    pub joint_type: JointType,
    pub parent: String,
    pub child: String,
    pub origin: Origin,
    pub axis: Option<Vector3<f64>>,
    pub limit: Option<JointLimit>,
}

/// The assembled robot: links and joints in chain order, materials in
/// first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotModel {
    pub name: String,
    pub links: Vec<Link>,
    pub joints: Vec<Joint>,
    pub materials: Vec<Material>,
}
