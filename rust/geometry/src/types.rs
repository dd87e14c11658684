// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry and inertial value types shared across the pipeline.

use nalgebra::Vector3;

/// Shape attached to a link, tagged per URDF geometry kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Box { size: Vector3<f64> },
    Cylinder { radius: f64, length: f64 },
    Sphere { radius: f64 },
    Mesh { filename: String, scale: Vector3<f64> },
}

/// Pose as translation plus roll/pitch/yaw in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub xyz: Vector3<f64>,
    pub rpy: Vector3<f64>,
}

impl Origin {
    pub fn identity() -> Self {
        Self {
            xyz: Vector3::zeros(),
            rpy: Vector3::zeros(),
        }
    }

    pub fn at(xyz: Vector3<f64>) -> Self {
        Self {
            xyz,
            rpy: Vector3::zeros(),
        }
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::identity()
    }
}

/// Symmetric 3x3 inertia tensor in its six independent components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inertia {
    pub ixx: f64,
    pub ixy: f64,
    pub ixz: f64,
    pub iyy: f64,
    pub iyz: f64,
    pub izz: f64,
}

/// Approximate mass properties of one link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertialProperties {
    pub mass: f64,
    pub inertia: Inertia,
    pub origin: Origin,
}
