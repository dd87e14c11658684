// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inertial estimation from placeholder bounds.
//!
//! Mass comes from bounding-box volume at a fixed nominal density;
//! the inertia tensor is the analytic diagonal of a uniform
//! axis-aligned box. These are approximations, not properties derived
//! from the actual part geometry.

use nalgebra::Vector3;

use onshape2urdf_core::Part;

use crate::synthesize::{part_origin, DEFAULT_EXTENT};
use crate::types::{Inertia, InertialProperties};

/// Nominal density in mass units per cubic length unit.
pub const DENSITY: f64 = 0.001;

/// Floor for the volume-derived mass.
pub const MIN_MASS: f64 = 0.01;

/// Mass assigned when a part has no bounding box.
pub const DEFAULT_MASS: f64 = 0.1;

/// Estimate mass, inertia tensor and inertial origin for a part.
pub fn estimate_inertial(part: &Part) -> InertialProperties {
    let (mass, size) = match &part.bounding_box {
        Some(bounds) => (
            (bounds.volume() * DENSITY).max(MIN_MASS),
            Vector3::from(bounds.size()),
        ),
        None => (
            DEFAULT_MASS,
            Vector3::new(DEFAULT_EXTENT, DEFAULT_EXTENT, DEFAULT_EXTENT),
        ),
    };

    InertialProperties {
        mass,
        inertia: box_inertia(mass, size),
        origin: part_origin(part),
    }
}

/// Diagonal inertia tensor of a uniform axis-aligned box.
pub fn box_inertia(mass: f64, size: Vector3<f64>) -> Inertia {
    let (x, y, z) = (size.x, size.y, size.z);
    Inertia {
        ixx: mass / 12.0 * (y * y + z * z),
        iyy: mass / 12.0 * (x * x + z * z),
        izz: mass / 12.0 * (x * x + y * y),
        ..Inertia::default()
    }
}
