// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # onshape2urdf Geometry Synthesis
//!
//! Chooses visual/collision geometry and approximate inertial
//! properties per part. No solid geometry is interpreted here: when a
//! downloaded mesh asset exists the visual references it, otherwise
//! everything falls back to axis-aligned box primitives derived from
//! the placeholder bounding box.

pub mod inertial;
pub mod synthesize;
pub mod types;

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;

pub use inertial::{estimate_inertial, DEFAULT_MASS, DENSITY, MIN_MASS};
pub use synthesize::{collision_geometry, part_origin, visual_geometry, DEFAULT_EXTENT};
pub use types::{Geometry, Inertia, InertialProperties, Origin};
