// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # onshape2urdf Robot Model
//!
//! The output side of the pipeline: URDF model types, the kinematic
//! tree builder that chains imported parts into links and fixed
//! joints, and the deterministic URDF text writer.

pub mod builder;
pub mod model;
pub mod writer;

pub use builder::build_robot;
pub use model::{Collision, Joint, JointLimit, JointType, Link, Material, RobotModel, Visual};
pub use writer::write_urdf;
