// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # onshape2urdf Import Pipeline
//!
//! Wires the stages end to end: reference resolution, authenticated
//! assembly fetch, payload normalization, part extraction, mesh
//! download fan-out, geometry/inertial synthesis, kinematic tree
//! construction and URDF serialization.
//!
//! The pipeline is strictly sequential apart from the per-part mesh
//! download stage, which fans out over a bounded rayon pool; results
//! are collected back in original part order so link construction is
//! unaffected by completion order. A failed mesh download never aborts
//! the run; the affected part falls back to box geometry.

pub mod error;
pub mod importer;

pub use error::{Error, Result};
pub use importer::{ImportOptions, ImportResult, Importer, MeshAsset};
