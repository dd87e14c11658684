// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # onshape2urdf Core Model
//!
//! Normalized data model for the Onshape assembly import pipeline:
//!
//! - **AssemblyReference**: the `{documentId, workspaceId, elementId}`
//!   triple extracted from an Onshape document URL
//! - **Assembly / Element / Part**: the normalized assembly
//!   representation and the flat part list derived from it
//! - **Name sanitization**: shared identifier cleanup applied to every
//!   name that ends up in the generated robot document
//!
//! Everything in this crate is pure data and pure functions; network
//! access and document generation live in the sibling crates.

pub mod error;
pub mod model;
pub mod reference;
pub mod sanitize;

pub use error::{Error, Result};
pub use model::{
    parts_from_assembly, Assembly, BoundingBox, Credentials, Element, Part, PLACEHOLDER_HALF_EXTENT,
};
pub use reference::{resolve_reference, AssemblyReference};
pub use sanitize::{robot_name, sanitize_name};
