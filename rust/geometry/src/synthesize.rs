// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-part geometry selection.
//!
//! Visual geometry prefers a downloaded mesh asset and falls back to a
//! box sized by the part's bounding box, then to a default cube.
//! Collision geometry always uses the box chain so collision checks
//! stay cheap regardless of mesh availability.

use nalgebra::Vector3;

use onshape2urdf_core::{sanitize_name, Part};

use crate::types::{Geometry, Origin};

/// Edge length of the default cube emitted when a part has neither a
/// mesh asset nor a bounding box.
pub const DEFAULT_EXTENT: f64 = 0.1;

/// Choose the visual geometry for a part.
///
/// `has_mesh_asset` reflects whether a binary mesh was downloaded for
/// the part's id; the mesh path follows the
/// `package://{sanitized}/meshes/{name}.stl` convention with unit
/// scale.
pub fn visual_geometry(part: &Part, has_mesh_asset: bool) -> Geometry {
    if has_mesh_asset {
        return Geometry::Mesh {
            filename: format!(
                "package://{}/meshes/{}.stl",
                sanitize_name(&part.name),
                part.name
            ),
            scale: Vector3::new(1.0, 1.0, 1.0),
        };
    }
    box_geometry(part)
}

/// Choose the collision geometry for a part. Never references the
/// mesh asset.
pub fn collision_geometry(part: &Part) -> Geometry {
    box_geometry(part)
}

/// Pose of a part's geometry: the bounding-box center, or the world
/// origin without bounds.
pub fn part_origin(part: &Part) -> Origin {
    match &part.bounding_box {
        Some(bounds) => Origin::at(Vector3::from(bounds.center())),
        None => Origin::identity(),
    }
}

fn box_geometry(part: &Part) -> Geometry {
    let size = match &part.bounding_box {
        Some(bounds) => Vector3::from(bounds.size()),
        None => Vector3::new(DEFAULT_EXTENT, DEFAULT_EXTENT, DEFAULT_EXTENT),
    };
    Geometry::Box { size }
}
