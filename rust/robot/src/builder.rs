// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kinematic tree construction.
//!
//! One link per part, in assembly order. The chain is strictly
//! linear: the first element becomes the unconnected base link and
//! every subsequent element hangs off its predecessor through a fixed
//! joint. No joint-type or axis inference from assembly mates is
//! attempted.

use std::hash::{Hash, Hasher};

use nalgebra::Vector3;
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};

use onshape2urdf_core::{robot_name, sanitize_name, Assembly, Part};
use onshape2urdf_geometry::{
    collision_geometry, estimate_inertial, part_origin, visual_geometry, Origin,
};

use crate::model::{Collision, Joint, JointType, Link, Material, RobotModel, Visual};

/// Name of the first link in the chain.
pub const BASE_LINK: &str = "base_link";

/// Build the robot model from a normalized assembly, its derived part
/// list (1:1, same order) and the set of part ids with a downloaded
/// mesh asset.
pub fn build_robot(
    assembly: &Assembly,
    parts: &[Part],
    mesh_assets: &FxHashSet<String>,
) -> RobotModel {
    debug_assert_eq!(assembly.elements.len(), parts.len());

    let (materials, material_names) = collect_materials(parts);

    let mut used_names = FxHashSet::default();
    let link_names: Vec<String> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let candidate = if i == 0 {
                BASE_LINK.to_string()
            } else {
                sanitize_name(&part.name)
            };
            unique_name(candidate, i, &mut used_names)
        })
        .collect();

    let links = parts
        .iter()
        .zip(&link_names)
        .map(|(part, name)| Link {
            name: name.clone(),
            visual: Visual {
                geometry: visual_geometry(part, mesh_assets.contains(&part.id)),
                material: part
                    .appearance
                    .as_ref()
                    .and_then(|a| material_names.get(a).cloned()),
                origin: part_origin(part),
            },
            collision: Some(Collision {
                geometry: collision_geometry(part),
                origin: part_origin(part),
            }),
            inertial: Some(estimate_inertial(part)),
        })
        .collect();

    let mut used_joint_names = FxHashSet::default();
    let joints = assembly
        .elements
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, element)| {
            let candidate = format!("joint_{}", sanitize_name(&element.name));
            Joint {
                name: unique_name(candidate, i, &mut used_joint_names),
                joint_type: JointType::Fixed,
                parent: link_names[i - 1].clone(),
                child: link_names[i].clone(),
                origin: joint_origin(element.transform.as_deref()),
                axis: Some(Vector3::new(0.0, 0.0, 1.0)),
                limit: None,
            }
        })
        .collect();

    RobotModel {
        name: robot_name(&assembly.name),
        links,
        joints,
        materials,
    }
}

/// Joint origin from the element transform, read as a row-major 3x4
/// affine layout (translation at entries 3, 7, 11), with zero
/// rotation.
fn joint_origin(transform: Option<&[f64]>) -> Origin {
    match transform {
        Some(t) if t.len() >= 12 => Origin::at(Vector3::new(t[3], t[7], t[11])),
        _ => Origin::identity(),
    }
}

/// Deduplicate materials by original appearance string, first-seen
/// order. Returns the material list and the appearance-to-name map
/// links use to reference them.
fn collect_materials(parts: &[Part]) -> (Vec<Material>, FxHashMap<String, String>) {
    let mut materials = Vec::new();
    let mut names = FxHashMap::default();

    for part in parts {
        let Some(appearance) = &part.appearance else {
            continue;
        };
        if names.contains_key(appearance) {
            continue;
        }
        let name = sanitize_name(appearance);
        names.insert(appearance.clone(), name.clone());
        materials.push(Material {
            name,
            color: Some(appearance_color(appearance)),
            texture: None,
        });
    }

    (materials, names)
}

/// Deterministic RGBA derived from the appearance string, so repeated
/// imports of the same assembly serialize identically.
fn appearance_color(appearance: &str) -> [f64; 4] {
    let mut hasher = FxHasher::default();
    appearance.hash(&mut hasher);
    let bits = hasher.finish();
    let channel = |shift: u64| ((bits >> shift) & 0xff) as f64 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

fn unique_name(candidate: String, index: usize, used: &mut FxHashSet<String>) -> String {
    let name = if used.contains(&candidate) {
        format!("{candidate}_{index}")
    } else {
        candidate
    };
    used.insert(name.clone());
    name
}
