// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized assembly model.
//!
//! The Onshape payload is dynamic: nearly every field can be absent.
//! The normalized types keep that explicit with `Option` fields so
//! every consumer handles absence deliberately instead of relying on
//! absence-tolerant property access.

use std::fmt;

use serde::Deserialize;

/// Half-extent of the placeholder bounding cube derived from an
/// element transform. A stand-in until real mesh-derived bounds are
/// available.
pub const PLACEHOLDER_HALF_EXTENT: f64 = 0.1;

/// Onshape API key pair.
///
/// The secret key is HMAC key material only; it is excluded from the
/// `Debug` output so it cannot leak into logs or error context.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// A normalized assembly: the ordered occurrence list of one Onshape
/// assembly element. Element order is significant; it becomes the
/// joint chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub id: String,
    pub name: String,
    pub elements: Vec<Element>,
}

/// One placed occurrence inside an assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub element_type: String,
    /// 4x4 transform as 16 numbers, when the occurrence carries one.
    pub transform: Option<Vec<f64>>,
    pub material: Option<String>,
    pub appearance: Option<String>,
}

/// A part derived 1:1 from an [`Element`]; the same occurrence at a
/// later pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub material: Option<String>,
    pub appearance: Option<String>,
    pub bounding_box: Option<BoundingBox>,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_corner: [f64; 3],
    pub max_corner: [f64; 3],
}

impl BoundingBox {
    /// Cube of the given half-extent centered on `center`.
    pub fn cube_around(center: [f64; 3], half_extent: f64) -> Self {
        Self {
            min_corner: [
                center[0] - half_extent,
                center[1] - half_extent,
                center[2] - half_extent,
            ],
            max_corner: [
                center[0] + half_extent,
                center[1] + half_extent,
                center[2] + half_extent,
            ],
        }
    }

    /// Component-wise extent, `max - min`.
    pub fn size(&self) -> [f64; 3] {
        [
            self.max_corner[0] - self.min_corner[0],
            self.max_corner[1] - self.min_corner[1],
            self.max_corner[2] - self.min_corner[2],
        ]
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> [f64; 3] {
        [
            (self.min_corner[0] + self.max_corner[0]) / 2.0,
            (self.min_corner[1] + self.max_corner[1]) / 2.0,
            (self.min_corner[2] + self.max_corner[2]) / 2.0,
        ]
    }

    pub fn volume(&self) -> f64 {
        let size = self.size();
        size[0] * size[1] * size[2]
    }
}

/// Derive the flat part list from an assembly.
///
/// Each element maps to exactly one part. Elements with a full 4x4
/// transform get a placeholder bounding cube centered on the
/// transform's translation (entries 12/13/14); elements without one
/// yield a part with no bounding box.
pub fn parts_from_assembly(assembly: &Assembly) -> Vec<Part> {
    assembly
        .elements
        .iter()
        .map(|element| Part {
            id: element.id.clone(),
            name: element.name.clone(),
            material: element.material.clone(),
            appearance: element.appearance.clone(),
            bounding_box: element.transform.as_deref().and_then(bounding_box_from_transform),
        })
        .collect()
}

fn bounding_box_from_transform(transform: &[f64]) -> Option<BoundingBox> {
    if transform.len() < 16 {
        return None;
    }
    let translation = [transform[12], transform[13], transform[14]];
    Some(BoundingBox::cube_around(
        translation,
        PLACEHOLDER_HALF_EXTENT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str, transform: Option<Vec<f64>>) -> Element {
        Element {
            id: id.to_string(),
            name: format!("Element_{id}"),
            element_type: "Part".to_string(),
            transform,
            material: None,
            appearance: None,
        }
    }

    fn identity_with_translation(x: f64, y: f64, z: f64) -> Vec<f64> {
        let mut t = vec![
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        t[12] = x;
        t[13] = y;
        t[14] = z;
        t
    }

    #[test]
    fn part_gets_placeholder_cube_from_transform() {
        let assembly = Assembly {
            id: "a".into(),
            name: "A".into(),
            elements: vec![element("p1", Some(identity_with_translation(1.0, 2.0, 3.0)))],
        };
        let parts = parts_from_assembly(&assembly);
        let bb = parts[0].bounding_box.unwrap();
        assert_eq!(bb.min_corner, [0.9, 1.9, 2.9]);
        assert_eq!(bb.max_corner, [1.1, 2.1, 3.1]);
    }

    #[test]
    fn part_without_transform_has_no_bounds() {
        let assembly = Assembly {
            id: "a".into(),
            name: "A".into(),
            elements: vec![element("p1", None)],
        };
        assert!(parts_from_assembly(&assembly)[0].bounding_box.is_none());
    }

    #[test]
    fn short_transform_yields_no_bounds() {
        let assembly = Assembly {
            id: "a".into(),
            name: "A".into(),
            elements: vec![element("p1", Some(vec![0.0; 12]))],
        };
        assert!(parts_from_assembly(&assembly)[0].bounding_box.is_none());
    }

    #[test]
    fn bounding_box_size_center_volume() {
        let bb = BoundingBox {
            min_corner: [0.0, 0.0, 0.0],
            max_corner: [2.0, 4.0, 6.0],
        };
        assert_eq!(bb.size(), [2.0, 4.0, 6.0]);
        assert_eq!(bb.center(), [1.0, 2.0, 3.0]);
        assert_eq!(bb.volume(), 48.0);
    }

    #[test]
    fn credentials_debug_redacts_secret() {
        let creds = Credentials {
            access_key: "AK".into(),
            secret_key: "very-secret".into(),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
