// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalization of the raw Onshape assembly payload.
//!
//! The payload is dynamic: `rootAssembly`, `occurrences` and nearly
//! every occurrence field can be absent. Missing optional data never
//! fails the mapping; only a top-level payload that is not a JSON
//! object at all does.

use serde::Deserialize;

use onshape2urdf_core::{Assembly, Element};

use crate::error::{Error, Result};

/// Assembly name used when the payload carries none.
const DEFAULT_ASSEMBLY_NAME: &str = "Assembly";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssemblyResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    root_assembly: Option<RawRootAssembly>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRootAssembly {
    #[serde(default)]
    occurrences: Vec<RawOccurrence>,
}

#[derive(Debug, Deserialize)]
struct RawOccurrence {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    path: Vec<String>,
    #[serde(default)]
    transform: Option<Vec<f64>>,
    #[serde(default)]
    material: Option<RawNamed>,
    #[serde(default)]
    appearance: Option<RawNamed>,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    #[serde(default)]
    name: Option<String>,
}

/// Map a raw assembly response body into the normalized [`Assembly`].
///
/// `element_id` is the assembly element the response was fetched for
/// and becomes the assembly id. Occurrence identity falls back in
/// priority order: first `path` segment, then the occurrence's own
/// `id`, then an index-based placeholder.
pub fn map_assembly(body: &[u8], element_id: &str) -> Result<Assembly> {
    let raw: RawAssemblyResponse = serde_json::from_slice(body)
        .map_err(|e| Error::MalformedResponse(format!("not an assembly payload: {e}")))?;

    let occurrences = raw.root_assembly.unwrap_or_default().occurrences;
    let elements = occurrences
        .into_iter()
        .enumerate()
        .map(|(index, occurrence)| map_occurrence(index, occurrence))
        .collect();

    Ok(Assembly {
        id: element_id.to_string(),
        name: raw.name.unwrap_or_else(|| DEFAULT_ASSEMBLY_NAME.to_string()),
        elements,
    })
}

fn map_occurrence(index: usize, occurrence: RawOccurrence) -> Element {
    let (id, name) = match (occurrence.path.first(), occurrence.id) {
        (Some(head), _) => (head.clone(), head.clone()),
        (None, Some(id)) => {
            let name = format!("Element_{id}");
            (id, name)
        }
        (None, None) => (format!("element_{index}"), format!("Element_{index}")),
    };

    Element {
        id,
        name,
        element_type: "Part".to_string(),
        transform: occurrence.transform,
        material: occurrence.material.and_then(|m| m.name),
        appearance: occurrence.appearance.and_then(|a| a.name),
    }
}
