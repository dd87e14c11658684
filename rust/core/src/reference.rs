// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly reference resolution from Onshape document URLs.
//!
//! An Onshape assembly is addressed by the path pattern
//! `.../documents/{documentId}/w/{workspaceId}/e/{elementId}`. The
//! path markers `documents`, `w` and `e` are case-sensitive.

use crate::error::{Error, Result};

/// Opaque identifier triple addressing one assembly element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReference {
    pub document_id: String,
    pub workspace_id: String,
    pub element_id: String,
}

impl AssemblyReference {
    /// Re-form the path suffix this reference was resolved from.
    pub fn path_suffix(&self) -> String {
        format!(
            "documents/{}/w/{}/e/{}",
            self.document_id, self.workspace_id, self.element_id
        )
    }
}

/// Resolve an Onshape document URL into an [`AssemblyReference`].
///
/// Recognizes the first `documents/{d}/w/{w}/e/{e}` run of path
/// segments; any query string or fragment on the element segment is
/// ignored. Fails with [`Error::InvalidReference`] when the pattern is
/// absent.
pub fn resolve_reference(url: &str) -> Result<AssemblyReference> {
    let segments: Vec<&str> = url
        .split('/')
        .map(strip_url_tail)
        .filter(|s| !s.is_empty())
        .collect();

    for window in segments.windows(6) {
        if window[0] == "documents" && window[2] == "w" && window[4] == "e" {
            return Ok(AssemblyReference {
                document_id: window[1].to_string(),
                workspace_id: window[3].to_string(),
                element_id: window[5].to_string(),
            });
        }
    }

    Err(Error::InvalidReference {
        url: url.to_string(),
    })
}

/// Drop a query string or fragment glued to a path segment.
fn strip_url_tail(segment: &str) -> &str {
    match segment.find(['?', '#']) {
        Some(idx) => &segment[..idx],
        None => segment,
    }
}
