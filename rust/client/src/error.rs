// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Onshape API.
///
/// Per-part mesh download failures are not represented here as a
/// distinct fatal kind; the pipeline recovers them locally and falls
/// back to primitive geometry.
#[derive(Error, Debug)]
pub enum Error {
    #[error("request signing failed: {0}")]
    Signing(String),

    #[error("invalid credentials: {0}")]
    Credentials(String),

    #[error(
        "authentication rejected (HTTP {status}): check that the access key and \
         secret key are current, not expired, and have read scope for this \
         document; response: {body}"
    )]
    Authentication { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected API response (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed assembly response: {0}")]
    MalformedResponse(String),
}

/// Cap response bodies carried inside errors so a large payload never
/// floods a log line.
pub(crate) fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 512;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        text.into_owned()
    } else {
        let mut cut = MAX;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... ({} bytes total)", &text[..cut], body.len())
    }
}
