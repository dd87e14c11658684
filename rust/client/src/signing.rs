// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical request signing for the Onshape REST API.
//!
//! Each request is authenticated with an HMAC-SHA256 signature over a
//! canonical string of six newline-joined, lower-cased components:
//! method, nonce, RFC-1123 date, content type, URL path, and URL query
//! (leading `?` stripped, empty when absent). The scheme is bit-exact
//! against the remote verifier: any deviation in case, ordering or
//! whitespace invalidates the signature.

use std::time::SystemTime;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::Sha256;
use url::Url;

use onshape2urdf_core::Credentials;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Nonce length the remote service expects.
pub const NONCE_LEN: usize = 25;

/// Generate a 25-character nonce from the `[A-Za-z0-9]` alphabet.
///
/// Not cryptographically reviewed; the length and alphabet must match
/// the remote service's expectations exactly.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Compute the `Authorization` header value for one request.
///
/// Returns `On {accessKey}:HmacSHA256:{base64Signature}`. Fails with
/// [`Error::Signing`] when the URL cannot be parsed; the caller must
/// treat that as fatal for the request.
pub fn sign(
    method: &str,
    request_url: &str,
    nonce: &str,
    auth_date: &str,
    content_type: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = Url::parse(request_url)
        .map_err(|e| Error::Signing(format!("unparseable request url `{request_url}`: {e}")))?;

    let canonical = [
        method.to_lowercase(),
        nonce.to_lowercase(),
        auth_date.to_lowercase(),
        content_type.to_lowercase(),
        url.path().to_lowercase(),
        url.query().unwrap_or("").to_lowercase(),
    ]
    .join("\n");

    let mut mac = HmacSha256::new_from_slice(credentials.secret_key.as_bytes())
        .map_err(|e| Error::Signing(format!("invalid HMAC key material: {e}")))?;
    mac.update(canonical.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    Ok(format!(
        "On {}:HmacSHA256:{}",
        credentials.access_key, signature
    ))
}

/// Build the full signed header set for one request: `Date`,
/// `On-Nonce`, `Authorization`, `Content-Type` and `Accept`.
pub fn signed_headers(
    method: &str,
    request_url: &str,
    content_type: &str,
    credentials: &Credentials,
) -> Result<Vec<(String, String)>> {
    let nonce = generate_nonce();
    let date = httpdate::fmt_http_date(SystemTime::now());
    let authorization = sign(method, request_url, &nonce, &date, content_type, credentials)?;

    Ok(vec![
        ("Date".to_string(), date),
        ("On-Nonce".to_string(), nonce),
        ("Authorization".to_string(), authorization),
        ("Content-Type".to_string(), content_type.to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ])
}
