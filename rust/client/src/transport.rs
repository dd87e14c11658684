// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport seam between the API client and the HTTP stack.
//!
//! The client builds requests (URL, method, signed headers) and
//! interprets status codes and bodies; it never opens sockets or
//! manages connection pools. Callers supply a [`Transport`]
//! implementation, typically backed by `reqwest`, and tests supply a
//! canned one.

use thiserror::Error;

/// One outbound HTTP request as the client describes it.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn get(url: impl Into<String>, headers: Vec<(String, String)>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            headers,
        }
    }
}

/// The response a transport hands back. A connection-level failure is
/// a [`TransportError`] instead; HTTP error statuses arrive here.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Connection-level transport failure (DNS, refused connection,
/// timeout imposed by the transport itself).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);

/// An HTTP transport the API client can drive.
///
/// Implementations must be shareable across threads; the mesh download
/// stage fans requests out over a worker pool.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &Request) -> std::result::Result<Response, TransportError>;
}
