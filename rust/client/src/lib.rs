// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # onshape2urdf API Client
//!
//! Talks to the Onshape REST API on behalf of the import pipeline:
//!
//! - **Request signing**: nonce generation and the canonical
//!   HMAC-SHA256 signature scheme ([`signing`])
//! - **Transport seam**: the [`Transport`] trait the client drives;
//!   the actual HTTP stack is supplied by the caller
//! - **Payload mapping**: normalization of the raw assembly response
//!   into the core [`Assembly`](onshape2urdf_core::Assembly) model
//!
//! The client never opens sockets itself and never places the secret
//! key in any log event or error message.

pub mod api;
pub mod error;
pub mod mapper;
pub mod signing;
pub mod transport;

pub use api::{AuthScheme, OnshapeClient};
pub use error::{Error, Result};
pub use mapper::map_assembly;
pub use signing::{generate_nonce, sign, signed_headers, NONCE_LEN};
pub use transport::{Request, Response, Transport, TransportError};
