// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Onshape REST API client.
//!
//! Drives a caller-supplied [`Transport`] with signed requests and
//! interprets status codes into the client error taxonomy. Response
//! bodies carried in errors are truncated; the secret key never
//! appears in any event or message.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use onshape2urdf_core::{Assembly, AssemblyReference, Credentials};

use crate::error::{truncate_body, Error, Result};
use crate::mapper::map_assembly;
use crate::signing::signed_headers;
use crate::transport::{Request, Response, Transport};

const CONTENT_TYPE: &str = "application/json";

/// Authentication scheme for outbound requests.
///
/// `Signed` is the standard scheme for direct API access. `Basic` is
/// the plain key pairing some relay deployments use; kept for parity
/// with those setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    #[default]
    Signed,
    Basic,
}

/// Onshape REST API client over a caller-supplied transport.
pub struct OnshapeClient<T: Transport> {
    base_url: String,
    credentials: Credentials,
    auth_scheme: AuthScheme,
    transport: T,
}

impl<T: Transport> OnshapeClient<T> {
    pub fn new(base_url: &str, credentials: Credentials, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            auth_scheme: AuthScheme::default(),
            transport,
        }
    }

    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// The underlying transport, for callers that need to reach
    /// through the seam (tests, instrumentation).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch and normalize one assembly.
    pub fn assembly(&self, reference: &AssemblyReference) -> Result<Assembly> {
        let url = format!(
            "{}/assemblies/d/{}/w/{}/e/{}?includeMateFeatures=true",
            self.base_url, reference.document_id, reference.workspace_id, reference.element_id
        );
        tracing::info!(
            document_id = %reference.document_id,
            element_id = %reference.element_id,
            "fetching assembly"
        );
        let response = self.get(&url)?;
        map_assembly(&response.body, &reference.element_id)
    }

    /// Download the STL export of one part. Absence or failure here is
    /// recoverable by the caller; the pipeline falls back to primitive
    /// geometry.
    pub fn part_stl(&self, reference: &AssemblyReference, part_id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/parts/d/{}/w/{}/e/{}/stl",
            self.base_url, reference.document_id, reference.workspace_id, part_id
        );
        let response = self.get(&url)?;
        tracing::debug!(part_id, bytes = response.body.len(), "downloaded part STL");
        Ok(response.body)
    }

    /// Fetch raw metadata for one part.
    pub fn part_metadata(
        &self,
        reference: &AssemblyReference,
        part_id: &str,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}/parts/d/{}/w/{}/e/{}/metadata",
            self.base_url, reference.document_id, reference.workspace_id, part_id
        );
        let response = self.get(&url)?;
        serde_json::from_slice(&response.body)
            .map_err(|e| Error::MalformedResponse(format!("part metadata not JSON: {e}")))
    }

    /// Validate the credential shape, then probe the API with a cheap
    /// listing call. Falls back to the session endpoint when the
    /// primary probe is missing or rejected with 401.
    pub fn check_connection(&self) -> Result<()> {
        self.validate_credentials()?;

        let primary = format!("{}/documents", self.base_url);
        match self.get(&primary) {
            Ok(_) => Ok(()),
            Err(Error::Authentication { status: 401, .. }) | Err(Error::Api { status: 404, .. }) => {
                tracing::warn!("primary probe rejected, trying session endpoint");
                let fallback = format!("{}/users/current", self.base_url);
                self.get(&fallback).map(|_| ())
            }
            Err(e) => Err(e),
        }
    }

    fn validate_credentials(&self) -> Result<()> {
        if self.credentials.access_key.is_empty() || self.credentials.secret_key.is_empty() {
            return Err(Error::Credentials(
                "access key and secret key are required".into(),
            ));
        }
        if self.credentials.access_key.len() < 10 || self.credentials.secret_key.len() < 10 {
            return Err(Error::Credentials(
                "access key and secret key appear too short".into(),
            ));
        }
        Ok(())
    }

    /// Issue an authenticated GET and map failure statuses into the
    /// error taxonomy.
    fn get(&self, url: &str) -> Result<Response> {
        let headers = match self.auth_scheme {
            AuthScheme::Signed => signed_headers("GET", url, CONTENT_TYPE, &self.credentials)?,
            AuthScheme::Basic => self.basic_headers(),
        };

        let request = Request::get(url, headers);
        let response = self.transport.execute(&request).map_err(|e| {
            tracing::error!(url, error = %e, "transport failure");
            Error::Transport(format!("{url}: {e}"))
        })?;

        match response.status {
            status if response.is_success() => {
                tracing::debug!(url, status, "request succeeded");
                Ok(response)
            }
            401 | 403 => Err(Error::Authentication {
                status: response.status,
                body: truncate_body(&response.body),
            }),
            0 => Err(Error::Transport(format!(
                "{url}: connection-level failure (status 0)"
            ))),
            status => Err(Error::Api {
                status,
                body: truncate_body(&response.body),
            }),
        }
    }

    fn basic_headers(&self) -> Vec<(String, String)> {
        let pair = format!(
            "{}:{}",
            self.credentials.access_key, self.credentials.secret_key
        );
        vec![
            (
                "Authorization".to_string(),
                format!("Basic {}", BASE64.encode(pair)),
            ),
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ("Accept".to_string(), CONTENT_TYPE.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use std::sync::Mutex;

    /// Canned transport recording the requests it sees.
    struct CannedTransport {
        responses: Vec<(String, std::result::Result<Response, String>)>,
        seen: Mutex<Vec<Request>>,
    }

    impl CannedTransport {
        fn new(responses: Vec<(String, std::result::Result<Response, String>)>) -> Self {
            Self {
                responses,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn ok(status: u16, body: &[u8]) -> std::result::Result<Response, String> {
            Ok(Response {
                status,
                headers: Vec::new(),
                body: body.to_vec(),
            })
        }
    }

    impl Transport for CannedTransport {
        fn execute(&self, request: &Request) -> std::result::Result<Response, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            for (fragment, outcome) in &self.responses {
                if request.url.contains(fragment.as_str()) {
                    return outcome.clone().map_err(TransportError);
                }
            }
            Err(TransportError("no canned response".into()))
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            access_key: "testaccesskey".into(),
            secret_key: "testsecretkey".into(),
        }
    }

    fn reference() -> AssemblyReference {
        AssemblyReference {
            document_id: "D".into(),
            workspace_id: "W".into(),
            element_id: "E".into(),
        }
    }

    #[test]
    fn assembly_request_is_signed() {
        let transport = CannedTransport::new(vec![(
            "/assemblies/d/D/w/W/e/E".into(),
            CannedTransport::ok(200, br#"{"name": "A", "rootAssembly": {"occurrences": []}}"#),
        )]);
        let client = OnshapeClient::new("https://cad.example.com/api", credentials(), transport);

        let assembly = client.assembly(&reference()).unwrap();
        assert_eq!(assembly.name, "A");

        let seen = client.transport.seen.lock().unwrap();
        let names: Vec<&str> = seen[0].headers.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"Authorization"));
        assert!(names.contains(&"On-Nonce"));
        assert!(names.contains(&"Date"));
        let auth = &seen[0].headers.iter().find(|(n, _)| n == "Authorization").unwrap().1;
        assert!(auth.starts_with("On testaccesskey:HmacSHA256:"));
    }

    #[test]
    fn basic_scheme_sends_plain_pairing() {
        let transport = CannedTransport::new(vec![(
            "/assemblies/".into(),
            CannedTransport::ok(200, br#"{}"#),
        )]);
        let client = OnshapeClient::new("https://cad.example.com/api", credentials(), transport)
            .with_auth_scheme(AuthScheme::Basic);

        client.assembly(&reference()).unwrap();

        let seen = client.transport.seen.lock().unwrap();
        let auth = &seen[0].headers.iter().find(|(n, _)| n == "Authorization").unwrap().1;
        assert!(auth.starts_with("Basic "));
    }

    #[test]
    fn unauthorized_maps_to_authentication_error() {
        let transport = CannedTransport::new(vec![(
            "/assemblies/".into(),
            CannedTransport::ok(401, br#"{"message": "Unauthorized"}"#),
        )]);
        let client = OnshapeClient::new("https://cad.example.com/api", credentials(), transport);

        match client.assembly(&reference()) {
            Err(Error::Authentication { status: 401, body }) => {
                assert!(body.contains("Unauthorized"));
            }
            other => panic!("expected authentication error, got {other:?}"),
        }
    }

    #[test]
    fn connection_failure_maps_to_transport_error() {
        let transport = CannedTransport::new(vec![(
            "/assemblies/".into(),
            Err("connection refused".into()),
        )]);
        let client = OnshapeClient::new("https://cad.example.com/api", credentials(), transport);

        assert!(matches!(
            client.assembly(&reference()),
            Err(Error::Transport(_))
        ));
    }

    #[test]
    fn errors_never_leak_the_secret_key() {
        let transport = CannedTransport::new(vec![(
            "/assemblies/".into(),
            CannedTransport::ok(403, b"forbidden"),
        )]);
        let client = OnshapeClient::new("https://cad.example.com/api", credentials(), transport);

        let message = client.assembly(&reference()).unwrap_err().to_string();
        assert!(!message.contains("testsecretkey"));
    }

    #[test]
    fn check_connection_rejects_short_keys() {
        let transport = CannedTransport::new(vec![]);
        let client = OnshapeClient::new(
            "https://cad.example.com/api",
            Credentials {
                access_key: "short".into(),
                secret_key: "short".into(),
            },
            transport,
        );
        assert!(matches!(
            client.check_connection(),
            Err(Error::Credentials(_))
        ));
    }

    #[test]
    fn check_connection_falls_back_to_session_endpoint() {
        let transport = CannedTransport::new(vec![
            ("/documents".into(), CannedTransport::ok(401, b"{}")),
            ("/users/current".into(), CannedTransport::ok(200, b"{}")),
        ]);
        let client = OnshapeClient::new("https://cad.example.com/api", credentials(), transport);
        client.check_connection().unwrap();

        let seen = client.transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].url.ends_with("/users/current"));
    }
}
