// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end pipeline tests over a canned transport.

use std::sync::Mutex;

use onshape2urdf_client::{OnshapeClient, Request, Response, Transport, TransportError};
use onshape2urdf_core::Credentials;
use onshape2urdf_processing::{Error, ImportOptions, Importer};

const ASSEMBLY_URL: &str = "https://cad.example.com/documents/D/w/W/e/E";

const ASSEMBLY_BODY: &str = r#"{
    "name": "Test Arm",
    "rootAssembly": {
        "occurrences": [
            {
                "path": ["Base Plate"],
                "transform": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]
            },
            {
                "path": ["Upper Arm"],
                "transform": [1,0,0,0.5, 0,1,0,0, 0,0,1,0.2, 0,0,0,1],
                "appearance": {"name": "Red Paint"}
            },
            {
                "path": ["Gripper"],
                "transform": [1,0,0,1, 0,1,0,0, 0,0,1,0.4, 0,0,0,1]
            }
        ]
    }
}"#;

/// Canned transport: assembly payload plus per-part STL routes, with
/// selectable per-part failures.
struct MockTransport {
    failing_stl_parts: Vec<&'static str>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    fn new(failing_stl_parts: Vec<&'static str>) -> Self {
        Self {
            failing_stl_parts,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request.url.clone());

        if request.url.contains("/assemblies/") {
            return Ok(Response {
                status: 200,
                headers: Vec::new(),
                body: ASSEMBLY_BODY.as_bytes().to_vec(),
            });
        }
        if request.url.ends_with("/stl") {
            for part in &self.failing_stl_parts {
                // Part ids are path segments in the STL route.
                if request.url.contains(&part.replace(' ', "%20")) || request.url.contains(part) {
                    return Err(TransportError("simulated mesh failure".into()));
                }
            }
            return Ok(Response {
                status: 200,
                headers: Vec::new(),
                body: b"solid mock\nendsolid mock\n".to_vec(),
            });
        }
        Err(TransportError(format!("unexpected request: {}", request.url)))
    }
}

fn credentials() -> Credentials {
    Credentials {
        access_key: "testaccesskey".into(),
        secret_key: "testsecretkey".into(),
    }
}

fn client(transport: MockTransport) -> OnshapeClient<MockTransport> {
    OnshapeClient::new("https://cad.example.com/api", credentials(), transport)
}

#[test]
fn full_import_builds_chain_and_document() {
    let client = client(MockTransport::new(Vec::new()));
    let result = Importer::new(&client).run(ASSEMBLY_URL).unwrap();

    assert_eq!(result.robot.name, "test_arm");
    assert_eq!(result.robot.links.len(), 3);
    assert_eq!(result.robot.joints.len(), 2);
    assert_eq!(result.file_name, "test_arm.urdf");
    assert_eq!(result.meshes.len(), 3);

    // Chain: base_link -> upper_arm -> gripper.
    assert_eq!(result.robot.links[0].name, "base_link");
    assert_eq!(result.robot.joints[0].parent, "base_link");
    assert_eq!(result.robot.joints[0].child, "upper_arm");
    assert_eq!(result.robot.joints[1].parent, "upper_arm");
    assert_eq!(result.robot.joints[1].child, "gripper");

    // Joint origin from the row-major transform translation.
    assert!(result.document.contains("<origin xyz=\"0.5 0 0.2\" rpy=\"0 0 0\"/>"));
    // Appearance became a robot-level material.
    assert!(result.document.contains("<material name=\"red_paint\">"));
    // Meshes downloaded, so visuals reference them.
    assert!(result
        .document
        .contains("<mesh filename=\"package://upper_arm/meshes/Upper Arm.stl\" scale=\"1 1 1\"/>"));
}

#[test]
fn mesh_failure_falls_back_to_box_and_never_aborts() {
    let client = client(MockTransport::new(vec!["Upper Arm"]));
    let result = Importer::new(&client).run(ASSEMBLY_URL).unwrap();

    // The run still completes with all links present.
    assert_eq!(result.robot.links.len(), 3);
    assert_eq!(result.meshes.len(), 2);

    // The failed part renders as a box, the others as meshes.
    assert!(!result.document.contains("Upper Arm.stl"));
    assert!(result.document.contains("Gripper.stl"));
    let upper_arm = result
        .robot
        .links
        .iter()
        .find(|l| l.name == "upper_arm")
        .unwrap();
    assert!(matches!(
        upper_arm.visual.geometry,
        onshape2urdf_geometry::Geometry::Box { .. }
    ));
}

#[test]
fn meshes_keep_original_part_order() {
    let client = client(MockTransport::new(Vec::new()));
    let result = Importer::new(&client).run(ASSEMBLY_URL).unwrap();

    let ids: Vec<&str> = result.meshes.iter().map(|m| m.part_id.as_str()).collect();
    assert_eq!(ids, ["Base Plate", "Upper Arm", "Gripper"]);
    assert_eq!(result.meshes[0].file_name, "Base Plate.stl");
}

#[test]
fn repeated_imports_serialize_identically() {
    let client = client(MockTransport::new(Vec::new()));
    let importer = Importer::new(&client);
    let first = importer.run(ASSEMBLY_URL).unwrap();
    let second = importer.run(ASSEMBLY_URL).unwrap();
    assert_eq!(first.document, second.document);
}

#[test]
fn skipping_meshes_issues_no_stl_requests() {
    let client = client(MockTransport::new(Vec::new()));
    let importer = Importer::new(&client).with_options(ImportOptions {
        download_meshes: false,
        mesh_workers: 4,
    });
    let result = importer.run(ASSEMBLY_URL).unwrap();

    assert!(result.meshes.is_empty());
    assert!(result.document.contains("<box size="));
    let urls = client.transport_urls();
    assert!(urls.iter().all(|u| !u.ends_with("/stl")));
}

#[test]
fn invalid_reference_is_fatal() {
    let client = client(MockTransport::new(Vec::new()));
    let result = Importer::new(&client).run("https://example.com/not/an/assembly");
    assert!(matches!(
        result,
        Err(Error::Core(onshape2urdf_core::Error::InvalidReference { .. }))
    ));
}

/// Access the mock transport through the client for request assertions.
trait TransportUrls {
    fn transport_urls(&self) -> Vec<String>;
}

impl TransportUrls for OnshapeClient<MockTransport> {
    fn transport_urls(&self) -> Vec<String> {
        self.transport().request_urls()
    }
}
