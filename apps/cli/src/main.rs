// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! onshape2urdf - import an Onshape assembly and generate a URDF
//! robot description.
//!
//! Credentials come from flags, `ONSHAPE_ACCESS_KEY` /
//! `ONSHAPE_SECRET_KEY`, or a `secrets.json` file of the form
//! `{"onshape": {"accessKey": "...", "secretKey": "..."}}`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use onshape2urdf_client::{
    AuthScheme, OnshapeClient, Request, Response, Transport, TransportError,
};
use onshape2urdf_core::Credentials;
use onshape2urdf_processing::{ImportOptions, Importer};

#[derive(Parser)]
#[command(
    name = "onshape2urdf",
    version,
    about = "Import an Onshape assembly and generate a URDF robot description"
)]
struct Args {
    /// Onshape document URL (.../documents/{d}/w/{w}/e/{e})
    url: Option<String>,

    /// Onshape API access key
    #[arg(long, env = "ONSHAPE_ACCESS_KEY")]
    access_key: Option<String>,

    /// Onshape API secret key
    #[arg(long, env = "ONSHAPE_SECRET_KEY")]
    secret_key: Option<String>,

    /// Path to a secrets.json credentials file
    #[arg(long)]
    secrets: Option<PathBuf>,

    /// API base URL
    #[arg(long, default_value = "https://cad.onshape.com/api")]
    api_base: String,

    /// Authenticate with the plain Basic key pairing instead of
    /// request signing (relay deployments)
    #[arg(long)]
    basic_auth: bool,

    /// Output path; defaults to {robotName}.urdf in the working
    /// directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip STL downloads; every link uses primitive geometry
    #[arg(long)]
    no_meshes: bool,

    /// Also write downloaded mesh files into this directory
    #[arg(long)]
    meshes_dir: Option<PathBuf>,

    /// Worker count for the mesh download stage
    #[arg(long, default_value_t = 4)]
    mesh_workers: usize,

    /// Verify credentials against the API and exit
    #[arg(long)]
    check: bool,
}

#[derive(Deserialize)]
struct SecretsFile {
    onshape: SecretsEntry,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretsEntry {
    access_key: String,
    secret_key: String,
    #[serde(default)]
    test_assembly_url: Option<String>,
}

/// Blocking reqwest-backed transport. The request timeout lives here,
/// not in the pipeline.
struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestTransport {
    fn new() -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("onshape2urdf/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(120))
            .build()
            .context("building HTTP client")?;
        Ok(Self { http })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError(format!("bad method `{}`: {e}", request.method)))?;

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let (credentials, secrets_url) = load_credentials(&args)?;

    let transport = ReqwestTransport::new()?;
    let mut client = OnshapeClient::new(&args.api_base, credentials, transport);
    if args.basic_auth {
        client = client.with_auth_scheme(AuthScheme::Basic);
    }

    if args.check {
        client.check_connection()?;
        println!("credentials accepted by {}", args.api_base);
        return Ok(());
    }

    let url = args
        .url
        .clone()
        .or(secrets_url)
        .context("no assembly URL given (pass it as an argument, or set testAssemblyUrl in the secrets file)")?;

    let options = ImportOptions {
        download_meshes: !args.no_meshes,
        mesh_workers: args.mesh_workers,
    };
    let result = Importer::new(&client).with_options(options).run(&url)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&result.file_name));
    fs::write(&output, &result.document)
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(
        path = %output.display(),
        links = result.robot.links.len(),
        joints = result.robot.joints.len(),
        "wrote robot description"
    );

    if let Some(dir) = &args.meshes_dir {
        write_meshes(dir, &result)?;
    }

    println!("{}", output.display());
    Ok(())
}

fn write_meshes(dir: &Path, result: &onshape2urdf_processing::ImportResult) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    for mesh in &result.meshes {
        let path = dir.join(&mesh.file_name);
        fs::write(&path, &mesh.data).with_context(|| format!("writing {}", path.display()))?;
    }
    tracing::info!(count = result.meshes.len(), dir = %dir.display(), "wrote mesh files");
    Ok(())
}

/// Resolve credentials: explicit flags/env first, then a secrets file
/// (`--secrets` or `./secrets.json` when present).
fn load_credentials(args: &Args) -> anyhow::Result<(Credentials, Option<String>)> {
    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        return Ok((
            Credentials {
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
            },
            None,
        ));
    }

    let default_path = PathBuf::from("secrets.json");
    let path = match &args.secrets {
        Some(path) => path.clone(),
        None if default_path.exists() => default_path,
        None => anyhow::bail!(
            "no credentials: pass --access-key/--secret-key, set ONSHAPE_ACCESS_KEY/ONSHAPE_SECRET_KEY, or provide a secrets.json"
        ),
    };

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let secrets: SecretsFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    let url = secrets.onshape.test_assembly_url.filter(|u| !u.is_empty());
    Ok((
        Credentials {
            access_key: secrets.onshape.access_key,
            secret_key: secrets.onshape.secret_key,
        },
        url,
    ))
}
