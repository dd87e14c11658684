// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The import orchestrator.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use onshape2urdf_client::{OnshapeClient, Transport};
use onshape2urdf_core::{parts_from_assembly, resolve_reference, AssemblyReference, Part};
use onshape2urdf_robot::{build_robot, write_urdf, RobotModel};

use crate::error::{Error, Result};

/// Pipeline knobs.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Fetch per-part STL assets. When off, every part uses primitive
    /// geometry.
    pub download_meshes: bool,
    /// Worker count for the mesh download fan-out.
    pub mesh_workers: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            download_meshes: true,
            mesh_workers: 4,
        }
    }
}

/// One downloaded mesh blob, in original part order.
#[derive(Debug, Clone)]
pub struct MeshAsset {
    pub part_id: String,
    pub file_name: String,
    pub data: Vec<u8>,
}

/// A completed import.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub robot: RobotModel,
    /// Serialized URDF document.
    pub document: String,
    /// Suggested output file name, `{robotName}.urdf`.
    pub file_name: String,
    /// Mesh blobs downloaded during the run, for callers that persist
    /// them next to the document.
    pub meshes: Vec<MeshAsset>,
}

/// Runs the import pipeline against one client.
pub struct Importer<'a, T: Transport> {
    client: &'a OnshapeClient<T>,
    options: ImportOptions,
}

impl<'a, T: Transport> Importer<'a, T> {
    pub fn new(client: &'a OnshapeClient<T>) -> Self {
        Self {
            client,
            options: ImportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the full pipeline for one assembly URL.
    pub fn run(&self, url: &str) -> Result<ImportResult> {
        let reference = resolve_reference(url)?;
        tracing::info!(
            document_id = %reference.document_id,
            workspace_id = %reference.workspace_id,
            element_id = %reference.element_id,
            "resolved assembly reference"
        );

        let assembly = self.client.assembly(&reference)?;
        let parts = parts_from_assembly(&assembly);
        tracing::info!(
            assembly = %assembly.name,
            parts = parts.len(),
            "normalized assembly"
        );

        let meshes = if self.options.download_meshes {
            self.fetch_meshes(&reference, &parts)?
        } else {
            Vec::new()
        };
        let mesh_ids: FxHashSet<String> =
            meshes.iter().map(|asset| asset.part_id.clone()).collect();

        let robot = build_robot(&assembly, &parts, &mesh_ids);
        let document = write_urdf(&robot);
        let file_name = format!("{}.urdf", robot.name);

        tracing::info!(
            robot = %robot.name,
            links = robot.links.len(),
            joints = robot.joints.len(),
            meshes = meshes.len(),
            "import complete"
        );

        Ok(ImportResult {
            robot,
            document,
            file_name,
            meshes,
        })
    }

    /// Download part meshes over a bounded worker pool.
    ///
    /// Results come back in original part order regardless of
    /// completion order. Each per-part failure is logged and treated
    /// as asset-absent.
    fn fetch_meshes(
        &self,
        reference: &AssemblyReference,
        parts: &[Part],
    ) -> Result<Vec<MeshAsset>> {
        let workers = self.options.mesh_workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| Error::WorkerPool(e.to_string()))?;

        let downloads: Vec<Option<MeshAsset>> = pool.install(|| {
            parts
                .par_iter()
                .map(|part| match self.client.part_stl(reference, &part.id) {
                    Ok(data) => Some(MeshAsset {
                        part_id: part.id.clone(),
                        file_name: format!("{}.stl", part.name),
                        data,
                    }),
                    Err(e) => {
                        tracing::warn!(
                            part_id = %part.id,
                            error = %e,
                            "mesh download failed, falling back to box geometry"
                        );
                        None
                    }
                })
                .collect()
        });

        Ok(downloads.into_iter().flatten().collect())
    }
}
