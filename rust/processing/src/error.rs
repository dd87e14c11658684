// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors. A partially completed import is discarded,
/// never returned half-built.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] onshape2urdf_core::Error),

    #[error(transparent)]
    Client(#[from] onshape2urdf_client::Error),

    #[error("worker pool setup failed: {0}")]
    WorkerPool(String),
}
