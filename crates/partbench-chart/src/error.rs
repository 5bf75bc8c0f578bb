// Dweve Partbench - Spatial Partitioning Benchmark Charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for chart rendering.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while drawing a chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// No series has any points.
    #[error("nothing to draw: chart has no data points")]
    EmptyChart,

    /// The drawing backend failed.
    #[error("drawing failed: {0}")]
    Draw(String),

    /// The drawing backend failed while producing an output file.
    #[error("failed to render '{path}': {message}")]
    Output {
        /// The image that was being written
        path: PathBuf,
        /// The backend error message
        message: String,
    },
}

impl RenderError {
    pub(crate) fn draw<E: std::fmt::Display>(err: E) -> Self {
        Self::Draw(err.to_string())
    }

    /// Attach the output path to a backend failure.
    pub(crate) fn at(self, path: &Path) -> Self {
        match self {
            Self::Draw(message) => Self::Output {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        }
    }
}
