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

//! Error type for the partbench command.

use partbench_chart::RenderError;
use partbench_core::BenchError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// Arguments were unusable; `main` prints the usage line.
    #[error("{0}")]
    Usage(String),

    /// Loading or extracting the benchmark failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// The output directory is not there. It is never created.
    #[error("output directory '{path}' does not exist")]
    MissingOutputDir {
        /// The directory charts would have been written to
        path: PathBuf,
    },

    /// Drawing a chart failed.
    #[error("chart '{chart}': {source}")]
    Render {
        /// Name of the chart being drawn
        chart: String,
        /// Backend error
        source: RenderError,
    },
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn render(chart: impl Into<String>, source: RenderError) -> Self {
        Self::Render {
            chart: chart.into(),
            source,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
