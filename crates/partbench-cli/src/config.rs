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

//! Run configuration.

use crate::cli::Cli;
use crate::error::CliError;
use crate::plan::ChartPlan;
use partbench_chart::ChartStyle;
use partbench_core::Limits;
use std::path::{Path, PathBuf};

/// Directory charts are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "graphs";

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub benchmark_path: PathBuf,
    pub output_prefix: String,
    /// Must exist before the run; never created
    pub output_dir: PathBuf,
    /// Charts to write; `None` picks them from the loaded result
    pub plan: Option<ChartPlan>,
    pub style: ChartStyle,
    pub limits: Limits,
}

impl RunConfig {
    pub fn new(benchmark_path: impl Into<PathBuf>, output_prefix: impl Into<String>) -> Self {
        Self {
            benchmark_path: benchmark_path.into(),
            output_prefix: output_prefix.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            plan: None,
            style: ChartStyle::default(),
            limits: Limits::default(),
        }
    }

    /// Build a configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// `Usage` if the prefix is empty or contains a path separator.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.prefix.is_empty() {
            return Err(CliError::usage("output prefix must not be empty"));
        }
        if cli.prefix.contains(['/', '\\']) {
            return Err(CliError::usage(format!(
                "output prefix '{}' must not contain a path separator",
                cli.prefix
            )));
        }
        Ok(Self::new(&cli.benchmark, &cli.prefix))
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_plan(mut self, plan: ChartPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// `<output_dir>/<prefix>-<chart>.png`
    pub fn output_path(&self, chart: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}-{}.png", self.output_prefix, chart))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
