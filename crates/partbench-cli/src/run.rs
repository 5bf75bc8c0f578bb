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

//! The run entry point: load, extract, render.

use crate::config::RunConfig;
use crate::error::CliError;
use crate::plan::{ChartPlan, ChartSpec};
use partbench_chart::{render_png, Chart, RenderError};
use partbench_core::{extract_series, load_with_limits, SeriesMap};
use std::path::PathBuf;
use tracing::{debug, info};

/// Run one chart generation pass and return the written files in plan order.
///
/// Every chart is extracted before the first file is written, so a
/// selector or input failure leaves the output directory untouched.
///
/// # Errors
///
/// - `Bench` if the benchmark cannot be loaded or a chart cannot be extracted.
/// - `MissingOutputDir` if the output directory does not exist.
/// - `Render` if a chart has no points or the backend fails.
pub fn run(config: &RunConfig) -> Result<Vec<PathBuf>, CliError> {
    let result = load_with_limits(&config.benchmark_path, &config.limits)?;
    let plan = match &config.plan {
        Some(plan) => plan.clone(),
        None => ChartPlan::for_result(&result),
    };

    if !config.output_dir.is_dir() {
        return Err(CliError::MissingOutputDir {
            path: config.output_dir.clone(),
        });
    }

    let mut extracted: Vec<(&ChartSpec, SeriesMap)> = Vec::with_capacity(plan.len());
    for spec in plan.charts() {
        let series = extract_series(&result, &spec.selector, &spec.exclude)?;
        if series.values().all(|s| s.is_empty()) {
            return Err(CliError::render(&spec.name, RenderError::EmptyChart));
        }
        debug!(chart = %spec.name, strategies = series.len(), "extracted chart");
        extracted.push((spec, series));
    }

    let mut written = Vec::with_capacity(extracted.len());
    for (spec, series) in &extracted {
        let path = config.output_path(&spec.name);
        let chart = Chart::new(series)
            .with_caption(spec.caption.as_str())
            .with_y_label(spec.y_label.as_str());
        render_png(&chart, &config.style, &path).map_err(|e| CliError::render(&spec.name, e))?;
        written.push(path);
    }

    info!(
        benchmark = %config.benchmark_path.display(),
        charts = written.len(),
        "wrote charts"
    );
    Ok(written)
}
