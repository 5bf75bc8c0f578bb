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

//! Chart plans: which charts a run writes.

use partbench_core::{BenchmarkResult, Selector};
use std::collections::BTreeSet;
use tracing::debug;

/// One chart of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// File-name suffix, as in `<prefix>-<name>.png`
    pub name: String,
    pub selector: Selector,
    /// Strategies left out of this chart
    pub exclude: BTreeSet<String>,
    pub caption: String,
    pub y_label: String,
}

impl ChartSpec {
    /// Chart for one catalogue selector, named after it.
    ///
    /// Totals drop their `-total` suffix: `insert-total` is written as
    /// `insert`, root `total` stays `total`.
    pub fn for_selector(selector: Selector) -> Self {
        let name = selector.name();
        Self {
            name: name.strip_suffix("-total").unwrap_or(name).to_string(),
            selector,
            exclude: BTreeSet::new(),
            caption: caption(selector).to_string(),
            y_label: "time (ms)".to_string(),
        }
    }

    pub fn excluding(mut self, strategy: impl Into<String>) -> Self {
        self.exclude.insert(strategy.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

fn caption(selector: Selector) -> &'static str {
    match selector {
        Selector::Total => "Total time",
        Selector::Average => "Average time per run",
        Selector::InsertTotal => "Insertion: total time",
        Selector::InsertAverage => "Insertion: average time per run",
        Selector::CollisionTotal => "Collision detection: total time",
        Selector::CollisionAverage => "Collision detection: average time per run",
        Selector::QueryTotal => "Collision queries: total time",
        Selector::QueryAverage => "Collision queries: average time per run",
    }
}

/// The ordered list of charts one run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    charts: Vec<ChartSpec>,
}

impl ChartPlan {
    pub fn new(charts: Vec<ChartSpec>) -> Self {
        Self { charts }
    }

    /// One chart per catalogue selector.
    pub fn full() -> Self {
        Self::new(Selector::ALL.into_iter().map(ChartSpec::for_selector).collect())
    }

    /// Root `total` and `average` only.
    pub fn root_only() -> Self {
        Self::new(vec![
            ChartSpec::for_selector(Selector::Total),
            ChartSpec::for_selector(Selector::Average),
        ])
    }

    /// Pick the plan a result supports: the full catalogue when measurements
    /// carry sub-operations, root metrics otherwise.
    ///
    /// In the full plan, strategies without any sub-operation (a leaf-only
    /// baseline) are left out of the sub-operation charts.
    pub fn for_result(result: &BenchmarkResult) -> Self {
        if !result.has_children() {
            return Self::root_only();
        }

        let baselines: BTreeSet<String> = result
            .leaf_only_strategies()
            .map(str::to_string)
            .collect();
        if !baselines.is_empty() {
            debug!(?baselines, "leaving leaf-only strategies out of sub-operation charts");
        }

        let mut plan = Self::full();
        for chart in &mut plan.charts {
            if !chart.selector.is_root() {
                chart.exclude.extend(baselines.iter().cloned());
            }
        }
        plan
    }

    /// Leave `strategy` out of every chart.
    pub fn with_exclusion(mut self, strategy: &str) -> Self {
        for chart in &mut self.charts {
            chart.exclude.insert(strategy.to_string());
        }
        self
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
