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

//! Builders for benchmark results and measurement trees.

use partbench_core::{BenchmarkResult, MeasurementNode, StrategyNode};
use std::collections::BTreeMap;

/// Runs per measurement in generated trees; `average = total / RUNS`.
pub const RUNS: u64 = 10;

/// Measurement with `insert` and `collision` children.
///
/// `query` is attached under `collision` when given. Averages are derived
/// from totals over [`RUNS`] runs.
pub fn spatial_node(insert: f64, collision: f64, query: Option<f64>) -> MeasurementNode {
    let mut collision_node = timed(collision);
    if let Some(query) = query {
        collision_node = collision_node.with_child("query", timed(query));
    }
    timed(insert + collision)
        .with_child("insert", timed(insert))
        .with_child("collision", collision_node)
}

fn timed(total: f64) -> MeasurementNode {
    MeasurementNode::new(total, total / RUNS as f64).with_run_count(RUNS)
}

/// Builder for customizable [`BenchmarkResult`] fixtures.
///
/// # Examples
///
/// ```
/// use partbench_test::fixtures::builders::{spatial_node, ResultBuilder};
///
/// let result = ResultBuilder::new()
///     .leaf("naive", 10, 2.0, 0.2)
///     .node("quadtree", 10, spatial_node(1.0, 0.5, None))
///     .build();
///
/// assert_eq!(result.len(), 2);
/// assert!(result.has_children());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultBuilder {
    strategies: BTreeMap<String, StrategyNode>,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated result: `points` box counts (10, 20, ...) per strategy.
    ///
    /// Later strategies insert slower and collide faster. Every seventh box
    /// count has no `query` child.
    pub fn spatial(strategies: &[&str], points: u64) -> Self {
        let mut builder = Self::new();
        for (index, name) in strategies.iter().enumerate() {
            let factor = (index + 1) as f64;
            for step in 1..=points {
                let boxes = step * 10;
                let insert = boxes as f64 * 0.01 * factor;
                let collision = (boxes * boxes) as f64 * 1e-5 / factor;
                let query = (step % 7 != 0).then_some(collision * 0.8);
                builder = builder.node(name, boxes, spatial_node(insert, collision, query));
            }
        }
        builder
    }

    /// Add an empty strategy.
    pub fn empty_strategy(mut self, strategy: &str) -> Self {
        self.strategies.entry(strategy.to_string()).or_default();
        self
    }

    /// Add a measurement under its integer box count.
    pub fn node(self, strategy: &str, box_count: u64, node: MeasurementNode) -> Self {
        self.raw_node(strategy, &box_count.to_string(), node)
    }

    /// Add a measurement under a verbatim key, e.g. `"007"` or `"many"`.
    pub fn raw_node(mut self, strategy: &str, key: &str, node: MeasurementNode) -> Self {
        self.strategies
            .entry(strategy.to_string())
            .or_default()
            .insert(key.to_string(), node);
        self
    }

    /// Add a leaf measurement.
    pub fn leaf(self, strategy: &str, box_count: u64, total: f64, average: f64) -> Self {
        self.node(strategy, box_count, MeasurementNode::new(total, average))
    }

    pub fn build(self) -> BenchmarkResult {
        self.strategies
            .into_iter()
            .fold(BenchmarkResult::new(), |result, (name, node)| {
                result.with_strategy(name, node)
            })
    }

    /// Serialize to the canonical JSON shape.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.clone().build())
            .expect("benchmark result always serializes")
    }
}
