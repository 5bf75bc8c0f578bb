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

//! Property-based tests for series extraction using proptest.
//!
//! Properties covered:
//! - Every series is strictly ascending by box count
//! - Extraction is idempotent
//! - Excluded strategies never appear in the output
//! - Absent `query` children read as 0.0
//! - Loading the serialized result yields the same series

use partbench_core::{extract_series, load_str, BenchmarkResult, Selector};
use partbench_test::fixtures::builders::{spatial_node, ResultBuilder};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// ===== Generators =====

fn strategy_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").expect("valid strategy name regex")
}

/// Milliseconds as written by the harness: finite, non-negative.
fn millis() -> impl Strategy<Value = f64> {
    (0u32..10_000_000).prop_map(|micros| micros as f64 / 1000.0)
}

/// (insert, collision, query) timings for one box count.
fn timings() -> impl Strategy<Value = (f64, f64, Option<f64>)> {
    (millis(), millis(), prop::option::of(millis()))
}

fn strategy_runs() -> impl Strategy<Value = BTreeMap<u64, (f64, f64, Option<f64>)>> {
    prop::collection::btree_map(0u64..1_000_000, timings(), 0..16)
}

fn benchmark() -> impl Strategy<Value = BenchmarkResult> {
    prop::collection::btree_map(strategy_name(), strategy_runs(), 1..5).prop_map(|strategies| {
        let mut builder = ResultBuilder::new();
        for (name, runs) in strategies {
            builder = builder.empty_strategy(&name);
            for (box_count, (insert, collision, query)) in runs {
                builder = builder.node(&name, box_count, spatial_node(insert, collision, query));
            }
        }
        builder.build()
    })
}

fn benchmark_and_exclusions() -> impl Strategy<Value = (BenchmarkResult, BTreeSet<String>)> {
    benchmark().prop_flat_map(|result| {
        let names: Vec<String> = result.strategy_names().map(str::to_string).collect();
        let len = names.len();
        (
            Just(result),
            prop::sample::subsequence(names, 0..=len)
                .prop_map(|picked| picked.into_iter().collect::<BTreeSet<_>>()),
        )
    })
}

fn any_selector() -> impl Strategy<Value = Selector> {
    prop::sample::select(Selector::ALL.to_vec())
}

// ===== Properties =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every series is strictly ascending with no repeated box count
    #[test]
    fn prop_series_strictly_ascending(result in benchmark(), selector in any_selector()) {
        let series = extract_series(&result, &selector, &BTreeSet::new()).unwrap();
        for (name, line) in &series {
            let counts: Vec<u64> = line.box_counts().collect();
            prop_assert!(
                counts.windows(2).all(|w| w[0] < w[1]),
                "{} not strictly ascending: {:?}", name, counts
            );
        }
    }

    /// Property: one point per box-count key, one series per strategy
    #[test]
    fn prop_series_cover_input(result in benchmark(), selector in any_selector()) {
        let series = extract_series(&result, &selector, &BTreeSet::new()).unwrap();
        prop_assert_eq!(series.len(), result.len());
        for (name, node) in result.strategies() {
            prop_assert_eq!(series[name].len(), node.len());
        }
    }

    /// Property: extraction is idempotent
    #[test]
    fn prop_extract_idempotent(result in benchmark(), selector in any_selector()) {
        let first = extract_series(&result, &selector, &BTreeSet::new()).unwrap();
        let second = extract_series(&result, &selector, &BTreeSet::new()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: excluded strategies are absent, all others present
    #[test]
    fn prop_exclusion_law(
        (result, exclude) in benchmark_and_exclusions(),
        selector in any_selector()
    ) {
        let series = extract_series(&result, &selector, &exclude).unwrap();
        for name in result.strategy_names() {
            prop_assert_eq!(series.contains_key(name), !exclude.contains(name));
        }
    }

    /// Property: a box count without a query child charts 0.0 for query metrics
    #[test]
    fn prop_missing_query_reads_zero(result in benchmark()) {
        let totals = extract_series(&result, &Selector::QueryTotal, &BTreeSet::new()).unwrap();
        let averages = extract_series(&result, &Selector::QueryAverage, &BTreeSet::new()).unwrap();

        for (name, node) in result.strategies() {
            for ((box_count, total), (_, average)) in totals[name].points().iter().zip(averages[name].points()) {
                let measurement = &node[&box_count.to_string()];
                if measurement.descend(["collision", "query"]).is_none() {
                    prop_assert_eq!(*total, 0.0);
                    prop_assert_eq!(*average, 0.0);
                }
            }
        }
    }

    /// Property: series survive a trip through the JSON loader
    #[test]
    fn prop_loader_preserves_series(result in benchmark(), selector in any_selector()) {
        let json = serde_json::to_string(&result).unwrap();
        let reloaded = load_str(&json).unwrap();
        prop_assert_eq!(
            extract_series(&result, &selector, &BTreeSet::new()).unwrap(),
            extract_series(&reloaded, &selector, &BTreeSet::new()).unwrap()
        );
    }
}
