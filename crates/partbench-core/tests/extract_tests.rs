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

//! Extraction over the shared benchmark fixtures.

use partbench_core::{extract_series, load_str, BenchErrorKind, Selector};
use partbench_test::fixtures::{self, errors};
use std::collections::BTreeSet;

fn none() -> BTreeSet<String> {
    BTreeSet::new()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ===== Worked examples =====

#[test]
fn test_minimal_average() {
    let series = extract_series(&fixtures::minimal(), &Selector::Average, &none()).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series["naive"].points(), &[(1, 10.0), (2, 12.5)]);
}

#[test]
fn test_spatial_totals_sorted_numerically() {
    let series = extract_series(&fixtures::spatial_tree(), &Selector::Total, &none()).unwrap();
    assert_eq!(
        series["naive"].points(),
        &[(25, 12.0), (100, 150.0), (1000, 9000.0)]
    );
    assert_eq!(
        series["quadtree"].points(),
        &[(25, 3.0), (100, 40.0), (1000, 700.0)]
    );
}

#[test]
fn test_spatial_sub_operations() {
    let result = fixtures::spatial_tree();

    let insert = extract_series(&result, &Selector::InsertAverage, &none()).unwrap();
    assert_eq!(insert["quadtree"].points(), &[(25, 0.25), (100, 3.0), (1000, 40.0)]);

    let collision = extract_series(&result, &Selector::CollisionTotal, &none()).unwrap();
    assert_eq!(collision["naive"].points(), &[(25, 10.0), (100, 130.0), (1000, 8800.0)]);
}

#[test]
fn test_query_without_collisions_is_zero() {
    let result = fixtures::spatial_tree();

    let totals = extract_series(&result, &Selector::QueryTotal, &none()).unwrap();
    assert_eq!(totals["quadtree"].points(), &[(25, 0.0), (100, 6.0), (1000, 200.0)]);

    let averages = extract_series(&result, &Selector::QueryAverage, &none()).unwrap();
    assert_eq!(averages["quadtree"].points()[0], (25, 0.0));
    assert_eq!(averages["naive"].points()[0], (25, 0.8));
}

#[test]
fn test_collision_required() {
    let err = extract_series(&fixtures::insert_only(), &Selector::CollisionTotal, &none())
        .unwrap_err();
    assert_eq!(err.kind, BenchErrorKind::MissingPath);
    assert!(err.message.contains("collision"));
    assert_eq!(err.context.as_deref(), Some("strategy 'naive', box count 5"));

    // the root and insert metrics of the same document are fine
    assert!(extract_series(&fixtures::insert_only(), &Selector::InsertTotal, &none()).is_ok());
}

#[test]
fn test_flat_records_use_default_strategy_name() {
    let result = fixtures::flat_records();
    let series = extract_series(&result, &Selector::Average, &none()).unwrap();
    let (name, line) = series.iter().next().unwrap();
    assert_eq!(name, partbench_core::DEFAULT_FLAT_STRATEGY);
    assert_eq!(line.points(), &[(10, 0.2), (100, 6.0), (1000, 500.0)]);
}

// ===== Exclusion =====

#[test]
fn test_exclude_baseline() {
    let series =
        extract_series(&fixtures::spatial_tree(), &Selector::Total, &set(&["naive"])).unwrap();
    assert_eq!(series.keys().collect::<Vec<_>>(), vec!["quadtree"]);
}

#[test]
fn test_exclude_unknown_name_is_ignored() {
    let series =
        extract_series(&fixtures::spatial_tree(), &Selector::Total, &set(&["grid"])).unwrap();
    assert_eq!(series.len(), 2);
}

#[test]
fn test_exclude_everything() {
    let series = extract_series(
        &fixtures::spatial_tree(),
        &Selector::Total,
        &set(&["naive", "quadtree"]),
    )
    .unwrap();
    assert!(series.is_empty());
}

// ===== Error fixtures =====

#[test]
fn test_malformed_samples_fail_to_load() {
    for (name, json) in errors::malformed_samples() {
        let err = load_str(json).expect_err(name);
        assert_eq!(err.kind, BenchErrorKind::MalformedInput, "{}: {}", name, err);
    }
}

#[test]
fn test_unextractable_samples() {
    for (name, json) in errors::unextractable_samples() {
        let result = load_str(json).unwrap_or_else(|e| panic!("{} should load: {}", name, e));
        for selector in [Selector::Total, Selector::Average] {
            let err = extract_series(&result, &selector, &none()).expect_err(name);
            assert_eq!(err.kind, BenchErrorKind::MalformedInput, "{}", name);
        }
    }
}

#[test]
fn test_all_valid_fixtures_yield_root_series() {
    for (name, json) in fixtures::all_json() {
        let result = load_str(json).unwrap();
        for selector in [Selector::Total, Selector::Average] {
            let series = extract_series(&result, &selector, &none())
                .unwrap_or_else(|e| panic!("{} / {}: {}", name, selector, e));
            assert_eq!(series.len(), result.len(), "{}", name);
        }
    }
}
