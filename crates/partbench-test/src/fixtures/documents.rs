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

//! Valid benchmark documents.

use partbench_core::{load_str, BenchmarkResult};

/// One strategy, two leaf measurements.
pub const MINIMAL_JSON: &str = r#"{
    "naive": {
        "1": {"total": 10.0, "average": 10.0},
        "2": {"total": 25.0, "average": 12.5}
    }
}"#;

/// Two strategies with insert/collision/query trees.
///
/// Box-count keys sort differently as strings ("100" < "1000" < "25") than
/// as integers. The quadtree run at 25 boxes had no collisions, so its
/// `collision` node has no `query` child.
pub const SPATIAL_TREE_JSON: &str = r#"{
    "naive": {
        "100": {"total": 150.0, "average": 15.0, "children": {
            "insert": {"total": 20.0, "average": 2.0},
            "collision": {"total": 130.0, "average": 13.0, "children": {
                "query": {"total": 120.0, "average": 12.0}
            }}
        }},
        "1000": {"total": 9000.0, "average": 900.0, "children": {
            "insert": {"total": 200.0, "average": 20.0},
            "collision": {"total": 8800.0, "average": 880.0, "children": {
                "query": {"total": 8500.0, "average": 850.0}
            }}
        }},
        "25": {"total": 12.0, "average": 1.2, "children": {
            "insert": {"total": 2.0, "average": 0.2},
            "collision": {"total": 10.0, "average": 1.0, "children": {
                "query": {"total": 8.0, "average": 0.8}
            }}
        }}
    },
    "quadtree": {
        "100": {"total": 40.0, "average": 4.0, "children": {
            "insert": {"total": 30.0, "average": 3.0},
            "collision": {"total": 10.0, "average": 1.0, "children": {
                "query": {"total": 6.0, "average": 0.6}
            }}
        }},
        "1000": {"total": 700.0, "average": 70.0, "children": {
            "insert": {"total": 400.0, "average": 40.0},
            "collision": {"total": 300.0, "average": 30.0, "children": {
                "query": {"total": 200.0, "average": 20.0}
            }}
        }},
        "25": {"total": 3.0, "average": 0.3, "children": {
            "insert": {"total": 2.5, "average": 0.25},
            "collision": {"total": 0.5, "average": 0.05}
        }}
    }
}"#;

/// A measurement with an `insert` child but no `collision` child.
pub const INSERT_ONLY_JSON: &str = r#"{
    "naive": {
        "5": {"total": 3.0, "average": 3.0, "children": {
            "insert": {"total": 3.0, "average": 3.0}
        }}
    }
}"#;

/// A leaf-only `naive` baseline next to a `quadtree` with sub-operations.
pub const MIXED_BASELINE_JSON: &str = r#"{
    "naive": {
        "10": {"total": 9.0, "average": 0.9},
        "100": {"total": 800.0, "average": 80.0}
    },
    "quadtree": {
        "10": {"total": 3.0, "average": 0.3, "children": {
            "insert": {"total": 1.0, "average": 0.1},
            "collision": {"total": 2.0, "average": 0.2, "children": {
                "query": {"total": 1.5, "average": 0.15}
            }}
        }},
        "100": {"total": 40.0, "average": 4.0, "children": {
            "insert": {"total": 15.0, "average": 1.5},
            "collision": {"total": 25.0, "average": 2.5}
        }}
    }
}"#;

/// Flat records in descending box count.
pub const FLAT_RECORDS_JSON: &str = r#"[
    {"box_count": 1000, "total": 5000.0, "average": 500.0, "min": 480.0, "max": 530.0},
    {"box_count": 100, "total": 60.0, "average": 6.0, "min": 5.5, "max": 7.0},
    {"box_count": 10, "total": 2.0, "average": 0.2, "min": 0.1, "max": 0.4}
]"#;

fn parse(json: &str) -> BenchmarkResult {
    load_str(json).expect("fixture JSON must load")
}

/// [`MINIMAL_JSON`] parsed.
pub fn minimal() -> BenchmarkResult {
    parse(MINIMAL_JSON)
}

/// [`SPATIAL_TREE_JSON`] parsed.
pub fn spatial_tree() -> BenchmarkResult {
    parse(SPATIAL_TREE_JSON)
}

/// [`INSERT_ONLY_JSON`] parsed.
pub fn insert_only() -> BenchmarkResult {
    parse(INSERT_ONLY_JSON)
}

/// [`MIXED_BASELINE_JSON`] parsed.
pub fn mixed_baseline() -> BenchmarkResult {
    parse(MIXED_BASELINE_JSON)
}

/// [`FLAT_RECORDS_JSON`] parsed.
pub fn flat_records() -> BenchmarkResult {
    parse(FLAT_RECORDS_JSON)
}
