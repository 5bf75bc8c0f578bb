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

//! Malformed benchmark inputs.

/// Inputs that fail to load, as (name, json) pairs.
pub fn malformed_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("truncated", r#"{"naive": {"1": {"total": 1.0"#),
        ("scalar_root", "3.5"),
        ("string_root", r#""naive""#),
        ("empty_object", "{}"),
        ("empty_array", "[]"),
        ("strategy_not_object", r#"{"naive": [1, 2, 3]}"#),
        ("measurement_at_strategy_level", r#"{"naive": {"total": 1.0, "average": 1.0}}"#),
        ("missing_average", r#"{"naive": {"1": {"total": 1.0}}}"#),
        ("missing_total", r#"{"naive": {"1": {"average": 1.0}}}"#),
        ("string_metric", r#"{"naive": {"1": {"total": "1.0", "average": 1.0}}}"#),
        ("children_not_object", r#"{"naive": {"1": {"total": 1.0, "average": 1.0, "children": []}}}"#),
        ("flat_missing_box_count", r#"[{"average": 1.0}]"#),
        ("flat_negative_box_count", r#"[{"box_count": -4, "average": 1.0}]"#),
        (
            "repeated_box_count_key",
            r#"{"naive": {"5": {"total": 1.0, "average": 1.0}, "5": {"total": 9.0, "average": 9.0}}}"#,
        ),
        (
            "repeated_strategy",
            r#"{"naive": {"1": {"total": 1.0, "average": 1.0}}, "naive": {"2": {"total": 2.0, "average": 2.0}}}"#,
        ),
        (
            "repeated_child",
            r#"{"naive": {"1": {"total": 1.0, "average": 1.0, "children": {"insert": {"total": 1.0, "average": 1.0}, "insert": {"total": 2.0, "average": 2.0}}}}}"#,
        ),
        ("flat_duplicate_box_count", r#"[{"box_count": 4, "average": 1.0}, {"box_count": 4, "average": 2.0}]"#),
    ]
}

/// Inputs that load but cannot be turned into series, as (name, json) pairs.
///
/// Every one fails [`partbench_core::extract_series`] with `MalformedInput`
/// for any selector.
pub fn unextractable_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("word_key", r#"{"naive": {"many": {"total": 1.0, "average": 1.0}}}"#),
        ("negative_key", r#"{"naive": {"-1": {"total": 1.0, "average": 1.0}}}"#),
        ("float_key", r#"{"naive": {"1.5": {"total": 1.0, "average": 1.0}}}"#),
        (
            "leading_zero_duplicate",
            r#"{"naive": {"7": {"total": 1.0, "average": 1.0}, "007": {"total": 2.0, "average": 2.0}}}"#,
        ),
    ]
}
