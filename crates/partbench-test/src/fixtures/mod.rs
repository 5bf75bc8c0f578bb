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

//! Canonical benchmark documents.
//!
//! - **documents**: valid JSON inputs in both accepted shapes
//! - **errors**: malformed inputs and their expected failure
//! - **builders**: fluent construction of results and measurement trees

pub mod builders;
mod documents;
pub mod errors;

pub use documents::*;

/// A named JSON fixture.
pub type JsonFixture = (&'static str, &'static str);

/// Every valid JSON document, for tests that run across all of them.
pub fn all_json() -> Vec<JsonFixture> {
    vec![
        ("minimal", MINIMAL_JSON),
        ("spatial_tree", SPATIAL_TREE_JSON),
        ("insert_only", INSERT_ONLY_JSON),
        ("mixed_baseline", MIXED_BASELINE_JSON),
        ("flat_records", FLAT_RECORDS_JSON),
    ]
}
