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

//! Shared test fixtures for partbench crates.
//!
//! # Quick Start
//!
//! ```rust
//! use partbench_test::fixtures;
//! use partbench_test::fixtures::builders::ResultBuilder;
//!
//! // Pre-built documents
//! let result = fixtures::spatial_tree();
//! assert!(result.has_children());
//!
//! // Custom results
//! let result = ResultBuilder::new()
//!     .leaf("naive", 10, 4.0, 0.4)
//!     .leaf("naive", 20, 9.0, 0.9)
//!     .build();
//! assert_eq!(result.strategy("naive").map(|s| s.len()), Some(2));
//!
//! // Invalid inputs
//! for (name, json) in fixtures::errors::malformed_samples() {
//!     assert!(partbench_core::load_str(json).is_err(), "{}", name);
//! }
//! ```

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` to `dir/name` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written; only meant for test setup.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture file");
    path
}
