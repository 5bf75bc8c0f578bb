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

//! Data model and series extraction for spatial-partitioning benchmarks.
//!
//! A benchmark file records, per strategy and box count, a tree of timing
//! measurements. This crate loads those files and reshapes them into sorted
//! `(box_count, value)` series ready for charting.
//!
//! # Example
//!
//! ```
//! use partbench_core::{extract_series, load_str, Selector};
//! use std::collections::BTreeSet;
//!
//! let result = load_str(r#"{
//!     "naive":    {"10": {"total": 9.0, "average": 0.9}},
//!     "quadtree": {"10": {"total": 3.0, "average": 0.3}}
//! }"#)?;
//!
//! let skip: BTreeSet<String> = ["naive".to_string()].into_iter().collect();
//! let series = extract_series(&result, &Selector::Total, &skip)?;
//! assert_eq!(series.len(), 1);
//! assert_eq!(series["quadtree"].points(), &[(10, 3.0)]);
//! # Ok::<(), partbench_core::BenchError>(())
//! ```

mod error;
mod extract;
mod limits;
mod load;
mod model;
pub mod selector;

pub use error::{BenchError, BenchErrorKind, BenchResult};
pub use extract::{extract_series, parse_box_count};
pub use limits::Limits;
pub use load::{
    from_flat, load, load_all, load_str, load_with_limits, FlatRecord, DEFAULT_FLAT_STRATEGY,
};
pub use model::{BenchmarkResult, MeasurementNode, Series, SeriesMap, StrategyNode};
pub use selector::{FnSelector, Metric, MetricPath, MetricSelector, Selector, SelectorParseError};
