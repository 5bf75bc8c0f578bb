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

//! Line charts of partbench series.
//!
//! One chart plots one [`SeriesMap`](partbench_core::SeriesMap): a line per
//! strategy, box count on the horizontal axis, the selected value on the
//! vertical axis.
//!
//! # Example
//!
//! ```no_run
//! use partbench_chart::{render_png, Chart, ChartStyle};
//! use partbench_core::{extract_series, load, Selector};
//! use std::collections::BTreeSet;
//! use std::path::Path;
//!
//! let result = load("results.json")?;
//! let series = extract_series(&result, &Selector::Total, &BTreeSet::new())?;
//! let chart = Chart::new(&series).with_caption("Total time");
//! render_png(&chart, &ChartStyle::default(), Path::new("graphs/run-total.png"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chart;
mod error;
mod render;

pub use chart::{Chart, ChartStyle, DEFAULT_X_LABEL, DEFAULT_Y_LABEL};
pub use error::RenderError;
pub use render::{draw, render_png, render_rgb};
