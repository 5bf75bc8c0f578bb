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

//! Library side of the `partbench` command.
//!
//! `partbench <BENCHMARK_JSON> <OUTPUT_PREFIX>` loads a benchmark result and
//! writes one PNG line chart per metric into `graphs/`:
//!
//! - results with sub-operations: `total`, `average`, `insert`,
//!   `insert-average`, `collision`, `collision-average`, `query`,
//!   `query-average`
//! - flat results, or trees without sub-operations: `total`, `average`
//!
//! # Example
//!
//! ```no_run
//! use partbench_cli::{run, ChartPlan, RunConfig};
//!
//! let config = RunConfig::new("results/quadtree.json", "quadtree")
//!     .with_plan(ChartPlan::root_only().with_exclusion("naive"));
//! for path in run(&config)? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), partbench_cli::CliError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod plan;
mod run;

pub use cli::{usage, Cli};
pub use config::{RunConfig, DEFAULT_OUTPUT_DIR};
pub use error::CliError;
pub use plan::{ChartPlan, ChartSpec};
pub use run::run;
