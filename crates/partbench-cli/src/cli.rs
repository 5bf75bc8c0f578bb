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

//! Command-line arguments.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Render spatial-partitioning benchmark charts.
///
/// Reads a benchmark result file and writes one PNG line chart per selected
/// metric to `graphs/<OUTPUT_PREFIX>-<chart>.png`. The `graphs/` directory
/// must already exist.
#[derive(Debug, Parser)]
#[command(name = "partbench", version, about, long_about = None)]
pub struct Cli {
    /// Benchmark result file (JSON)
    #[arg(value_name = "BENCHMARK_JSON")]
    pub benchmark: PathBuf,

    /// Prefix for the chart files
    #[arg(value_name = "OUTPUT_PREFIX")]
    pub prefix: String,
}

/// The one-line usage string, e.g. `Usage: partbench <BENCHMARK_JSON> <OUTPUT_PREFIX>`.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_line() {
        let usage = usage();
        assert!(usage.starts_with("Usage:"), "{}", usage);
        assert!(usage.contains("partbench <BENCHMARK_JSON> <OUTPUT_PREFIX>"), "{}", usage);
    }

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(["partbench", "results/run.json", "run"]).unwrap();
        assert_eq!(cli.benchmark, PathBuf::from("results/run.json"));
        assert_eq!(cli.prefix, "run");
    }

    #[test]
    fn test_missing_prefix_rejected() {
        assert!(Cli::try_parse_from(["partbench", "run.json"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        Cli::command().debug_assert();
    }
}
