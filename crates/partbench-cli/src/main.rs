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

//! partbench command-line entry point.
//!
//! ```bash
//! mkdir -p graphs
//! partbench results/quadtree.json quadtree
//!
//! # With debug logging
//! RUST_LOG=debug partbench results/quadtree.json quadtree
//! ```

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use partbench_cli::{run, usage, Cli, CliError, RunConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();
    if args.len() != 3 {
        println!("{}", usage());
        return ExitCode::FAILURE;
    }

    // Logs go to stderr, stdout carries the usage line and written paths
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            println!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    match RunConfig::from_cli(&cli).and_then(|config| run(&config)) {
        Ok(written) => {
            for path in written {
                println!("{} {}", "✓".green().bold(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(CliError::Usage(message)) => {
            eprintln!("Error: {}", message);
            println!("{}", usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
