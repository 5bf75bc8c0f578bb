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

//! Loading benchmark files.
//!
//! Two shapes are accepted, told apart by the top-level JSON value:
//!
//! - **object**: strategy name to box-count measurement trees (canonical),
//! - **array**: flat per-run records from older harness builds, one file per
//!   strategy:
//!
//! ```json
//! [{"box_count": 100, "total": 42.0, "average": 4.2, "min": 3.9, "max": 5.1}]
//! ```
//!
//! Flat records become a single strategy. Records without `total` are taken
//! as a single run, so `total` falls back to `average`.

use crate::error::{BenchError, BenchResult};
use crate::limits::Limits;
use crate::model::{BenchmarkResult, MeasurementNode, StrategyNode};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Strategy name used for flat input read from a string.
pub const DEFAULT_FLAT_STRATEGY: &str = "benchmark";

/// One record of the flat file shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlatRecord {
    pub box_count: u64,
    pub average: f64,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl From<FlatRecord> for MeasurementNode {
    fn from(record: FlatRecord) -> Self {
        let mut node = MeasurementNode::new(record.total.unwrap_or(record.average), record.average);
        node.min = record.min;
        node.max = record.max;
        node
    }
}

/// Load a benchmark file from disk with default limits.
///
/// # Errors
///
/// `Io` if the file cannot be read, `Limit` if it is too large or too deep,
/// `MalformedInput` if it is not JSON of either accepted shape.
pub fn load(path: impl AsRef<Path>) -> BenchResult<BenchmarkResult> {
    load_with_limits(path, &Limits::default())
}

/// Load a benchmark file from disk.
///
/// Flat files are named after the file stem (`naive.json` becomes `naive`).
pub fn load_with_limits(path: impl AsRef<Path>, limits: &Limits) -> BenchResult<BenchmarkResult> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| BenchError::io(path, e))?;
    if metadata.len() > limits.max_file_size {
        return Err(BenchError::limit(format!(
            "file '{}' is too large ({} bytes, maximum {} bytes)",
            path.display(),
            metadata.len(),
            limits.max_file_size
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_FLAT_STRATEGY);

    let result = parse(&content, name, limits)
        .map_err(|e| e.with_context(format!("in '{}'", path.display())))?;
    info!(
        path = %path.display(),
        strategies = result.len(),
        depth = result.max_depth(),
        "loaded benchmark"
    );
    Ok(result)
}

/// Parse benchmark JSON held in memory.
///
/// Flat input is named [`DEFAULT_FLAT_STRATEGY`].
pub fn load_str(json: &str) -> BenchResult<BenchmarkResult> {
    parse(json, DEFAULT_FLAT_STRATEGY, &Limits::default())
}

/// Load several benchmark files into one result, as when overlaying one flat
/// file per strategy on a single chart.
///
/// # Errors
///
/// Any error of [`load_with_limits`], or `MalformedInput` if no path is
/// given or two files define the same strategy.
pub fn load_all<I, P>(paths: I, limits: &Limits) -> BenchResult<BenchmarkResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut merged: Option<BenchmarkResult> = None;
    for path in paths {
        let path = path.as_ref();
        let result = load_with_limits(path, limits)?;
        match merged.as_mut() {
            Some(merged) => merged
                .merge(result)
                .map_err(|e| e.with_context(format!("in '{}'", path.display())))?,
            None => merged = Some(result),
        }
    }
    merged.ok_or_else(|| BenchError::malformed("no benchmark files given"))
}

fn parse(json: &str, flat_name: &str, limits: &Limits) -> BenchResult<BenchmarkResult> {
    // A tree of depth d nests 2d + 1 JSON containers deep
    let nesting = nesting_depth(json);
    let max_nesting = limits.max_depth.saturating_mul(2).saturating_add(1);
    if nesting > max_nesting {
        return Err(BenchError::limit(format!(
            "JSON nesting depth {} exceeds the maximum for measurement depth {}",
            nesting, limits.max_depth
        )));
    }

    // No `serde_json::Value` detour: it keeps only the last of repeated keys
    let result = match json.trim_start().as_bytes().first() {
        Some(b'{') => {
            debug!("reading strategy tree");
            let result: BenchmarkResult = serde_json::from_str(json)?;
            if result.is_empty() {
                return Err(BenchError::malformed("benchmark object has no strategies"));
            }
            result
        }
        Some(b'[') => {
            debug!(strategy = flat_name, "reading flat records");
            let records: Vec<FlatRecord> = serde_json::from_str(json)?;
            if records.is_empty() {
                return Err(BenchError::malformed("benchmark array has no records"));
            }
            from_flat(flat_name, records)?
        }
        _ => {
            let value: JsonValue = serde_json::from_str(json)?;
            return Err(BenchError::malformed(format!(
                "expected an object or array at top level, found {}",
                json_type(&value)
            )));
        }
    };

    let depth = result.max_depth();
    if depth > limits.max_depth {
        return Err(BenchError::limit(format!(
            "measurement tree depth {} exceeds maximum {}",
            depth, limits.max_depth
        )));
    }
    Ok(result)
}

/// Deepest object/array nesting in `json`, ignoring brackets inside strings.
fn nesting_depth(json: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                max = max.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Build a single-strategy result from flat records.
///
/// # Errors
///
/// `MalformedInput` if two records share a box count.
pub fn from_flat(
    name: impl Into<String>,
    records: impl IntoIterator<Item = FlatRecord>,
) -> BenchResult<BenchmarkResult> {
    let mut node = StrategyNode::new();
    for record in records {
        match node.entry(record.box_count.to_string()) {
            Entry::Occupied(entry) => {
                return Err(BenchError::malformed(format!(
                    "duplicate box count {}",
                    entry.key()
                )));
            }
            Entry::Vacant(entry) => {
                entry.insert(record.into());
            }
        }
    }
    Ok(BenchmarkResult::new().with_strategy(name, node))
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
