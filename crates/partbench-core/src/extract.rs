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

//! Series extraction: benchmark tree to per-strategy `(box_count, value)` lines.

use crate::error::{BenchError, BenchResult};
use crate::model::{BenchmarkResult, Series, SeriesMap};
use crate::selector::MetricSelector;
use std::collections::BTreeSet;
use tracing::debug;

/// Parse a box-count key from the source file.
///
/// # Errors
///
/// Returns `MalformedInput` if `key` is not a non-negative integer.
pub fn parse_box_count(key: &str) -> BenchResult<u64> {
    key.trim()
        .parse::<u64>()
        .map_err(|_| BenchError::malformed(format!("box count '{}' is not an integer", key)))
}

/// Extract one sorted series per strategy.
///
/// Strategies named in `exclude` are skipped entirely, so a selector failure
/// inside an excluded strategy never surfaces.
///
/// # Errors
///
/// - `MalformedInput` if `result` is empty, a box-count key is not an
///   integer, or two keys of one strategy parse to the same box count.
/// - `MissingPath` if `selector` hits an absent required branch; the error
///   context names the strategy and box count.
///
/// # Examples
///
/// ```
/// use partbench_core::{extract_series, load_str, Selector};
/// use std::collections::BTreeSet;
///
/// let result = load_str(
///     r#"{"naive": {"2": {"total": 25.0, "average": 12.5},
///                   "1": {"total": 10.0, "average": 10.0}}}"#,
/// )?;
/// let series = extract_series(&result, &Selector::Average, &BTreeSet::new())?;
/// assert_eq!(series["naive"].points(), &[(1, 10.0), (2, 12.5)]);
/// # Ok::<(), partbench_core::BenchError>(())
/// ```
pub fn extract_series<S>(
    result: &BenchmarkResult,
    selector: &S,
    exclude: &BTreeSet<String>,
) -> BenchResult<SeriesMap>
where
    S: MetricSelector + ?Sized,
{
    if result.is_empty() {
        return Err(BenchError::malformed("benchmark result has no strategies"));
    }

    let mut out = SeriesMap::new();
    for (strategy, node) in result.strategies() {
        if exclude.contains(strategy) {
            debug!(strategy, "skipping excluded strategy");
            continue;
        }

        let mut points = Vec::with_capacity(node.len());
        for (key, measurement) in node {
            let context = || format!("strategy '{}', box count {}", strategy, key);
            let box_count = parse_box_count(key).map_err(|e| e.with_context(context()))?;
            let value = selector
                .select(measurement)
                .map_err(|e| e.with_context(context()))?;
            points.push((box_count, value));
        }

        let series = Series::from_points(points)
            .map_err(|e| e.with_context(format!("strategy '{}'", strategy)))?;
        debug!(strategy, points = series.len(), "extracted series");
        out.insert(strategy.to_string(), series);
    }
    Ok(out)
}
