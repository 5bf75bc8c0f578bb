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

//! Metric selectors: functions from a measurement tree to one number.
//!
//! The [`Selector`] catalogue covers the charts the CLI draws. Each entry is
//! a [`MetricPath`]: a chain of child names followed by a terminal metric.
//! Segments are either required or optional:
//!
//! - an absent **required** segment is a `MissingPath` error,
//! - an absent **optional** segment yields `0.0`.
//!
//! `insert` and `collision` are required for the sub-operation selectors;
//! `query` is optional because a run without collisions records no queries.
//!
//! # Text form
//!
//! ```text
//! total                    root total
//! insert:average           children.insert.average
//! collision.query?:total   children.collision.children.query.total, 0.0 if no query
//! ```

use crate::error::{BenchError, BenchResult};
use crate::model::MeasurementNode;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a selector or metric path from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorParseError {
    #[error("unknown selector '{0}'")]
    UnknownSelector(String),

    #[error("unknown metric '{0}' (expected total, average, min or max)")]
    UnknownMetric(String),

    #[error("empty segment in metric path '{0}'")]
    EmptySegment(String),
}

/// Anything that maps a measurement node to a value.
pub trait MetricSelector {
    /// Select a value from `node`.
    ///
    /// # Errors
    ///
    /// Returns a `MissingPath` error when a required branch is absent.
    fn select(&self, node: &MeasurementNode) -> BenchResult<f64>;
}

/// Terminal field read from a measurement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Total,
    Average,
    Min,
    Max,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Total => "total",
            Metric::Average => "average",
            Metric::Min => "min",
            Metric::Max => "max",
        }
    }

    /// Read the metric; `None` only for absent `min`/`max`.
    pub fn read(self, node: &MeasurementNode) -> Option<f64> {
        match self {
            Metric::Total => Some(node.total),
            Metric::Average => Some(node.average),
            Metric::Min => node.min,
            Metric::Max => node.max,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(Metric::Total),
            "average" => Ok(Metric::Average),
            "min" => Ok(Metric::Min),
            "max" => Ok(Metric::Max),
            other => Err(SelectorParseError::UnknownMetric(other.to_string())),
        }
    }
}

/// One child name in a metric path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub name: String,
    pub optional: bool,
}

/// A chain of child names ending in a metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricPath {
    segments: Vec<Segment>,
    metric: Metric,
}

impl MetricPath {
    /// A path reading `metric` from the root node.
    pub fn new(metric: Metric) -> Self {
        Self {
            segments: Vec::new(),
            metric,
        }
    }

    /// Append a child that must be present.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment {
            name: name.into(),
            optional: false,
        });
        self
    }

    /// Append a child whose absence yields `0.0`.
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment {
            name: name.into(),
            optional: true,
        });
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl MetricSelector for MetricPath {
    fn select(&self, node: &MeasurementNode) -> BenchResult<f64> {
        let mut current = node;
        for (depth, segment) in self.segments.iter().enumerate() {
            match current.child(&segment.name) {
                Some(child) => current = child,
                None if segment.optional => return Ok(0.0),
                None => {
                    let walked: Vec<&str> = self.segments[..=depth]
                        .iter()
                        .map(|s| s.name.as_str())
                        .collect();
                    return Err(BenchError::missing_path(walked.join(".")));
                }
            }
        }
        Ok(self.metric.read(current).unwrap_or(0.0))
    }
}

impl fmt::Display for MetricPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "{}", self.metric);
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.name)?;
            if segment.optional {
                f.write_str("?")?;
            }
        }
        write!(f, ":{}", self.metric)
    }
}

impl FromStr for MetricPath {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((path, metric)) = s.rsplit_once(':') else {
            return Ok(MetricPath::new(s.parse()?));
        };

        let mut out = MetricPath::new(metric.parse()?);
        for raw in path.split('.') {
            let (name, optional) = match raw.strip_suffix('?') {
                Some(name) => (name, true),
                None => (raw, false),
            };
            if name.is_empty() {
                return Err(SelectorParseError::EmptySegment(s.to_string()));
            }
            out = if optional {
                out.optional(name)
            } else {
                out.required(name)
            };
        }
        Ok(out)
    }
}

/// The named selectors the CLI charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Total,
    Average,
    InsertTotal,
    InsertAverage,
    CollisionTotal,
    CollisionAverage,
    QueryTotal,
    QueryAverage,
}

impl Selector {
    /// Every catalogue entry, root metrics first.
    pub const ALL: [Selector; 8] = [
        Selector::Total,
        Selector::Average,
        Selector::InsertTotal,
        Selector::InsertAverage,
        Selector::CollisionTotal,
        Selector::CollisionAverage,
        Selector::QueryTotal,
        Selector::QueryAverage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Selector::Total => "total",
            Selector::Average => "average",
            Selector::InsertTotal => "insert-total",
            Selector::InsertAverage => "insert-average",
            Selector::CollisionTotal => "collision-total",
            Selector::CollisionAverage => "collision-average",
            Selector::QueryTotal => "query-total",
            Selector::QueryAverage => "query-average",
        }
    }

    pub fn metric(self) -> Metric {
        match self {
            Selector::Total
            | Selector::InsertTotal
            | Selector::CollisionTotal
            | Selector::QueryTotal => Metric::Total,
            Selector::Average
            | Selector::InsertAverage
            | Selector::CollisionAverage
            | Selector::QueryAverage => Metric::Average,
        }
    }

    /// True for selectors that read the measurement root itself.
    pub fn is_root(self) -> bool {
        matches!(self, Selector::Total | Selector::Average)
    }

    pub fn metric_path(self) -> MetricPath {
        let root = MetricPath::new(self.metric());
        match self {
            Selector::Total | Selector::Average => root,
            Selector::InsertTotal | Selector::InsertAverage => root.required("insert"),
            Selector::CollisionTotal | Selector::CollisionAverage => root.required("collision"),
            Selector::QueryTotal | Selector::QueryAverage => {
                root.required("collision").optional("query")
            }
        }
    }
}

impl MetricSelector for Selector {
    fn select(&self, node: &MeasurementNode) -> BenchResult<f64> {
        self.metric_path().select(node)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Selector {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::ALL
            .into_iter()
            .find(|selector| selector.name() == s)
            .ok_or_else(|| SelectorParseError::UnknownSelector(s.to_string()))
    }
}

/// Adapts a plain closure into a selector that never fails.
pub struct FnSelector<F>(pub F);

impl<F> MetricSelector for FnSelector<F>
where
    F: Fn(&MeasurementNode) -> f64,
{
    fn select(&self, node: &MeasurementNode) -> BenchResult<f64> {
        Ok((self.0)(node))
    }
}
