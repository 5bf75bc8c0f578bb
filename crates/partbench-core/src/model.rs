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

//! Benchmark data model.
//!
//! A benchmark file maps strategy names to per-box-count measurement trees:
//!
//! ```text
//! BenchmarkResult
//! └── "quadtree"                      (StrategyNode)
//!     └── "1000"                      (box count key)
//!         └── MeasurementNode         total / average
//!             ├── "insert"            MeasurementNode
//!             └── "collision"         MeasurementNode
//!                 └── "query"         MeasurementNode
//! ```

use crate::error::{BenchError, BenchResult};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

/// Box counts of one strategy, keyed by the raw (string) key from the source file.
pub type StrategyNode = BTreeMap<String, MeasurementNode>;

/// A timing record with optional named sub-operation children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementNode {
    /// Cumulative time in milliseconds.
    pub total: f64,
    /// Mean time per operation in milliseconds.
    pub average: f64,
    /// Fastest single run in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Slowest single run in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Number of runs aggregated into this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_count: Option<u64>,
    /// Sub-operations, by operation name.
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "unique_children"
    )]
    pub children: BTreeMap<String, MeasurementNode>,
}

impl MeasurementNode {
    /// Create a leaf measurement.
    pub fn new(total: f64, average: f64) -> Self {
        Self {
            total,
            average,
            min: None,
            max: None,
            run_count: None,
            children: BTreeMap::new(),
        }
    }

    /// Add a named child measurement.
    pub fn with_child(mut self, name: impl Into<String>, child: MeasurementNode) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Set the min/max range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the run count.
    pub fn with_run_count(mut self, run_count: u64) -> Self {
        self.run_count = Some(run_count);
        self
    }

    /// Direct child by operation name.
    pub fn child(&self, name: &str) -> Option<&MeasurementNode> {
        self.children.get(name)
    }

    /// Follow a chain of child names.
    pub fn descend<'a, I>(&self, path: I) -> Option<&MeasurementNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter()
            .try_fold(self, |node, name| node.children.get(name))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in this tree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .values()
            .map(MeasurementNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Flatten the tree into `(dotted_path, node)` pairs, depth-first.
    ///
    /// The root is reported with an empty path; children are visited in
    /// name order, so `"collision"` precedes `"collision.query"` which
    /// precedes `"insert"`.
    pub fn walk(&self) -> Vec<(String, &MeasurementNode)> {
        let mut out = Vec::new();
        walk_into(self, String::new(), &mut out);
        out
    }

    /// Dotted paths of every sub-operation below this node.
    pub fn operations(&self) -> BTreeSet<String> {
        self.walk()
            .into_iter()
            .filter(|(path, _)| !path.is_empty())
            .map(|(path, _)| path)
            .collect()
    }
}

fn walk_into<'a>(node: &'a MeasurementNode, path: String, out: &mut Vec<(String, &'a MeasurementNode)>) {
    out.push((path.clone(), node));
    for (name, child) in &node.children {
        let child_path = if path.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", path, name)
        };
        walk_into(child, child_path, out);
    }
}

/// JSON object whose keys must be unique.
///
/// JSON allows repeated keys and a plain map keeps the last one, which would
/// drop a measurement without notice.
struct UniqueKeys<V>(BTreeMap<String, V>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for UniqueKeys<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UniqueKeysVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeysVisitor<V> {
            type Value = UniqueKeys<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with unique keys")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = BTreeMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    if map.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate key '{}'", key)));
                    }
                    let value = access.next_value()?;
                    map.insert(key, value);
                }
                Ok(UniqueKeys(map))
            }
        }

        deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
    }
}

fn unique_children<'de, D>(deserializer: D) -> Result<BTreeMap<String, MeasurementNode>, D::Error>
where
    D: Deserializer<'de>,
{
    UniqueKeys::deserialize(deserializer).map(|UniqueKeys(children)| children)
}

/// A whole benchmark file: strategy name to its box-count measurements.
///
/// Deserializing rejects repeated strategy names, box-count keys and child
/// names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkResult {
    strategies: BTreeMap<String, StrategyNode>,
}

impl<'de> Deserialize<'de> for BenchmarkResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let UniqueKeys(strategies) =
            UniqueKeys::<UniqueKeys<MeasurementNode>>::deserialize(deserializer)?;
        Ok(Self {
            strategies: strategies
                .into_iter()
                .map(|(name, UniqueKeys(node))| (name, node))
                .collect(),
        })
    }
}

impl BenchmarkResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a strategy.
    pub fn insert_strategy(&mut self, name: impl Into<String>, node: StrategyNode) {
        self.strategies.insert(name.into(), node);
    }

    /// Builder-style variant of [`insert_strategy`](Self::insert_strategy).
    pub fn with_strategy(mut self, name: impl Into<String>, node: StrategyNode) -> Self {
        self.insert_strategy(name, node);
        self
    }

    pub fn strategy(&self, name: &str) -> Option<&StrategyNode> {
        self.strategies.get(name)
    }

    /// Strategies in name order.
    pub fn strategies(&self) -> impl Iterator<Item = (&str, &StrategyNode)> {
        self.strategies.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn strategy_names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Every measurement root in the file.
    pub fn measurements(&self) -> impl Iterator<Item = &MeasurementNode> {
        self.strategies.values().flat_map(|node| node.values())
    }

    /// True if any measurement carries sub-operations.
    pub fn has_children(&self) -> bool {
        self.measurements().any(|node| !node.is_leaf())
    }

    /// Deepest measurement tree in the file.
    pub fn max_depth(&self) -> usize {
        self.measurements().map(MeasurementNode::depth).max().unwrap_or(0)
    }

    /// Move every strategy of `other` into this result.
    ///
    /// # Errors
    ///
    /// `MalformedInput` if a strategy name appears in both; `self` is left
    /// unchanged.
    pub fn merge(&mut self, other: BenchmarkResult) -> BenchResult<()> {
        if let Some(name) = other
            .strategies
            .keys()
            .find(|name| self.strategies.contains_key(*name))
        {
            return Err(BenchError::malformed(format!(
                "strategy '{}' appears in more than one result",
                name
            )));
        }
        self.strategies.extend(other.strategies);
        Ok(())
    }

    /// Strategies whose measurements carry no sub-operations.
    pub fn leaf_only_strategies(&self) -> impl Iterator<Item = &str> {
        self.strategies
            .iter()
            .filter(|(_, node)| node.values().all(MeasurementNode::is_leaf))
            .map(|(name, _)| name.as_str())
    }

    /// Union of sub-operation paths across all measurements.
    pub fn operations(&self) -> BTreeSet<String> {
        self.measurements().flat_map(MeasurementNode::operations).collect()
    }
}

/// Sorted `(box_count, value)` points of one strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: Vec<(u64, f64)>,
}

impl Series {
    /// Sort points by box count.
    ///
    /// # Errors
    ///
    /// Fails with `MalformedInput` if two points share a box count.
    pub fn from_points(mut points: Vec<(u64, f64)>) -> BenchResult<Self> {
        points.sort_unstable_by_key(|(box_count, _)| *box_count);
        if let Some(pair) = points.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(BenchError::malformed(format!(
                "duplicate box count {}",
                pair[0].0
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(u64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn box_counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }

    /// Smallest and largest box count, if any.
    pub fn box_count_range(&self) -> Option<(u64, u64)> {
        match (self.points.first(), self.points.last()) {
            (Some((lo, _)), Some((hi, _))) => Some((*lo, *hi)),
            _ => None,
        }
    }

    pub fn max_value(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a (u64, f64);
    type IntoIter = std::slice::Iter<'a, (u64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Strategy name to its series, one chart's worth of data.
pub type SeriesMap = BTreeMap<String, Series>;

#[cfg(test)]
mod tests {
    use super::*;

    fn spatial_node() -> MeasurementNode {
        MeasurementNode::new(30.0, 3.0)
            .with_child("insert", MeasurementNode::new(10.0, 1.0))
            .with_child(
                "collision",
                MeasurementNode::new(20.0, 2.0)
                    .with_child("query", MeasurementNode::new(15.0, 1.5)),
            )
    }

    #[test]
    fn test_deserialize_leaf() {
        let node: MeasurementNode =
            serde_json::from_str(r#"{"total": 10.0, "average": 2.5}"#).unwrap();
        assert_eq!(node, MeasurementNode::new(10.0, 2.5));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_deserialize_harness_fields() {
        let node: MeasurementNode = serde_json::from_str(
            r#"{"total": 10.0, "average": 2.5, "min": 1.0, "max": 4.0, "run_count": 4, "name": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(node.min, Some(1.0));
        assert_eq!(node.max, Some(4.0));
        assert_eq!(node.run_count, Some(4));
    }

    #[test]
    fn test_deserialize_requires_total() {
        let result = serde_json::from_str::<MeasurementNode>(r#"{"average": 2.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&MeasurementNode::new(1.0, 1.0)).unwrap();
        assert_eq!(json, r#"{"total":1.0,"average":1.0}"#);
    }

    #[test]
    fn test_descend() {
        let node = spatial_node();
        assert_eq!(node.descend(["collision", "query"]).map(|n| n.total), Some(15.0));
        assert!(node.descend(["collision", "missing"]).is_none());
        assert_eq!(node.descend(std::iter::empty::<&str>()), Some(&node));
    }

    #[test]
    fn test_depth() {
        assert_eq!(MeasurementNode::new(1.0, 1.0).depth(), 1);
        assert_eq!(spatial_node().depth(), 3);
    }

    #[test]
    fn test_walk_order() {
        let node = spatial_node();
        let paths: Vec<String> = node.walk().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["", "collision", "collision.query", "insert"]);
    }

    #[test]
    fn test_operations() {
        let ops = spatial_node().operations();
        assert!(ops.contains("insert"));
        assert!(ops.contains("collision.query"));
        assert!(!ops.contains(""));
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn test_result_summary() {
        let mut naive = StrategyNode::new();
        naive.insert("10".to_string(), MeasurementNode::new(1.0, 1.0));
        let mut quadtree = StrategyNode::new();
        quadtree.insert("10".to_string(), spatial_node());

        let result = BenchmarkResult::new()
            .with_strategy("quadtree", quadtree)
            .with_strategy("naive", naive);

        assert_eq!(result.len(), 2);
        assert_eq!(result.strategy_names().collect::<Vec<_>>(), vec!["naive", "quadtree"]);
        assert!(result.has_children());
        assert_eq!(result.max_depth(), 3);
        assert!(result.operations().contains("collision.query"));
    }

    #[test]
    fn test_result_is_transparent_map() {
        let result: BenchmarkResult = serde_json::from_str(
            r#"{"naive": {"1": {"total": 10.0, "average": 10.0}}}"#,
        )
        .unwrap();
        let naive = result.strategy("naive").unwrap();
        assert_eq!(naive["1"].average, 10.0);
        assert!(!result.has_children());
    }

    #[test]
    fn test_duplicate_keys_rejected_at_every_level() {
        for json in [
            r#"{"naive": {"1": {"total": 1.0, "average": 1.0}}, "naive": {}}"#,
            r#"{"naive": {"5": {"total": 1.0, "average": 1.0}, "5": {"total": 9.0, "average": 9.0}}}"#,
            r#"{"naive": {"5": {"total": 1.0, "average": 1.0, "children": {
                "insert": {"total": 1.0, "average": 1.0},
                "insert": {"total": 2.0, "average": 2.0}}}}}"#,
        ] {
            let err = serde_json::from_str::<BenchmarkResult>(json).unwrap_err();
            assert!(err.to_string().contains("duplicate key"), "{}", err);
        }
    }

    #[test]
    fn test_merge() {
        let mut naive = StrategyNode::new();
        naive.insert("10".to_string(), MeasurementNode::new(1.0, 1.0));
        let mut merged = BenchmarkResult::new().with_strategy("naive", naive.clone());
        merged
            .merge(BenchmarkResult::new().with_strategy("quadtree", naive.clone()))
            .unwrap();
        assert_eq!(merged.strategy_names().collect::<Vec<_>>(), vec!["naive", "quadtree"]);

        let err = merged
            .merge(BenchmarkResult::new().with_strategy("naive", StrategyNode::new()))
            .unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(merged.strategy("naive"), Some(&naive));
    }

    #[test]
    fn test_leaf_only_strategies() {
        let mut naive = StrategyNode::new();
        naive.insert("10".to_string(), MeasurementNode::new(1.0, 1.0));
        let mut quadtree = StrategyNode::new();
        quadtree.insert("10".to_string(), spatial_node());
        let result = BenchmarkResult::new()
            .with_strategy("naive", naive)
            .with_strategy("quadtree", quadtree);
        assert_eq!(result.leaf_only_strategies().collect::<Vec<_>>(), vec!["naive"]);
    }

    #[test]
    fn test_series_accessors() {
        let series = Series::from_points(vec![(9, 30.0), (1, 10.0), (4, 2.0)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.box_count_range(), Some((1, 9)));
        assert_eq!(series.max_value(), Some(30.0));
        assert_eq!(series.box_counts().collect::<Vec<_>>(), vec![1, 4, 9]);
    }

    #[test]
    fn test_series_rejects_duplicate_box_counts() {
        let err = Series::from_points(vec![(5, 1.0), (2, 1.0), (5, 2.0)]).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.message.contains("duplicate box count 5"));
    }

    #[test]
    fn test_empty_series() {
        let series = Series::default();
        assert!(series.is_empty());
        assert_eq!(series.box_count_range(), None);
        assert_eq!(series.max_value(), None);
    }
}
