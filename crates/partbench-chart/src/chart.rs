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

//! Chart description: what to draw and how large.

use partbench_core::SeriesMap;
use std::collections::BTreeMap;
use std::ops::Range;

/// Default horizontal axis description.
pub const DEFAULT_X_LABEL: &str = "box count";
/// Default vertical axis description.
pub const DEFAULT_Y_LABEL: &str = "time (ms)";

/// Image geometry and text switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Image width in pixels (default: 1024).
    pub width: u32,
    /// Image height in pixels (default: 768).
    pub height: u32,
    /// Outer margin in pixels (default: 20).
    pub margin: u32,
    /// Draw caption, tick labels, axis descriptions and legend.
    pub text: bool,
    /// Base font size for labels.
    pub font_size: u32,
    /// Stroke width of series lines.
    pub line_width: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            margin: 20,
            text: true,
            font_size: 18,
            line_width: 2,
        }
    }
}

impl ChartStyle {
    /// A style that draws lines and markers only.
    ///
    /// Needs no fonts, so it renders on headless machines.
    pub fn plain() -> Self {
        Self {
            text: false,
            ..Self::default()
        }
    }

    /// Set the image size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// One line chart: a set of strategy series plus its labels.
#[derive(Debug, Clone)]
pub struct Chart<'a> {
    series: &'a SeriesMap,
    caption: Option<String>,
    x_label: String,
    y_label: String,
    legend: BTreeMap<String, String>,
}

impl<'a> Chart<'a> {
    pub fn new(series: &'a SeriesMap) -> Self {
        Self {
            series,
            caption: None,
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            legend: BTreeMap::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Override the legend text of one strategy.
    pub fn with_legend_label(
        mut self,
        strategy: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.legend.insert(strategy.into(), label.into());
        self
    }

    pub fn series(&self) -> &SeriesMap {
        self.series
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Legend text for `strategy`, falling back to the strategy name.
    pub fn legend_label<'s>(&'s self, strategy: &'s str) -> &'s str {
        self.legend
            .get(strategy)
            .map(String::as_str)
            .unwrap_or(strategy)
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.values().map(|s| s.len()).sum()
    }

    /// Axis ranges covering every point, or `None` if there are no points.
    ///
    /// The vertical axis starts at zero with 10% headroom above the largest
    /// value. A degenerate range is widened so the backend can scale it.
    pub fn bounds(&self) -> Option<(Range<f64>, Range<f64>)> {
        let mut x_min = u64::MAX;
        let mut x_max = 0u64;
        let mut y_max = 0.0f64;
        for series in self.series.values() {
            if let Some((lo, hi)) = series.box_count_range() {
                x_min = x_min.min(lo);
                x_max = x_max.max(hi);
            }
            if let Some(max) = series.max_value() {
                y_max = y_max.max(max);
            }
        }
        if x_min > x_max {
            return None;
        }

        let x = if x_min == x_max {
            (x_min as f64 - 1.0).max(0.0)..x_max as f64 + 1.0
        } else {
            x_min as f64..x_max as f64
        };
        let y = if y_max > 0.0 { 0.0..y_max * 1.1 } else { 0.0..1.0 };
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partbench_core::Series;

    fn series(points: &[(u64, f64)]) -> Series {
        Series::from_points(points.to_vec()).unwrap()
    }

    fn series_map(entries: Vec<(&str, Series)>) -> SeriesMap {
        entries
            .into_iter()
            .map(|(name, series)| (name.to_string(), series))
            .collect()
    }

    #[test]
    fn test_bounds_cover_all_series() {
        let map = series_map(vec![
            ("naive", series(&[(10, 2.0), (100, 20.0)])),
            ("quadtree", series(&[(5, 1.0), (50, 4.0)])),
        ]);
        let (x, y) = Chart::new(&map).bounds().unwrap();
        assert_eq!(x, 5.0..100.0);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_single_point_widened() {
        let map = series_map(vec![("naive", series(&[(10, 0.0)]))]);
        let (x, y) = Chart::new(&map).bounds().unwrap();
        assert_eq!(x, 9.0..11.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn test_bounds_at_zero_box_count() {
        let map = series_map(vec![("naive", series(&[(0, 3.0)]))]);
        let (x, _) = Chart::new(&map).bounds().unwrap();
        assert_eq!(x, 0.0..1.0);
    }

    #[test]
    fn test_bounds_none_without_points() {
        let map = series_map(vec![("idle", series(&[]))]);
        assert!(Chart::new(&map).bounds().is_none());
        assert!(Chart::new(&SeriesMap::new()).bounds().is_none());
    }

    #[test]
    fn test_legend_label_fallback() {
        let map = series_map(vec![("naive", series(&[(1, 1.0)]))]);
        let chart = Chart::new(&map).with_legend_label("quadtree", "Quadtree (depth 8)");
        assert_eq!(chart.legend_label("naive"), "naive");
        assert_eq!(chart.legend_label("quadtree"), "Quadtree (depth 8)");
    }

    #[test]
    fn test_defaults() {
        let map = SeriesMap::new();
        let chart = Chart::new(&map);
        assert_eq!(chart.x_label(), DEFAULT_X_LABEL);
        assert_eq!(chart.y_label(), DEFAULT_Y_LABEL);
        assert!(chart.caption().is_none());
        assert_eq!(chart.point_count(), 0);

        let style = ChartStyle::plain();
        assert!(!style.text);
        assert_eq!((style.width, style.height), (1024, 768));
    }
}
