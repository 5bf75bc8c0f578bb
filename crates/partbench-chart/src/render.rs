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

//! Drawing charts with plotters.

use crate::chart::{Chart, ChartStyle};
use crate::error::RenderError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;
use tracing::debug;

const LEGEND_SWATCH: i32 = 24;
const MARKER_SIZE: u32 = 3;

/// Render `chart` to a PNG file at `path`.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// `EmptyChart` if no series has points, `Output` if the backend fails.
pub fn render_png(chart: &Chart<'_>, style: &ChartStyle, path: &Path) -> Result<(), RenderError> {
    if chart.point_count() == 0 {
        return Err(RenderError::EmptyChart);
    }
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw(root, chart, style).map_err(|e| e.at(path))?;
    debug!(path = %path.display(), points = chart.point_count(), "rendered chart");
    Ok(())
}

/// Render `chart` into an in-memory RGB buffer of `width * height * 3` bytes.
pub fn render_rgb(chart: &Chart<'_>, style: &ChartStyle) -> Result<Vec<u8>, RenderError> {
    if chart.point_count() == 0 {
        return Err(RenderError::EmptyChart);
    }
    let mut buffer = vec![0u8; style.width as usize * style.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        draw(root, chart, style)?;
    }
    Ok(buffer)
}

/// Draw `chart` onto any plotters drawing area.
///
/// Strategies keep their palette colour across charts because colours are
/// picked by position in the (sorted) series map, empty series included.
pub fn draw<DB>(
    root: DrawingArea<DB, Shift>,
    chart: &Chart<'_>,
    style: &ChartStyle,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = chart.bounds().ok_or(RenderError::EmptyChart)?;
    root.fill(&WHITE).map_err(RenderError::draw)?;

    let font = FontDesc::new(FontFamily::SansSerif, style.font_size as f64, FontStyle::Normal);
    let mut builder = ChartBuilder::on(&root);
    builder.margin(style.margin);
    if style.text {
        builder
            .x_label_area_size(style.font_size * 3)
            .y_label_area_size(style.font_size * 4);
        if let Some(caption) = chart.caption() {
            let caption_font = FontDesc::new(
                FontFamily::SansSerif,
                (style.font_size + 8) as f64,
                FontStyle::Normal,
            );
            builder.caption(caption, caption_font);
        }
    }
    let mut ctx = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(RenderError::draw)?;

    let box_count_format = |v: &f64| format!("{:.0}", v);
    let mut mesh = ctx.configure_mesh();
    mesh.light_line_style(&BLACK.mix(0.05));
    if style.text {
        mesh.x_desc(chart.x_label())
            .y_desc(chart.y_label())
            .x_label_formatter(&box_count_format)
            .label_style(font.clone().color(&BLACK));
    }
    mesh.draw().map_err(RenderError::draw)?;

    for (index, (strategy, series)) in chart.series().iter().enumerate() {
        if series.is_empty() {
            continue;
        }
        let color = Palette99::pick(index).to_rgba();
        let line = ShapeStyle {
            color,
            filled: false,
            stroke_width: style.line_width,
        };
        let points: Vec<(f64, f64)> = series
            .points()
            .iter()
            .map(|&(box_count, value)| (box_count as f64, value))
            .collect();

        let annotation = ctx
            .draw_series(LineSeries::new(points.iter().copied(), line))
            .map_err(RenderError::draw)?;
        if style.text {
            annotation
                .label(chart.legend_label(strategy))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], line));
        }
        ctx.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, MARKER_SIZE, color.filled())),
        )
        .map_err(RenderError::draw)?;
    }

    if style.text {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font(font.color(&BLACK))
            .draw()
            .map_err(RenderError::draw)?;
    }

    root.present().map_err(RenderError::draw)?;
    Ok(())
}
