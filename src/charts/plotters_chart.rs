//! [`Chart`] implementation on top of the [`plotters`] bitmap backend.
//!
//! Charts are saved as PNG files with a fixed 1200x800 resolution.
//!
//! # Headless Compatibility
//! Text is rendered through plotters' `ttf` feature, which needs a system font to be
//! present. Drawing everything else works without one.

use super::chart::{BarChart, Chart, LineChart, PlotError, Result, YAxisLayout};
use crate::constants::{BAR_LABEL_OFFSET, BAR_WIDTH, CHART_SIZE};
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontDesc;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::debug;

const GRID_GRAY: RGBColor = RGBColor(128, 128, 128);

/// Draws charts into PNG files.
#[derive(Debug, Clone, Copy)]
pub struct PlottersChart {
    width: u32,
    height: u32,
}

impl Default for PlottersChart {
    fn default() -> Self {
        Self::new(CHART_SIZE)
    }
}

impl PlottersChart {
    /// Creates a chart backend rendering images of `(width, height)` pixels.
    pub fn new((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl Chart for PlottersChart {
    fn bar(&mut self, chart: &BarChart, output_path: &Path) -> Result<()> {
        if chart.bars.is_empty() {
            return Err(PlotError::InvalidData(
                "Bar chart needs at least one bar".to_string(),
            ));
        }

        // The drawing area lives until the end of this scope; `present` flushes it.
        let root = BitMapBackend::new(output_path, (self.width, self.height));
        let drawing_area = root.into_drawing_area();

        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let bar_count = chart.bars.len();
        let x_right = category_axis_end(bar_count);
        let y_top = chart.y_axis.upper_limit;
        let x_key_points = category_centers(bar_count);
        let y_key_points = y_axis_key_points(&chart.y_axis);
        let (x_label_count, y_label_count) = (x_key_points.len(), y_key_points.len());

        let mut chart_context = ChartBuilder::on(&drawing_area)
            .caption(&chart.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(180)
            .y_label_area_size(100)
            .build_cartesian_2d(
                (0f64..x_right).with_key_points(x_key_points),
                (0f64..y_top).with_key_points(y_key_points),
            )
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        let category_formatter = |value: &f64| {
            category_index(*value, bar_count)
                .and_then(|index| chart.bars.get(index))
                .map(|bar| bar.label.clone())
                .unwrap_or_default()
        };
        let value_formatter = |value: &f64| format_tick(*value);

        // Hash names are long; draw them vertically.
        chart_context
            .configure_mesh()
            .disable_y_mesh()
            .disable_x_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(x_label_count)
            .y_labels(y_label_count)
            .x_label_formatter(&category_formatter)
            .y_label_formatter(&value_formatter)
            .x_label_style(
                ("sans-serif", 20)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .axis_desc_style(("sans-serif", 30))
            .label_style(("sans-serif", 20))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Gridlines: minor first so that major ones are drawn on top.
        for (step, style) in [
            (chart.y_axis.minor_step, GRID_GRAY.mix(0.15).stroke_width(1)),
            (chart.y_axis.major_step, GRID_GRAY.mix(0.6).stroke_width(1)),
        ] {
            let Some(step) = step else { continue };
            for y in gridline_positions(step, y_top) {
                chart_context
                    .draw_series(DashedLineSeries::new(
                        [(0.0, y), (x_right, y)],
                        2,
                        4,
                        style,
                    ))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?;
            }
        }

        // Bars: cyan fill, blue edge.
        for style in [CYAN.filled(), BLUE.stroke_width(1)] {
            chart_context
                .draw_series(chart.bars.iter().enumerate().map(|(index, bar)| {
                    let (left, right) = bar_span(index);
                    Rectangle::new([(left, 0.0), (right, bar.height as f64)], style)
                }))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }

        // Value labels above each bar.
        let label_anchors: Vec<(f64, f64)> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(index, bar)| (index as f64 + 0.5, bar.height as f64 * BAR_LABEL_OFFSET))
            .collect();

        match quarter_turn_transform(chart.label_rotation) {
            Some(transform) => {
                let label_style = bar_label_font()
                    .transform(transform)
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom));
                chart_context
                    .draw_series(chart.bars.iter().zip(&label_anchors).map(|(bar, anchor)| {
                        Text::new(bar.height.to_string(), *anchor, label_style.clone())
                    }))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?;
            }
            None => {
                let glyph_style = bar_label_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Bottom));
                for (bar, anchor) in chart.bars.iter().zip(&label_anchors) {
                    draw_tilted_text(
                        &drawing_area,
                        &bar.height.to_string(),
                        chart_context.backend_coord(anchor),
                        chart.label_rotation,
                        &glyph_style,
                    )?;
                }
            }
        }

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        debug!(path = %output_path.display(), bars = bar_count, "Drew bar chart");
        Ok(())
    }

    fn line(&mut self, chart: &LineChart, output_path: &Path) -> Result<()> {
        if chart.points.is_empty() {
            return Err(PlotError::InvalidData("Data cannot be empty".to_string()));
        }

        let points: Vec<(f64, f64)> = chart
            .points
            .iter()
            .map(|&(x, y)| (log_axis_value(x), log_axis_value(y)))
            .collect();

        let (x_min, x_max) = log_axis_range(points.iter().map(|(x, _)| *x), chart.log_base);
        let (y_min, y_max) = log_axis_range(points.iter().map(|(_, y)| *y), chart.log_base);

        let root = BitMapBackend::new(output_path, (self.width, self.height));
        let drawing_area = root.into_drawing_area();

        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart_context = ChartBuilder::on(&drawing_area)
            .caption(&chart.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(
                (x_min..x_max).log_scale().base(chart.log_base),
                (y_min..y_max).log_scale().base(chart.log_base),
            )
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        let value_formatter = |value: &f64| format!("{:.0}", value);

        chart_context
            .configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(chart.max_ticks)
            .y_labels(chart.max_ticks)
            .x_label_formatter(&value_formatter)
            .y_label_formatter(&value_formatter)
            .bold_line_style(GRID_GRAY.mix(0.5).stroke_width(1))
            .max_light_lines(0)
            .axis_desc_style(("sans-serif", 30))
            .label_style(("sans-serif", 20))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart_context
            .draw_series(LineSeries::new(points.iter().copied(), &RED))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart_context
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 4, RED.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        debug!(path = %output_path.display(), points = points.len(), "Drew line chart");
        Ok(())
    }
}

/// Multiples of `step` in `(0, upper_limit]`.
fn gridline_positions(step: f64, upper_limit: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }

    // Repeated multiplication drifts past the limit, e.g. 6 * 0.2 > 1.2.
    let tolerance = step * 1e-9;
    (1..)
        .map(|multiple| multiple as f64 * step)
        .take_while(|y| *y <= upper_limit + tolerance)
        .collect()
}

/// Labelled y positions: zero and every major gridline, or the axis ends when the axis is
/// not subdivided.
fn y_axis_key_points(layout: &YAxisLayout) -> Vec<f64> {
    let mut key_points = vec![0.0];
    match layout.major_step {
        Some(step) => key_points.extend(gridline_positions(step, layout.upper_limit)),
        None => key_points.push(layout.upper_limit),
    }
    key_points
}

/// Integral ticks print without decimals, the rest with one.
fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Category `index` covers `[index, index + 1)` on the x axis.
fn category_axis_end(count: usize) -> f64 {
    count as f64
}

/// X positions of the category labels, one per bar.
fn category_centers(count: usize) -> Vec<f64> {
    (0..count).map(|index| index as f64 + 0.5).collect()
}

/// The category an x position falls into.
fn category_index(value: f64, count: usize) -> Option<usize> {
    let index = value.floor();
    (index >= 0.0 && index < count as f64).then_some(index as usize)
}

/// Horizontal extent of a bar, leaving a gap to its neighbours.
fn bar_span(index: usize) -> (f64, f64) {
    let left = index as f64 + (1.0 - BAR_WIDTH) / 2.0;
    (left, left + BAR_WIDTH)
}

/// Log axes cannot show zero; values below one sit on the axis floor.
fn log_axis_value(value: u64) -> f64 {
    (value as f64).max(1.0)
}

/// Axis range covering `values`, widened by one power of `base` if it would be empty.
fn log_axis_range(values: impl Iterator<Item = f64>, base: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    let min = min.max(1.0);
    let mut max = max.max(1.0);
    if min >= max {
        max = min * base;
    }

    (min, max)
}

fn bar_label_font() -> FontDesc<'static> {
    ("sans-serif", 18).into_font()
}

/// The font transform for rotations plotters can draw natively.
fn quarter_turn_transform(rotation: f64) -> Option<FontTransform> {
    let quarter_turns = (rotation / 90.0).round();
    if (rotation - quarter_turns * 90.0).abs() > 1e-9 {
        return None;
    }

    Some(match (quarter_turns as i64).rem_euclid(4) {
        1 => FontTransform::Rotate90,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate270,
        _ => FontTransform::None,
    })
}

/// Offsets of each glyph's bottom-left corner from the anchor, for text centred on the
/// anchor along a baseline turned `rotation` degrees counter-clockwise.
fn tilted_glyph_offsets(advances: &[u32], rotation: f64) -> Vec<(i32, i32)> {
    let (sin, cos) = rotation.to_radians().sin_cos();
    let total: u32 = advances.iter().sum();

    let mut along = -(total as f64) / 2.0;
    advances
        .iter()
        .map(|&advance| {
            // Pixel y grows downwards.
            let offset = ((along * cos).round() as i32, (-along * sin).round() as i32);
            along += advance as f64;
            offset
        })
        .collect()
}

/// Draws `text` glyph by glyph along a tilted baseline centred on `anchor`.
///
/// Plotters only turns text by quarter turns, so other angles are laid out by hand.
fn draw_tilted_text(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    text: &str,
    anchor: (i32, i32),
    rotation: f64,
    style: &TextStyle<'_>,
) -> Result<()> {
    let glyphs: Vec<String> = text.chars().map(String::from).collect();
    let advances = glyphs
        .iter()
        .map(|glyph| area.estimate_text_size(glyph, style).map(|(width, _)| width))
        .collect::<core::result::Result<Vec<_>, _>>()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (glyph, (dx, dy)) in glyphs.iter().zip(tilted_glyph_offsets(&advances, rotation)) {
        area.draw(&Text::new(
            glyph.as_str(),
            (anchor.0 + dx, anchor.1 + dy),
            style.clone(),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}
