use crate::constants::{BAR_HEADROOM, MAJOR_TICK_DIVISIONS, MINOR_TICK_DIVISIONS};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub(crate) type Result<T> = core::result::Result<T, PlotError>;

/// Something that can draw the two chart kinds used by the reports.
///
/// Each call renders exactly one image to `output_path`. Implementations must release
/// whatever surface they drew on before returning, so that long batches do not
/// accumulate open figures.
pub trait Chart {
    /// Draws a categorical bar chart.
    fn bar(&mut self, chart: &BarChart, output_path: &Path) -> Result<()>;

    /// Draws a connected line plot with point markers on logarithmic axes.
    fn line(&mut self, chart: &LineChart, output_path: &Path) -> Result<()>;
}

/// A single bar of a [`BarChart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Category label shown under the bar.
    pub label: String,
    /// Bar height; also printed above the bar.
    pub height: u64,
}

/// Y-axis gridline spacing and extent for a bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisLayout {
    /// Spacing of major gridlines, if the axis is subdivided at all.
    pub major_step: Option<f64>,
    /// Spacing of minor gridlines, if the axis is subdivided at all.
    pub minor_step: Option<f64>,
    /// Top of the y-axis.
    pub upper_limit: f64,
}

impl YAxisLayout {
    /// Layout for bars whose tallest one is `max_height`.
    ///
    /// Major gridlines every fifth and minor gridlines every 25th of the tallest bar,
    /// with 20% headroom for the bar labels. A chart of all-zero bars has nothing to
    /// subdivide; it gets no gridline steps and a unit axis.
    pub fn for_max_height(max_height: u64) -> Self {
        if max_height == 0 {
            return Self {
                major_step: None,
                minor_step: None,
                upper_limit: 1.0,
            };
        }

        let max_height = max_height as f64;
        Self {
            major_step: Some(max_height / MAJOR_TICK_DIVISIONS),
            minor_step: Some(max_height / MINOR_TICK_DIVISIONS),
            upper_limit: max_height * BAR_HEADROOM,
        }
    }
}

/// Description of a categorical bar chart with value labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bars in display order.
    pub bars: Vec<Bar>,
    /// Rotation of the value labels above the bars, in degrees.
    pub label_rotation: f64,
    pub y_axis: YAxisLayout,
}

impl BarChart {
    /// Height of the tallest bar, zero for no bars.
    pub fn max_height(&self) -> u64 {
        self.bars.iter().map(|bar| bar.height).max().unwrap_or(0)
    }
}

/// Description of a line plot over logarithmic x and y axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Points in drawing order.
    pub points: Vec<(u64, u64)>,
    /// Logarithm base of both axes.
    pub log_base: f64,
    /// Upper bound on tick locations per axis.
    pub max_ticks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_divides_max_height() {
        let layout = YAxisLayout::for_max_height(100);
        assert_eq!(layout.major_step, Some(20.0));
        assert_eq!(layout.minor_step, Some(4.0));
        assert!((layout.upper_limit - 120.0).abs() < 1e-9);
    }

    #[test]
    fn layout_for_zero_height_skips_ticks() {
        let layout = YAxisLayout::for_max_height(0);
        assert_eq!(layout.major_step, None);
        assert_eq!(layout.minor_step, None);
        assert_eq!(layout.upper_limit, 1.0);
    }

    #[test]
    fn max_height_of_bars() {
        let chart = BarChart {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            bars: vec![
                Bar {
                    label: "A".to_string(),
                    height: 3,
                },
                Bar {
                    label: "B".to_string(),
                    height: 9,
                },
            ],
            label_rotation: 0.0,
            y_axis: YAxisLayout::for_max_height(9),
        };

        assert_eq!(chart.max_height(), 9);
    }
}
