//! Text annotations on plotting surfaces.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::LegendConfig;
use crate::error::{Result, VisError};

/// Anchor of the legend block in axes fractions (from the left, from the bottom)
pub const LEGEND_ANCHOR: (f64, f64) = (0.04, 0.9);

/// Text for [`stats_legend`]: one string or a list of lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendText {
    Single(String),
    Lines(Vec<String>),
}

impl LegendText {
    /// The text with list entries joined by newlines
    pub fn joined(&self) -> String {
        match self {
            LegendText::Single(text) => text.clone(),
            LegendText::Lines(lines) => lines.join("\n"),
        }
    }
}

impl From<&str> for LegendText {
    fn from(text: &str) -> Self {
        LegendText::Single(text.to_string())
    }
}

impl From<String> for LegendText {
    fn from(text: String) -> Self {
        LegendText::Single(text)
    }
}

impl From<Vec<String>> for LegendText {
    fn from(lines: Vec<String>) -> Self {
        LegendText::Lines(lines)
    }
}

impl From<&[&str]> for LegendText {
    fn from(lines: &[&str]) -> Self {
        LegendText::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LegendText {
    fn from(lines: [&str; N]) -> Self {
        LegendText::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

/// Styling passed through to the text renderer
#[derive(Debug, Clone)]
pub struct LegendOptions {
    pub family: String,
    pub color: RGBColor,
    /// Distance between baselines as a multiple of the font size
    pub line_spacing: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            color: BLACK,
            line_spacing: 1.2,
        }
    }
}

/// What [`stats_legend`] placed on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub text: String,
    pub font_size: f64,
    /// Baseline start of the first line, in pixels
    pub anchor: (i32, i32),
    /// Baseline start of every line, top to bottom
    pub lines: Vec<(i32, i32)>,
}

/// Pixel position of [`LEGEND_ANCHOR`] on a surface of `(width, height)`.
pub fn legend_anchor((width, height): (u32, u32)) -> (i32, i32) {
    let (fx, fy) = LEGEND_ANCHOR;
    let x = (fx * width as f64).round() as i32;
    // pixel rows grow downwards, axes fractions upwards
    let y = ((1.0 - fy) * height as f64).round() as i32;
    (x, y)
}

/// Baseline positions for `line_count` lines flowing down from the anchor.
pub fn legend_layout(
    dims: (u32, u32),
    line_count: usize,
    font_size: f64,
    line_spacing: f64,
) -> Vec<(i32, i32)> {
    let (x, y) = legend_anchor(dims);
    (0..line_count)
        .map(|i| (x, y + (i as f64 * font_size * line_spacing).round() as i32))
        .collect()
}

/// Write `text` at 4 % from the left and 90 % up `area`.
///
/// For a chart, pass `chart.plotting_area().strip_coord_spec()` so the
/// fractions refer to the axes rather than the whole figure.
pub fn stats_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: impl Into<LegendText>,
    font_size: f64,
    options: &LegendOptions,
) -> Result<Legend> {
    if !(font_size > 0.0) {
        return Err(VisError::InvalidParameter {
            param: "font_size".to_string(),
            message: format!("must be positive, got {}", font_size),
        });
    }

    let text = text.into().joined();
    let lines: Vec<&str> = text.split('\n').collect();
    let positions = legend_layout(area.dim_in_pixel(), lines.len(), font_size, options.line_spacing);

    let style = TextStyle::from((options.family.as_str(), font_size).into_font())
        .color(&options.color)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    for (line, &pos) in lines.iter().zip(positions.iter()) {
        if line.is_empty() {
            continue;
        }
        area.draw_text(line, &style, pos)
            .map_err(|e| VisError::Render {
                message: e.to_string(),
            })?;
    }

    Ok(Legend {
        anchor: legend_anchor(area.dim_in_pixel()),
        text,
        font_size,
        lines: positions,
    })
}

/// [`stats_legend`] with the configured font size
pub fn stats_legend_with_config<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: impl Into<LegendText>,
    config: &LegendConfig,
) -> Result<Legend> {
    stats_legend(area, text, config.font_size, &LegendOptions::default())
}
