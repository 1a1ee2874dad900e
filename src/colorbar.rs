//! Standalone colorbar images.
//!
//! Renders a narrow figure holding a vertical gradient bar for a colormap and
//! value range, with tick labels on the right and a rotated title beside
//! them, and writes it as an opaque PNG.

use image::{ImageFormat, RgbImage};
use ndarray::ArrayView2;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::colormaps::{colormap::to_u8, segmented, Colormap};
use crate::config::ColorbarConfig;
use crate::error::{Result, VisError};
use crate::logging::{log_error, log_timed_operation};

/// Length of a tick mark in pixels
const TICK_LENGTH: u32 = 4;

/// Relative widening of a collapsed value range
const NONSINGULAR_EXPANDER: f64 = 0.1;

/// Options for [`save_colorbar`]
#[derive(Clone)]
pub struct ColorbarOptions<'a> {
    /// Array supplying the default range (overall finite min/max)
    pub data: Option<ArrayView2<'a, f64>>,
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    /// Colormap to draw; jet when `None`
    pub colormap: Option<&'a dyn Colormap>,
    /// Destination; `colorbar_<lab>.png` when `None`
    pub filename: Option<PathBuf>,
    /// Label drawn along the bar
    pub title: String,
    /// Suffix of the default file name
    pub lab: String,
    /// Figure geometry and fonts
    pub figure: ColorbarConfig,
}

impl Default for ColorbarOptions<'_> {
    fn default() -> Self {
        Self::from_config(&ColorbarConfig::default())
    }
}

impl<'a> ColorbarOptions<'a> {
    pub fn from_config(config: &ColorbarConfig) -> Self {
        Self {
            data: None,
            vmin: None,
            vmax: None,
            colormap: None,
            filename: None,
            title: config.title.clone(),
            lab: String::new(),
            figure: config.clone(),
        }
    }

    pub fn data(mut self, data: ArrayView2<'a, f64>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn range(mut self, vmin: f64, vmax: f64) -> Self {
        self.vmin = Some(vmin);
        self.vmax = Some(vmax);
        self
    }

    pub fn colormap(mut self, colormap: &'a dyn Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }

    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn lab(mut self, lab: impl Into<String>) -> Self {
        self.lab = lab.into();
        self
    }

    pub fn ticks(mut self, ticks: usize) -> Self {
        self.figure.ticks = ticks;
        self
    }
}

/// A rendered colorbar
#[derive(Debug, Clone)]
pub struct Colorbar {
    pub vmin: f64,
    pub vmax: f64,
    pub title: String,
    pub colormap: String,
    /// Tick values, bottom to top
    pub ticks: Vec<f64>,
    pub image: RgbImage,
}

/// File name used when none is given: `colorbar_<lab>.png`
pub fn default_colorbar_filename(lab: &str) -> PathBuf {
    PathBuf::from(format!("colorbar_{}.png", lab))
}

/// Resolve the value range: explicit bounds win, the rest comes from the
/// overall finite min/max of `options.data`.
pub fn resolve_range(options: &ColorbarOptions) -> Result<(f64, f64)> {
    let data_range = || -> Result<(f64, f64)> {
        let data = options.data.ok_or_else(|| VisError::InvalidParameter {
            param: "vmin/vmax".to_string(),
            message: "either explicit bounds or an image are required".to_string(),
        })?;
        crate::raster::value_range(data, None)
    };

    let vmin = match options.vmin {
        Some(v) => v,
        None => data_range()?.0,
    };
    let vmax = match options.vmax {
        Some(v) => v,
        None => data_range()?.1,
    };

    if !vmin.is_finite() || !vmax.is_finite() || !(vmax - vmin).is_finite() {
        return Err(VisError::InvalidParameter {
            param: "vmin/vmax".to_string(),
            message: format!("range must be finite, got [{}, {}]", vmin, vmax),
        });
    }
    if vmin > vmax {
        return Err(VisError::InvalidParameter {
            param: "vmin/vmax".to_string(),
            message: format!("vmin must not exceed vmax, got [{}, {}]", vmin, vmax),
        });
    }
    Ok((vmin, vmax))
}

/// Range drawn on the value axis. A collapsed range is widened around its
/// value so the axis keeps a non-zero extent.
pub fn display_range(vmin: f64, vmax: f64) -> (f64, f64) {
    if vmax > vmin {
        return (vmin, vmax);
    }
    if vmin.abs() < f64::MIN_POSITIVE {
        return (vmin - NONSINGULAR_EXPANDER, vmax + NONSINGULAR_EXPANDER);
    }
    let pad = NONSINGULAR_EXPANDER * vmin.abs();
    match (vmin - pad, vmax + pad) {
        (lo, hi) if lo.is_finite() && hi.is_finite() => (lo, hi),
        (lo, _) if lo.is_finite() => (lo, vmax),
        (_, hi) => (vmin, hi),
    }
}

/// Tick values plotters places on a `[vmin, vmax]` axis asked for at most
/// `max_ticks` labels.
pub fn nice_ticks(vmin: f64, vmax: f64, max_ticks: usize) -> Vec<f64> {
    if max_ticks == 0 || !vmin.is_finite() || !vmax.is_finite() || !(vmax - vmin).is_finite() {
        return Vec::new();
    }
    if vmax <= vmin {
        return vec![vmin];
    }
    let axis: RangedCoordf64 = (vmin..vmax).into();
    let mut ticks = axis.key_points(max_ticks);
    ticks.truncate(max_ticks);
    ticks
}

/// How tick labels print their values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickFormat {
    /// Fixed point with this many decimals
    Fixed(usize),
    Scientific,
}

impl TickFormat {
    /// Fewest decimals that show the spacing of `ticks` (or the single
    /// tick's value); scientific notation below a millionth.
    pub fn for_ticks(ticks: &[f64]) -> Self {
        let reference = match ticks {
            [a, b, ..] => (b - a).abs(),
            [a] => a.abs(),
            [] => 0.0,
        };
        if reference == 0.0 {
            return TickFormat::Fixed(0);
        }
        if reference < 1e-6 {
            return TickFormat::Scientific;
        }
        (0..=6)
            .find(|&d| {
                let scaled = reference * 10f64.powi(d as i32);
                (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
            })
            .map(TickFormat::Fixed)
            .unwrap_or(TickFormat::Scientific)
    }

    pub fn format(self, value: f64) -> String {
        // avoid "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        match self {
            TickFormat::Fixed(decimals) => format!("{:.*}", decimals, value),
            TickFormat::Scientific => format!("{:.2e}", value),
        }
    }
}

/// Pixel geometry of the colorbar figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorbarLayout {
    pub width: u32,
    pub height: u32,
    pub bar_left: i32,
    pub bar_right: i32,
    pub bar_top: i32,
    pub bar_bottom: i32,
}

impl ColorbarLayout {
    pub fn new(figure: &ColorbarConfig) -> Self {
        let width = (figure.width_in * figure.dpi as f64).round().max(1.0) as u32;
        let height = (figure.height_in * figure.dpi as f64).round().max(1.0) as u32;
        let [left, bottom, bar_width, bar_height] = figure.axes_rect;
        let (w, h) = (width as f64, height as f64);

        let bar_left = (left * w).round() as i32;
        let bar_right = (((left + bar_width) * w).round() as i32).max(bar_left + 1);
        let bar_top = (h - (bottom + bar_height) * h).round() as i32;
        let bar_bottom = ((h - bottom * h).round() as i32).max(bar_top + 1);

        Self {
            width,
            height,
            bar_left,
            bar_right,
            bar_top,
            bar_bottom,
        }
    }

    /// Number of pixel rows covered by the bar
    pub fn bar_rows(&self) -> i32 {
        self.bar_bottom - self.bar_top
    }

    /// Pixels between the bar and the right edge of the figure
    pub fn free_right(&self) -> u32 {
        (self.width as i32 - self.bar_right).max(0) as u32
    }
}

fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * dpi as f64 / 72.0
}

fn render_error(error: impl std::fmt::Display) -> VisError {
    VisError::Render {
        message: error.to_string(),
    }
}

fn to_rgb(colormap: &dyn Colormap, value: f64) -> RGBColor {
    let [r, g, b, _] = colormap.eval(value);
    RGBColor(to_u8(r), to_u8(g), to_u8(b))
}

/// Draw the colorbar figure into an RGB buffer.
///
/// The bar is a plotters chart whose right label area carries the tick
/// labels and the title; the label area is sized from measured text so the
/// title sits `label_pad` beyond the widest tick label.
fn render_colorbar(
    layout: &ColorbarLayout,
    figure: &ColorbarConfig,
    colormap: &dyn Colormap,
    (lo, hi): (f64, f64),
    ticks: &[f64],
    title: &str,
) -> Result<RgbImage> {
    let tick_px = points_to_pixels(figure.tick_font_size, figure.dpi);
    let title_px = points_to_pixels(figure.title_font_size, figure.dpi);
    let tick_format = TickFormat::for_ticks(ticks);
    let labels: Vec<String> = ticks.iter().map(|&t| tick_format.format(t)).collect();
    let formatter = |value: &f64| tick_format.format(*value);

    let mut buffer = vec![255u8; layout.width as usize * layout.height as usize * 3];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (layout.width, layout.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let tick_style = TextStyle::from(("sans-serif", tick_px).into_font()).color(&BLACK);
        let title_style = TextStyle::from(("sans-serif", title_px).into_font()).color(&BLACK);

        let mut label_area = TICK_LENGTH;
        if !labels.is_empty() {
            let mut widest = 0;
            for label in &labels {
                let (w, _) = root
                    .estimate_text_size(label, &tick_style)
                    .map_err(render_error)?;
                widest = widest.max(w);
            }
            // plotters keeps labels two tick lengths off the axis
            label_area += TICK_LENGTH + widest;
        }
        if !title.is_empty() {
            let (_, h) = root
                .estimate_text_size(title, &title_style)
                .map_err(render_error)?;
            label_area += points_to_pixels(figure.label_pad, figure.dpi).round() as u32 + h;
        }
        let label_area = label_area.min(layout.free_right());

        let mut chart = ChartBuilder::on(&root)
            .margin_top(layout.bar_top)
            .margin_bottom(layout.height as i32 - layout.bar_bottom)
            .margin_left(layout.bar_left)
            .margin_right(layout.free_right() - label_area)
            .set_label_area_size(LabelAreaPosition::Left, 0)
            .set_label_area_size(LabelAreaPosition::Bottom, 0)
            .set_label_area_size(LabelAreaPosition::Right, label_area)
            .build_cartesian_2d(0.0..1.0, lo..hi)
            .map_err(render_error)?;

        let rows = layout.bar_rows().max(1) as usize;
        let span = hi - lo;
        chart
            .draw_series((0..rows).map(|i| {
                let fraction = if rows > 1 {
                    i as f64 / (rows - 1) as f64
                } else {
                    0.5
                };
                let y0 = lo + span * i as f64 / rows as f64;
                let y1 = lo + span * (i + 1) as f64 / rows as f64;
                Rectangle::new([(0.0, y0), (1.0, y1)], to_rgb(colormap, fraction).filled())
            }))
            .map_err(render_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .disable_y_mesh()
            .disable_x_axis()
            .set_tick_mark_size(LabelAreaPosition::Right, TICK_LENGTH)
            .y_labels(figure.ticks)
            .y_label_style(tick_style)
            .y_label_formatter(&formatter);
        if !title.is_empty() {
            mesh.y_desc(title).axis_desc_style(title_style);
        }
        mesh.draw().map_err(render_error)?;

        chart
            .plotting_area()
            .draw(&Rectangle::new([(0.0, lo), (1.0, hi)], BLACK.stroke_width(1)))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    RgbImage::from_raw(layout.width, layout.height, buffer).ok_or_else(|| VisError::Render {
        message: "colorbar buffer does not match figure size".to_string(),
    })
}

/// Render a colorbar for `options` and save it as a PNG.
///
/// Returns the file written (`colorbar_<lab>.png` unless a filename is given)
/// and the colorbar.
pub fn save_colorbar(options: &ColorbarOptions) -> Result<(PathBuf, Colorbar)> {
    let filename = options
        .filename
        .clone()
        .unwrap_or_else(|| default_colorbar_filename(&options.lab));
    let start = Instant::now();

    let result = log_timed_operation("save_colorbar", || -> Result<Colorbar> {
        let (vmin, vmax) = resolve_range(options)?;

        let colormap: &dyn Colormap = match options.colormap {
            Some(colormap) => colormap,
            None => &*segmented::DEFAULT_COLORMAP,
        };

        let layout = ColorbarLayout::new(&options.figure);
        let axis = display_range(vmin, vmax);
        let ticks = nice_ticks(axis.0, axis.1, options.figure.ticks);
        debug!(
            vmin = vmin,
            vmax = vmax,
            ticks = ticks.len(),
            width = layout.width,
            height = layout.height,
            "Rendering colorbar"
        );

        let image = render_colorbar(
            &layout,
            &options.figure,
            colormap,
            axis,
            &ticks,
            &options.title,
        )?;
        write_png(&image, &filename)?;

        Ok(Colorbar {
            vmin,
            vmax,
            title: options.title.clone(),
            colormap: colormap.name().to_string(),
            ticks,
            image,
        })
    });

    match result {
        Ok(colorbar) => {
            info!(
                path = %filename.display(),
                vmin = colorbar.vmin,
                vmax = colorbar.vmax,
                colormap = %colorbar.colormap,
                duration_ms = start.elapsed().as_millis() as u64,
                "Colorbar saved"
            );
            Ok((filename, colorbar))
        }
        Err(error) => {
            log_error(&error, &format!("saving colorbar to {}", filename.display()));
            Err(error)
        }
    }
}

fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
