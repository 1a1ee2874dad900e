//! Color-mapped raster export.
//!
//! Turns a 2-D sample grid into an RGBA image: normalize against the finite
//! (and, with a mask, masked-in) value range, look every sample up in a
//! colormap, optionally flip rows and attach the mask as alpha, then encode
//! in the format implied by the destination's extension.

use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};
use ndarray::{Array2, ArrayView2, Zip};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::colormaps::{segmented, Colormap};
use crate::error::{Result, VisError};
use crate::logging::{log_error, log_timed_operation};

/// Options for [`save_image`]
#[derive(Clone, Copy)]
pub struct ImageOptions<'a> {
    /// Colormap to apply; jet when `None`
    pub colormap: Option<&'a dyn Colormap>,
    /// Samples to keep; `false` entries become transparent and are ignored
    /// when computing the value range
    pub mask: Option<ArrayView2<'a, bool>>,
    /// Put row 0 at the bottom of the image (plot convention)
    pub flip_vertical: bool,
}

impl Default for ImageOptions<'_> {
    fn default() -> Self {
        Self {
            colormap: None,
            mask: None,
            flip_vertical: true,
        }
    }
}

impl<'a> ImageOptions<'a> {
    pub fn colormap(mut self, colormap: &'a dyn Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }

    pub fn mask(mut self, mask: ArrayView2<'a, bool>) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }
}

/// Minimum and maximum of the finite samples selected by `mask` (all when `None`).
pub fn value_range(
    data: ArrayView2<f64>,
    mask: Option<ArrayView2<bool>>,
) -> Result<(f64, f64)> {
    let mut min_val = f64::INFINITY;
    let mut max_val = f64::NEG_INFINITY;

    let mut include = |val: f64| {
        if val.is_finite() {
            min_val = min_val.min(val);
            max_val = max_val.max(val);
        }
    };

    match mask {
        Some(mask) => {
            check_shape(data, mask)?;
            Zip::from(&data).and(&mask).for_each(|&val, &keep| {
                if keep {
                    include(val)
                }
            });
        }
        None => data.iter().for_each(|&val| include(val)),
    }

    if min_val > max_val {
        return Err(VisError::EmptyRange {
            message: if mask.is_some() {
                "mask selects no finite samples".to_string()
            } else {
                "array holds no finite samples".to_string()
            },
        });
    }
    Ok((min_val, max_val))
}

/// Rescale `data` into [0, 1] against the range of its finite samples.
///
/// With a mask the range comes from the masked-in samples only and every
/// sample, masked or not, is clipped against it. Non-finite samples stay NaN.
/// A degenerate range (all selected samples equal) maps everything to 0.5.
pub fn normalize(data: ArrayView2<f64>, mask: Option<ArrayView2<bool>>) -> Result<Array2<f64>> {
    if data.is_empty() {
        return Err(VisError::InvalidParameter {
            param: "data".to_string(),
            message: "array is empty".to_string(),
        });
    }

    let (min_val, max_val) = value_range(data, mask)?;
    let span = max_val - min_val;
    if span <= 0.0 {
        warn!(
            value = min_val,
            "Degenerate value range, mapping samples to the colormap midpoint"
        );
    }

    Ok(data.mapv(|val| {
        if !val.is_finite() {
            f64::NAN
        } else if span > 0.0 {
            ((val - min_val) / span).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }))
}

/// Look every normalized sample up in `colormap`.
///
/// Row `r` of the array becomes image row `r`; columns become x.
pub fn colorize(normalized: ArrayView2<f64>, colormap: &dyn Colormap) -> RgbaImage {
    let (rows, cols) = normalized.dim();
    let mut img = RgbaImage::new(cols as u32, rows as u32);
    for ((row, col), &value) in normalized.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Rgba(colormap.map_normalized(value)));
    }
    img
}

/// Alpha plane for a mask: 255 where true, 0 where false.
pub fn mask_to_alpha(mask: ArrayView2<bool>) -> GrayImage {
    let (rows, cols) = mask.dim();
    let mut alpha = GrayImage::new(cols as u32, rows as u32);
    for ((row, col), &keep) in mask.indexed_iter() {
        alpha.put_pixel(col as u32, row as u32, Luma([if keep { 255 } else { 0 }]));
    }
    alpha
}

/// Replace the alpha channel of `img` with `alpha`.
fn put_alpha(img: &mut RgbaImage, alpha: &GrayImage) {
    for (pixel, a) in img.pixels_mut().zip(alpha.pixels()) {
        pixel.0[3] = a.0[0];
    }
}

/// Build the color-mapped image without writing it anywhere.
pub fn render_image(data: ArrayView2<f64>, options: &ImageOptions) -> Result<RgbaImage> {
    let colormap: &dyn Colormap = match options.colormap {
        Some(colormap) => colormap,
        None => &*segmented::DEFAULT_COLORMAP,
    };

    let normalized = normalize(data, options.mask)?;
    let mut img = colorize(normalized.view(), colormap);
    if options.flip_vertical {
        imageops::flip_vertical_in_place(&mut img);
    }

    if let Some(mask) = options.mask {
        let mut alpha = mask_to_alpha(mask);
        if options.flip_vertical {
            imageops::flip_vertical_in_place(&mut alpha);
        }
        put_alpha(&mut img, &alpha);
    }

    debug!(
        width = img.width(),
        height = img.height(),
        colormap = colormap.name(),
        masked = options.mask.is_some(),
        flipped = options.flip_vertical,
        "Rendered color-mapped image"
    );
    Ok(img)
}

/// Save `data` as a color-mapped image at `path`.
///
/// Returns the path written and the in-memory image.
pub fn save_image<P: AsRef<Path>>(
    data: ArrayView2<f64>,
    path: P,
    options: &ImageOptions,
) -> Result<(PathBuf, RgbaImage)> {
    let path = path.as_ref().to_path_buf();
    let start = Instant::now();

    let result = log_timed_operation("save_image", || -> Result<RgbaImage> {
        let img = render_image(data, options)?;
        img.save(&path)?;
        Ok(img)
    });

    match result {
        Ok(img) => {
            info!(
                path = %path.display(),
                width = img.width(),
                height = img.height(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Image saved"
            );
            Ok((path, img))
        }
        Err(error) => {
            log_error(&error, &format!("saving image to {}", path.display()));
            Err(error)
        }
    }
}

fn check_shape(data: ArrayView2<f64>, mask: ArrayView2<bool>) -> Result<()> {
    if data.dim() != mask.dim() {
        return Err(VisError::ShapeMismatch {
            expected: data.dim(),
            actual: mask.dim(),
        });
    }
    Ok(())
}
