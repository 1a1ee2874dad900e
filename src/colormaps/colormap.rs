//! Colormap trait and registry.
//!
//! This module defines the common interface for all colormaps and the
//! name-based lookup used by the renderers and the CLI.

use crate::error::{Result, VisError};

/// Color returned for NaN inputs (transparent black).
pub const BAD_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color with channels in [0, 1].
    ///
    /// Values below 0 or above 1 clamp to the end colors; NaN maps to [`BAD_COLOR`].
    fn eval(&self, value: f64) -> [f64; 4];

    /// Map a normalized value to 8-bit RGBA, truncating `255 * channel`.
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        let [r, g, b, a] = self.eval(value);
        [to_u8(r), to_u8(g), to_u8(b), to_u8(a)]
    }

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f64, min: f64, max: f64) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

impl<C: Colormap + ?Sized> Colormap for Box<C> {
    fn eval(&self, value: f64) -> [f64; 4] {
        (**self).eval(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Truncating float-to-byte conversion of a channel in [0, 1].
pub(crate) fn to_u8(channel: f64) -> u8 {
    (255.0 * channel).clamp(0.0, 255.0) as u8
}

/// Index into an `n`-entry lookup table for a normalized value.
///
/// `floor(value * n)`, with 1.0 landing on the last entry and out-of-range
/// values clamped to the ends. Returns `None` for NaN.
pub(crate) fn lut_index(value: f64, n: usize) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    let scaled = value * n as f64;
    if scaled < 0.0 {
        Some(0)
    } else if scaled >= (n - 1) as f64 {
        Some(n - 1)
    } else {
        Some(scaled as usize)
    }
}

/// A colormap traversed in the opposite direction.
pub struct Reversed {
    inner: Box<dyn Colormap>,
    name: String,
}

impl Reversed {
    pub fn new(inner: Box<dyn Colormap>) -> Self {
        let name = format!("{}_r", inner.name());
        Self { inner, name }
    }
}

impl Colormap for Reversed {
    fn eval(&self, value: f64) -> [f64; 4] {
        self.inner.eval(1.0 - value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Names accepted by [`get_colormap`] (each also available with an `_r` suffix).
pub fn available_colormaps() -> &'static [&'static str] {
    &[
        "jet",
        "idl4",
        "seismic",
        "viridis",
        "plasma",
        "inferno",
        "magma",
        "cividis",
        "turbo",
        "rainbow",
        "spectral",
        "rdbu",
        "greys",
        "gray",
        "blues",
        "reds",
        "greens",
        "cubehelix",
    ]
}

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    use super::{idl, listed, segmented};

    let lower = name.to_lowercase();
    if let Some(base) = lower.strip_suffix("_r") {
        return Ok(Box::new(Reversed::new(get_colormap(base)?)));
    }

    match lower.as_str() {
        "jet" => Ok(Box::new(segmented::jet())),
        "idl4" => Ok(Box::new(idl::cmap_idl4())),
        "seismic" => Ok(Box::new(segmented::seismic())),
        "viridis" => Ok(Box::new(listed::viridis())),
        "plasma" => Ok(Box::new(listed::plasma())),
        "inferno" => Ok(Box::new(listed::inferno())),
        "magma" => Ok(Box::new(listed::magma())),
        "cividis" => Ok(Box::new(listed::cividis())),
        "turbo" => Ok(Box::new(listed::turbo())),
        "rainbow" => Ok(Box::new(listed::rainbow())),
        "spectral" => Ok(Box::new(listed::spectral())),
        "rdbu" => Ok(Box::new(listed::rdbu())),
        "greys" | "gray" => Ok(Box::new(listed::greys())),
        "blues" => Ok(Box::new(listed::blues())),
        "reds" => Ok(Box::new(listed::reds())),
        "greens" => Ok(Box::new(listed::greens())),
        "cubehelix" => Ok(Box::new(listed::cubehelix())),
        _ => Err(VisError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        }),
    }
}
