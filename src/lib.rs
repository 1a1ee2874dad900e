//! # mxn-vis
//!
//! Colormaps and color-mapped image export for 2-D scientific arrays.
//!
//! ## Key Features
//!
//! - **Colormaps**: jet, IDL color table 4, seismic and the colorgrad presets,
//!   all behind one [`Colormap`] trait with a name-based registry
//! - **Palettes**: any colormap as a flat 768-entry RGB palette
//! - **Image export**: normalize, color-map, flip and alpha-mask an array, then
//!   encode it by file extension
//! - **Colorbars**: standalone PNG colorbars for a colormap and value range
//! - **Annotations**: multi-line text legends on plotters drawing areas
//!
//! ## Example
//!
//! ```no_run
//! use mxn_vis::{cmap_idl4, save_image, ImageOptions};
//! use ndarray::Array2;
//!
//! let data = Array2::from_shape_fn((64, 128), |(r, c)| (r * c) as f64);
//! let idl4 = cmap_idl4();
//! let (_path, image) = save_image(
//!     data.view(),
//!     "field.png",
//!     &ImageOptions::default().colormap(&idl4),
//! )?;
//! assert_eq!(image.dimensions(), (128, 64));
//! # Ok::<(), mxn_vis::VisError>(())
//! ```

pub mod annotate;
pub mod colorbar;
pub mod colormaps;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod logging;
pub mod raster;

pub use annotate::{stats_legend, Legend, LegendOptions, LegendText};
pub use colorbar::{default_colorbar_filename, save_colorbar, Colorbar, ColorbarOptions};
pub use colormaps::{cmap_idl4, cmap_to_palette, get_colormap, Colormap};
pub use config::Config;
pub use error::{Result, VisError};
pub use logging::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_timed_operation,
};
pub use raster::{save_image, ImageOptions};
