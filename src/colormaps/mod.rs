//! Colormap implementations for image generation.
//!
//! This module provides segmented and lookup-table colormaps, the IDL color
//! table 4 map, and conversion of any colormap into a flat 8-bit palette.

pub mod colormap;
pub mod idl;
pub mod listed;
pub mod palette;
pub mod segmented;

pub use colormap::{available_colormaps, get_colormap, Colormap, Reversed, BAD_COLOR};
pub use idl::{cmap_idl4, IDL4_BLUE, IDL4_GREEN, IDL4_RED};
pub use listed::ListedColormap;
pub use palette::{cmap_to_palette, palette_color, PALETTE_LEN};
pub use segmented::{jet, seismic, Segment, SegmentData, SegmentedColormap, DEFAULT_LUT_SIZE};
