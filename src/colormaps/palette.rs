//! Flat 8-bit palettes derived from colormaps.
//!
//! A palette is 256 RGB triples laid out point-major, channel-minor:
//! `[r0, g0, b0, r1, g1, b1, ...]`, the layout indexed-color encoders expect.

use super::colormap::Colormap;

/// Number of colors sampled from a colormap
pub const PALETTE_COLORS: usize = 256;

/// Length of a flat RGB palette
pub const PALETTE_LEN: usize = PALETTE_COLORS * 3;

/// Sample `colormap` at 256 evenly spaced points in [0, 1] and flatten the RGB
/// channels (alpha dropped), each scaled by 255 and truncated.
pub fn cmap_to_palette(colormap: &dyn Colormap) -> Vec<u8> {
    let last = (PALETTE_COLORS - 1) as f64;
    (0..PALETTE_COLORS)
        .flat_map(|i| {
            let [r, g, b, _] = colormap.eval(i as f64 / last);
            [r, g, b]
        })
        .map(|channel| (255.0 * channel).clamp(0.0, 255.0) as u8)
        .collect()
}

/// RGB triple at `index` of a flat palette.
pub fn palette_color(palette: &[u8], index: u8) -> Option<[u8; 3]> {
    let start = index as usize * 3;
    palette
        .get(start..start + 3)
        .map(|rgb| [rgb[0], rgb[1], rgb[2]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::{cmap_idl4, get_colormap, IDL4_BLUE, IDL4_GREEN, IDL4_RED};

    #[test]
    fn test_palette_length() {
        for name in ["jet", "idl4", "viridis", "seismic", "greys_r"] {
            let cmap = get_colormap(name).unwrap();
            assert_eq!(cmap_to_palette(cmap.as_ref()).len(), PALETTE_LEN);
        }
    }

    #[test]
    fn test_jet_palette_ends() {
        let palette = cmap_to_palette(get_colormap("jet").unwrap().as_ref());
        assert_eq!(palette_color(&palette, 0), Some([0, 0, 127]));
        assert_eq!(palette_color(&palette, 255), Some([127, 0, 0]));
    }

    #[test]
    fn test_idl4_palette_tracks_tables() {
        let palette = cmap_to_palette(&cmap_idl4());
        for i in [0usize, 40, 113, 128, 200, 255] {
            let [r, g, b] = palette_color(&palette, i as u8).unwrap();
            // truncating 255 * (v / 255) can lose one unit
            assert!((r as i32 - IDL4_RED[i] as i32).abs() <= 1, "red at {}", i);
            assert!((g as i32 - IDL4_GREEN[i] as i32).abs() <= 1, "green at {}", i);
            assert!((b as i32 - IDL4_BLUE[i] as i32).abs() <= 1, "blue at {}", i);
        }
    }

    #[test]
    fn test_palette_color_out_of_range() {
        assert_eq!(palette_color(&[1, 2, 3], 1), None);
        assert_eq!(palette_color(&[1, 2, 3], 0), Some([1, 2, 3]));
    }
}
