//! Lookup-table colormaps sampled from colorgrad presets.
//!
//! These cover the perceptual and diverging maps (viridis, turbo, RdBu, ...)
//! without hand-maintained tables.

use super::colormap::{lut_index, Colormap, BAD_COLOR};
use super::segmented::DEFAULT_LUT_SIZE;

/// A colormap defined by an explicit table of RGBA colors.
#[derive(Debug, Clone)]
pub struct ListedColormap {
    name: String,
    colors: Vec<[f64; 4]>,
}

impl ListedColormap {
    /// Wrap a non-empty color table.
    pub fn new(name: impl Into<String>, colors: Vec<[f64; 4]>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            colors,
        })
    }

    /// Sample a gradient at `n` evenly spaced points.
    pub fn from_gradient(name: impl Into<String>, gradient: &colorgrad::Gradient, n: usize) -> Self {
        let n = n.max(2);
        let last = (n - 1) as f64;
        let colors = (0..n)
            .map(|i| {
                let [r, g, b, a] = gradient.at(i as f64 / last).to_rgba8();
                [
                    r as f64 / 255.0,
                    g as f64 / 255.0,
                    b as f64 / 255.0,
                    a as f64 / 255.0,
                ]
            })
            .collect();
        Self {
            name: name.into(),
            colors,
        }
    }

    pub fn colors(&self) -> &[[f64; 4]] {
        &self.colors
    }
}

impl Colormap for ListedColormap {
    fn eval(&self, value: f64) -> [f64; 4] {
        match lut_index(value, self.colors.len()) {
            Some(i) => self.colors[i],
            None => BAD_COLOR,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

macro_rules! gradient_colormap {
    ($(#[$doc:meta])* $fn_name:ident, $label:literal, $preset:path) => {
        $(#[$doc])*
        pub fn $fn_name() -> ListedColormap {
            ListedColormap::from_gradient($label, &$preset(), DEFAULT_LUT_SIZE)
        }
    };
}

gradient_colormap!(
    /// Viridis - perceptually uniform, colorblind-friendly
    viridis, "viridis", colorgrad::viridis
);
gradient_colormap!(plasma, "plasma", colorgrad::plasma);
gradient_colormap!(inferno, "inferno", colorgrad::inferno);
gradient_colormap!(magma, "magma", colorgrad::magma);
gradient_colormap!(cividis, "cividis", colorgrad::cividis);
gradient_colormap!(
    /// Turbo - an improved rainbow map
    turbo, "turbo", colorgrad::turbo
);
gradient_colormap!(rainbow, "rainbow", colorgrad::rainbow);
gradient_colormap!(spectral, "spectral", colorgrad::spectral);
gradient_colormap!(
    /// Red to blue through white
    rdbu, "rdbu", colorgrad::rd_bu
);
gradient_colormap!(greys, "greys", colorgrad::greys);
gradient_colormap!(blues, "blues", colorgrad::blues);
gradient_colormap!(reds, "reds", colorgrad::reds);
gradient_colormap!(greens, "greens", colorgrad::greens);
gradient_colormap!(cubehelix, "cubehelix", colorgrad::cubehelix_default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormap_names() {
        assert_eq!(viridis().name(), "viridis");
        assert_eq!(rdbu().name(), "rdbu");
        assert_eq!(cubehelix().name(), "cubehelix");
    }

    #[test]
    fn test_preset_table_size() {
        assert_eq!(viridis().colors().len(), DEFAULT_LUT_SIZE);
        assert_eq!(turbo().colors().len(), DEFAULT_LUT_SIZE);
    }

    #[test]
    fn test_greys_runs_light_to_dark() {
        let greys = greys();
        let start = greys.eval(0.0);
        let end = greys.eval(1.0);
        assert!(start[0] > end[0]);
        assert!(start[1] > end[1]);
        assert!(start[2] > end[2]);
    }

    #[test]
    fn test_rdbu_bounds() {
        let colormap = rdbu();
        let red = colormap.map_normalized(0.0);
        let blue = colormap.map_normalized(1.0);
        assert!(red[0] > red[2]);
        assert!(blue[2] > blue[0]);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(ListedColormap::new("empty", Vec::new()).is_none());
        let single = ListedColormap::new("single", vec![[0.2, 0.4, 0.6, 1.0]]).unwrap();
        assert_eq!(single.eval(0.0), single.eval(1.0));
        assert_eq!(single.eval(f64::NAN), BAD_COLOR);
    }
}
