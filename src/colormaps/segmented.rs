//! Piecewise-linear segmented colormaps.
//!
//! Each channel is described by breakpoints `(x, y0, y1)`: `y0` is the value
//! approached from below `x`, `y1` the value leaving `x` upwards. A
//! discontinuity is expressed by `y0 != y1`. The breakpoints are resolved
//! once into an `n`-entry lookup table per channel.

use once_cell::sync::Lazy;

use super::colormap::{lut_index, Colormap, BAD_COLOR};
use crate::error::{Result, VisError};

/// Number of lookup-table entries used by the built-in colormaps.
pub const DEFAULT_LUT_SIZE: usize = 256;

/// Jet, used whenever no colormap is given
pub static DEFAULT_COLORMAP: Lazy<SegmentedColormap> = Lazy::new(jet);

/// One breakpoint of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position in [0, 1]
    pub x: f64,
    /// Value approaching `x` from below
    pub y0: f64,
    /// Value leaving `x` upwards
    pub y1: f64,
}

impl Segment {
    pub const fn new(x: f64, y0: f64, y1: f64) -> Self {
        Self { x, y0, y1 }
    }
}

impl From<(f64, f64, f64)> for Segment {
    fn from((x, y0, y1): (f64, f64, f64)) -> Self {
        Self { x, y0, y1 }
    }
}

/// Breakpoints for the three color channels.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentData {
    pub red: Vec<Segment>,
    pub green: Vec<Segment>,
    pub blue: Vec<Segment>,
}

/// A colormap built from per-channel breakpoints.
#[derive(Debug, Clone)]
pub struct SegmentedColormap {
    name: String,
    segments: SegmentData,
    lut: Vec<[f64; 4]>,
}

impl SegmentedColormap {
    /// Build a colormap from breakpoints, resolving them into `n` LUT entries.
    pub fn new(name: impl Into<String>, segments: SegmentData, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(VisError::InvalidParameter {
                param: "n".to_string(),
                message: format!("Lookup table needs at least 2 entries, got {}", n),
            });
        }
        for (channel, data) in [
            ("red", &segments.red),
            ("green", &segments.green),
            ("blue", &segments.blue),
        ] {
            validate_channel(channel, data)?;
        }
        Ok(Self::build(name.into(), segments, n))
    }

    /// Build a colormap interpolating evenly spaced RGB colors (channels in [0, 1]).
    pub fn from_list(name: impl Into<String>, colors: &[[f64; 3]], n: usize) -> Result<Self> {
        if colors.len() < 2 {
            return Err(VisError::InvalidParameter {
                param: "colors".to_string(),
                message: "At least two colors are required".to_string(),
            });
        }
        let segments = list_segments(colors);
        Self::new(name, segments, n)
    }

    /// Build from breakpoints already known to be valid.
    pub(crate) fn build(name: String, segments: SegmentData, n: usize) -> Self {
        let red = lookup_table(n, &segments.red);
        let green = lookup_table(n, &segments.green);
        let blue = lookup_table(n, &segments.blue);
        let lut = (0..n).map(|i| [red[i], green[i], blue[i], 1.0]).collect();
        Self {
            name,
            segments,
            lut,
        }
    }

    /// The breakpoints this colormap was built from
    pub fn segments(&self) -> &SegmentData {
        &self.segments
    }

    /// The resolved RGBA lookup table
    pub fn lut(&self) -> &[[f64; 4]] {
        &self.lut
    }

    /// Number of lookup-table entries
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }
}

impl Colormap for SegmentedColormap {
    fn eval(&self, value: f64) -> [f64; 4] {
        match lut_index(value, self.lut.len()) {
            Some(i) => self.lut[i],
            None => BAD_COLOR,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn validate_channel(channel: &str, data: &[Segment]) -> Result<()> {
    let invalid = |message: String| VisError::InvalidParameter {
        param: channel.to_string(),
        message,
    };

    if data.len() < 2 {
        return Err(invalid("At least two breakpoints are required".to_string()));
    }
    if data[0].x != 0.0 || data[data.len() - 1].x != 1.0 {
        return Err(invalid(
            "Breakpoints must start at x=0 and end at x=1".to_string(),
        ));
    }
    if data.windows(2).any(|w| w[1].x < w[0].x) {
        return Err(invalid(
            "Breakpoint positions must be non-decreasing".to_string(),
        ));
    }
    Ok(())
}

/// Evenly spaced breakpoints without discontinuities, one per color.
fn list_segments(colors: &[[f64; 3]]) -> SegmentData {
    let last = (colors.len() - 1) as f64;
    let channel = |c: usize| -> Vec<Segment> {
        colors
            .iter()
            .enumerate()
            .map(|(i, rgb)| Segment::new(i as f64 / last, rgb[c], rgb[c]))
            .collect()
    };
    SegmentData {
        red: channel(0),
        green: channel(1),
        blue: channel(2),
    }
}

/// Resolve one channel's breakpoints into `n` samples.
///
/// Sample `k` sits at `k` on the breakpoint axis scaled by `n - 1`. Between
/// breakpoints `j-1` and `j` the value runs linearly from `y1[j-1]` to `y0[j]`.
fn lookup_table(n: usize, data: &[Segment]) -> Vec<f64> {
    let scale = (n - 1) as f64;
    let xs: Vec<f64> = data.iter().map(|s| s.x * scale).collect();

    let mut lut = Vec::with_capacity(n);
    lut.push(data[0].y1);
    for k in 1..n - 1 {
        let target = k as f64;
        // first breakpoint at or beyond the sample
        let j = xs.partition_point(|&x| x < target);
        let (left, right) = (&data[j - 1], &data[j]);
        let distance = (target - xs[j - 1]) / (xs[j] - xs[j - 1]);
        lut.push(distance * (right.y0 - left.y1) + left.y1);
    }
    lut.push(data[data.len() - 1].y0);

    lut.into_iter().map(|v| v.clamp(0.0, 1.0)).collect()
}

/// The classic jet colormap (blue through cyan, yellow to red).
pub fn jet() -> SegmentedColormap {
    let segments = SegmentData {
        red: vec![
            Segment::new(0.0, 0.0, 0.0),
            Segment::new(0.35, 0.0, 0.0),
            Segment::new(0.66, 1.0, 1.0),
            Segment::new(0.89, 1.0, 1.0),
            Segment::new(1.0, 0.5, 0.5),
        ],
        green: vec![
            Segment::new(0.0, 0.0, 0.0),
            Segment::new(0.125, 0.0, 0.0),
            Segment::new(0.375, 1.0, 1.0),
            Segment::new(0.64, 1.0, 1.0),
            Segment::new(0.91, 0.0, 0.0),
            Segment::new(1.0, 0.0, 0.0),
        ],
        blue: vec![
            Segment::new(0.0, 0.5, 0.5),
            Segment::new(0.11, 1.0, 1.0),
            Segment::new(0.34, 1.0, 1.0),
            Segment::new(0.65, 0.0, 0.0),
            Segment::new(1.0, 0.0, 0.0),
        ],
    };
    SegmentedColormap::build("jet".to_string(), segments, DEFAULT_LUT_SIZE)
}

/// Seismic colormap - dark blue, white in the middle, dark red
pub fn seismic() -> SegmentedColormap {
    let colors: [[f64; 3]; 5] = [
        [0.0, 0.0, 0.3],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.5, 0.0, 0.0],
    ];
    let segments = list_segments(&colors);
    SegmentedColormap::build("seismic".to_string(), segments, DEFAULT_LUT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> SegmentData {
        let line = vec![Segment::new(0.0, 0.0, 0.0), Segment::new(1.0, 1.0, 1.0)];
        SegmentData {
            red: line.clone(),
            green: line.clone(),
            blue: line,
        }
    }

    #[test]
    fn test_linear_ramp_lut() {
        let cmap = SegmentedColormap::new("ramp", ramp(), 5).unwrap();
        let reds: Vec<f64> = cmap.lut().iter().map(|c| c[0]).collect();
        assert_eq!(reds, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_discontinuity_uses_y0_and_y1() {
        // jumps from 0 to 1 at x = 0.5
        let step = vec![
            Segment::new(0.0, 0.0, 0.0),
            Segment::new(0.5, 0.0, 1.0),
            Segment::new(1.0, 1.0, 1.0),
        ];
        let data = SegmentData {
            red: step.clone(),
            green: step.clone(),
            blue: step,
        };
        let cmap = SegmentedColormap::new("step", data, 3).unwrap();
        let reds: Vec<f64> = cmap.lut().iter().map(|c| c[0]).collect();
        assert_eq!(reds, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_invalid_breakpoints() {
        let mut data = ramp();
        data.green[0].x = 0.1;
        assert!(SegmentedColormap::new("bad", data, 256).is_err());

        let mut data = ramp();
        data.blue = vec![
            Segment::new(0.0, 0.0, 0.0),
            Segment::new(0.7, 0.0, 0.0),
            Segment::new(0.3, 0.0, 0.0),
            Segment::new(1.0, 0.0, 0.0),
        ];
        assert!(SegmentedColormap::new("bad", data, 256).is_err());

        let mut data = ramp();
        data.red.truncate(1);
        assert!(SegmentedColormap::new("bad", data, 256).is_err());

        assert!(SegmentedColormap::new("bad", ramp(), 1).is_err());
    }

    #[test]
    fn test_eval_bounds_and_nan() {
        let cmap = SegmentedColormap::new("ramp", ramp(), 256).unwrap();
        assert_eq!(cmap.eval(0.0), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cmap.eval(1.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(cmap.eval(-1.0), cmap.eval(0.0));
        assert_eq!(cmap.eval(2.0), cmap.eval(1.0));
        assert_eq!(cmap.eval(f64::NAN), BAD_COLOR);
    }

    #[test]
    fn test_default_is_jet() {
        assert_eq!(DEFAULT_COLORMAP.name(), "jet");
        assert_eq!(DEFAULT_COLORMAP.lut(), jet().lut());
    }

    #[test]
    fn test_jet_ends() {
        let jet = jet();
        assert_eq!(jet.len(), DEFAULT_LUT_SIZE);
        assert_eq!(jet.map_normalized(0.0), [0, 0, 127, 255]);
        assert_eq!(jet.map_normalized(1.0), [127, 0, 0, 255]);
        // green peaks in the middle
        let mid = jet.eval(0.5);
        assert!(mid[1] > 0.99);
    }

    #[test]
    fn test_from_list_matches_seismic() {
        let listed = SegmentedColormap::from_list(
            "seismic",
            &[
                [0.0, 0.0, 0.3],
                [0.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 0.0, 0.0],
                [0.5, 0.0, 0.0],
            ],
            DEFAULT_LUT_SIZE,
        )
        .unwrap();
        assert_eq!(listed.lut(), seismic().lut());
        assert!(SegmentedColormap::from_list("one", &[[0.0, 0.0, 0.0]], 256).is_err());
    }

    #[test]
    fn test_seismic_middle_is_light() {
        let middle = seismic().map_normalized(0.5);
        assert!(middle[0] > 250 && middle[1] > 250 && middle[2] > 250);
    }
}
