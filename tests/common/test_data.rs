//! Test data generation utilities.
//!
//! Synthetic sample grids and masks with known value patterns.

use ndarray::Array2;
use std::f64::consts::PI;
use std::path::Path;

/// Values increasing with the row index: row `r` holds `r` everywhere.
pub fn row_gradient(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(r, _)| r as f64)
}

/// Values increasing left to right from 0 to 1.
pub fn column_gradient(rows: usize, cols: usize) -> Array2<f64> {
    let last = (cols.max(2) - 1) as f64;
    Array2::from_shape_fn((rows, cols), |(_, c)| c as f64 / last)
}

/// A smooth field resembling a pressure pattern, with a few missing samples.
pub fn wavy_field(rows: usize, cols: usize) -> Array2<f64> {
    let mut field = Array2::from_shape_fn((rows, cols), |(r, c)| {
        let y = r as f64 / rows as f64;
        let x = c as f64 / cols as f64;
        1013.0 + 12.0 * (2.0 * PI * x).sin() * (PI * y).cos()
    });
    if rows > 2 && cols > 2 {
        field[[1, 1]] = f64::NAN;
        field[[rows - 2, cols - 2]] = f64::NAN;
    }
    field
}

/// A circular mask selecting samples near the center.
pub fn disc_mask(rows: usize, cols: usize) -> Array2<bool> {
    let (cy, cx) = (rows as f64 / 2.0, cols as f64 / 2.0);
    let radius = cy.min(cx) * 0.75;
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let (dy, dx) = (r as f64 + 0.5 - cy, c as f64 + 0.5 - cx);
        (dy * dy + dx * dx).sqrt() <= radius
    })
}

/// Write an array as JSON rows, `null` for non-finite samples.
pub fn write_array_json(path: &Path, array: &Array2<f64>) -> std::io::Result<()> {
    let rows: Vec<Vec<Option<f64>>> = array
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&v| if v.is_finite() { Some(v) } else { None })
                .collect()
        })
        .collect();
    std::fs::write(path, serde_json::to_string(&rows)?)
}

/// Write a mask as JSON rows of booleans.
pub fn write_mask_json(path: &Path, mask: &Array2<bool>) -> std::io::Result<()> {
    let rows: Vec<Vec<bool>> = mask.rows().into_iter().map(|row| row.to_vec()).collect();
    std::fs::write(path, serde_json::to_string(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_mask_selects_center_only() {
        let mask = disc_mask(20, 20);
        assert!(mask[[10, 10]]);
        assert!(!mask[[0, 0]]);
        assert!(!mask[[19, 19]]);
    }

    #[test]
    fn test_wavy_field_has_gaps() {
        let field = wavy_field(8, 8);
        assert!(field[[1, 1]].is_nan());
        assert_eq!(field.iter().filter(|v| v.is_nan()).count(), 2);
    }
}
