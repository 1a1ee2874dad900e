//! Loading sample grids and masks from JSON files.
//!
//! Arrays are stored as a JSON list of equally long rows. In value arrays a
//! `null` entry stands for a missing sample and becomes NaN.

use ndarray::Array2;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, VisError};

/// Load a 2-D array of samples.
pub fn load_array(path: &Path) -> Result<Array2<f64>> {
    let rows: Vec<Vec<Option<f64>>> = read_json(path)?;
    let array = rows_to_array(rows, "data")?.mapv(|v| v.unwrap_or(f64::NAN));
    info!(
        path = %path.display(),
        rows = array.nrows(),
        cols = array.ncols(),
        "Array loaded"
    );
    Ok(array)
}

/// Load a 2-D boolean mask.
pub fn load_mask(path: &Path) -> Result<Array2<bool>> {
    let rows: Vec<Vec<bool>> = read_json(path)?;
    let mask = rows_to_array(rows, "mask")?;
    debug!(
        path = %path.display(),
        selected = mask.iter().filter(|&&keep| keep).count(),
        "Mask loaded"
    );
    Ok(mask)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Pack equally long rows into an array.
pub fn rows_to_array<T: Clone>(rows: Vec<Vec<T>>, what: &str) -> Result<Array2<T>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if nrows == 0 || ncols == 0 {
        return Err(VisError::InvalidParameter {
            param: what.to_string(),
            message: "array is empty".to_string(),
        });
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
        return Err(VisError::InvalidParameter {
            param: what.to_string(),
            message: format!("row {} has {} entries, expected {}", i, row.len(), ncols),
        });
    }

    let flat: Vec<T> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((nrows, ncols), flat)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Write;

    fn json_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_array_with_missing_values() {
        let file = json_file("[[1, 2.5, null], [4, 5, 6]]");
        let array = load_array(file.path()).unwrap();
        assert_eq!(array.dim(), (2, 3));
        assert_eq!(array[[0, 1]], 2.5);
        assert!(array[[0, 2]].is_nan());
    }

    #[test]
    fn test_load_mask() {
        let file = json_file("[[true, false], [false, true]]");
        let mask = load_mask(file.path()).unwrap();
        assert_eq!(mask, array![[true, false], [false, true]]);
    }

    #[test]
    fn test_ragged_and_empty_rejected() {
        let file = json_file("[[1, 2], [3]]");
        assert!(matches!(
            load_array(file.path()),
            Err(VisError::InvalidParameter { .. })
        ));

        let file = json_file("[]");
        assert!(load_array(file.path()).is_err());

        let file = json_file("[[]]");
        assert!(load_mask(file.path()).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let file = json_file("not json");
        assert!(matches!(load_array(file.path()), Err(VisError::Json(_))));
    }
}
