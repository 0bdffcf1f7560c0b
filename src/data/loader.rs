use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::model::Series;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every candidate path into a [`Series`].
///
/// A file that fails to parse, or has fewer than two columns, contributes no
/// series at all: it is logged at warn level and skipped, and the remaining
/// files still load.
pub fn load_series(paths: &[PathBuf]) -> Vec<Series> {
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        match load_csv(path) {
            Ok(series) => {
                log::info!(
                    "loaded {} ({} rows, {} columns)",
                    series.label,
                    series.len(),
                    series.columns.len()
                );
                out.push(series);
            }
            Err(e) => log::warn!("skipping {}: {e:#}", path.display()),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse one CSV with a header row into a column-major [`Series`].
///
/// The series label is the file name. Ragged rows are a parse error (the
/// whole file is rejected, never partially loaded).
pub fn load_csv(path: &Path) -> Result<Series> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.len() < 2 {
        bail!("not enough columns ({}, need at least 2)", columns.len());
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, cell) in record.iter().enumerate() {
            let v = parse_cell(cell)
                .with_context(|| format!("row {row_no}, column '{}'", columns[col_idx]))?;
            values[col_idx].push(v);
        }
    }

    let label = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unnamed>")
        .to_string();

    Ok(Series {
        label,
        columns,
        values,
    })
}

/// Empty cells become NaN (a gap in the plotted line); anything else must be
/// numeric.
fn parse_cell(cell: &str) -> Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|_| anyhow::anyhow!("'{cell}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_valid_csv_column_major() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "run_oneshot.csv", "t,fps\n0.0,60\n0.1,59.5\n");

        let series = load_csv(&path).unwrap();
        assert_eq!(series.label, "run_oneshot.csv");
        assert_eq!(series.columns, vec!["t", "fps"]);
        assert_eq!(series.column("t"), Some(&[0.0, 0.1][..]));
        assert_eq!(series.column("fps"), Some(&[60.0, 59.5][..]));
    }

    #[test]
    fn one_column_csv_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "narrow.csv", "t\n0.0\n0.1\n");
        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn non_numeric_cell_rejects_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.csv", "t,fps\n0.0,60\n0.1,oops\n");
        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn empty_cell_becomes_nan() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "gaps.csv", "t,fps\n0.0,60\n0.1,\n");
        let series = load_csv(&path).unwrap();
        let fps = series.column("fps").unwrap();
        assert_eq!(fps[0], 60.0);
        assert!(fps[1].is_nan());
    }

    #[test]
    fn ragged_row_rejects_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ragged.csv", "t,fps\n0.0,60\n0.1,59,extra\n");
        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn broken_files_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "a.csv", "t,fps\n0.0,60\n");
        let narrow = write(&dir, "b.csv", "t\n0.0\n");
        let missing = dir.path().join("c.csv");

        let loaded = load_series(&[good, narrow, missing]);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].label, "a.csv");
    }
}
