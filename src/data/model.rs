// ---------------------------------------------------------------------------
// Series – one loaded CSV, plotted as one line
// ---------------------------------------------------------------------------

/// One loaded CSV's data, identified by a label.
///
/// The first column is the shared X domain; the remaining columns are
/// candidate Y values. Values are stored column-major so a Y-axis switch is
/// a slice lookup, not a re-parse.
#[derive(Debug, Clone)]
pub struct Series {
    /// Display label, normally the source file name.
    pub label: String,
    /// Ordered column names from the CSV header.
    pub columns: Vec<String>,
    /// One `Vec<f64>` per column, parallel to `columns`; all share a length.
    pub values: Vec<Vec<f64>>,
}

impl Series {
    /// Look up a column's values by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(&self.values[idx])
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Whether the series holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pair up two columns as plot points, or `None` when either column is
    /// missing (a series whose schema diverges from the canonical one).
    pub fn points(&self, x_col: &str, y_col: &str) -> Option<Vec<[f64; 2]>> {
        let xs = self.column(x_col)?;
        let ys = self.column(y_col)?;
        Some(xs.iter().zip(ys.iter()).map(|(&x, &y)| [x, y]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Series {
        Series {
            label: "demo.csv".to_string(),
            columns: vec!["t".to_string(), "fps".to_string(), "ms".to_string()],
            values: vec![
                vec![0.0, 1.0, 2.0],
                vec![60.0, 59.0, 61.0],
                vec![16.6, 16.9, 16.4],
            ],
        }
    }

    #[test]
    fn column_lookup_by_name() {
        let s = demo();
        assert_eq!(s.column("fps"), Some(&[60.0, 59.0, 61.0][..]));
        assert_eq!(s.column("nope"), None);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn points_pair_x_with_selected_y() {
        let s = demo();
        let pts = s.points("t", "ms").unwrap();
        assert_eq!(pts, vec![[0.0, 16.6], [1.0, 16.9], [2.0, 16.4]]);
        assert!(s.points("t", "missing").is_none());
    }
}
