//! Correlation Heatmap
//!
//! Pairwise Pearson correlation over the table's numeric columns, rendered as
//! a Viridis heatmap labeled by column name. With fewer than two numeric
//! columns there is nothing to correlate, so the chart is skipped rather than
//! rendered degenerate.

use super::figure::Figure;
use super::theme;
use super::trace::Heatmap;
use crate::error::{AppError, Result};
use crate::models::Table;
use crate::services::stats;
use tracing::warn;

pub fn correlation_heatmap(table: &Table, title: &str) -> Result<Option<Figure>> {
    let numeric = table.numeric_columns();
    if numeric.len() < 2 {
        warn!(
            "skipping '{}': {} numeric column(s), need at least 2",
            title,
            numeric.len()
        );
        return Ok(None);
    }
    if table.n_rows() == 0 {
        return Err(AppError::NoData(format!("no rows to plot for '{}'", title)));
    }

    let labels: Vec<String> = numeric.iter().map(|c| c.name.clone()).collect();
    let matrix = stats::correlation_matrix(&numeric);

    let mut figure = Figure::new(theme::dark_layout(title));
    figure.add_trace(&Heatmap::matrix(matrix, labels, "Viridis"))?;
    Ok(Some(figure))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_is_labeled_by_numeric_columns() {
        let table = Table::from_csv("coin,a,b\nx,1,2\ny,2,1\nz,3,5").unwrap();
        let figure = correlation_heatmap(&table, "Corr").unwrap().unwrap();

        let trace = &figure.data[0];
        assert_eq!(trace["type"], "heatmap");
        assert_eq!(trace["x"], serde_json::json!(["a", "b"]));
        assert_eq!(trace["y"], serde_json::json!(["a", "b"]));
        assert_eq!(trace["colorscale"], "Viridis");
    }

    #[test]
    fn test_diagonal_is_one() {
        let table = Table::from_csv("coin,a,b\nx,1,2\ny,2,1\nz,3,5").unwrap();
        let figure = correlation_heatmap(&table, "Corr").unwrap().unwrap();

        let z = figure.data[0]["z"].as_array().unwrap();
        for (i, row) in z.iter().enumerate() {
            let v = row[i].as_f64().unwrap();
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_numeric_column_is_skipped() {
        let table = Table::from_csv("coin,a\nx,1\ny,2").unwrap();

        assert!(correlation_heatmap(&table, "Corr").unwrap().is_none());
    }

    #[test]
    fn test_all_text_table_is_skipped() {
        let table = Table::from_csv("coin,tag\nx,red\ny,blue").unwrap();

        assert!(correlation_heatmap(&table, "Corr").unwrap().is_none());
    }
}
