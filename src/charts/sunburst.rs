//! Sunburst Chart
//!
//! Single-level hierarchical proportion chart: one root segment per category,
//! area proportional to the numeric column, palette segment colors.

use super::figure::Figure;
use super::theme;
use super::trace::SunburstTrace;
use crate::error::{AppError, Result};
use crate::models::Table;
use crate::palette::color_at;

pub fn sunburst(table: &Table, values_col: &str, names_col: &str, title: &str) -> Result<Figure> {
    if table.n_rows() == 0 {
        return Err(AppError::NoData(format!("no rows to plot for '{}'", title)));
    }

    let labels = table.text(names_col)?.to_vec();
    let values = table.numeric(values_col)?.to_vec();
    let colors = (0..labels.len())
        .map(|i| color_at(i).to_string())
        .collect();

    let mut figure = Figure::new(theme::dark_layout(title));
    figure.add_trace(&SunburstTrace::new(labels, values, colors))?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_match_rows() {
        let table = Table::from_csv("coin,cap\na,10\nb,30").unwrap();
        let figure = sunburst(&table, "cap", "coin", "Caps").unwrap();

        assert_eq!(figure.n_traces(), 1);
        let trace = &figure.data[0];
        assert_eq!(trace["type"], "sunburst");
        assert_eq!(trace["labels"], serde_json::json!(["a", "b"]));
        assert_eq!(trace["values"], serde_json::json!([10.0, 30.0]));
        assert_eq!(
            trace["marker"]["colors"],
            serde_json::json!(["#00FFFF", "#00FF00"])
        );
    }

    #[test]
    fn test_colors_wrap_past_palette_length() {
        let mut csv = String::from("coin,cap\n");
        for i in 0..10 {
            csv.push_str(&format!("c{},1\n", i));
        }
        let table = Table::from_csv(&csv).unwrap();
        let figure = sunburst(&table, "cap", "coin", "Caps").unwrap();

        let colors = &figure.data[0]["marker"]["colors"];
        assert_eq!(colors[8], colors[0], "ninth segment reuses the first color");
    }

    #[test]
    fn test_empty_table_is_no_data() {
        let empty = Table::from_csv("coin,cap\n").unwrap();

        assert!(matches!(
            sunburst(&empty, "cap", "coin", "Caps"),
            Err(AppError::NoData(_))
        ));
    }
}
