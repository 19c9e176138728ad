//! Grouped Box+Violin Chart
//!
//! One violin per distinct category in first-seen order, each with the box
//! and mean line overlaid and a palette color by trace index.

use super::figure::Figure;
use super::theme;
use super::trace::Violin;
use crate::error::{AppError, Result};
use crate::models::Table;
use crate::palette::color_at;

pub fn box_violin(table: &Table, x_col: &str, y_col: &str, title: &str) -> Result<Figure> {
    if table.n_rows() == 0 {
        return Err(AppError::NoData(format!("no rows to plot for '{}'", title)));
    }

    let labels = table.text(x_col)?;
    let values = table.numeric(y_col)?;

    let mut categories: Vec<&String> = Vec::new();
    for label in labels {
        if !categories.contains(&label) {
            categories.push(label);
        }
    }

    let mut figure = Figure::new(theme::dark_layout_xy(title, x_col, y_col));
    for (i, category) in categories.iter().enumerate() {
        let (xs, ys): (Vec<String>, Vec<f64>) = labels
            .iter()
            .zip(values)
            .filter(|(label, _)| *label == *category)
            .map(|(label, value)| (label.clone(), *value))
            .unzip();
        figure.add_trace(&Violin::new(xs, ys, category.as_str(), color_at(i)))?;
    }

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_csv("coin,price\na,1.0\nb,2.0\na,3.0").unwrap()
    }

    #[test]
    fn test_one_violin_per_category_in_first_seen_order() {
        let figure = box_violin(&sample(), "coin", "price", "Prices").unwrap();

        assert_eq!(figure.n_traces(), 2);
        assert_eq!(figure.data[0]["name"], "a");
        assert_eq!(figure.data[1]["name"], "b");
        assert_eq!(figure.data[0]["y"], serde_json::json!([1.0, 3.0]));
    }

    #[test]
    fn test_palette_colors_by_trace_index() {
        let figure = box_violin(&sample(), "coin", "price", "Prices").unwrap();

        assert_eq!(figure.data[0]["line"]["color"], "#00FFFF");
        assert_eq!(figure.data[1]["line"]["color"], "#00FF00");
    }

    #[test]
    fn test_market_table_gets_twenty_violins_with_wrapped_colors() {
        let market = crate::services::load_market().unwrap();
        let figure = box_violin(&market, "Altcoin", "Price", "Prices").unwrap();

        assert_eq!(figure.n_traces(), 20);
        assert_eq!(figure.data[0]["name"], "Aergo (AERGO)");
        assert_eq!(figure.data[19]["name"], "Reserve (RSV)");
        assert_eq!(
            figure.data[8]["line"]["color"], figure.data[0]["line"]["color"],
            "ninth trace reuses the first palette color"
        );
    }

    #[test]
    fn test_empty_table_is_no_data() {
        let empty = Table::from_csv("coin,price\n").unwrap();

        assert!(matches!(
            box_violin(&empty, "coin", "price", "Prices"),
            Err(AppError::NoData(_))
        ));
    }

    #[test]
    fn test_layout_is_themed() {
        let figure = box_violin(&sample(), "coin", "price", "Prices").unwrap();

        assert_eq!(figure.layout.plot_bgcolor, "black");
        assert_eq!(figure.layout.font.color, "white");
        assert_eq!(figure.layout.title.text, "Prices");
    }
}
