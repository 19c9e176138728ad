//! Plain Boxplot
//!
//! Box-and-whisker distribution per categorical value along the x-axis, as a
//! single grouped trace.

use super::figure::Figure;
use super::theme;
use super::trace::BoxTrace;
use crate::error::{AppError, Result};
use crate::models::Table;
use crate::palette::color_at;

pub fn boxplot(table: &Table, x_col: &str, y_col: &str, title: &str) -> Result<Figure> {
    if table.n_rows() == 0 {
        return Err(AppError::NoData(format!("no rows to plot for '{}'", title)));
    }

    let labels = table.text(x_col)?.to_vec();
    let values = table.numeric(y_col)?.to_vec();

    let mut figure = Figure::new(theme::dark_layout_xy(title, x_col, y_col));
    figure.add_trace(&BoxTrace::new(labels, values, color_at(0)))?;
    Ok(figure)
}
