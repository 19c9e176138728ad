//! Correlation Statistics
//!
//! Pearson correlation over table columns, used by the correlation heatmap.

use crate::models::Column;

/// Pearson correlation coefficient of two equal-length series.
///
/// Returns 0.0 when either series has zero variance or fewer than two
/// observations; the heatmap treats that as "no linear relationship" rather
/// than propagating a NaN into the chart.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}

/// Pairwise correlation matrix over numeric columns, in the given order.
pub fn correlation_matrix(columns: &[&Column]) -> Vec<Vec<f64>> {
    use crate::models::ColumnValues;

    let series: Vec<&[f64]> = columns
        .iter()
        .filter_map(|c| match &c.values {
            ColumnValues::Numeric(v) => Some(v.as_slice()),
            ColumnValues::Text(_) => None,
        })
        .collect();

    series
        .iter()
        .map(|a| series.iter().map(|b| pearson(a, b)).collect())
        .collect()
}
