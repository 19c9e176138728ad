//! Render Command
//!
//! Builds the fixed chart sequence against the two embedded tables and writes
//! each figure out in order. Building is separated from rendering: the whole
//! sequence is assembled first, then handed to the renderer one page at a
//! time.

use crate::charts::figure::Figure;
use crate::charts::trace::{
    CategoryDimension, Dimension, Heatmap, Parcats, Parcoords, ScaledLine, Scatter,
};
use crate::charts::{box_violin, boxplot, correlation_heatmap, sunburst, theme, Renderer};
use crate::constants::{activity_col, market_col};
use crate::error::{AppError, Result};
use crate::models::Table;
use crate::palette::color_at;
use crate::services::{load_activity, load_market};
use std::path::Path;
use tracing::info;

pub fn run(out_dir: &Path, open: bool) {
    println!("📊 Rendering altcoin charts\n");

    match render_all(out_dir, open) {
        Ok(count) => {
            println!("\n✅ {} charts written to {}/", count, out_dir.display());
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn render_all(out_dir: &Path, open: bool) -> Result<usize> {
    let market = load_market()?;
    let activity = load_activity()?;
    info!(
        "loaded {} market rows, {} activity rows",
        market.n_rows(),
        activity.n_rows()
    );

    let figures = build_figures(&market, &activity)?;

    let mut renderer = Renderer::new(out_dir, open)?;
    for (slug, figure) in &figures {
        println!("  🖼  {}", figure.layout.title.text);
        renderer.show(figure, slug)?;
    }
    Ok(renderer.count())
}

/// The full chart sequence, in its fixed order. Pure: no IO, no display.
fn build_figures(market: &Table, activity: &Table) -> Result<Vec<(&'static str, Figure)>> {
    let mut figures = vec![
        (
            "market_cap_sunburst",
            sunburst(
                market,
                market_col::MARKET_CAP,
                market_col::ALTCOIN,
                "Altcoin Market Cap",
            )?,
        ),
        (
            "volume_boxplot",
            boxplot(
                market,
                market_col::ALTCOIN,
                market_col::VOLUME,
                "24h Volume Distribution",
            )?,
        ),
        (
            "price_violin",
            box_violin(
                market,
                market_col::ALTCOIN,
                market_col::PRICE,
                "Altcoin Price Distribution (USD)",
            )?,
        ),
        ("price_volume_scatter", price_volume_scatter(market)?),
        ("market_parcoords", market_parcoords(market)?),
        ("market_density", density_heatmap(market)?),
        (
            "commits_violin",
            box_violin(
                activity,
                activity_col::ALTCOIN,
                activity_col::COMMITS,
                "Commits per Altcoin",
            )?,
        ),
    ];

    if let Some(figure) =
        correlation_heatmap(activity, "Correlation Matrix - Repository Activity")?
    {
        figures.push(("activity_correlation", figure));
    }

    figures.push(("activity_parcats", activity_parcats(activity)?));
    Ok(figures)
}

/// Price against 24h volume, one trace per altcoin so the legend lists every
/// asset, marker area proportional to market cap, 24h change in hover text.
fn price_volume_scatter(market: &Table) -> Result<Figure> {
    if market.n_rows() == 0 {
        return Err(AppError::NoData("no rows for price-volume scatter".to_string()));
    }

    let names = market.text(market_col::ALTCOIN)?;
    let prices = market.numeric(market_col::PRICE)?;
    let volumes = market.numeric(market_col::VOLUME)?;
    let caps = market.numeric(market_col::MARKET_CAP)?;
    let changes = market.numeric(market_col::CHANGE)?;
    let max_cap = caps.iter().cloned().fold(0.0, f64::max);

    let mut figure = Figure::new(theme::dark_layout_xy(
        "Price vs Volume",
        market_col::PRICE,
        market_col::VOLUME,
    ));
    for (i, name) in names.iter().enumerate() {
        let trace = Scatter::markers(
            vec![prices[i]],
            vec![volumes[i]],
            name,
            color_at(i),
            marker_size(caps[i], max_cap),
        )
        .with_text(vec![format!("Change (24h): {:+.1}%", changes[i])]);
        figure.add_trace(&trace)?;
    }
    Ok(figure)
}

/// Marker diameter in pixels, area proportional to value / max.
fn marker_size(value: f64, max: f64) -> f64 {
    const MIN_PX: f64 = 6.0;
    const MAX_PX: f64 = 40.0;
    if max <= 0.0 {
        return MIN_PX;
    }
    MIN_PX + (value / max).clamp(0.0, 1.0).sqrt() * (MAX_PX - MIN_PX)
}

/// Parallel coordinates over the four market metrics, lines colored by 24h
/// change on a diverging scale centered at zero.
fn market_parcoords(market: &Table) -> Result<Figure> {
    if market.n_rows() == 0 {
        return Err(AppError::NoData("no rows for parallel coordinates".to_string()));
    }

    let dimensions = [
        market_col::PRICE,
        market_col::VOLUME,
        market_col::MARKET_CAP,
        market_col::CHANGE,
    ]
    .iter()
    .map(|name| {
        Ok(Dimension {
            label: name.to_string(),
            values: market.numeric(name)?.to_vec(),
        })
    })
    .collect::<Result<Vec<_>>>()?;

    let changes = market.numeric(market_col::CHANGE)?.to_vec();
    let spread = changes.iter().fold(0.0f64, |m, c| m.max(c.abs())).max(1.0);
    let line = ScaledLine {
        color: changes,
        colorscale: "RdBu".to_string(),
        cmin: Some(-spread),
        cmax: Some(spread),
    };

    let mut figure = Figure::new(theme::dark_layout("Parallel Coordinates - Market Metrics"));
    figure.add_trace(&Parcoords::new(dimensions, line))?;
    Ok(figure)
}

/// Market cap density over the price/volume plane.
fn density_heatmap(market: &Table) -> Result<Figure> {
    if market.n_rows() == 0 {
        return Err(AppError::NoData("no rows for density heatmap".to_string()));
    }

    let mut figure = Figure::new(theme::dark_layout_xy(
        "Density Heatmap",
        market_col::PRICE,
        market_col::VOLUME,
    ));
    figure.add_trace(&Heatmap::series(
        market.numeric(market_col::MARKET_CAP)?.to_vec(),
        market.numeric(market_col::PRICE)?.to_vec(),
        market.numeric(market_col::VOLUME)?.to_vec(),
        "Viridis",
    ))?;
    Ok(figure)
}

/// Parallel categories over asset name and the three count metrics, lines
/// colored by community activity score.
fn activity_parcats(activity: &Table) -> Result<Figure> {
    if activity.n_rows() == 0 {
        return Err(AppError::NoData("no rows for parallel categories".to_string()));
    }

    let mut dimensions = vec![CategoryDimension {
        label: activity_col::ALTCOIN.to_string(),
        values: activity
            .text(activity_col::ALTCOIN)?
            .iter()
            .map(|name| serde_json::json!(name))
            .collect(),
    }];
    for name in [
        activity_col::COMMITS,
        activity_col::OPEN_ISSUES,
        activity_col::PULL_REQUESTS,
    ] {
        dimensions.push(CategoryDimension {
            label: name.to_string(),
            values: activity
                .numeric(name)?
                .iter()
                .map(|v| serde_json::json!(v))
                .collect(),
        });
    }

    let line = ScaledLine {
        color: activity.numeric(activity_col::ACTIVITY_SCORE)?.to_vec(),
        colorscale: "Plasma".to_string(),
        cmin: None,
        cmax: None,
    };

    let mut figure = Figure::new(theme::dark_layout(
        "Parallel Categories - Repository Activity",
    ));
    figure.add_trace(&Parcats::new(dimensions, line))?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_has_nine_figures_in_fixed_order() {
        let market = load_market().unwrap();
        let activity = load_activity().unwrap();
        let figures = build_figures(&market, &activity).unwrap();

        let slugs: Vec<&str> = figures.iter().map(|(slug, _)| *slug).collect();
        assert_eq!(
            slugs,
            vec![
                "market_cap_sunburst",
                "volume_boxplot",
                "price_violin",
                "price_volume_scatter",
                "market_parcoords",
                "market_density",
                "commits_violin",
                "activity_correlation",
                "activity_parcats",
            ]
        );
    }

    #[test]
    fn test_scatter_has_one_trace_per_asset() {
        let market = load_market().unwrap();
        let figure = price_volume_scatter(&market).unwrap();

        assert_eq!(figure.n_traces(), 20);
        assert_eq!(figure.data[0]["name"], "Aergo (AERGO)");
    }

    #[test]
    fn test_scatter_marker_sizes_are_positive_and_finite() {
        let market = load_market().unwrap();
        let figure = price_volume_scatter(&market).unwrap();

        for trace in &figure.data {
            let size = trace["marker"]["size"].as_f64().unwrap();
            assert!(size.is_finite() && size > 0.0);
        }
    }

    #[test]
    fn test_marker_size_bounds() {
        assert_eq!(marker_size(0.0, 100.0), 6.0);
        assert_eq!(marker_size(100.0, 100.0), 40.0);
        assert_eq!(marker_size(50.0, 0.0), 6.0);
    }

    #[test]
    fn test_parcoords_color_range_is_centered_at_zero() {
        let market = load_market().unwrap();
        let figure = market_parcoords(&market).unwrap();

        let line = &figure.data[0]["line"];
        let cmin = line["cmin"].as_f64().unwrap();
        let cmax = line["cmax"].as_f64().unwrap();
        assert_eq!(cmin, -cmax);
        assert!(cmax > 0.0);
    }

    #[test]
    fn test_parcats_preserves_row_order() {
        let activity = load_activity().unwrap();
        let figure = activity_parcats(&activity).unwrap();

        let dims = figure.data[0]["dimensions"].as_array().unwrap();
        assert_eq!(dims.len(), 4);
        assert_eq!(dims[0]["label"], "Altcoin");
        assert_eq!(dims[0]["values"][0], "Aergo (AERGO)");
        assert_eq!(dims[1]["values"][0], 180.0);
    }

    #[test]
    fn test_density_heatmap_uses_parallel_series() {
        let market = load_market().unwrap();
        let figure = density_heatmap(&market).unwrap();

        let trace = &figure.data[0];
        assert_eq!(trace["type"], "heatmap");
        assert_eq!(trace["z"].as_array().unwrap().len(), 20);
        assert_eq!(trace["x"].as_array().unwrap().len(), 20);
    }
}
