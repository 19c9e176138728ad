//! Dark Theme
//!
//! Every chart shares the same black background and white font; category
//! colors come from the neon palette.

use super::figure::{Axis, Font, Layout, Title};

pub const PLOT_BG: &str = "black";
pub const PAPER_BG: &str = "black";
pub const FONT_COLOR: &str = "white";

/// Themed layout with a title only.
pub fn dark_layout(title: &str) -> Layout {
    Layout {
        title: Title::new(title),
        xaxis: None,
        yaxis: None,
        plot_bgcolor: PLOT_BG.to_string(),
        paper_bgcolor: PAPER_BG.to_string(),
        font: Font {
            color: FONT_COLOR.to_string(),
        },
    }
}

/// Themed layout with axis titles.
pub fn dark_layout_xy(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout {
        xaxis: Some(Axis {
            title: Title::new(x_title),
        }),
        yaxis: Some(Axis {
            title: Title::new(y_title),
        }),
        ..dark_layout(title)
    }
}
