//! Trace Types
//!
//! One struct per plotly trace type used by the chart sequence. Each carries a
//! `type` tag so the serialized form is a complete plotly trace object.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct Toggle {
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Per-segment colors, used by the sunburst marker.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentColors {
    pub colors: Vec<String>,
}

/// A line colored by a numeric series over a named colorscale.
#[derive(Debug, Clone, Serialize)]
pub struct ScaledLine {
    pub color: Vec<f64>,
    pub colorscale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
}

/// One violin shape for one category, with box and mean line overlaid.
#[derive(Debug, Clone, Serialize)]
pub struct Violin {
    #[serde(rename = "type")]
    kind: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "box")]
    pub box_overlay: Toggle,
    pub meanline: Toggle,
    pub line: Line,
}

impl Violin {
    pub fn new(x: Vec<String>, y: Vec<f64>, name: &str, color: &str) -> Self {
        Violin {
            kind: "violin",
            x,
            y,
            name: name.to_string(),
            box_overlay: Toggle { visible: true },
            meanline: Toggle { visible: true },
            line: Line {
                color: color.to_string(),
            },
        }
    }
}

/// Box-and-whisker distributions, grouped by the categorical x values.
#[derive(Debug, Clone, Serialize)]
pub struct BoxTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: Marker,
}

impl BoxTrace {
    pub fn new(x: Vec<String>, y: Vec<f64>, color: &str) -> Self {
        BoxTrace {
            kind: "box",
            x,
            y,
            marker: Marker {
                color: color.to_string(),
                size: None,
            },
        }
    }
}

/// Single-level sunburst: every label is a root segment sized by its value.
#[derive(Debug, Clone, Serialize)]
pub struct SunburstTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    pub marker: SegmentColors,
}

impl SunburstTrace {
    pub fn new(labels: Vec<String>, values: Vec<f64>, colors: Vec<String>) -> Self {
        let parents = vec![String::new(); labels.len()];
        SunburstTrace {
            kind: "sunburst",
            labels,
            parents,
            values,
            marker: SegmentColors { colors },
        }
    }
}

/// Marker scatter with optional hover text per point.
#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    #[serde(rename = "type")]
    kind: &'static str,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    pub marker: Marker,
}

impl Scatter {
    pub fn markers(x: Vec<f64>, y: Vec<f64>, name: &str, color: &str, size: f64) -> Self {
        Scatter {
            kind: "scatter",
            mode: "markers",
            x,
            y,
            name: name.to_string(),
            text: Vec::new(),
            marker: Marker {
                color: color.to_string(),
                size: Some(size),
            },
        }
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }
}

/// One numeric axis of a parallel-coordinates trace.
#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parcoords {
    #[serde(rename = "type")]
    kind: &'static str,
    pub dimensions: Vec<Dimension>,
    pub line: ScaledLine,
}

impl Parcoords {
    pub fn new(dimensions: Vec<Dimension>, line: ScaledLine) -> Self {
        Parcoords {
            kind: "parcoords",
            dimensions,
            line,
        }
    }
}

/// One axis of a parallel-categories trace. Values may be text or numeric.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDimension {
    pub label: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parcats {
    #[serde(rename = "type")]
    kind: &'static str,
    pub dimensions: Vec<CategoryDimension>,
    pub line: ScaledLine,
}

impl Parcats {
    pub fn new(dimensions: Vec<CategoryDimension>, line: ScaledLine) -> Self {
        Parcats {
            kind: "parcats",
            dimensions,
            line,
        }
    }
}

/// Heatmap over either a matrix (correlation) or three parallel series
/// (density), matching what plotly accepts for `z`, `x`, and `y`.
#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    #[serde(rename = "type")]
    kind: &'static str,
    pub z: Value,
    pub x: Value,
    pub y: Value,
    pub colorscale: String,
}

impl Heatmap {
    pub fn matrix(z: Vec<Vec<f64>>, labels: Vec<String>, colorscale: &str) -> Self {
        Heatmap {
            kind: "heatmap",
            z: serde_json::json!(z),
            x: serde_json::json!(labels),
            y: serde_json::json!(labels),
            colorscale: colorscale.to_string(),
        }
    }

    pub fn series(z: Vec<f64>, x: Vec<f64>, y: Vec<f64>, colorscale: &str) -> Self {
        Heatmap {
            kind: "heatmap",
            z: serde_json::json!(z),
            x: serde_json::json!(x),
            y: serde_json::json!(y),
            colorscale: colorscale.to_string(),
        }
    }
}
