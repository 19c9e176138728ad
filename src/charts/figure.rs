//! Figure and Layout Model
//!
//! A `Figure` is the serializable description of one chart: a list of traces
//! plus a layout. The JSON shape follows the plotly schema so the rendered
//! page can hand it straight to `Plotly.newPlot`.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Title {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: String,
}

/// Chart layout: title, optional axis titles, and theme colors.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
}

/// One chart: traces plus layout. Traces are stored pre-serialized so figures
/// with mixed trace types stay a single homogeneous list.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Figure {
            data: Vec::new(),
            layout,
        }
    }

    pub fn add_trace<T: Serialize>(&mut self, trace: &T) -> Result<()> {
        self.data.push(serde_json::to_value(trace)?);
        Ok(())
    }

    pub fn n_traces(&self) -> usize {
        self.data.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
