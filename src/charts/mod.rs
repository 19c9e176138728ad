//! Chart Construction and Rendering
//!
//! Figures are plain data: typed structs that serialize to the plotly JSON
//! schema. Building a figure never touches a display surface, so every helper
//! here is unit-testable; `render` turns a finished figure into an HTML page.

mod box_violin;
mod boxplot;
mod correlation;
pub mod figure;
pub mod render;
mod sunburst;
pub mod theme;
pub mod trace;

pub use box_violin::box_violin;
pub use boxplot::boxplot;
pub use correlation::correlation_heatmap;
pub use figure::Figure;
pub use render::Renderer;
pub use sunburst::sunburst;
