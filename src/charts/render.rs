//! Figure Rendering
//!
//! Turns a finished figure into a standalone HTML page (plotly.js from CDN)
//! and writes it into the output directory as `NN_slug.html`, numbering pages
//! in render order. With `open` set, each page is also opened in the default
//! browser; a missing browser is fatal since there is no other display path.

use super::figure::Figure;
use crate::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

pub struct Renderer {
    out_dir: PathBuf,
    open: bool,
    count: usize,
}

impl Renderer {
    pub fn new(out_dir: &Path, open: bool) -> Result<Self> {
        fs::create_dir_all(out_dir)
            .map_err(|e| AppError::Render(format!("cannot create {}: {}", out_dir.display(), e)))?;
        Ok(Renderer {
            out_dir: out_dir.to_path_buf(),
            open,
            count: 0,
        })
    }

    /// Number of figures rendered so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Write one figure and optionally open it. Blocks until both complete.
    pub fn show(&mut self, figure: &Figure, slug: &str) -> Result<PathBuf> {
        self.count += 1;
        let path = self.out_dir.join(format!("{:02}_{}.html", self.count, slug));
        fs::write(&path, to_html(figure)?)
            .map_err(|e| AppError::Render(format!("cannot write {}: {}", path.display(), e)))?;
        info!("wrote {}", path.display());

        if self.open {
            let url = format!("file://{}", path.display());
            webbrowser::open(&url)
                .map_err(|e| AppError::Render(format!("cannot open browser: {}", e)))?;
        }
        Ok(path)
    }
}

/// Standalone HTML page for one figure.
pub fn to_html(figure: &Figure) -> Result<String> {
    let json = figure.to_json()?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
<style>html, body {{ margin: 0; height: 100%; background: black; }} #chart {{ height: 100%; }}</style>
</head>
<body>
<div id="chart"></div>
<script>
const figure = {json};
Plotly.newPlot("chart", figure.data, figure.layout, {{ responsive: true }});
</script>
</body>
</html>
"#,
        title = figure.layout.title.text,
        cdn = PLOTLY_CDN,
        json = json,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::theme;

    #[test]
    fn test_to_html_embeds_figure_json() {
        let figure = Figure::new(theme::dark_layout("Test Chart"));
        let html = to_html(&figure).unwrap();

        assert!(html.contains("<title>Test Chart</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains(r#""plot_bgcolor":"black""#));
        assert!(html.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_renderer_numbers_pages_in_order() {
        // Unique per process so parallel suite runs cannot race on the dir.
        let out_dir =
            std::env::temp_dir().join(format!("altviz_render_test_{}", std::process::id()));
        let _ = fs::remove_dir_all(&out_dir);

        let mut renderer = Renderer::new(&out_dir, false).unwrap();
        let figure = Figure::new(theme::dark_layout("t"));
        let first = renderer.show(&figure, "first").unwrap();
        let second = renderer.show(&figure, "second").unwrap();

        assert!(first.ends_with("01_first.html"));
        assert!(second.ends_with("02_second.html"));
        assert_eq!(renderer.count(), 2);
        assert!(first.exists());
        assert!(second.exists());

        let _ = fs::remove_dir_all(&out_dir);
    }
}
