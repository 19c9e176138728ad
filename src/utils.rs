use std::path::PathBuf;

/// Get chart output directory from environment variable or use default
pub fn get_charts_dir() -> PathBuf {
    std::env::var("ALTVIZ_CHARTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("charts"))
}
