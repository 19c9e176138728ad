//! Dark Neon Palette
//!
//! Fixed ordered set of eight colors shared by every chart. Categories beyond
//! the eighth wrap around, so any number of traces can be colored.

/// The eight neon colors, in assignment order.
pub const NEON_PALETTE: [&str; 8] = [
    "#00FFFF", "#00FF00", "#FF00FF", "#FFFF00", "#008080", "#008000", "#800080", "#808000",
];

/// Color for the i-th category. Cyclic with period 8.
pub fn color_at(i: usize) -> &'static str {
    NEON_PALETTE[i % NEON_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_at_matches_palette_order() {
        for (i, expected) in NEON_PALETTE.iter().enumerate() {
            assert_eq!(color_at(i), *expected);
        }
    }

    #[test]
    fn test_color_at_is_periodic() {
        for i in 0..32 {
            assert_eq!(color_at(i), color_at(i + 8), "palette must repeat every 8 colors");
        }
    }
}
