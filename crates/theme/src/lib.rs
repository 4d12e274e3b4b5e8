pub mod colors;

pub use colors::Color;

use healthd_config::ThemeConfig;

/// Compiled charging-screen theme derived from [`ThemeConfig`].
///
/// Invalid color strings fall back to the stock glyph green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargerTheme {
    pub glyph: Color,
}

impl ChargerTheme {
    /// Build a [`ChargerTheme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let glyph = Color::from_hex(&cfg.glyph_color).unwrap_or_else(|| {
            tracing::warn!("invalid glyph_color '{}'; using default", cfg.glyph_color);
            Color::ANDROID_GREEN
        });
        Self { glyph }
    }
}

impl Default for ChargerTheme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
