use crate::surface::DisplaySurface;
use healthd_theme::{ChargerTheme, Color};

/// Longest text drawn: the 7-byte buffer leaves room for six characters.
const MAX_TEXT_LEN: usize = 6;

/// Draws the battery percentage centred on the charging screen.
///
/// Font metrics are taken once at construction; the font is fixed for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryGlyphRenderer {
    char_width:  i32,
    char_height: i32,
    color:       Color,
}

impl BatteryGlyphRenderer {
    pub fn new(surface: &impl DisplaySurface, theme: &ChargerTheme) -> Self {
        let (char_width, char_height) = surface.font_size();
        Self { char_width, char_height, color: theme.glyph }
    }

    pub fn char_size(&self) -> (i32, i32) {
        (self.char_width, self.char_height)
    }

    /// Draw `"<level>%"`; `level` is expected in 0–100.
    pub fn draw_battery_percent(&self, level: i32, surface: &mut impl DisplaySurface) {
        let text = percent_text(level);
        let x = (surface.width() - surface.measure(&text)) / 2;
        let y = (surface.height() + self.char_height) / 2;

        surface.set_color(self.color);
        surface.draw_text(x, y, &text, false);
    }
}

fn percent_text(level: i32) -> String {
    let mut text = format!("{level}%");
    text.truncate(MAX_TEXT_LEN);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        font_queries: std::cell::Cell<u32>,
        colors:       Vec<Color>,
        texts:        Vec<(i32, i32, String)>,
    }

    impl DisplaySurface for RecordingSurface {
        fn font_size(&self) -> (i32, i32) {
            self.font_queries.set(self.font_queries.get() + 1);
            (10, 18)
        }

        fn measure(&self, text: &str) -> i32 {
            text.len() as i32 * 10
        }

        fn width(&self) -> i32 {
            480
        }

        fn height(&self) -> i32 {
            800
        }

        fn set_color(&mut self, color: Color) {
            self.colors.push(color);
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str, _bold: bool) {
            self.texts.push((x, y, text.to_string()));
        }
    }

    #[test]
    fn centres_percentage() {
        let mut surface = RecordingSurface::default();
        let renderer = BatteryGlyphRenderer::new(&surface, &ChargerTheme::default());

        renderer.draw_battery_percent(57, &mut surface);

        assert_eq!(surface.colors, [Color::rgba(0xa4, 0xc6, 0x39, 255)]);
        assert_eq!(surface.texts, [((480 - 30) / 2, (800 + 18) / 2, "57%".to_string())]);
    }

    #[test]
    fn metrics_queried_once() {
        let mut surface = RecordingSurface::default();
        let renderer = BatteryGlyphRenderer::new(&surface, &ChargerTheme::default());

        renderer.draw_battery_percent(0, &mut surface);
        renderer.draw_battery_percent(100, &mut surface);

        assert_eq!(surface.font_queries.get(), 1);
        assert_eq!(renderer.char_size(), (10, 18));
        assert_eq!(surface.texts[0].2, "0%");
        assert_eq!(surface.texts[1], ((480 - 40) / 2, 409, "100%".to_string()));
    }

    #[test]
    fn oversized_level_is_truncated() {
        assert_eq!(percent_text(-12345678), "-12345");
    }
}
