use healthd_theme::Color;

/// Framebuffer text primitives the charging screen draws through.
pub trait DisplaySurface {
    /// Fixed-font cell size as `(width, height)` in pixels.
    fn font_size(&self) -> (i32, i32);
    /// Pixel width of `text` in the current font.
    fn measure(&self, text: &str) -> i32;
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn set_color(&mut self, color: Color);
    /// Draw `text` with its baseline at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, bold: bool);
}
