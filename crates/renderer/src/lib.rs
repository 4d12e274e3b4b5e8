//! Charging-screen drawing on top of a [`DisplaySurface`].

pub mod glyph;
pub mod surface;

pub use glyph::BatteryGlyphRenderer;
pub use surface::DisplaySurface;
