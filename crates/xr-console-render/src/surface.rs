//! Drawing capability consumed by the renderer

use crate::error::SurfaceError;
use ratatui::style::Color;

/// Size of one measured glyph in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub width: f64,
    /// Height above the baseline
    pub ascent: f64,
}

/// A 2D pixel target the console paints into
///
/// Each render pass fully overwrites the surface: `begin_frame`, then
/// `fill_background`, any number of `fill_text` calls, then `publish` to
/// replace the image consumers see.
pub trait Surface {
    /// Acquire the painting capability for a new frame
    fn begin_frame(&mut self) -> Result<(), SurfaceError>;

    /// Clear the whole surface to `color`
    fn fill_background(&mut self, color: Color);

    /// Metrics of `glyph` in a monospace font of `font_size` pixels
    fn measure_glyph(&self, glyph: char, font_size: f64) -> GlyphMetrics;

    /// Draw `text` with its left edge at `x` and its bottom at `y`
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color);

    /// Replace the published image with the frame painted since `begin_frame`
    fn publish(&mut self) -> Result<(), SurfaceError>;
}
