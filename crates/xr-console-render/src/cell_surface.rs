//! Terminal-cell raster surface
//!
//! Maps the console's pixel coordinates onto a grid of character cells held
//! in a ratatui [`Buffer`], so the panel can be shown on a headless display
//! or inside a terminal frame. One cell covers `cell_width × cell_height`
//! pixels and holds one glyph.

use crate::error::SurfaceError;
use crate::layout::LINE_SPACING;
use crate::surface::{GlyphMetrics, Surface};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

pub const DEFAULT_CELL_WIDTH: u32 = 8;
pub const DEFAULT_CELL_HEIGHT: u32 = 16;

#[derive(Debug, Clone)]
pub struct CellSurface {
    cell_width: u32,
    cell_height: u32,
    /// Frame being painted
    back: Buffer,
    /// Last published image
    front: Buffer,
    frames_published: u64,
}

impl CellSurface {
    /// Surface covering `pixel_width × pixel_height` pixels
    pub fn new(pixel_width: u32, pixel_height: u32, cell_width: u32, cell_height: u32) -> Self {
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);
        let cols = (pixel_width / cell_width).min(u16::MAX as u32) as u16;
        let rows = (pixel_height / cell_height).min(u16::MAX as u32) as u16;
        let area = Rect::new(0, 0, cols, rows);
        Self {
            cell_width,
            cell_height,
            back: Buffer::empty(area),
            front: Buffer::empty(area),
            frames_published: 0,
        }
    }

    /// Surface with exactly `cols × rows` cells of the default size
    pub fn with_cells(cols: u16, rows: u16) -> Self {
        Self::new(
            cols as u32 * DEFAULT_CELL_WIDTH,
            rows as u32 * DEFAULT_CELL_HEIGHT,
            DEFAULT_CELL_WIDTH,
            DEFAULT_CELL_HEIGHT,
        )
    }

    pub fn area(&self) -> Rect {
        self.front.area
    }

    /// The most recently published image
    pub fn published(&self) -> &Buffer {
        &self.front
    }

    pub fn frames_published(&self) -> u64 {
        self.frames_published
    }

    /// Text of one published row, trailing blanks trimmed
    pub fn row_text(&self, row: u16) -> String {
        let area = self.front.area;
        if row >= area.height {
            return String::new();
        }
        let text: String = (0..area.width)
            .map(|col| self.front[(col, row)].symbol())
            .collect();
        text.trim_end().to_string()
    }

    fn column_for(&self, x: f64) -> i64 {
        (x / self.cell_width as f64).floor() as i64
    }

    /// Row whose bottom edge sits at pixel `y`
    fn row_for(&self, y: f64) -> i64 {
        (y / self.cell_height as f64).round() as i64 - 1
    }
}

impl Surface for CellSurface {
    fn begin_frame(&mut self) -> Result<(), SurfaceError> {
        let area = self.back.area;
        if area.width == 0 || area.height == 0 {
            return Err(SurfaceError::Unavailable(format!(
                "surface has no cells ({}x{})",
                area.width, area.height
            )));
        }
        Ok(())
    }

    fn fill_background(&mut self, color: Color) {
        self.back.reset();
        let area = self.back.area;
        self.back.set_style(area, Style::default().bg(color));
    }

    fn measure_glyph(&self, _glyph: char, _font_size: f64) -> GlyphMetrics {
        // one glyph per cell regardless of font size
        GlyphMetrics {
            width: self.cell_width as f64,
            ascent: self.cell_height as f64 / LINE_SPACING,
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
        let area = self.back.area;
        let col = self.column_for(x);
        let row = self.row_for(y);
        if row < 0 || row >= area.height as i64 || col >= area.width as i64 {
            return;
        }

        // clip glyphs left of the surface
        let skip = (-col).max(0) as usize;
        let col = col.max(0) as u16;
        let visible: String = text.chars().skip(skip).collect();
        let max_width = (area.width - col) as usize;
        self.back.set_stringn(
            col,
            row as u16,
            visible,
            max_width,
            Style::default().fg(color),
        );
    }

    fn publish(&mut self) -> Result<(), SurfaceError> {
        self.front = self.back.clone();
        self.frames_published += 1;
        Ok(())
    }
}
