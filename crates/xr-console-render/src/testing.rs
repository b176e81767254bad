//! Recording surface used by renderer tests

use crate::error::SurfaceError;
use crate::surface::{GlyphMetrics, Surface};
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PaintCall {
    Begin,
    Background(Color),
    Text {
        text: String,
        x: f64,
        y: f64,
        color: Color,
    },
    Publish,
}

/// Surface with a 10x10 px glyph that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) calls: Vec<PaintCall>,
    pub(crate) publishes: usize,
    pub(crate) unavailable: bool,
    pub(crate) fail_publish: bool,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Text calls since the last frame began
    pub(crate) fn texts(&self) -> Vec<PaintCall> {
        let frame_start = self
            .calls
            .iter()
            .rposition(|call| *call == PaintCall::Begin)
            .unwrap_or(0);
        self.calls[frame_start..]
            .iter()
            .filter(|call| matches!(call, PaintCall::Text { .. }))
            .cloned()
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn begin_frame(&mut self) -> Result<(), SurfaceError> {
        if self.unavailable {
            return Err(SurfaceError::Unavailable("no context".to_string()));
        }
        self.calls.push(PaintCall::Begin);
        Ok(())
    }

    fn fill_background(&mut self, color: Color) {
        self.calls.push(PaintCall::Background(color));
    }

    fn measure_glyph(&self, _glyph: char, _font_size: f64) -> GlyphMetrics {
        GlyphMetrics {
            width: 10.0,
            ascent: 10.0,
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
        self.calls.push(PaintCall::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn publish(&mut self) -> Result<(), SurfaceError> {
        if self.fail_publish {
            return Err(SurfaceError::Publish("texture upload failed".to_string()));
        }
        self.calls.push(PaintCall::Publish);
        self.publishes += 1;
        Ok(())
    }
}
