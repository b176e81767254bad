//! Message-to-line layout
//!
//! Turns a newest-first window of messages into the flat list of
//! [`RenderLine`]s the painter walks from the bottom of the surface upward.

use crate::error::RenderError;
use crate::options::RendererOptions;
use crate::surface::GlyphMetrics;
use crate::timestamp::timestamp_prefix;
use crate::wrap::wrap_text;
use ratatui::style::Color;
use xr_console_core::Message;

/// Extra spacing applied on top of the glyph ascent
pub const LINE_SPACING: f64 = 1.2;

/// One wrapped, colored line of a single render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLine {
    pub text: String,
    pub color: Color,
    /// Offset in character columns
    pub indent: usize,
}

/// Line geometry derived from a representative glyph (monospace assumed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub line_height: f64,
    pub char_width: f64,
}

impl LineMetrics {
    pub fn from_glyph(glyph: GlyphMetrics) -> Self {
        Self {
            line_height: glyph.ascent * LINE_SPACING,
            char_width: glyph.width,
        }
    }

    /// Lines needed to cover `inner_height`, a partial line counts
    pub fn num_lines(&self, inner_height: f64) -> usize {
        if self.line_height <= 0.0 || inner_height <= 0.0 {
            return 0;
        }
        (inner_height / self.line_height).ceil() as usize
    }

    /// Whole characters fitting `inner_width`
    pub fn chars_per_line(&self, inner_width: f64) -> usize {
        if self.char_width <= 0.0 || inner_width <= 0.0 {
            return 0;
        }
        (inner_width / self.char_width).floor() as usize
    }
}

/// Lay out `messages` (newest first) into paint order
///
/// Within a message the segments are emitted last-first, so painting from
/// the bottom up puts a message's first line above its continuation lines
/// and the newest message at the bottom.
pub fn layout_lines(
    messages: &[Message],
    chars_per_line: usize,
    options: &RendererOptions,
) -> Result<Vec<RenderLine>, RenderError> {
    let mut lines = Vec::new();

    for message in messages {
        let color = options.color_for(message.severity())?;
        let prefix = if options.show_timestamp {
            timestamp_prefix(message.timestamp())
        } else {
            String::new()
        };
        let prefix_len = prefix.chars().count();

        // continuation lines are indented by the prefix, so every segment
        // gets the reduced budget
        let budget = chars_per_line.saturating_sub(prefix_len);
        let segments = wrap_text(message.content(), budget);

        let first_line = lines.len();
        for (idx, segment) in segments.into_iter().enumerate() {
            let line = if idx == 0 {
                RenderLine {
                    text: format!("{}{}", prefix, segment),
                    color,
                    indent: 0,
                }
            } else {
                RenderLine {
                    text: segment,
                    color,
                    indent: prefix_len,
                }
            };
            lines.push(line);
        }
        lines[first_line..].reverse();
    }

    Ok(lines)
}
