//! Renderer configuration
//!
//! [`RendererOptions`] is resolved once at construction from a
//! [`PartialRendererOptions`], field by field, against the `DEFAULT_*`
//! constants below. Unknown fields in configuration files are rejected.

use crate::error::RenderError;
use ratatui::style::Color;
use serde::Deserialize;
use xr_console_core::Severity;

pub const DEFAULT_PIXEL_WIDTH: u32 = 1024;
pub const DEFAULT_PIXEL_HEIGHT: u32 = 512;
pub const DEFAULT_ACTUAL_WIDTH: f64 = 1.0;
pub const DEFAULT_ACTUAL_HEIGHT: f64 = 1.0;
pub const DEFAULT_HORIZONTAL_PADDING: f64 = 5.0;
pub const DEFAULT_VERTICAL_PADDING: f64 = 5.0;
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_SHOW_TIMESTAMP: bool = true;
pub const DEFAULT_MESSAGE_TYPE: Severity = Severity::All;
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::Rgb(0x22, 0x22, 0x22);
pub const DEFAULT_LOG_COLOR: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const DEFAULT_ERROR_COLOR: Color = Color::Rgb(0xD0, 0x34, 0x2C);
pub const DEFAULT_WARNING_COLOR: Color = Color::Rgb(0xFF, 0x79, 0x00);
pub const DEFAULT_INFO_COLOR: Color = Color::Rgb(0x76, 0xB9, 0x47);
pub const DEFAULT_DEBUG_COLOR: Color = Color::Rgb(0x0E, 0x86, 0xD4);

/// Fully resolved renderer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RendererOptions {
    /// Surface width in pixels
    pub pixel_width: u32,
    /// Surface height in pixels
    pub pixel_height: u32,
    /// Physical panel width for scene placement (not used by layout)
    pub actual_width: f64,
    /// Physical panel height for scene placement (not used by layout)
    pub actual_height: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
    pub font_size: f64,
    /// Prefix each message with `[HH:MM:SS] `
    pub show_timestamp: bool,
    /// Severity filter, `All` shows everything
    pub message_type: Severity,
    pub background_color: Color,
    pub log_color: Color,
    pub error_color: Color,
    pub warning_color: Color,
    pub info_color: Color,
    pub debug_color: Color,
}

/// Renderer configuration with every field optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialRendererOptions {
    pub pixel_width: Option<u32>,
    pub pixel_height: Option<u32>,
    pub actual_width: Option<f64>,
    pub actual_height: Option<f64>,
    pub horizontal_padding: Option<f64>,
    pub vertical_padding: Option<f64>,
    pub font_size: Option<f64>,
    pub show_timestamp: Option<bool>,
    pub message_type: Option<Severity>,
    pub background_color: Option<Color>,
    pub log_color: Option<Color>,
    pub error_color: Option<Color>,
    pub warning_color: Option<Color>,
    pub info_color: Option<Color>,
    pub debug_color: Option<Color>,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self::resolve(PartialRendererOptions::default())
    }
}

impl From<PartialRendererOptions> for RendererOptions {
    fn from(partial: PartialRendererOptions) -> Self {
        Self::resolve(partial)
    }
}

impl RendererOptions {
    /// Resolve each field independently, falling back to its default
    pub fn resolve(partial: PartialRendererOptions) -> Self {
        Self {
            pixel_width: partial.pixel_width.unwrap_or(DEFAULT_PIXEL_WIDTH),
            pixel_height: partial.pixel_height.unwrap_or(DEFAULT_PIXEL_HEIGHT),
            actual_width: partial.actual_width.unwrap_or(DEFAULT_ACTUAL_WIDTH),
            actual_height: partial.actual_height.unwrap_or(DEFAULT_ACTUAL_HEIGHT),
            horizontal_padding: partial
                .horizontal_padding
                .unwrap_or(DEFAULT_HORIZONTAL_PADDING),
            vertical_padding: partial.vertical_padding.unwrap_or(DEFAULT_VERTICAL_PADDING),
            font_size: partial.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            show_timestamp: partial.show_timestamp.unwrap_or(DEFAULT_SHOW_TIMESTAMP),
            message_type: partial.message_type.unwrap_or(DEFAULT_MESSAGE_TYPE),
            background_color: partial.background_color.unwrap_or(DEFAULT_BACKGROUND_COLOR),
            log_color: partial.log_color.unwrap_or(DEFAULT_LOG_COLOR),
            error_color: partial.error_color.unwrap_or(DEFAULT_ERROR_COLOR),
            warning_color: partial.warning_color.unwrap_or(DEFAULT_WARNING_COLOR),
            info_color: partial.info_color.unwrap_or(DEFAULT_INFO_COLOR),
            debug_color: partial.debug_color.unwrap_or(DEFAULT_DEBUG_COLOR),
        }
    }

    /// Text color for a message severity
    pub fn color_for(&self, severity: Severity) -> Result<Color, RenderError> {
        match severity {
            Severity::Log => Ok(self.log_color),
            Severity::Error => Ok(self.error_color),
            Severity::Warning => Ok(self.warning_color),
            Severity::Info => Ok(self.info_color),
            Severity::Debug => Ok(self.debug_color),
            Severity::All => Err(RenderError::InvalidSeverity(severity)),
        }
    }

    pub fn inner_width(&self) -> f64 {
        self.pixel_width as f64 - self.horizontal_padding * 2.0
    }

    pub fn inner_height(&self) -> f64 {
        self.pixel_height as f64 - self.vertical_padding * 2.0
    }

    /// Physical `(width, height)` of the panel in scene units
    pub fn panel_size(&self) -> (f64, f64) {
        (self.actual_width, self.actual_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = RendererOptions::default();
        assert_eq!(options.pixel_width, 1024);
        assert_eq!(options.pixel_height, 512);
        assert_eq!(options.horizontal_padding, 5.0);
        assert_eq!(options.vertical_padding, 5.0);
        assert_eq!(options.font_size, 16.0);
        assert!(options.show_timestamp);
        assert_eq!(options.message_type, Severity::All);
        assert_eq!(options.background_color, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(options.panel_size(), (1.0, 1.0));
    }

    #[test]
    fn test_inner_dimensions_subtract_padding() {
        let options = RendererOptions::default();
        assert_eq!(options.inner_width(), 1014.0);
        assert_eq!(options.inner_height(), 502.0);
    }

    #[test]
    fn test_each_field_resolves_independently() {
        let options = RendererOptions::resolve(PartialRendererOptions {
            pixel_height: Some(256),
            show_timestamp: Some(false),
            error_color: Some(Color::Red),
            ..Default::default()
        });
        assert_eq!(options.pixel_height, 256);
        assert_eq!(options.pixel_width, DEFAULT_PIXEL_WIDTH);
        assert!(!options.show_timestamp);
        assert_eq!(options.error_color, Color::Red);
        assert_eq!(options.info_color, DEFAULT_INFO_COLOR);
    }

    #[test]
    fn test_false_and_zero_overrides_are_kept() {
        let options = RendererOptions::resolve(PartialRendererOptions {
            horizontal_padding: Some(0.0),
            show_timestamp: Some(false),
            ..Default::default()
        });
        assert_eq!(options.horizontal_padding, 0.0);
        assert!(!options.show_timestamp);
    }

    #[test]
    fn test_color_for_each_level() {
        let options = RendererOptions::default();
        assert_eq!(options.color_for(Severity::Log).unwrap(), DEFAULT_LOG_COLOR);
        assert_eq!(options.color_for(Severity::Error).unwrap(), DEFAULT_ERROR_COLOR);
        assert_eq!(
            options.color_for(Severity::Warning).unwrap(),
            DEFAULT_WARNING_COLOR
        );
        assert_eq!(options.color_for(Severity::Info).unwrap(), DEFAULT_INFO_COLOR);
        assert_eq!(options.color_for(Severity::Debug).unwrap(), DEFAULT_DEBUG_COLOR);
    }

    #[test]
    fn test_wildcard_has_no_color() {
        let options = RendererOptions::default();
        assert_eq!(
            options.color_for(Severity::All),
            Err(RenderError::InvalidSeverity(Severity::All))
        );
    }

    #[test]
    fn test_deserialize_partial_from_toml() {
        let toml = r##"
            pixel_width = 640
            message_type = "warning"
            warning_color = "#FFAA00"
        "##;
        let partial: PartialRendererOptions = toml::from_str(toml).unwrap();
        let options = RendererOptions::from(partial);
        assert_eq!(options.pixel_width, 640);
        assert_eq!(options.message_type, Severity::Warning);
        assert_eq!(options.warning_color, Color::Rgb(0xFF, 0xAA, 0x00));
        assert_eq!(options.pixel_height, DEFAULT_PIXEL_HEIGHT);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<PartialRendererOptions, _> = toml::from_str("font_sise = 12.0");
        assert!(result.is_err());
    }
}
