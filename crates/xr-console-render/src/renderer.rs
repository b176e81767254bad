//! Console renderer: dirty-driven layout and paint passes
//!
//! A [`ConsoleRenderer`] starts dirty. The host calls
//! [`ConsoleRenderer::render_if_dirty`] once per display frame; a pass runs
//! only when the observed store changed since the last completed pass.

use crate::error::RenderError;
use crate::layout::{layout_lines, LineMetrics, RenderLine};
use crate::options::RendererOptions;
use crate::surface::Surface;
use std::sync::Arc;
use xr_console_core::{ConsumerId, DirtyFlag, MarkDirty, MessageSource, SharedStore};

/// Glyph measured to derive line metrics
const MEASURE_GLYPH: char = 'M';

/// Store registration, undone on drop
struct Registration {
    store: SharedStore,
    id: ConsumerId,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.store.unregister(self.id);
    }
}

pub struct ConsoleRenderer<S: Surface> {
    options: RendererOptions,
    source: Arc<dyn MessageSource>,
    surface: S,
    dirty: Arc<DirtyFlag>,
    _registration: Option<Registration>,
}

impl<S: Surface> ConsoleRenderer<S> {
    /// Renderer reading from an arbitrary message source
    ///
    /// The caller is responsible for marking the renderer dirty (see
    /// [`ConsoleRenderer::dirty_flag`]) when the source changes.
    pub fn new(options: RendererOptions, source: Arc<dyn MessageSource>, surface: S) -> Self {
        Self {
            options,
            source,
            surface,
            dirty: Arc::new(DirtyFlag::new()),
            _registration: None,
        }
    }

    /// Renderer observing `store`, marked dirty on every store change
    pub fn attach(store: &SharedStore, options: RendererOptions, surface: S) -> Self {
        let mut renderer = Self::new(options, Arc::new(store.clone()), surface);
        let consumer: Arc<dyn MarkDirty> = renderer.dirty.clone();
        let id = store.register(&consumer);
        renderer._registration = Some(Registration {
            store: store.clone(),
            id,
        });
        log::debug!(
            "Console renderer attached ({}x{} px, filter {})",
            renderer.options.pixel_width,
            renderer.options.pixel_height,
            renderer.options.message_type
        );
        renderer
    }

    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    pub fn set_dirty(&self, dirty: bool) {
        self.dirty.set(dirty);
    }

    /// Shared handle to this renderer's dirty flag
    pub fn dirty_flag(&self) -> Arc<DirtyFlag> {
        self.dirty.clone()
    }

    pub fn inner_width(&self) -> f64 {
        self.options.inner_width()
    }

    pub fn inner_height(&self) -> f64 {
        self.options.inner_height()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Per-frame check: render only if dirty
    ///
    /// Returns whether a pass ran.
    pub fn render_if_dirty(&mut self) -> Result<bool, RenderError> {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Run a full layout and paint pass now
    ///
    /// On failure the renderer stays dirty and nothing is published.
    pub fn render(&mut self) -> Result<(), RenderError> {
        self.surface.begin_frame()?;

        let glyph = self
            .surface
            .measure_glyph(MEASURE_GLYPH, self.options.font_size);
        let metrics = LineMetrics::from_glyph(glyph);
        let num_lines = metrics.num_lines(self.inner_height());
        let chars_per_line = metrics.chars_per_line(self.inner_width());

        // clear before querying: a store change during this pass must
        // leave the renderer dirty for the next frame
        self.dirty.set(false);
        let messages = self.source.query(self.options.message_type, num_lines);
        let lines = match layout_lines(&messages, chars_per_line, &self.options) {
            Ok(lines) => lines,
            Err(err) => {
                self.dirty.set(true);
                return Err(err);
            }
        };

        self.surface.fill_background(self.options.background_color);
        self.paint_lines(&lines, metrics);

        if let Err(err) = self.surface.publish() {
            self.dirty.set(true);
            return Err(err.into());
        }

        log::trace!(
            "Rendered {} lines from {} messages",
            lines.len(),
            messages.len()
        );
        Ok(())
    }

    /// Paint bottom-up: the first line in `lines` lands at the bottom
    fn paint_lines(&mut self, lines: &[RenderLine], metrics: LineMetrics) {
        let mut y = self
            .inner_height()
            .min(lines.len() as f64 * metrics.line_height)
            + self.options.vertical_padding;

        for line in lines {
            let x = line.indent as f64 * metrics.char_width + self.options.horizontal_padding;
            self.surface.fill_text(&line.text, x, y, line.color);
            y -= metrics.line_height;
        }
    }
}
