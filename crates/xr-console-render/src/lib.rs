//! # xr-console-render
//!
//! Lays out a window of console messages into fixed-width, wrapped,
//! colored lines and paints them bottom-up onto a pixel [`Surface`], the
//! way a terminal shows its newest output at the bottom.
//!
//! ```
//! use xr_console_core::{Severity, SharedStore};
//! use xr_console_render::{CellSurface, ConsoleRenderer, RendererOptions};
//!
//! let store = SharedStore::with_capacity(100);
//! let surface = CellSurface::new(1024, 512, 8, 16);
//! let mut console = ConsoleRenderer::attach(&store, RendererOptions::default(), surface);
//!
//! store.ingest(Severity::Info, ["hello"]);
//! assert!(console.is_dirty());
//! assert!(console.render_if_dirty()?);
//! assert!(!console.is_dirty());
//! # Ok::<(), xr_console_render::RenderError>(())
//! ```

mod cell_surface;
mod error;
mod layout;
mod options;
mod renderer;
mod surface;
mod timestamp;
mod wrap;

#[cfg(test)]
mod testing;

pub use cell_surface::{CellSurface, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
pub use error::{RenderError, SurfaceError};
pub use layout::{layout_lines, LineMetrics, RenderLine, LINE_SPACING};
pub use options::*;
pub use renderer::ConsoleRenderer;
pub use surface::{GlyphMetrics, Surface};
pub use timestamp::{timestamp_prefix, TIMESTAMP_PREFIX_WIDTH};
pub use wrap::wrap_text;
