//! Demo application state and terminal drawing

use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use xr_console_core::SharedStore;
use xr_console_render::{
    CellSurface, ConsoleRenderer, RendererOptions, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH,
};

/// Step for `+` / `-` capacity changes
const CAPACITY_STEP: usize = 10;

pub struct App {
    store: SharedStore,
    console: ConsoleRenderer<CellSurface>,
    pub running: bool,
    emitted: u64,
    last_error: Option<String>,
}

impl App {
    pub fn new(store: SharedStore, options: RendererOptions) -> Self {
        let surface = CellSurface::new(
            options.pixel_width,
            options.pixel_height,
            DEFAULT_CELL_WIDTH,
            DEFAULT_CELL_HEIGHT,
        );
        let console = ConsoleRenderer::attach(&store, options, surface);
        Self {
            store,
            console,
            running: true,
            emitted: 0,
            last_error: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('l') => {
                self.emitted += 1;
                log::trace!("Plain log line #{}", self.emitted);
            }
            KeyCode::Char('e') => {
                self.emitted += 1;
                log::error!("Something failed (#{})", self.emitted);
            }
            KeyCode::Char('w') => {
                self.emitted += 1;
                log::warn!("Frame budget exceeded (#{})", self.emitted);
            }
            KeyCode::Char('i') => {
                self.emitted += 1;
                log::info!("Controller connected (#{})", self.emitted);
            }
            KeyCode::Char('d') => {
                self.emitted += 1;
                log::debug!(
                    "Pose update {} with a deliberately long payload so the line has to wrap \
                     inside the panel",
                    self.emitted
                );
            }
            KeyCode::Char('c') => self.store.clear(),
            KeyCode::Char('+') => {
                let capacity = self.store.capacity() + CAPACITY_STEP;
                self.store.set_capacity(capacity);
            }
            KeyCode::Char('-') => {
                let capacity = self.store.capacity().saturating_sub(CAPACITY_STEP).max(1);
                self.store.set_capacity(capacity);
            }
            _ => {}
        }
    }

    /// Re-render the panel if needed and draw it with a status line
    pub fn draw(&mut self, frame: &mut Frame) {
        self.update_panel();

        let [panel_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        let block = Block::default()
            .title(" XR console ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);
        copy_cells(self.console.surface().published(), frame.buffer_mut(), inner);

        frame.render_widget(Paragraph::new(self.status_line()), status_area);
    }

    fn update_panel(&mut self) {
        match self.console.render_if_dirty() {
            Ok(_) => self.last_error = None,
            Err(err) => {
                // the renderer stays dirty and retries every frame
                let message = err.to_string();
                if self.last_error.as_deref() != Some(message.as_str()) {
                    log::error!("Console render failed: {}", message);
                    self.last_error = Some(message);
                }
            }
        }
    }

    fn status_line(&self) -> Line<'static> {
        let key = Style::default().add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::raw(format!(
                " {}/{} messages ",
                self.store.len(),
                self.store.capacity()
            )),
            Span::styled("l e w i d", key),
            Span::raw(" emit  "),
            Span::styled("c", key),
            Span::raw(" clear  "),
            Span::styled("+ -", key),
            Span::raw(" capacity  "),
            Span::styled("q", key),
            Span::raw(" quit"),
        ])
    }
}

/// Copy `source` cells into `target` at `area`, clipped to both
fn copy_cells(source: &Buffer, target: &mut Buffer, area: Rect) {
    let width = source.area.width.min(area.width);
    let height = source.area.height.min(area.height);
    for y in 0..height {
        for x in 0..width {
            target[(area.x + x, area.y + y)] = source[(x, y)].clone();
        }
    }
}
