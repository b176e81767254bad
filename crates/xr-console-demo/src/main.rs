use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use xr_console_config::ConsoleConfig;
use xr_console_core::SharedStore;

mod app;
mod logger;

use app::App;

fn main() -> Result<()> {
    // The store exists before the hook so config loading is captured too
    let store = SharedStore::default();
    let log_file = logger::init(store.clone())?;

    log::info!("Starting xr-console-demo, logging to {}", log_file.display());

    let config = ConsoleConfig::load();
    store.set_capacity(config.capacity());
    let mut app = App::new(store, config.renderer_options());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Demo loop failed: {}", err);
    }

    log::info!("Exiting xr-console-demo");
    log::logger().flush();
    result?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if !app.running {
            break;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
