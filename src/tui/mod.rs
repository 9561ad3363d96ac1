//! TUI module for interactive match review and deletion.

pub mod app;
pub mod event;
pub mod ui;

pub use app::App;

use crate::cli::TuiArgs;
use crate::config::Config;
use crate::error::SweepError;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;

/// Launch the interactive TUI.
pub fn run(args: TuiArgs, config: &Config) -> Result<()> {
    let root = args
        .path
        .canonicalize()
        .map_err(|_| SweepError::PathNotFound(args.path.clone()))?;
    if !root.is_dir() {
        return Err(SweepError::NotADirectory(root).into());
    }
    let options = crate::commands::scan_options(&args.target, None, config);

    let mut app = App::new(root, options, config.tui.confirm_before_delete);
    app.rescan();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal even if the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, Duration::from_millis(200))?;
    }
    Ok(())
}
