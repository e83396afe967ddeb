//! linkdeck - A tabbed bookmark dashboard for the terminal

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use linkdeck::app::{exit_code, init_logging, run_app, Config, Dashboard};
use linkdeck::core::{defaults::resolve_defaults, selected_index};
use linkdeck::handler::SystemOpener;
use linkdeck::store::{BookmarkStore, FileStore};

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if let Err(e) = init_logging(&config.data_dir) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let defaults = match resolve_defaults(config.defaults_path.as_deref()) {
        Ok(tabs) => tabs,
        Err(e) => {
            eprintln!("Error: failed to load default bookmarks: {}", e);
            return ExitCode::from(exit_code::ERROR as u8);
        }
    };
    let store = BookmarkStore::new(FileStore::new(&config.data_dir), defaults);

    match run_with_config(config, store) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: Config, mut store: BookmarkStore<FileStore>) -> anyhow::Result<i32> {
    if config.reset {
        store.reset()?;
        println!("Removed stored data in {}", config.data_dir.display());
        return Ok(exit_code::SUCCESS);
    }

    if let Some(theme) = config.theme {
        store.save_theme(theme)?;
    }

    if config.list {
        run_list_mode(&mut store);
        return Ok(exit_code::SUCCESS);
    }

    let mut dash = Dashboard::bootstrap(store, SystemOpener);

    if config.dump {
        print!("{}", dash.document().outline());
        return Ok(exit_code::SUCCESS);
    }

    run_tui(&config, &mut dash)?;
    Ok(exit_code::SUCCESS)
}

/// Print the stored tabs (non-interactive)
fn run_list_mode(store: &mut BookmarkStore<FileStore>) {
    let tabs = store.load_bookmarks();
    let selected = selected_index(&tabs);
    for (i, tab) in tabs.iter().enumerate() {
        let marker = if Some(i) == selected { "*" } else { " " };
        println!(
            "{} {}\t{}\t{}",
            marker,
            tab.id,
            tab.name,
            tab.links_target.as_str()
        );
    }
}

fn run_tui(
    config: &Config,
    dash: &mut Dashboard<FileStore, SystemOpener>,
) -> anyhow::Result<()> {
    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config, dash);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if config.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result
}
