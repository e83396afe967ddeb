//! Main event loop for the application

use std::io::Stdout;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeZone};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use tracing::debug;

use crate::app::{Config, Dashboard};
use crate::handler::{
    action::{handle_key, handle_mouse_action},
    mouse::handle_mouse_event,
    LinkOpener,
};
use crate::render::HitMap;
use crate::store::KeyValueStore;

use super::render::{render_frame, RenderContext};

/// Clock format shown in the status bar, e.g. `Monday | March 04 | 09:15 AM`
pub const CLOCK_FORMAT: &str = "%A | %B %d | %I:%M %p";

/// Format a timestamp for the status bar clock
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(CLOCK_FORMAT).to_string()
}

/// Main event loop
pub fn run_app<S: KeyValueStore, O: LinkOpener>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    dash: &mut Dashboard<S, O>,
) -> anyhow::Result<()> {
    let mut hits = HitMap::new();

    // Clock refresh timer
    let mut last_clock = Instant::now();
    if config.show_clock {
        dash.state.clock = Some(format_clock(&Local::now()));
    }

    loop {
        let focused = dash.focused_path();
        let ctx = RenderContext {
            state: &dash.state,
            doc: dash.document(),
            focused_path: focused.as_ref(),
        };
        terminal.draw(|frame| hits = render_frame(frame, ctx))?;

        if config.show_clock && last_clock.elapsed() >= config.clock_interval {
            dash.state.clock = Some(format_clock(&Local::now()));
            last_clock = Instant::now();
        }

        // Handle events (60ms timeout balances responsiveness and CPU usage)
        if event::poll(Duration::from_millis(60))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    dash.state.clear_message();
                    handle_key(dash, key);
                }
                Event::Mouse(mouse) if config.mouse_enabled => {
                    let action = handle_mouse_event(mouse, &hits);
                    handle_mouse_action(dash, action);
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        let count = dash.focusables().len();
        dash.state.clamp_focus(count);

        if dash.state.should_quit {
            break;
        }
    }

    Ok(())
}
