//! Terminal UI for retrace.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use ui::{Hit, ScreenLayout, draw};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
};
use ratatui::{DefaultTerminal, layout::Rect};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// Restores the terminal before returning, including on error.
#[instrument(skip(config))]
pub fn run(config: &AppConfig) -> Result<()> {
    let palette = config.theme().palette()?;
    let mouse = *config.mouse();

    info!(mouse, "Starting terminal UI");
    let mut terminal = ratatui::init();
    let res = guarded(
        || {
            if mouse {
                execute!(io::stdout(), EnableMouseCapture)
            } else {
                Ok(())
            }
        },
        || run_app(&mut terminal, App::new(palette)),
        || {
            if mouse {
                let _ = execute!(io::stdout(), DisableMouseCapture);
            }
            ratatui::restore();
        },
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI stopped");
    res
}

/// Runs `body` after `setup` succeeds. `teardown` always runs, even when
/// `setup` fails.
fn guarded<S, B, T>(setup: S, body: B, teardown: T) -> Result<()>
where
    S: FnOnce() -> io::Result<()>,
    B: FnOnce() -> Result<()>,
    T: FnOnce(),
{
    let res = setup().map_err(anyhow::Error::from).and_then(|()| body());
    teardown();
    res
}

/// Draw, then block for one event and apply it.
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_teardown_runs_when_setup_fails() {
        let body_ran = Cell::new(false);
        let restored = Cell::new(false);

        let res = guarded(
            || Err(io::Error::other("mouse capture unsupported")),
            || {
                body_ran.set(true);
                Ok(())
            },
            || restored.set(true),
        );

        assert!(res.is_err());
        assert!(!body_ran.get());
        assert!(restored.get());
    }

    #[test]
    fn test_teardown_runs_after_body_error() {
        let restored = Cell::new(false);
        let res = guarded(
            || Ok(()),
            || Err(anyhow::anyhow!("draw failed")),
            || restored.set(true),
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_body_result_is_returned() {
        let restored = Cell::new(false);
        assert!(guarded(|| Ok(()), || Ok(()), || restored.set(true)).is_ok());
        assert!(restored.get());
    }
}
