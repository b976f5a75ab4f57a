//! Interactive keypad event loop

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use oneboard_calc::tui::{keypad_area, render, CalculatorApp, InputHandler, KeyAction};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the keypad UI until the user quits
pub fn run_tui() -> CliResult<()> {
    enable_raw_mode().map_err(|e| CliError::terminal(format!("cannot enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(CliError::terminal(format!("cannot enter alternate screen: {e}")));
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(CliError::from)
        .and_then(|mut terminal| {
            let result = run_app(&mut terminal, &mut CalculatorApp::new());
            let _ = execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            );
            let _ = terminal.show_cursor();
            result
        });

    disable_raw_mode().map_err(|e| CliError::terminal(format!("cannot restore terminal: {e}")))?;
    result
}

/// Applies one action; returns true when the app should stop
pub fn handle_action(app: &mut CalculatorApp, action: KeyAction) -> bool {
    match action {
        KeyAction::Press(key) => app.press(key),
        KeyAction::Quit => app.quit(),
        KeyAction::None => {}
    }
    app.should_quit()
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> CliResult<()> {
    let input = InputHandler::new();
    let mut keypad = Rect::default();
    info!("keypad UI started");

    loop {
        terminal.draw(|frame| {
            keypad = keypad_area(frame.area());
            render(app, frame);
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => input.handle_key(key),
            Event::Mouse(mouse) => input.handle_mouse(mouse, app.keypad(), keypad),
            _ => KeyAction::None,
        };
        debug!(?action, display = app.display(), "terminal event");

        if handle_action(app, action) {
            break;
        }
    }

    info!(presses = app.tape().len(), "keypad UI closed");
    Ok(())
}
