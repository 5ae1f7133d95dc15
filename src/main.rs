//! TBOOK - Terminal Booking
//!
//! A terminal-based consultation booking application, built in Rust.
//! Walks through picking a date on a month calendar, picking a
//! 30-minute time slot, entering contact details, and a confirmation
//! screen.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, Booking};
use domain::{Calendar, ScheduleConfig, Step};
use infrastructure::ConfigRepository;
use presentation::{render_ui, InputHandler};

/// Schedule configuration searched for in the working directory;
/// the built-in defaults apply when it is absent.
const SCHEDULE_FILE: &str = "tbook.json";

/// Entry point for the TBOOK terminal booking application.
///
/// Loads the optional schedule configuration, sets up the terminal
/// interface, initializes the booking session, and runs the main event
/// loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ConfigRepository::load_schedule(SCHEDULE_FILE) {
        Ok((config, _)) => config,
        Err(_) => ScheduleConfig::default(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Booking::new(config, Calendar::new()));
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing.
/// Continues running until the user presses 'q' outside the details
/// screen (where letters type into the form) or Ctrl+C anywhere.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    KeyCode::Char('q') if !matches!(app.booking.step, Step::Details) => {
                        return Ok(())
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
