use anyhow::Result;
use clap::Parser;
use counter_tui::{app::App, config::Config, logging, ui};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::parse();
    // keep the guard alive until exit so the log file is flushed
    let _log_guard = logging::init(&config)?;
    info!(step = %config.step, "starting counter");

    // Ensure terminal is restored even on panic
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        prev_hook(info);
    }));

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(&config));

    // restore terminal
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    match res {
        Ok(total) => info!(total, "counter closed"),
        Err(err) => {
            tracing::error!("{err:?}");
            eprintln!("Error: {err:?}");
        }
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<i64> {
    terminal.draw(|f| ui::draw(f, &mut app))?;

    while !app.should_quit {
        // events are handled one at a time, each fully applied before the redraw
        if !event::poll(std::time::Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => app.on_key(key),
            Event::Mouse(me) => app.on_mouse(me),
            Event::Resize(_, _) => { /* will redraw immediately below */ }
            _ => continue,
        }
        terminal.draw(|f| ui::draw(f, &mut app))?;
    }

    Ok(app.counter.total)
}
