// Keyboard and mouse handling on the application state.
use counter_tui::app::{App, Button, Focus, Mode};
use counter_tui::config::Config;
use counter_tui::ui::{self, Region};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
}

fn click(app: &mut App, region: Region) {
    let rect = app.regions.expect("draw before clicking").content(region);
    app.on_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
}

fn drawn_app() -> App {
    let mut app = App::default();
    let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
    terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
    app
}

#[test]
fn test_app_defaults() {
    let app = App::default();
    assert_eq!(app.counter.total, 0);
    assert_eq!(app.counter.step, "1");
    assert_eq!(app.focus, Focus::Step);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.input_cursor, 1);
    assert!(!app.should_quit);
    assert!(app.regions.is_none());
}

#[test]
fn test_app_uses_configured_step() {
    let config = Config { step: "25".into(), ..Config::default() };
    let mut app = App::new(&config);
    app.on_key(key(KeyCode::Up));
    assert_eq!(app.counter.total, 25);
}

#[test]
fn test_typing_replaces_step() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Backspace));
    assert_eq!(app.counter.step, "");
    type_text(&mut app, "10");
    assert_eq!(app.counter.step, "10");
    assert_eq!(app.input_cursor, 2);
}

#[test]
fn test_cursor_editing() {
    let mut app = App::default();
    type_text(&mut app, "23");
    assert_eq!(app.counter.step, "123");
    app.on_key(key(KeyCode::Home));
    app.on_key(key(KeyCode::Delete));
    assert_eq!(app.counter.step, "23");
    app.on_key(key(KeyCode::End));
    app.on_key(key(KeyCode::Left));
    type_text(&mut app, "-");
    assert_eq!(app.counter.step, "2-3");
    app.on_key(key(KeyCode::Right));
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.input_cursor, 3);
}

#[test]
fn test_arrow_keys_press_buttons() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Up));
    app.on_key(key(KeyCode::Up));
    app.on_key(key(KeyCode::Down));
    assert_eq!(app.counter.total, 1);
    assert!(app.status.contains("→ 1"));
}

#[test]
fn test_minus_types_into_step_but_presses_on_buttons() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Char('-')));
    assert_eq!(app.counter.step, "1-");
    assert_eq!(app.counter.total, 0);

    let mut app = App::default();
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Add);
    app.on_key(key(KeyCode::Char('-')));
    app.on_key(key(KeyCode::Char('-')));
    app.on_key(key(KeyCode::Char('+')));
    assert_eq!(app.counter.total, -1);
}

#[test]
fn test_focus_cycles() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Add);
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Subtract);
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Step);
    app.on_key(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Subtract);
}

#[test]
fn test_enter_presses_focused_button() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.focus, Focus::Add);
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char(' ')));
    assert_eq!(app.counter.total, 2);
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.counter.total, 1);
}

#[test]
fn test_invalid_step_reports_status() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Backspace));
    type_text(&mut app, "x");
    app.on_key(key(KeyCode::Up));
    assert_eq!(app.counter.total, 0);
    assert!(app.status.starts_with("invalid"));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut app = App::default();
    app.set_step("7");
    app.press(Button::Add);
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Char('r')));
    assert_eq!(app.counter.total, 0);
    assert_eq!(app.counter.step, "1");
}

#[test]
fn test_help_mode_swallows_keys() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Char('?')));
    assert_eq!(app.mode, Mode::Help);
    app.on_key(key(KeyCode::Char('+')));
    assert_eq!(app.counter.total, 0);
    app.on_key(key(KeyCode::Esc));
    assert_eq!(app.mode, Mode::Normal);
    assert!(!app.should_quit);
}

#[test]
fn test_quit_keys() {
    let mut app = App::default();
    app.on_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit, "q is text while the step input is focused");
    app.on_key(key(KeyCode::Esc));
    assert!(app.should_quit);

    let mut app = App::default();
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_mouse_clicks_press_buttons() {
    let mut app = drawn_app();
    app.set_step("5");
    click(&mut app, Region::AddButton);
    assert_eq!(app.counter.total, 5);
    assert_eq!(app.focus, Focus::Add);
    click(&mut app, Region::SubtractButton);
    click(&mut app, Region::SubtractButton);
    assert_eq!(app.counter.total, -5);
    assert_eq!(app.focus, Focus::Subtract);
    click(&mut app, Region::Input);
    assert_eq!(app.focus, Focus::Step);
    assert_eq!(app.input_cursor, 1);
}

#[test]
fn test_clicks_outside_controls_do_nothing() {
    let mut app = drawn_app();
    click(&mut app, Region::Header);
    click(&mut app, Region::Counter);
    assert_eq!(app.counter.total, 0);

    // no regions before the first draw
    let mut app = App::default();
    app.on_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.counter.total, 0);
}
