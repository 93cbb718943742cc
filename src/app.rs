use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::{debug, info};

use crate::config::Config;
use crate::counter::{Action, CounterState};
use crate::ui::{Region, Regions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Step,
    Add,
    Subtract,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Step => Focus::Add,
            Focus::Add => Focus::Subtract,
            Focus::Subtract => Focus::Step,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Step => Focus::Subtract,
            Focus::Add => Focus::Step,
            Focus::Subtract => Focus::Add,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    Subtract,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::Add => "+",
            Button::Subtract => "-",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub counter: CounterState,
    pub focus: Focus,
    pub mode: Mode,
    pub input_cursor: usize, // cursor position in chars within the step text
    pub status: String,
    pub should_quit: bool,
    // screen areas from the last draw, used for mouse hit-testing
    pub regions: Option<Regions>,
    initial_step: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        let counter = CounterState::with_step(config.step.clone());
        let input_cursor = counter.step.chars().count();
        Self {
            counter,
            focus: Focus::default(),
            mode: Mode::default(),
            input_cursor,
            status: String::new(),
            should_quit: false,
            regions: None,
            initial_step: config.step.clone(),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if self.mode == Mode::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                self.mode = Mode::Normal;
            }
            return;
        }
        match key.code {
            KeyCode::Esc => { self.quit(); return; }
            KeyCode::Up => { self.press(Button::Add); return; }
            KeyCode::Down => { self.press(Button::Subtract); return; }
            KeyCode::Tab => { self.focus = self.focus.next(); return; }
            KeyCode::BackTab => { self.focus = self.focus.prev(); return; }
            _ => {}
        }
        match self.focus {
            Focus::Step => match key.code {
                KeyCode::Enter => { self.focus = Focus::Add; }
                KeyCode::Backspace => { self.input_backspace(); }
                KeyCode::Delete => { self.input_delete(); }
                KeyCode::Left => { self.input_move_left(); }
                KeyCode::Right => { self.input_move_right(); }
                KeyCode::Home => { self.input_move_home(); }
                KeyCode::End => { self.input_move_end(); }
                KeyCode::Char(c) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        self.input_insert_char(c);
                    }
                }
                _ => {}
            },
            Focus::Add | Focus::Subtract => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let button = if self.focus == Focus::Add { Button::Add } else { Button::Subtract };
                    self.press(button);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => { self.press(Button::Add); }
                KeyCode::Char('-') => { self.press(Button::Subtract); }
                KeyCode::Char('r') => { self.reset(); }
                KeyCode::Char('?') => { self.mode = Mode::Help; }
                KeyCode::Char('q') => { self.quit(); }
                _ => {}
            },
        }
    }

    pub fn on_mouse(&mut self, me: MouseEvent) {
        if self.mode == Mode::Help { return; }
        let MouseEventKind::Down(MouseButton::Left) = me.kind else { return };
        let Some(regions) = self.regions else { return };
        match regions.hit(Position::new(me.column, me.row)) {
            Some(Region::AddButton) => { self.focus = Focus::Add; self.press(Button::Add); }
            Some(Region::SubtractButton) => { self.focus = Focus::Subtract; self.press(Button::Subtract); }
            Some(Region::Input) => { self.focus = Focus::Step; self.input_move_end(); }
            _ => {}
        }
    }

    pub fn press(&mut self, button: Button) {
        let valid = self.counter.step_value().is_some();
        let action = match button {
            Button::Add => Action::Increment,
            Button::Subtract => Action::Decrement,
        };
        self.counter.apply(action);
        debug!(button = button.label(), step = %self.counter.step, total = self.counter.total, "pressed");
        self.status = if valid {
            format!("{}{} → {}", button.label(), self.counter.step.trim(), self.counter.total)
        } else {
            format!("invalid step {:?}, total unchanged", self.counter.step)
        };
    }

    pub fn set_step(&mut self, text: &str) {
        self.counter.apply(Action::SetStep(text.to_string()));
        self.input_cursor = self.input_cursor.min(self.input_len_chars());
    }

    pub fn reset(&mut self) {
        self.counter = CounterState::with_step(self.initial_step.clone());
        self.input_cursor = self.input_len_chars();
        self.status = "Reset".into();
        info!("counter reset");
    }

    fn quit(&mut self) {
        self.should_quit = true;
    }

    fn input_len_chars(&self) -> usize { self.counter.step.chars().count() }

    fn byte_index_of_char_pos(&self, pos: usize) -> usize {
        self.counter
            .step
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.counter.step.len())
    }

    fn input_move_left(&mut self) {
        if self.input_cursor > 0 { self.input_cursor -= 1; }
    }
    fn input_move_right(&mut self) {
        let len = self.input_len_chars();
        if self.input_cursor < len { self.input_cursor += 1; }
    }
    fn input_move_home(&mut self) { self.input_cursor = 0; }
    fn input_move_end(&mut self) { self.input_cursor = self.input_len_chars(); }

    // Edits build the full new text and hand it to the counter verbatim.
    fn input_backspace(&mut self) {
        if self.input_cursor == 0 { return; }
        let pos = self.input_cursor - 1;
        let start = self.byte_index_of_char_pos(pos);
        let end = self.byte_index_of_char_pos(self.input_cursor);
        let mut text = self.counter.step.clone();
        text.replace_range(start..end, "");
        self.input_cursor = pos;
        self.set_step(&text);
    }

    fn input_delete(&mut self) {
        if self.input_cursor >= self.input_len_chars() { return; }
        let start = self.byte_index_of_char_pos(self.input_cursor);
        let end = self.byte_index_of_char_pos(self.input_cursor + 1);
        let mut text = self.counter.step.clone();
        text.replace_range(start..end, "");
        self.set_step(&text);
    }

    fn input_insert_char(&mut self, c: char) {
        let idx = self.byte_index_of_char_pos(self.input_cursor);
        let mut text = self.counter.step.clone();
        text.insert(idx, c);
        self.input_cursor += 1;
        self.set_step(&text);
    }
}
