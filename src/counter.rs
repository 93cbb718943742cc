//! Counter state and the pure transitions applied to it.

use tracing::warn;

/// Step text shown in the input when the widget starts.
pub const DEFAULT_STEP: &str = "1";

/// Magnitude at which the total picks up a colour class.
pub const CLASS_THRESHOLD: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub total: i64,
    // verbatim input text; only parsed when a button is pressed
    pub step: String,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::with_step(DEFAULT_STEP)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    SetStep(String),
}

/// Colour class derived from the total. Neutral totals have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterClass {
    Green,
    Red,
}

impl CounterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterClass::Green => "green",
            CounterClass::Red => "red",
        }
    }
}

impl CounterState {
    pub fn with_step(step: impl Into<String>) -> Self {
        Self { total: 0, step: step.into() }
    }

    pub fn set_step(&mut self, value: &str) {
        self.step = value.to_string();
    }

    /// Parsed step, if the text is a valid integer.
    pub fn step_value(&self) -> Option<i64> {
        parse_step(&self.step)
    }

    /// Step used by the arithmetic. Text that does not parse counts as 0.
    pub fn numeric_step(&self) -> i64 {
        match self.step_value() {
            Some(v) => v,
            None => {
                warn!(step = %self.step, "step is not an integer, treating as 0");
                0
            }
        }
    }

    pub fn increment(&mut self) {
        self.total = self.total.saturating_add(self.numeric_step());
    }

    pub fn decrement(&mut self) {
        self.total = self.total.saturating_sub(self.numeric_step());
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
            Action::SetStep(text) => self.step = text,
        }
    }

    pub fn class(&self) -> Option<CounterClass> {
        class_for(self.total)
    }
}

/// Returns the state that results from applying `action` to `state`.
pub fn reduce(state: &CounterState, action: Action) -> CounterState {
    let mut next = state.clone();
    next.apply(action);
    next
}

pub fn parse_step(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

pub fn class_for(total: i64) -> Option<CounterClass> {
    if total >= CLASS_THRESHOLD {
        Some(CounterClass::Green)
    } else if total <= -CLASS_THRESHOLD {
        Some(CounterClass::Red)
    } else {
        None
    }
}

/// Class name as a string; empty when the total is neutral.
pub fn class_name(total: i64) -> &'static str {
    class_for(total).map(|c| c.as_str()).unwrap_or("")
}
