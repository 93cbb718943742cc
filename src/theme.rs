use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{
        block::{BorderType, Padding},
        Block, Borders,
    },
};

use crate::counter::CounterClass;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub warn: Color,
    pub green: Color,
    pub red: Color,
    pub header_fg: Color,
    pub border: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

impl Theme {
    pub fn block<'a>(&self, title: impl Into<String>) -> Block<'a> {
        Block::default()
            .title(title.into())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    // focused controls get the highlight colour on their border
    pub fn control_block<'a>(&self, title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
        let border = if focused { self.highlight_style() } else { Style::default().fg(self.border) };
        Block::bordered()
            .title(title.into())
            .border_type(BorderType::Rounded)
            .border_style(border)
    }

    pub fn modal_block<'a>(&self, title: impl Into<String>) -> Block<'a> {
        Block::bordered()
            .title(title.into())
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded)
            .padding(Padding::new(2, 2, 1, 1))
            .border_style(Style::default().fg(self.border))
    }

    /// Style of the counter value for a given class.
    pub fn counter_style(&self, class: Option<CounterClass>) -> Style {
        let fg = match class {
            Some(CounterClass::Green) => self.green,
            Some(CounterClass::Red) => self.red,
            None => self.fg,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style { Style::default().fg(self.header_fg).add_modifier(Modifier::BOLD) }
    pub fn muted_style(&self) -> Style { Style::default().fg(self.muted) }
    pub fn highlight_style(&self) -> Style { Style::default().fg(self.highlight).add_modifier(Modifier::BOLD) }
    pub fn warn_style(&self) -> Style { Style::default().fg(self.warn) }
}

pub static THEME: Theme = Theme {
    bg: Color::Reset,
    fg: Color::Gray,
    muted: Color::DarkGray,
    accent: Color::Cyan,
    warn: Color::Yellow,
    green: Color::Green,
    red: Color::Red,
    header_fg: Color::White,
    border: Color::Gray,
    highlight: Color::Cyan,
};
