use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Button, Focus, Mode};
use crate::theme::THEME;

pub const HEADER_TEXT: &str = "My Counter";

const BUTTON_WIDTH: u16 = 5;
const INPUT_WIDTH: u16 = 14;

/// Identifiable areas of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    Counter,
    Input,
    AddButton,
    SubtractButton,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Header,
        Region::Counter,
        Region::Input,
        Region::AddButton,
        Region::SubtractButton,
    ];

    pub fn test_id(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Counter => "counter",
            Region::Input => "input",
            Region::AddButton => "add-btn",
            Region::SubtractButton => "subtract-btn",
        }
    }

    pub fn from_test_id(id: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.test_id() == id)
    }

    // controls are drawn inside a border, text regions are not
    pub fn is_bordered(&self) -> bool {
        matches!(self, Region::Input | Region::AddButton | Region::SubtractButton)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub counter: Rect,
    pub input: Rect,
    pub add: Rect,
    pub subtract: Rect,
}

impl Regions {
    pub fn get(&self, region: Region) -> Rect {
        match region {
            Region::Header => self.header,
            Region::Counter => self.counter,
            Region::Input => self.input,
            Region::AddButton => self.add,
            Region::SubtractButton => self.subtract,
        }
    }

    /// Area holding the region's text, inside the border for controls.
    pub fn content(&self, region: Region) -> Rect {
        let r = self.get(region);
        if !region.is_bordered() {
            return r;
        }
        Rect {
            x: r.x.saturating_add(1),
            y: r.y.saturating_add(1),
            width: r.width.saturating_sub(2),
            height: r.height.saturating_sub(2),
        }
    }

    pub fn hit(&self, pos: Position) -> Option<Region> {
        Region::ALL.into_iter().find(|r| self.get(*r).contains(pos))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub body: Rect,
    pub status: Rect,
    pub regions: Regions,
}

/// Splits the screen into the bordered body, the status line and the five
/// widget regions.
pub fn layout(area: Rect) -> ScreenLayout {
    let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let inner = THEME.block("").inner(body);
    let [header, _, counter, _, controls, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(inner);
    // button order follows the original widget: - [step] +
    let [subtract, input, add] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(INPUT_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(controls);

    ScreenLayout {
        body,
        status,
        regions: Regions { header, counter, input, add, subtract },
    }
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let screen = layout(frame.area());
    app.regions = Some(screen.regions);
    let regions = screen.regions;

    frame.render_widget(THEME.block(" counter-tui "), screen.body);

    let header = Paragraph::new(Span::styled(HEADER_TEXT, THEME.header_style())).alignment(Alignment::Center);
    frame.render_widget(header, regions.header);

    let class = app.counter.class();
    let counter = Paragraph::new(Span::styled(app.counter.total.to_string(), THEME.counter_style(class)))
        .alignment(Alignment::Center);
    frame.render_widget(counter, regions.counter);

    draw_step_input(frame, app, &regions);
    draw_button(frame, &regions, Button::Subtract, app.focus == Focus::Subtract);
    draw_button(frame, &regions, Button::Add, app.focus == Focus::Add);

    draw_status(frame, app, screen.status);

    if app.mode == Mode::Help {
        draw_help_modal(frame);
    }
}

fn draw_step_input(frame: &mut Frame, app: &App, regions: &Regions) {
    let focused = app.focus == Focus::Step;
    let title = if app.counter.step_value().is_some() {
        Line::from("Step")
    } else {
        Line::from(Span::styled("Step?", THEME.warn_style()))
    };
    frame.render_widget(THEME.control_block(title, focused), regions.input);
    let input_area = regions.content(Region::Input);

    // Horizontal scroll to keep cursor visible
    let text = app.counter.step.as_str();
    let before = text.chars().take(app.input_cursor).collect::<String>();
    let w = UnicodeWidthStr::width(before.as_str()) as u16;
    let area_w = input_area.width.saturating_sub(1); // leave space for caret
    let hscroll: u16 = if w >= area_w { w - area_w + 1 } else { 0 };
    frame.render_widget(Paragraph::new(text).scroll((0, hscroll)), input_area);

    if focused && app.mode == Mode::Normal && input_area.width > 0 {
        let right_edge = input_area.x + input_area.width - 1;
        let cursor_x = input_area.x.saturating_add(w.saturating_sub(hscroll)).min(right_edge);
        frame.set_cursor_position((cursor_x, input_area.y));
    }
}

fn draw_button(frame: &mut Frame, regions: &Regions, button: Button, focused: bool) {
    let region = match button {
        Button::Add => Region::AddButton,
        Button::Subtract => Region::SubtractButton,
    };
    let style = if focused { THEME.highlight_style() } else { Style::default().add_modifier(Modifier::BOLD) };
    frame.render_widget(THEME.control_block("", focused), regions.get(region));
    let label = Paragraph::new(Span::styled(button.label(), style)).alignment(Alignment::Center);
    frame.render_widget(label, regions.content(region));
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let left_style = if app.status.starts_with("invalid") { THEME.warn_style() } else { Style::default() };
    let hints = "↑ + · ↓ - · Tab focus · r reset · ? help · Esc quit";
    let line = Line::from(vec![
        Span::styled(app.status.as_str(), left_style),
        Span::raw("  |  "),
        Span::styled(hints, THEME.muted_style().add_modifier(Modifier::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// Center a rectangle of fixed width/height (in cells) within r.
fn centered_rect_fixed(r: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}

fn draw_help_modal(frame: &mut Frame) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("[Counter]", bold)),
        Line::from("  ↑ / ↓        Add / subtract the step"),
        Line::from("  + / -        Add / subtract (buttons focused)"),
        Line::from("  Enter/Space  Press the focused button"),
        Line::from("  r            Reset to the starting state"),
        Line::from(""),
        Line::from(Span::styled("[Step input]", bold)),
        Line::from("  Type to edit · ←/→ Home/End move · Enter done"),
        Line::from("  Text that is not a whole number adds nothing"),
        Line::from(""),
        Line::from(Span::styled("[General]", bold)),
        Line::from("  Tab / Shift-Tab  Move focus · mouse click presses"),
        Line::from("  Esc / Ctrl-C     Quit"),
    ];
    let area = centered_rect_fixed(frame.area(), 60, lines.len() as u16 + 4);
    frame.render_widget(Clear, area);
    let block = THEME
        .modal_block("Help")
        .title_bottom(Line::from("Esc to close").centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
