//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title drawn on the outer border
pub const TITLE: &str = " OneBoard Calculator ";

/// Keyboard shortcuts shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digit"),
    ("+ - * /", "Operator"),
    ("Enter", "Equals"),
    ("Esc / c", "Clear"),
    ("Click", "Press button"),
    ("q", "Quit"),
];

const KEYPAD_WIDTH: u16 = 26;
const KEYPAD_HEIGHT: u16 = 10;
const HELP_WIDTH: u16 = 22;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns where the keypad is drawn when the UI fills `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    let columns = columns(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(KEYPAD_HEIGHT), Constraint::Min(0)])
        .split(columns[1])[0]
}

fn columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),
            Constraint::Length(KEYPAD_WIDTH),
            Constraint::Length(HELP_WIDTH),
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.state().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status_line(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .app
            .tape()
            .iter_rev()
            .take(rows)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.key.to_string(), Style::default().fg(Color::Yellow)),
                    Span::raw(" → "),
                    Span::styled(entry.display.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Tape (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = columns(area);
        if columns.len() < 3 {
            return;
        }

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(columns[0]);

        self.render_display(main[0], buf);
        self.render_status(main[1], buf);
        self.render_tape(main[2], buf);

        KeypadWidget::new(self.app.keypad())
            .highlight(self.app.highlighted())
            .render(keypad_area(area), buf);

        Self::render_help(columns[2], buf);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::core::key::parse_keys;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn draw(app: &CalculatorApp) -> String {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app_after(keys: &str) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for key in parse_keys(keys).unwrap() {
            app.press(key);
        }
        app
    }

    #[test]
    fn test_render_initial() {
        let content = draw(&CalculatorApp::new());
        assert!(content.contains("OneBoard Calculator"));
        assert!(content.contains("Display"));
        assert!(content.contains('0'));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
    }

    #[test]
    fn test_render_result() {
        let content = draw(&app_after("12+7="));
        assert!(content.contains("19"));
        assert!(content.contains("Tape"));
    }

    #[test]
    fn test_render_pending_status() {
        let content = draw(&app_after("12+"));
        assert!(content.contains("12 +"));
    }

    #[test]
    fn test_render_error_in_red() {
        let app = app_after("5/0=");
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Error"));
        assert!(buffer
            .content()
            .iter()
            .any(|c| c.symbol() == "E" && c.fg == Color::Red));
    }

    #[test]
    fn test_render_tape_newest_first() {
        let content = draw(&app_after("9*"));
        let times = content.find("× → 9").unwrap();
        let nine = content.find("9 → 9").unwrap();
        assert!(times < nine);
    }

    #[test]
    fn test_keypad_area_matches_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.width, KEYPAD_WIDTH);
        assert_eq!(keypad.height, KEYPAD_HEIGHT);
        assert_eq!(keypad.y, 1);
    }

    #[test]
    fn test_click_inside_rendered_keypad() {
        let mut app = CalculatorApp::new();
        let keypad = keypad_area(Rect::new(0, 0, 80, 24));
        assert!(app.click(keypad, keypad.x + 2, keypad.y + 2));
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_render_small_terminal() {
        let app = CalculatorApp::new();
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_help_shortcuts_have_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
        let keys: Vec<&str> = HELP_SHORTCUTS.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"Enter"));
        assert!(keys.contains(&"q"));
    }
}
