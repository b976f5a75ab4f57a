//! Keypad widget and mouse hit testing

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::key::Key;
use crate::keypad::Keypad;

/// Returns the index of the button under (`x`, `y`) when the keypad fills `area`
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border takes one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (rows, cols) = keypad.dimensions();
    let btn_width = (area.width - 2) / cols as u16;
    let btn_height = (area.height - 2) / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;
    if row < rows && col < cols {
        Some(row * cols + col)
    } else {
        None
    }
}

/// Renders a [`Keypad`], highlighting the last pressed button
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    highlighted: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget for `keypad`
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            highlighted: None,
        }
    }

    /// Highlights the button at `index`
    #[must_use]
    pub fn highlight(mut self, index: Option<usize>) -> Self {
        self.highlighted = index;
        self
    }

    fn button_style(key: Key, pressed: bool) -> Style {
        if pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match key {
            Key::Digit(_) => Style::default().fg(Color::White),
            Key::Operator(_) => Style::default().fg(Color::LightRed),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Gray),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for (index, btn) in self.keypad.buttons().iter().enumerate() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height;
            let style = Self::button_style(btn.key, self.highlighted == Some(index));

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let label_x = x + btn_width.saturating_sub(3) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
