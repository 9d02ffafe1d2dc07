//! Text input widget
//!
//! A single-line text field with a character cursor, a placeholder and an
//! inline error line underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Editable text with a cursor counted in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub content: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `content` with the cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }
}

/// Renders a labelled input over two rows: value on the first, error on the second
pub struct InputField<'a> {
    pub label: &'a str,
    pub input: &'a TextInput,
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
    pub focused: bool,
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = vec![Span::styled(format!("{}: ", self.label), label_style)];
        let value = self.input.value();

        if value.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused {
            let split = value
                .char_indices()
                .nth(self.input.cursor)
                .map(|(i, _)| i)
                .unwrap_or(value.len());
            let (before, after) = value.split_at(split);
            let mut rest = after.chars();
            let cursor_char = rest.next().unwrap_or(' ');

            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(rest.as_str(), Style::default().fg(Color::White)));
        } else {
            spans.push(Span::styled(value, Style::default().fg(Color::White)));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let Some(error) = self.error {
            if area.height > 1 {
                let line = Line::from(Span::styled(
                    format!("  {}", error),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
                buf.set_line(area.x, area.y + 1, &line, area.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Yasin".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Yasin");
        input.backspace();
        assert_eq!(input.value(), "Yasi");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_cursor_movement_and_delete() {
        let mut input = TextInput::with_content("abc");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.move_end();
        input.move_left();
        input.insert('X');
        assert_eq!(input.value(), "bXc");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::with_content("José");
        assert_eq!(input.cursor, 4);
        input.backspace();
        assert_eq!(input.value(), "Jos");
        input.insert('é');
        input.move_left();
        input.move_left();
        input.insert('ñ');
        assert_eq!(input.value(), "Joñsé");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::with_content("text");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_render_shows_error_row() {
        let input = TextInput::with_content("not-an-email");
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        InputField {
            label: "Email Address",
            input: &input,
            placeholder: "",
            error: Some("Invalid email"),
            focused: false,
        }
        .render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf.content[(y * area.width + x) as usize].symbol())
                .collect()
        };
        assert!(row(0).starts_with("Email Address: not-an-email"));
        assert!(row(1).contains("Invalid email"));
    }
}
