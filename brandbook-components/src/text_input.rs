//! Single-line text input component

use brandbook_core::{Component, EventKind};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for TextInput component
pub struct TextInputProps<'a, A> {
    /// Current input value
    pub value: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Border title (e.g. "Tailwind Classes")
    pub title: Option<&'a str>,
    pub is_focused: bool,
    pub show_border: bool,
    /// Background color (None = transparent)
    pub bg_color: Option<Color>,
    /// Callback when value changes
    pub on_change: fn(String) -> A,
    /// Callback when user submits (Enter)
    pub on_submit: fn(String) -> A,
}

/// A single-line text input with cursor
///
/// Emits `on_change` for every edit and `on_submit` for Enter. Ctrl+A / Ctrl+E
/// jump to start / end and Ctrl+U clears. Long values scroll horizontally so
/// the cursor stays visible.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index)
    cursor: usize,
    /// First visible character (char index)
    scroll: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the cursor after the last character of `value`
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Backspace
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let new_value = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    /// Delete
    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        Some(format!(
            "{}{}",
            &value[..self.cursor],
            &value[self.cursor + c.len_utf8()..]
        ))
    }

    /// Adjust the scroll window so the cursor column fits in `width` cells
    fn ensure_cursor_visible(&mut self, value: &str, width: usize) {
        let cursor_col = value[..self.cursor].chars().count();
        if width == 0 {
            self.scroll = cursor_col;
        } else if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if cursor_col >= self.scroll + width {
            self.scroll = cursor_col + 1 - width;
        }
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some((props.on_change)(self.insert_char(props.value, c))),
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(props.on_change),
            KeyCode::Delete => self.delete_char_at(props.value).map(props.on_change),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border = u16::from(props.show_border);
        let text_width = area.width.saturating_sub(border * 2) as usize;
        self.ensure_cursor_visible(props.value, text_width.saturating_sub(1));

        let (display_text, mut style) = if props.value.is_empty() {
            (
                props.placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (
                props.value.chars().skip(self.scroll).collect::<String>(),
                Style::default(),
            )
        };
        if let Some(bg) = props.bg_color {
            style = style.bg(bg);
        }

        let mut paragraph = Paragraph::new(display_text).style(style);
        if props.show_border {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                });
            if let Some(title) = props.title {
                block = block.title(format!(" {} ", title));
            }
            paragraph = paragraph.block(block);
        }

        frame.render_widget(paragraph, area);

        if props.is_focused {
            let cursor_col = props.value[..self.cursor]
                .chars()
                .count()
                .saturating_sub(self.scroll);
            let cursor_x = area.x + border + cursor_col as u16;
            let cursor_y = area.y + border;
            if cursor_x < area.right().saturating_sub(border) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}
