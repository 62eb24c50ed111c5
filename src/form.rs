//! Form field widget
//!
//! Single-line text inputs backed by tui-textarea, used for the fetch and
//! send forms. Submission and focus movement are handled by the app event
//! layer; fields only accept editing keys.

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// A labelled single-line input field
pub struct FieldState {
    pub textarea: TextArea<'static>,
    label: &'static str,
}

impl FieldState {
    pub fn new(label: &'static str, placeholder: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        Self { textarea, label }
    }

    /// Current field contents (first line; fields are single-line)
    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_value(&mut self, value: &str) {
        self.textarea = TextArea::from([value.to_string()]);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Feed an editing key into the field. Enter and Tab are navigation
    /// keys owned by the app layer and are never inserted.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {}
            _ => {
                self.textarea.input(key);
            }
        }
    }
}

/// Render a field with its label, highlighting the focused one
pub fn render_field(frame: &mut Frame, area: Rect, field: &mut FieldState, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    field.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label))
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&field.textarea, area);
}
