use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};

/// Timeout for event polling - allows periodic UI refresh for toast expiry
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Poll with timeout to allow periodic refresh while a toast is up
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global keys first
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
            }
            KeyCode::Enter => self.submit_focused(),
            _ => match self.focus {
                Focus::FetchUserId => self.fetch_user_id.handle_key(key),
                Focus::SendUserId => self.send_user_id.handle_key(key),
                Focus::SendType => self.send_type.handle_key(key),
                Focus::SendContent => self.send_content.handle_key(key),
                Focus::ResultsPane => self.handle_results_pane_key(key),
            },
        }
    }

    /// Enter submits the form owning focus
    fn submit_focused(&mut self) {
        match self.focus {
            Focus::FetchUserId => self.submit_fetch(),
            Focus::SendUserId | Focus::SendType | Focus::SendContent => self.submit_send(),
            Focus::ResultsPane => {}
        }
    }

    /// Keys when the results pane is focused
    fn handle_results_pane_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.results.scroll.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.results.scroll.scroll_up(1),
            KeyCode::PageDown => self.results.scroll.scroll_down(10),
            KeyCode::PageUp => self.results.scroll.scroll_up(10),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_app() -> App {
        App::new(&Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_cycles_focus_forward_and_back() {
        let mut app = test_app();
        assert_eq!(app.focus, Focus::FetchUserId);

        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::SendUserId);

        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::FetchUserId);

        // Wraps around
        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::ResultsPane);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut app = test_app();
        app.focus = Focus::SendContent;
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_quits_only_from_results_pane() {
        let mut app = test_app();
        app.focus = Focus::FetchUserId;
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.fetch_user_id.value(), "q");

        app.focus = Focus::ResultsPane;
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_lands_in_focused_field() {
        let mut app = test_app();
        app.focus = Focus::SendContent;
        app.handle_key_event(key(KeyCode::Char('h')));
        app.handle_key_event(key(KeyCode::Char('i')));

        assert_eq!(app.send_content.value(), "hi");
        assert_eq!(app.fetch_user_id.value(), "");
    }

    #[test]
    fn test_enter_with_bad_user_id_sets_status() {
        let mut app = test_app();
        app.fetch_user_id.set_value("seven");
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(
            app.status_message.as_deref(),
            Some("User id must be a number")
        );
    }
}
