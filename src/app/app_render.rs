use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, ConnectionStatus, Focus};
use crate::banner::render_banner;
use crate::form::render_field;
use crate::results::render_pane;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_fetch_row(frame, layout[0]);
        self.render_send_row(frame, layout[1]);

        render_pane(
            frame,
            layout[2],
            &mut self.results,
            self.focus == Focus::ResultsPane,
        );

        self.render_status_line(frame, layout[3]);

        // Toast drawn last so it floats over everything else
        render_banner(frame, &mut self.banner);
    }

    fn render_fetch_row(&mut self, frame: &mut Frame, area: Rect) {
        let columns =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).split(area);
        render_field(
            frame,
            columns[0],
            &mut self.fetch_user_id,
            self.focus == Focus::FetchUserId,
        );

        let hint = Paragraph::new(Line::from(Span::styled(
            " Enter fetches this user's notifications ",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hint, inset_vertically(columns[1], 1));
    }

    fn render_send_row(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::horizontal([
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Min(20),
        ])
        .split(area);

        render_field(
            frame,
            columns[0],
            &mut self.send_user_id,
            self.focus == Focus::SendUserId,
        );
        render_field(
            frame,
            columns[1],
            &mut self.send_type,
            self.focus == Focus::SendType,
        );
        render_field(
            frame,
            columns[2],
            &mut self.send_content,
            self.focus == Focus::SendContent,
        );
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let (connection_text, connection_color) = match &self.connection {
            ConnectionStatus::Connecting => ("Connecting...", Color::Yellow),
            ConnectionStatus::Connected => ("Connected", Color::Green),
            ConnectionStatus::Disconnected(_) => ("Disconnected", Color::Red),
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(connection_text, Style::default().fg(connection_color)),
        ];

        if let Some(message) = &self.status_message {
            spans.push(Span::styled(" \u{2022} ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(message.as_str()));
        }

        spans.push(Span::styled(" \u{2022} ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            "Tab",
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(" Switch "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" Submit "));
        spans.push(Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" Quit"));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn inset_vertically(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + margin,
        width: area.width,
        height: area.height.saturating_sub(margin * 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::push::{NotificationEvent, PushUpdate};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_initial_frame_shows_forms_and_hints() {
        let mut app = App::new(&Config::default());
        let output = render_to_string(&mut app, 100, 24);

        assert!(output.contains("User Id"));
        assert!(output.contains("Content"));
        assert!(output.contains("Notifications"));
        assert!(output.contains("Connecting..."));
        assert!(output.contains("Ctrl+C"));
    }

    #[test]
    fn test_push_notification_appears_as_toast() {
        let mut app = App::new(&Config::default());
        app.apply_push_update(PushUpdate::Notification(NotificationEvent {
            id: "a".to_string(),
            message: "Package delivered".to_string(),
        }));

        let output = render_to_string(&mut app, 100, 24);
        assert!(output.contains("Package delivered"));
    }

    #[test]
    fn test_disconnected_status_is_shown() {
        let mut app = App::new(&Config::default());
        app.apply_push_update(PushUpdate::Disconnected("boom".to_string()));

        let output = render_to_string(&mut app, 100, 24);
        assert!(output.contains("Disconnected"));
    }
}
