//! Results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::results_state::{FetchOutcome, ResultsState};

/// Render the results pane
pub fn render_pane(frame: &mut Frame, area: Rect, results: &mut ResultsState, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let lines = results.lines();
    let viewport_height = area.height.saturating_sub(2);
    results.scroll.update_bounds(lines.len(), viewport_height);

    let text: Vec<Line> = lines
        .iter()
        .map(|line| style_line(line, results.outcome()))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notifications ")
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(text)
        .block(block)
        .scroll((results.scroll.offset, 0));

    frame.render_widget(paragraph, area);
}

fn style_line<'a>(line: &'a str, outcome: &FetchOutcome) -> Line<'a> {
    if line == "Server Error." && matches!(outcome, FetchOutcome::Failed { .. }) {
        Line::styled(line, Style::default().fg(Color::Red))
    } else {
        Line::raw(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{NotificationRecord, NotificationsResponse};
    use crate::error::DingError;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(results: &mut ResultsState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_pane(f, f.area(), results, false))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_fetched_notifications_are_rendered() {
        let mut results = ResultsState::new();
        results.apply_fetch(
            7,
            Ok(NotificationsResponse {
                data: Some(vec![NotificationRecord {
                    content: "hi".to_string(),
                    status: "unread".to_string(),
                    notification_type: "info".to_string(),
                }]),
                error: None,
            }),
        );

        let output = render_to_string(&mut results, 60, 10);
        assert!(output.contains("Notifications for User 7:"));
        assert!(output.contains("hi"));
        assert!(output.contains("unread"));
    }

    #[test]
    fn test_fetch_failure_renders_error_indicator() {
        let mut results = ResultsState::new();
        results.apply_fetch(7, Err(DingError::Network("connection refused".to_string())));

        let output = render_to_string(&mut results, 60, 10);
        assert!(output.contains("Server Error."));
    }

    #[test]
    fn test_no_notifications_message() {
        let mut results = ResultsState::new();
        results.apply_fetch(
            7,
            Ok(NotificationsResponse {
                data: None,
                error: Some("No notifications for user_id: 7 found.".to_string()),
            }),
        );

        let output = render_to_string(&mut results, 60, 10);
        assert!(output.contains("No notifications found."));
    }

    #[test]
    fn test_long_list_scrolls() {
        let mut results = ResultsState::new();
        let records: Vec<NotificationRecord> = (0..30)
            .map(|i| NotificationRecord {
                content: format!("message {}", i),
                status: "sent".to_string(),
                notification_type: "in-app".to_string(),
            })
            .collect();
        results.apply_fetch(
            7,
            Ok(NotificationsResponse {
                data: Some(records),
                error: None,
            }),
        );

        // First render establishes the scroll bounds
        render_to_string(&mut results, 60, 10);
        results.scroll.scroll_down(5);
        let output = render_to_string(&mut results, 60, 10);
        // Scrolled past the header
        assert!(!output.contains("Notifications for User 7:"));
        assert!(output.contains("message 5"));
    }
}
