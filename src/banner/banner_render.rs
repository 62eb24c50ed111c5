//! Banner rendering
//!
//! Draws the notification toast in the top-right corner, over the main UI.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::banner_state::BannerState;

/// Render the notification toast
///
/// Call after rendering the main UI so the toast appears on top of other
/// content. Expired toasts are cleared here, on the render path, so the
/// window is enforced even when no input events arrive.
pub fn render_banner(frame: &mut Frame, banner: &mut BannerState) {
    banner.clear_expired(Instant::now());

    let toast = match banner.current() {
        Some(t) => t,
        None => return,
    };

    let message = &toast.message;

    // Width: message length + padding (2 chars each side) + borders (2)
    let content_width = message.len() as u16;
    let toast_width = content_width + 4;
    let toast_height = 3; // 1 line content + 2 borders

    // Position in top-right corner with small margin
    let frame_area = frame.area();
    let margin = 2;
    let toast_x = frame_area.width.saturating_sub(toast_width + margin);
    let toast_y = margin;

    let toast_area = Rect {
        x: toast_x,
        y: toast_y,
        width: toast_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: toast_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    // Don't render if area is too small
    if toast_area.width < 5 || toast_area.height < 3 {
        return;
    }

    // Clear background for floating effect
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen).bg(Color::Green))
        .style(Style::default().bg(Color::Green));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(Color::Black).bg(Color::Green),
    ));

    frame.render_widget(Paragraph::new(text).block(block), toast_area);
}
