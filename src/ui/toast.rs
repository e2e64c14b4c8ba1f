use crate::model::{Severity, Toast};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the toast stack (brief pop-up messages), newest at the top.
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast]) {
    let mut toast_y = 3; // Near the top but not too close

    for toast in toasts.iter().rev() {
        let (icon, color) = match toast.severity {
            Severity::Success => ("✓ ", Color::Green),
            Severity::Error => ("✗ ", Color::Red),
            Severity::Info => ("· ", Color::Cyan),
        };

        let max_width = (area.width as usize).min(80);
        let toast_width = (toast.message.width() + 6).min(max_width) as u16;
        let toast_height = 3;
        if toast_y + toast_height > area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + (area.width.saturating_sub(toast_width)) / 2,
            y: area.y + toast_y,
            width: toast_width,
            height: toast_height,
        };

        // Clear the area first to prevent background bleed-through
        f.render_widget(Clear, toast_area);

        let line = Line::from(vec![
            Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(toast.message.as_str()),
        ]);
        let widget = Paragraph::new(vec![line])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        f.render_widget(widget, toast_area);

        toast_y += toast_height;
    }
}
