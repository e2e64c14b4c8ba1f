use crate::api::ActivityEntry;
use crate::logic::format;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the recent activity feed, newest entry first as the server
/// returns them.
pub fn render_activity_panel(f: &mut Frame, area: Rect, entries: &[ActivityEntry], loaded: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Recent Activity");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !loaded {
        let loading = Paragraph::new("Loading activity...")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(loading, inner);
        return;
    }

    if entries.is_empty() {
        let empty = Paragraph::new("No activity yet")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, inner);
        return;
    }

    let lines: Vec<Line> = entries
        .iter()
        .take(inner.height as usize)
        .map(|entry| {
            let time = entry
                .entry_time
                .as_deref()
                .map(format::format_timestamp)
                .unwrap_or_else(|| "-".to_string());
            let vehicle = match (
                entry.brand_corrected.as_deref(),
                entry.model_corrected.as_deref(),
            ) {
                (Some(b), Some(m)) => format!("{} {}", b, m),
                (Some(b), None) => b.to_string(),
                (None, Some(m)) => m.to_string(),
                (None, None) => "-".to_string(),
            };
            Line::from(vec![
                Span::styled(time, Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(
                    format::dash(entry.license_plate.as_deref()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::raw(vehicle),
                Span::raw("  "),
                Span::styled(
                    format::dash(entry.assigned_slot.as_deref()),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
