use crate::api::SystemStats;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the statistics bar at the top of the screen
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    stats: Option<&SystemStats>,
    processing: bool,
) {
    let mut spans = vec![
        Span::styled(
            "Parking Management",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
    ];

    match stats {
        Some(stats) => {
            spans.extend(vec![
                Span::raw("Processed: "),
                Span::styled(
                    stats.total_processed.to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  Parked: "),
                Span::styled(
                    stats.current_parked.to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("  Available: "),
                Span::styled(
                    stats.available_slots.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  Today: "),
                Span::styled(
                    stats.today_entries.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]);
        }
        None => {
            spans.push(Span::styled(
                "Loading statistics...",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if processing {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "⏳ Processing...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}
