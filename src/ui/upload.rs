use crate::logic::format::format_bytes;
use crate::model::StagedImage;
use crate::ImagePreviewState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::{Resize, StatefulImage};

/// Render the upload panel: staged image details plus an inline
/// terminal-graphics preview when one is available.
pub fn render_upload_panel(
    f: &mut Frame,
    area: Rect,
    staged: Option<&StagedImage>,
    preview: Option<&mut ImagePreviewState>,
    processing: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Vehicle Image");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(staged) = staged else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No image staged",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("o", Style::default().fg(Color::Yellow)),
                Span::raw(" to enter an image path (png, jpg, jpeg, gif)"),
            ]),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(hint, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let status_span = if processing {
        Span::styled("processing...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "ready - press p to process",
            Style::default().fg(Color::Green),
        )
    };
    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                staged.file_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", format_bytes(staged.file_size))),
        ]),
        Line::from(status_span),
    ]);
    f.render_widget(info, chunks[0]);

    match preview {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            let image = StatefulImage::default().resize(Resize::Fit(None));
            f.render_stateful_widget(image, chunks[1], protocol);
        }
        Some(ImagePreviewState::Loading) => {
            let loading = Paragraph::new("Loading preview...")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(loading, chunks[1]);
        }
        Some(ImagePreviewState::Failed { reason }) => {
            let failed = Paragraph::new(format!("Preview unavailable: {}", reason))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(failed, chunks[1]);
        }
        None => {}
    }
}
