use crate::api::RecognitionResult;
use crate::logic::format;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

/// Render the recognition results panel for the current vehicle.
pub fn render_results_panel(f: &mut Frame, area: Rect, result: Option<&RecognitionResult>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Recognition Results");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(result) = result else {
        let hint = Paragraph::new(Span::styled(
            "Process an image to see results",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(hint, inner);
        return;
    };

    // Corrected values win over the raw detection when present
    let brand = result
        .detection
        .brand_after
        .as_deref()
        .or(result.detection.brand_before.as_deref());
    let model = result
        .detection
        .model_after
        .as_deref()
        .or(result.detection.model_before.as_deref());

    let mut lines = vec![
        Line::from(Span::styled(
            format::dash(result.vehicle.license_plate.as_deref()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        field("Brand:", format::dash(brand)),
        field("Model:", format::dash(model)),
        field(
            "Weight:",
            format::dash(result.vehicle.weight.as_deref()),
        ),
        field("Floor:", format::display_floor(result.parking.floor)),
        field("Slot:", format::dash(result.parking.slot.as_deref())),
    ];
    if let Some(entry_time) = &result.entry_time {
        lines.push(field("Entry:", format::format_timestamp(entry_time)));
    }
    if result.detection.yolo_confidence > 0.0 {
        lines.push(field(
            "Confidence:",
            format!("{:.1}%", result.detection.yolo_confidence * 100.0),
        ));
    }
    if !result.detection.ocr_texts.is_empty() {
        lines.push(field("OCR:", result.detection.ocr_texts.join(", ")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(":Confirm  "),
        Span::styled("x", Style::default().fg(Color::Yellow)),
        Span::raw(":Exit vehicle"),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}
