use crate::api::VehicleRecord;
use crate::logic::format;
use crate::model::{ConfirmDialog, PathPrompt, VehicleListState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the confirmation dialog for destructive actions
pub fn render_confirm(f: &mut Frame, dialog: &ConfirmDialog) {
    let prompt_text = format!("{}\n\nContinue? (y/n)", dialog.message);

    let prompt_area = centered(f.area(), 56, 9);
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(dialog.title.as_str())
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the image-path input prompt
pub fn render_path_prompt(f: &mut Frame, prompt: &PathPrompt) {
    let area = centered(f.area(), 64, 5);

    let lines = vec![
        Line::from(vec![
            Span::raw("> "),
            Span::raw(prompt.input.as_str()),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "Enter to stage, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Image Path")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}

/// Render the all-parked-vehicles modal list
pub fn render_vehicle_list(f: &mut Frame, list: &VehicleListState) {
    let area = centered(f.area(), 72, (list.vehicles.len() as u16 + 4).clamp(6, 24));

    let items: Vec<ListItem> = list
        .vehicles
        .iter()
        .map(|v| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<12}", format::dash(v.license_plate.as_deref())),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(
                    "{:<20}",
                    match (v.brand_corrected.as_deref(), v.model_corrected.as_deref()) {
                        (Some(b), Some(m)) => format!("{} {}", b, m),
                        (Some(b), None) => b.to_string(),
                        (None, Some(m)) => m.to_string(),
                        (None, None) => "-".to_string(),
                    }
                )),
                Span::styled(
                    format!("{:<8}", format::dash(v.assigned_slot.as_deref())),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    v.entry_time
                        .as_deref()
                        .map(format::format_timestamp)
                        .unwrap_or_else(|| "-".to_string()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(list.selected);

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Parked Vehicles (↑↓ to navigate, Enter for details, Esc to close)")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_widget(Clear, area);
    f.render_stateful_widget(widget, area, &mut state);
}

/// Render the single-vehicle detail modal
pub fn render_vehicle_detail(f: &mut Frame, vehicle: &VehicleRecord) {
    let area = centered(f.area(), 56, 14);

    fn row<'a>(label: &'a str, value: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{:<14}", label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(value),
        ])
    }

    let lines = vec![
        row("Plate:", format::dash(vehicle.license_plate.as_deref())),
        row("Brand:", format::dash(vehicle.brand_corrected.as_deref())),
        row("Model:", format::dash(vehicle.model_corrected.as_deref())),
        row("Weight:", format::display_weight_kg(vehicle.weight.as_deref())),
        row("Floor:", format::display_floor(vehicle.floor)),
        row("Slot:", format::dash(vehicle.assigned_slot.as_deref())),
        row(
            "Entry:",
            vehicle
                .entry_time
                .as_deref()
                .map(format::format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::raw(":Delete  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Close"),
        ]),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Vehicle #{}", vehicle.id))
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}
