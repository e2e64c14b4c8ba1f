use crate::api::FloorStatus;
use crate::logic::slots::{self, SLOTS_PER_FLOOR};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const GRID_COLUMNS: usize = 5;

/// Render the parking grid for the active floor: a floor tab line, an
/// occupancy gauge, and the 20-slot grid with occupant plates.
pub fn render_status_panel(
    f: &mut Frame,
    area: Rect,
    active_floor: u8,
    floor_status: Option<&FloorStatus>,
    loaded: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Parking Status");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Floor tabs
            Constraint::Length(1), // Occupancy gauge
            Constraint::Min(1),    // Slot grid
        ])
        .split(inner);

    render_floor_tabs(f, chunks[0], active_floor);

    if !loaded {
        let loading = Paragraph::new("Loading parking status...")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(loading, chunks[2]);
        return;
    }

    let status = floor_status.cloned().unwrap_or_default();
    let percent = slots::floor_percent(&status);
    let gauge_color = if percent >= 90 {
        Color::Red
    } else if percent >= 70 {
        Color::Yellow
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color))
        .percent(percent)
        .label(format!(
            "{}/{} occupied ({}%)",
            status.occupied, status.total, percent
        ));
    f.render_widget(gauge, chunks[1]);

    render_slot_grid(f, chunks[2], active_floor, &status);
}

fn render_floor_tabs(f: &mut Frame, area: Rect, active_floor: u8) {
    let mut spans = Vec::new();
    for floor in 1..=slots::FLOOR_COUNT {
        let label = format!(" Floor {} ", floor);
        if floor == active_floor {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(1/2/3 to switch)", Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_slot_grid(f: &mut Frame, area: Rect, floor: u8, status: &FloorStatus) {
    let grid = slots::build_slot_grid(floor, &status.occupied_slots);
    if grid.len() < SLOTS_PER_FLOOR {
        return;
    }

    let rows = SLOTS_PER_FLOOR / GRID_COLUMNS;
    let cell_width = area.width / GRID_COLUMNS as u16;
    if cell_width == 0 || area.height == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(GRID_COLUMNS);
        for col in 0..GRID_COLUMNS {
            let cell = &grid[row * GRID_COLUMNS + col];
            let text = if cell.occupied {
                let plate = cell.occupant.as_deref().unwrap_or("?");
                format!("[{} {}]", cell.code, plate)
            } else {
                format!("[{}]", cell.code)
            };
            let style = if cell.occupied {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            spans.push(Span::styled(
                format!("{:<width$}", text, width = cell_width as usize),
                style,
            ));
        }
        lines.push(Line::from(spans));
        // Blank spacer line between rows when there is room
        if area.height as usize > rows * 2 {
            lines.push(Line::from(""));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
