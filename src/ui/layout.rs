use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top statistics bar area
    pub header_area: Rect,
    /// Upload panel (left top)
    pub upload_area: Rect,
    /// Recognition results panel (left bottom)
    pub results_area: Rect,
    /// Parking grid for the active floor (right top)
    pub status_area: Rect,
    /// Recent activity feed (right bottom)
    pub activity_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar (top border, text, bottom border)
            Constraint::Min(10),   // Content area (two columns)
            Constraint::Length(3), // Legend
        ])
        .split(terminal_size);

    let header_area = main_chunks[0];
    let content_area = main_chunks[1];
    let legend_area = main_chunks[2];

    // Left column holds the operator panels, right column the live data
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(content_area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    LayoutInfo {
        header_area,
        upload_area: left[0],
        results_area: left[1],
        status_area: right[0],
        activity_area: right[1],
        legend_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_full_height() {
        let size = Rect::new(0, 0, 120, 40);
        let info = calculate_layout(size);
        assert_eq!(info.header_area.y, 0);
        assert_eq!(info.header_area.height, 3);
        assert_eq!(info.legend_area.height, 3);
        assert_eq!(
            info.legend_area.y + info.legend_area.height,
            size.height
        );
    }

    #[test]
    fn columns_do_not_overlap() {
        let size = Rect::new(0, 0, 100, 30);
        let info = calculate_layout(size);
        assert!(info.upload_area.x + info.upload_area.width <= info.status_area.x);
        assert_eq!(info.upload_area.x, info.results_area.x);
        assert_eq!(info.status_area.x, info.activity_area.x);
    }
}
