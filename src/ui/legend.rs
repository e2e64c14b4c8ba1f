use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(Color::Yellow))
}

/// Render the hotkey legend. Modal views get their own shortened set.
pub fn render_legend(f: &mut Frame, area: Rect, modal_open: bool) {
    let spans: Vec<Span> = if modal_open {
        vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Select  "),
            key("d"),
            Span::raw(":Delete  "),
            key("Esc"),
            Span::raw(":Close"),
        ]
    } else {
        vec![
            key("o"),
            Span::raw(":Stage image  "),
            key("p"),
            Span::raw(":Process  "),
            key("c"),
            Span::raw(":Confirm  "),
            key("x"),
            Span::raw(":Exit vehicle  "),
            key("v"),
            Span::raw(":Vehicles  "),
            key("e"),
            Span::raw(":Export  "),
            key("h"),
            Span::raw(":Clear history  "),
            key("R"),
            Span::raw(":Reset  "),
            key("r"),
            Span::raw(":Refresh  "),
            key("1-3"),
            Span::raw(":Floor  "),
            key("q"),
            Span::raw(":Quit"),
        ]
    };

    let legend = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(legend, area);
}
