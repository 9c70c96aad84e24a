use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let filters = app.filters();

    let mut left_spans: Vec<Span> = vec![
        Span::styled(
            " holidays ",
            Style::default()
                .fg(theme::PURPLE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("Year ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(
            filters.year.to_string(),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Province ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(
            filters.jurisdiction.as_str(),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ),
    ];

    if !filters.search.is_empty() {
        left_spans.push(Span::styled("  /", Style::default().fg(theme::GREEN)));
        left_spans.push(Span::styled(
            filters.search.as_str(),
            Style::default().fg(theme::TEXT),
        ));
    }

    let mut right_spans: Vec<Span> = Vec::new();
    if app.is_loading() {
        right_spans.push(Span::styled("◌ Loading...", Style::default().fg(theme::YELLOW)));
    } else if let Some(snapshot) = app.store.snapshot() {
        let indicator = if snapshot.year == filters.year {
            Span::styled(
                format!("● {} holidays", snapshot.records.len()),
                Style::default().fg(theme::GREEN),
            )
        } else {
            Span::styled(
                format!("✗ showing {} (stale)", snapshot.year),
                Style::default().fg(theme::RED),
            )
        };
        right_spans.push(indicator);
    }
    right_spans.push(Span::raw(" "));

    // Calculate widths and fill gap with spaces
    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width: usize = right_spans.iter().map(|s| s.width()).sum();
    let gap = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right_spans);

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_BAR));
    frame.render_widget(widget, area);
}
