use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, InputMode, Overlay};
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let view = app.view();

    let hints = match (&app.overlay, &app.input_mode) {
        (Overlay::ProvinceSelector, _) => vec![
            hint("j/k", "nav"),
            hint("Enter", "select"),
            hint("Esc", "cancel"),
        ],
        (_, InputMode::Command) => vec![hint("Esc", "cancel"), hint("Enter", "execute")],
        (_, InputMode::Search) => vec![hint("Esc/Enter", "done")],
        _ => {
            let mut hints = Vec::new();
            if view.has_previous() {
                hints.push(hint("p/←", "prev"));
            }
            if view.has_next() {
                hints.push(hint("n/→", "next"));
            }
            hints.extend([
                hint("[/]", "year"),
                hint("P", "province"),
                hint("/", "search"),
                hint(":", "cmd"),
                hint("?", "help"),
                hint("q", "quit"),
            ]);
            hints
        }
    };

    let mut left_spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            left_spans.push(Span::styled("  ", Style::default()));
        }
        left_spans.push(Span::styled(
            key.as_str(),
            Style::default().fg(theme::PURPLE),
        ));
        left_spans.push(Span::styled(
            format!(":{}", desc),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }

    let paging = if view.total_pages == 0 {
        String::from("Page 0/0 ")
    } else {
        format!(
            "Page {}/{}  ({}-{} of {}) ",
            view.current_page,
            view.total_pages,
            view.first_position(),
            view.last_position(),
            view.filtered_count
        )
    };
    let right = Span::styled(paging, Style::default().fg(theme::TEXT_DIM));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let gap = (area.width as usize).saturating_sub(left_width + right.width());

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(right);

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_SURFACE));
    frame.render_widget(widget, area);
}

fn hint(key: &str, desc: &str) -> (String, String) {
    (key.to_string(), desc.to_string())
}
