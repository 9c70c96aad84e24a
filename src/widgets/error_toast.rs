use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(text) = toast_text(app) else {
        return;
    };

    let toast_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(3),
        width: area.width,
        height: 1,
    };

    let line = Line::from(vec![
        Span::styled(" ERROR ", Style::default().fg(Color::White).bg(theme::RED)),
        Span::styled(format!(" {}", text), Style::default().fg(theme::RED)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::BG_DARK)),
        toast_area,
    );
}

/// The notice text, noting which year's holidays stay on screen after a
/// failed load.
fn toast_text(app: &App) -> Option<String> {
    let (msg, _) = app.last_error.as_ref()?;
    match app.store.snapshot() {
        Some(snapshot) if snapshot.year != app.filters().year => Some(format!(
            "{} (still showing {} holidays)",
            msg, snapshot.year
        )),
        _ => Some(msg.clone()),
    }
}
