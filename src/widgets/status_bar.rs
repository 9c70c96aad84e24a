use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::nav::AddressBar;
use crate::theme;

/// Shows the current shareable link.
pub fn render(address: &AddressBar, frame: &mut Frame, area: Rect) {
    let link = address.link();
    let line = Line::from(vec![
        Span::styled(" link ", Style::default().fg(theme::BG_DARK).bg(theme::PURPLE_DIM)),
        Span::styled(
            format!(" ?{}", link),
            Style::default().fg(theme::BLUE),
        ),
    ]);
    let widget = Paragraph::new(line).style(Style::default().bg(theme::BG_BAR));
    frame.render_widget(widget, area);
}
