use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::domain::JurisdictionFilter;
use crate::theme;

use super::centered_rect;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let options = JurisdictionFilter::options();
    let height = (options.len() as u16 + 2).min(area.height.saturating_sub(2));
    let modal_area = centered_rect(40, height, area);
    frame.render_widget(Clear, modal_area);

    let current = app.filters().jurisdiction;
    let rows: Vec<Row> = options
        .iter()
        .map(|option| {
            let indicator = if *option == current { "* " } else { "  " };
            let name = match option {
                JurisdictionFilter::All => "All provinces and territories",
                JurisdictionFilter::Only(j) => j.name(),
            };
            Row::new(vec![
                Cell::from(format!("{}{}", indicator, option.as_str())),
                Cell::from(name).style(Style::default().fg(theme::TEXT_DIM)),
            ])
        })
        .collect();

    let widths = [Constraint::Length(6), Constraint::Fill(1)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::CYAN))
                .title(" Select Province (Enter to select, Esc to cancel) "),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme::BG_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(table, modal_area, &mut app.selector_state);
}
