use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::domain::HolidayRecord;
use crate::theme;

const HEADER: [&str; 4] = [" Date", "Name", "Name (FR)", "Province(s)"];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let view = app.view();

    if view.records.is_empty() {
        let label = if app.is_loading() {
            " Loading holidays..."
        } else if app.store.snapshot().is_none() {
            " No holidays loaded"
        } else {
            " No holidays match the current filters"
        };
        let placeholder = Paragraph::new(label).style(Style::default().fg(theme::TEXT_MUTED));
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(HEADER.iter().map(|label| Cell::from(*label)).collect::<Vec<_>>())
        .style(
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = view.records.iter().map(|h| holiday_row(h)).collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Percentage(32),
        Constraint::Percentage(32),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(table, area);
}

fn holiday_row(holiday: &HolidayRecord) -> Row<'static> {
    let provinces_style = if holiday.federal {
        Style::default().fg(theme::FEDERAL)
    } else {
        Style::default().fg(theme::PROVINCIAL)
    };
    Row::new(vec![
        Cell::from(format!(" {}", holiday.date.format("%Y-%m-%d"))),
        Cell::from(holiday.name_en.clone()).style(Style::default().fg(theme::TEXT)),
        Cell::from(holiday.name_fr.clone()).style(Style::default().fg(theme::TEXT_DIM)),
        Cell::from(holiday.jurisdiction_label()).style(provinces_style),
    ])
}
