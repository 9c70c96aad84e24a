use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;

use super::centered_rect;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        section("Paging"),
        binding("n / Right", "Next page"),
        binding("p / Left", "Previous page"),
        binding(":page <n>", "Jump to page"),
        Line::from(""),
        section("Filters"),
        binding("] / [", "Next / previous year"),
        binding("P (shift+p)", "Choose province"),
        binding("/ (slash)", "Search holiday names"),
        binding(":year <n>", "Show a year (2020-2030)"),
        binding(":prov <code>", "Filter by province, or All"),
        binding(":clear", "Clear the search"),
        Line::from(""),
        section("Links"),
        binding(":open <query>", "Open a shared link"),
        Line::from(""),
        section("General"),
        binding("r / Ctrl+R", "Refresh"),
        binding("?", "Toggle this help"),
        binding("q / Ctrl+C", "Quit"),
    ];

    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4));
    let modal_area = centered_rect(60, height, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::PURPLE))
        .title(" Help (? to close) ");

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, modal_area);
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(theme::PURPLE)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {:<22}", key), Style::default().fg(theme::YELLOW)),
        Span::styled(desc, Style::default().fg(theme::TEXT)),
    ])
}
