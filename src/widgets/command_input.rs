use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::input::commands::matching_commands;
use crate::theme;

use super::centered_rect;

pub fn render_command_modal(app: &App, frame: &mut Frame, area: Rect) {
    let modal_area = centered_rect(60, 4, area);
    frame.render_widget(Clear, modal_area);

    let mut spans = vec![
        Span::styled(":", Style::default().fg(theme::YELLOW)),
        Span::styled(app.input_buffer.as_str(), Style::default().fg(theme::TEXT)),
    ];

    // Ghost completion while the command word is still being typed
    if !app.input_buffer.is_empty() && !app.input_buffer.contains(' ') {
        let input_cmd = app.input_buffer.as_str();
        if let Some(cmd) = matching_commands(input_cmd).first() {
            if cmd.name.starts_with(input_cmd) && cmd.name.len() > input_cmd.len() {
                spans.push(Span::styled(
                    &cmd.name[input_cmd.len()..],
                    Style::default().fg(theme::TEXT_MUTED),
                ));
            }
        }
    }
    spans.push(Span::styled("_", Style::default().fg(theme::TEXT_MUTED)));

    let lines = vec![Line::from(spans), suggestions(&app.input_buffer)];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::YELLOW))
        .title(" Command ");
    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}

pub fn render_search_modal(app: &App, frame: &mut Frame, area: Rect) {
    if app.input_mode != InputMode::Search {
        return;
    }
    let modal_area = centered_rect(60, 3, area);
    frame.render_widget(Clear, modal_area);

    let line = Line::from(vec![
        Span::styled("/", Style::default().fg(theme::GREEN)),
        Span::styled(app.input_buffer.as_str(), Style::default().fg(theme::TEXT)),
        Span::styled("_", Style::default().fg(theme::TEXT_MUTED)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::GREEN))
        .title(Span::styled(
            " Search names (EN/FR) ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(line).block(block), modal_area);
}

fn suggestions(input_buffer: &str) -> Line<'static> {
    // Nothing to suggest once arguments are being typed
    if input_buffer.contains(' ') {
        return Line::from("");
    }

    let input_cmd = input_buffer.trim();
    let matches = matching_commands(input_cmd);
    if matches.is_empty() {
        return Line::from(Span::styled(
            " No matching commands",
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, cmd) in matches.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(theme::CYAN)
        } else {
            Style::default().fg(theme::TEXT_DIM)
        };
        spans.push(Span::styled(format!(":{}", cmd.name), style));
        if i == 0 {
            spans.push(Span::styled(
                format!(" {}", cmd.description),
                Style::default().fg(theme::TEXT_MUTED),
            ));
        }
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
