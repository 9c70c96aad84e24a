pub mod command_input;
pub mod error_toast;
pub mod filter_bar;
pub mod footer;
pub mod help_overlay;
pub mod holiday_table;
pub mod province_selector;
pub mod status_bar;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0]);
    horizontal[0]
}
