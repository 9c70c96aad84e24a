use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::app::{InputMode, Overlay};

/// Raw crossterm key events plus a periodic tick.
pub struct RawEventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

impl RawEventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                    }
                    event = reader.next() => {
                        match event {
                            Some(Ok(Event::Key(key))) => {
                                if tx.send(AppEvent::Key(key)).is_err() {
                                    break;
                                }
                            }
                            Some(Ok(_)) => {}
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Map a key event to an action based on current app state
pub fn key_to_action(
    key: KeyEvent,
    input_mode: &InputMode,
    overlay: &Overlay,
    input_buffer: &str,
) -> Option<Action> {
    // Handle overlay-specific keys first
    match overlay {
        Overlay::Help => {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    Some(Action::ToggleHelp)
                }
                _ => None,
            };
        }
        Overlay::ProvinceSelector => {
            return match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectorDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectorUp),
                KeyCode::Enter => Some(Action::SelectorConfirm),
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseOverlay),
                _ => None,
            };
        }
        Overlay::None => {}
    }

    match input_mode {
        InputMode::Command => {
            return match key.code {
                KeyCode::Esc => Some(Action::CloseOverlay),
                KeyCode::Enter => Some(Action::SubmitCommandInput(input_buffer.to_string())),
                KeyCode::Tab => {
                    // Tab completion: fill with first matching command
                    let input_cmd = input_buffer.split_whitespace().next().unwrap_or("");
                    let matches = crate::input::commands::matching_commands(input_cmd);
                    matches
                        .first()
                        .map(|cmd| Action::UpdateInputBuffer(format!("{} ", cmd.name)))
                }
                KeyCode::Backspace => {
                    let mut buf = input_buffer.to_string();
                    buf.pop();
                    Some(Action::UpdateInputBuffer(buf))
                }
                KeyCode::Char(c) => {
                    let mut buf = input_buffer.to_string();
                    buf.push(c);
                    Some(Action::UpdateInputBuffer(buf))
                }
                _ => None,
            };
        }
        // Search is live: every edit is a criteria change.
        InputMode::Search => {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::CloseOverlay),
                KeyCode::Backspace => {
                    let mut buf = input_buffer.to_string();
                    buf.pop();
                    Some(Action::SetSearch(buf))
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut buf = input_buffer.to_string();
                    buf.push(c);
                    Some(Action::SetSearch(buf))
                }
                _ => None,
            };
        }
        InputMode::Normal => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::OpenCommandInput),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(Action::PreviousPage),
        KeyCode::Char(']') => Some(Action::StepYear(1)),
        KeyCode::Char('[') => Some(Action::StepYear(-1)),
        KeyCode::Char('P') => Some(Action::OpenProvinceSelector),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Esc => Some(Action::ClearError),
        _ => None,
    }
}
