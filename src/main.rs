use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use holidays::action::Action;
use holidays::app::{App, Effect, InputMode, Overlay};
use holidays::client::{HolidaySource, HttpHolidaySource};
use holidays::config::{Cli, ConfigFile, Settings};
use holidays::event::{key_to_action, AppEvent, RawEventHandler};
use holidays::nav::{self, AddressBar, LocationState};
use holidays::widgets;
use holidays::worker::{FetchHandle, FetchRequest, FetchWorker};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up logging; the terminal belongs to the UI, so only to a file
    let _log_guard = match cli.log_file {
        Some(ref log_file) => {
            let file = std::fs::File::create(log_file)
                .wrap_err_with(|| format!("creating log file {}", log_file.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_ansi(false)
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .init();
            Some(guard)
        }
        None => None,
    };

    let settings = Settings::resolve(&cli, ConfigFile::load());
    tracing::info!("starting with {:?}", settings);

    run_tui(settings).await
}

async fn run_tui(settings: Settings) -> Result<()> {
    let source: Arc<dyn HolidaySource> = Arc::new(
        HttpHolidaySource::new(&settings.api_url, settings.timeout)
            .wrap_err("building HTTP client")?,
    );

    let initial = initial_location(&settings);
    // Show the link the way the state reads it; loading itself never writes back
    let mut address = AddressBar::new(nav::canonicalize(&initial), settings.location_file.clone());

    let mut app = App::new();

    // Set up channels
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create worker
    let (worker, fetch_handle) = FetchWorker::new(source, action_tx.clone());
    tokio::spawn(worker.run());

    // Set up terminal
    let mut terminal = holidays::tui::init()?;
    let mut events = RawEventHandler::new(Duration::from_secs(1));

    // The location is known up front, so it is ready as soon as the UI attaches
    for action in [Action::Attach, Action::LocationReady(initial)] {
        let effects = app.update(action);
        handle_effects(effects, &fetch_handle, &mut address);
    }

    // Main loop
    loop {
        terminal.draw(|frame| render(&mut app, &address, frame))?;

        tokio::select! {
            Some(event) = events.next() => {
                let action = match event {
                    AppEvent::Key(key) => key_to_action(
                        key,
                        &app.input_mode,
                        &app.overlay,
                        &app.input_buffer,
                    ),
                    AppEvent::Tick => Some(Action::Tick),
                };
                if let Some(action) = action {
                    let effects = app.update(action);
                    handle_effects(effects, &fetch_handle, &mut address);
                }
            }
            Some(action) = action_rx.recv() => {
                let effects = app.update(action);
                handle_effects(effects, &fetch_handle, &mut address);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    holidays::tui::restore()?;

    Ok(())
}

/// `--link` wins; otherwise resume from the mirrored link file if there is one.
fn initial_location(settings: &Settings) -> LocationState {
    if let Some(ref link) = settings.link {
        return LocationState::parse(link);
    }
    settings
        .location_file
        .as_ref()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .map(|content| LocationState::parse(content.trim()))
        .unwrap_or_default()
}

fn render(app: &mut App, address: &AddressBar, frame: &mut ratatui::Frame) {
    let area = frame.area();

    frame.render_widget(
        ratatui::widgets::Block::default().style(
            ratatui::style::Style::default().bg(holidays::theme::BG_DARK),
        ),
        area,
    );

    let layout = Layout::vertical([
        Constraint::Length(1), // Filter bar
        Constraint::Fill(1),   // Table
        Constraint::Length(1), // Link
        Constraint::Length(1), // Footer
    ])
    .split(area);

    widgets::filter_bar::render(app, frame, layout[0]);
    widgets::holiday_table::render(app, frame, layout[1]);
    widgets::status_bar::render(address, frame, layout[2]);
    widgets::footer::render(app, frame, layout[3]);

    // Overlays
    match app.overlay {
        Overlay::Help => widgets::help_overlay::render(frame, area),
        Overlay::ProvinceSelector => widgets::province_selector::render(app, frame, area),
        Overlay::None => {}
    }

    // Input mode overlays
    match app.input_mode {
        InputMode::Command => widgets::command_input::render_command_modal(app, frame, area),
        InputMode::Search => widgets::command_input::render_search_modal(app, frame, area),
        InputMode::Normal => {}
    }

    // Error toast
    widgets::error_toast::render(app, frame, area);
}

fn handle_effects(effects: Vec<Effect>, fetch_handle: &FetchHandle, address: &mut AddressBar) {
    for effect in effects {
        match effect {
            Effect::Fetch(ticket) => {
                fetch_handle.send(FetchRequest::LoadHolidays { ticket });
            }
            Effect::ReplaceLocation(location) => {
                if let Err(e) = address.replace(location) {
                    tracing::warn!("could not mirror link: {}", e);
                }
            }
            Effect::Quit => {}
        }
    }
}
