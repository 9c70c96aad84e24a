use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::action::Action;
use crate::domain::*;
use crate::nav::{self, LocationState};
use crate::store::{Change, FilterStore, Snapshot};
use crate::view::{self, DerivedView};
use crate::worker::FetchTicket;

const ERROR_TTL: Duration = Duration::from_secs(5);

/// Session phases. Nothing is fetched or written back until `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Uninitialized,
    AwaitingLocation,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ProvinceSelector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchTicket),
    ReplaceLocation(LocationState),
    Quit,
}

pub struct App {
    pub phase: SyncPhase,
    pub store: FilterStore,

    // View state
    pub input_mode: InputMode,
    pub overlay: Overlay,
    pub input_buffer: String,
    pub selector_state: TableState,

    // Fetch bookkeeping
    pending_fetch: Option<FetchTicket>,
    next_seq: u64,

    // Last location handed to the address bar, or the baseline read on load
    written: Option<LocationState>,

    pub should_quit: bool,
    pub last_error: Option<(String, Instant)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: SyncPhase::Uninitialized,
            store: FilterStore::new(),

            input_mode: InputMode::Normal,
            overlay: Overlay::None,
            input_buffer: String::new(),
            selector_state: TableState::default(),

            pending_fetch: None,
            next_seq: 0,
            written: None,

            should_quit: false,
            last_error: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        self.store.filters()
    }

    pub fn view(&self) -> DerivedView<'_> {
        self.store.view()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetch.is_some()
    }

    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        // Clear stale error toasts
        if let Some((_, at)) = &self.last_error {
            if at.elapsed() > ERROR_TTL {
                self.last_error = None;
            }
        }

        let mut effects = self.dispatch(action);
        if let Some(effect) = self.write_back() {
            effects.push(effect);
        }
        effects
    }

    fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            // Session lifecycle
            Action::Attach => {
                if self.phase == SyncPhase::Uninitialized {
                    self.phase = SyncPhase::AwaitingLocation;
                }
                vec![]
            }
            Action::LocationReady(location) => self.initial_load(location),
            Action::LocationChanged(location) => self.navigate(location),

            // Criteria
            Action::SetYear(year) => {
                if !self.accepts_input("year change") {
                    return vec![];
                }
                let change = self.store.set_year(year);
                self.after_change(change)
            }
            Action::StepYear(delta) => {
                if !self.accepts_input("year change") {
                    return vec![];
                }
                let year = (i32::from(self.filters().year) + delta).clamp(
                    i32::from(*SUPPORTED_YEARS.start()),
                    i32::from(*SUPPORTED_YEARS.end()),
                );
                let change = self.store.set_year(year as u16);
                self.after_change(change)
            }
            Action::SetJurisdiction(jurisdiction) => {
                if !self.accepts_input("jurisdiction change") {
                    return vec![];
                }
                let change = self.store.set_jurisdiction(jurisdiction);
                self.after_change(change)
            }
            Action::SetSearch(search) => {
                if self.input_mode == InputMode::Search {
                    self.input_buffer = search.clone();
                }
                if !self.accepts_input("search change") {
                    return vec![];
                }
                let change = self.store.set_search(&search);
                self.after_change(change)
            }

            // Paging
            Action::NextPage => {
                if !self.accepts_input("page change") {
                    return vec![];
                }
                let (has_next, current) = {
                    let view = self.view();
                    (view.has_next(), view.current_page)
                };
                if has_next {
                    self.store.set_page(current + 1);
                }
                vec![]
            }
            Action::PreviousPage => {
                if !self.accepts_input("page change") {
                    return vec![];
                }
                let (has_previous, current) = {
                    let view = self.view();
                    (view.has_previous(), view.current_page)
                };
                if has_previous {
                    self.store.set_page(current - 1);
                }
                vec![]
            }
            Action::GoToPage(page) => {
                if !self.accepts_input("page change") {
                    return vec![];
                }
                let page = view::clamp_page(page, self.store.total_pages());
                self.store.set_page(page);
                vec![]
            }

            // UI
            Action::OpenCommandInput => {
                self.input_mode = InputMode::Command;
                self.input_buffer.clear();
                vec![]
            }
            Action::OpenSearch => {
                self.input_mode = InputMode::Search;
                self.input_buffer = self.filters().search.clone();
                vec![]
            }
            Action::OpenProvinceSelector => {
                let current = self.filters().jurisdiction;
                let idx = JurisdictionFilter::options()
                    .iter()
                    .position(|j| *j == current)
                    .unwrap_or(0);
                self.selector_state.select(Some(idx));
                self.overlay = Overlay::ProvinceSelector;
                vec![]
            }
            Action::CloseOverlay => {
                if self.overlay != Overlay::None {
                    self.overlay = Overlay::None;
                } else if self.input_mode != InputMode::Normal {
                    self.input_mode = InputMode::Normal;
                    self.input_buffer.clear();
                }
                vec![]
            }
            Action::SubmitCommandInput(cmd) => {
                self.input_mode = InputMode::Normal;
                let effects = self.execute_command(&cmd);
                self.input_buffer.clear();
                effects
            }
            Action::UpdateInputBuffer(buf) => {
                self.input_buffer = buf;
                vec![]
            }
            Action::SelectorUp => {
                let idx = self.selector_state.selected().unwrap_or(0);
                self.selector_state.select(Some(idx.saturating_sub(1)));
                vec![]
            }
            Action::SelectorDown => {
                let last = JurisdictionFilter::options().len() - 1;
                let idx = self.selector_state.selected().map_or(0, |i| i + 1);
                self.selector_state.select(Some(idx.min(last)));
                vec![]
            }
            Action::SelectorConfirm => {
                self.overlay = Overlay::None;
                let selected = self
                    .selector_state
                    .selected()
                    .and_then(|idx| JurisdictionFilter::options().get(idx).copied());
                match selected {
                    Some(jurisdiction) => self.dispatch(Action::SetJurisdiction(jurisdiction)),
                    None => vec![],
                }
            }
            Action::ToggleHelp => {
                self.overlay = if self.overlay == Overlay::Help {
                    Overlay::None
                } else {
                    Overlay::Help
                };
                vec![]
            }

            // Data responses
            Action::HolidaysLoaded(ticket, holidays) => {
                if !self.claim_ticket(ticket) {
                    return vec![];
                }
                tracing::info!(
                    "applying {} holidays for {} ({})",
                    holidays.len(),
                    ticket.year,
                    ticket.jurisdiction
                );
                self.store.replace_snapshot(Snapshot {
                    year: ticket.year,
                    records: holidays.into(),
                });
                self.store.clamp_page();
                self.last_error = None;
                vec![]
            }
            Action::FetchFailed(ticket, msg) => {
                if !self.claim_ticket(ticket) {
                    return vec![];
                }
                self.set_error(msg);
                vec![]
            }

            // App control
            Action::Refresh => {
                if !self.accepts_input("refresh") {
                    return vec![];
                }
                vec![self.issue_fetch()]
            }
            Action::Quit => {
                self.should_quit = true;
                vec![Effect::Quit]
            }
            Action::Tick => vec![],
            Action::ClearError => {
                self.last_error = None;
                vec![]
            }
        }
    }

    /// Reads the location once, when it first becomes available. The decoded
    /// state becomes the write-back baseline, so loading never writes.
    fn initial_load(&mut self, location: LocationState) -> Vec<Effect> {
        if self.phase != SyncPhase::AwaitingLocation {
            tracing::debug!("ignoring location ready in phase {:?}", self.phase);
            return vec![];
        }
        let filters = nav::decode(&location);
        tracing::info!("initial location {:?} -> {:?}", location.to_query_string(), filters);
        self.store.replace_filters(filters);
        self.written = Some(nav::encode(self.filters()));
        self.phase = SyncPhase::Ready;
        vec![self.issue_fetch()]
    }

    /// Applies an externally supplied location mid-session, e.g. a pasted link.
    fn navigate(&mut self, location: LocationState) -> Vec<Effect> {
        if !self.accepts_input("navigation") {
            return vec![];
        }
        let change = self.store.replace_filters(nav::decode(&location));
        // Same pair keeps the current snapshot, so the page is checked against it now
        if !change.needs_fetch() && self.store.snapshot().is_some() {
            self.store.clamp_page();
        }
        self.after_change(change)
    }

    fn after_change(&mut self, change: Change) -> Vec<Effect> {
        if change.needs_fetch() {
            vec![self.issue_fetch()]
        } else {
            vec![]
        }
    }

    fn accepts_input(&self, what: &str) -> bool {
        if self.phase != SyncPhase::Ready {
            tracing::debug!("ignoring {} before location is ready", what);
            return false;
        }
        true
    }

    fn issue_fetch(&mut self) -> Effect {
        self.next_seq += 1;
        let filters = self.store.filters();
        let ticket = FetchTicket {
            seq: self.next_seq,
            year: filters.year,
            jurisdiction: filters.jurisdiction,
        };
        if let Some(previous) = self.pending_fetch.replace(ticket) {
            tracing::debug!("fetch #{} superseded by #{}", previous.seq, ticket.seq);
        }
        Effect::Fetch(ticket)
    }

    /// Accepts a completion only for the most recently issued fetch.
    fn claim_ticket(&mut self, ticket: FetchTicket) -> bool {
        if self.pending_fetch != Some(ticket) {
            tracing::debug!(
                "discarding stale fetch #{} for {} ({})",
                ticket.seq,
                ticket.year,
                ticket.jurisdiction
            );
            return false;
        }
        self.pending_fetch = None;
        true
    }

    /// At most one location write per update, and none when the canonical
    /// encoding has not moved.
    fn write_back(&mut self) -> Option<Effect> {
        if self.phase != SyncPhase::Ready {
            return None;
        }
        let encoded = nav::encode(self.filters());
        if self.written.as_ref() == Some(&encoded) {
            return None;
        }
        self.written = Some(encoded.clone());
        Some(Effect::ReplaceLocation(encoded))
    }

    fn set_error(&mut self, msg: String) {
        self.last_error = Some((msg, Instant::now()));
    }

    fn execute_command(&mut self, cmd: &str) -> Vec<Effect> {
        let parts: Vec<&str> = cmd.trim().splitn(2, ' ').collect();
        let command = parts[0].to_lowercase();
        let args = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

        match command.as_str() {
            "year" | "y" => match args.and_then(|a| a.parse::<u16>().ok()) {
                Some(year) if is_supported_year(year) => self.dispatch(Action::SetYear(year)),
                _ => {
                    self.set_error(format!(
                        "usage: :year <{}-{}>",
                        SUPPORTED_YEARS.start(),
                        SUPPORTED_YEARS.end()
                    ));
                    vec![]
                }
            },
            "province" | "prov" => match args.and_then(JurisdictionFilter::parse) {
                Some(jurisdiction) => self.dispatch(Action::SetJurisdiction(jurisdiction)),
                None => {
                    self.set_error("usage: :province <code|All>".to_string());
                    vec![]
                }
            },
            "page" | "pg" => match args.and_then(|a| a.parse::<u32>().ok()) {
                Some(page) => self.dispatch(Action::GoToPage(page)),
                None => {
                    self.set_error("usage: :page <n>".to_string());
                    vec![]
                }
            },
            "search" | "s" => self.dispatch(Action::SetSearch(args.unwrap_or("").to_string())),
            "clear" => self.dispatch(Action::SetSearch(String::new())),
            "open" | "goto" => {
                if let Some(query) = args {
                    self.dispatch(Action::LocationChanged(LocationState::parse(query)))
                } else {
                    self.set_error("usage: :open year=2024&province=ON&page=1&search=".to_string());
                    vec![]
                }
            }
            "refresh" | "r" => self.dispatch(Action::Refresh),
            "quit" | "q" => self.dispatch(Action::Quit),
            "help" | "h" => {
                self.overlay = Overlay::Help;
                vec![]
            }
            _ => {
                self.set_error(format!("unknown command: {}", command));
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::{holiday, numbered};

    fn ready_app(link: &str) -> (App, Vec<Effect>) {
        let mut app = App::new();
        app.update(Action::Attach);
        let effects = app.update(Action::LocationReady(LocationState::parse(link)));
        (app, effects)
    }

    fn fetches(effects: &[Effect]) -> Vec<FetchTicket> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Fetch(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    fn writes(effects: &[Effect]) -> Vec<String> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::ReplaceLocation(l) => Some(l.to_query_string()),
                _ => None,
            })
            .collect()
    }

    fn load(app: &mut App, effects: &[Effect], holidays: Vec<HolidayRecord>) -> Vec<Effect> {
        let ticket = *fetches(effects).last().expect("a fetch was issued");
        app.update(Action::HolidaysLoaded(ticket, holidays))
    }

    #[test]
    fn nothing_happens_before_location_is_ready() {
        let mut app = App::new();
        assert!(app.update(Action::SetYear(2021)).is_empty());
        assert!(app
            .update(Action::LocationReady(LocationState::parse("year=2022")))
            .is_empty());
        assert_eq!(app.phase, SyncPhase::Uninitialized);

        app.update(Action::Attach);
        assert_eq!(app.phase, SyncPhase::AwaitingLocation);
        assert!(app.update(Action::SetSearch("day".to_string())).is_empty());
        assert!(app.update(Action::NextPage).is_empty());
        assert_eq!(app.filters(), &FilterState::default());
    }

    #[test]
    fn initial_load_fetches_without_writing_back() {
        let (app, effects) = ready_app("year=2023&province=ON&page=2&search=day");
        assert_eq!(app.phase, SyncPhase::Ready);
        assert!(writes(&effects).is_empty());
        let tickets = fetches(&effects);
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].year, 2023);
        assert_eq!(tickets[0].jurisdiction, JurisdictionFilter::Only(Jurisdiction::ON));
    }

    #[test]
    fn empty_location_still_becomes_ready_with_defaults() {
        let (app, effects) = ready_app("");
        assert_eq!(app.phase, SyncPhase::Ready);
        assert_eq!(app.filters(), &FilterState::default());
        assert_eq!(fetches(&effects)[0].year, 2024);
    }

    #[test]
    fn location_ready_is_honoured_once() {
        let (mut app, _) = ready_app("year=2021");
        let effects = app.update(Action::LocationReady(LocationState::parse("year=2025")));
        assert!(effects.is_empty());
        assert_eq!(app.filters().year, 2021);
    }

    #[test]
    fn year_change_resets_page_fetches_and_writes_once() {
        let (mut app, effects) = ready_app("year=2024&page=1");
        load(&mut app, &effects, numbered(30));
        app.update(Action::NextPage);
        assert_eq!(app.filters().page, 2);

        let effects = app.update(Action::SetYear(2022));
        assert_eq!(app.filters().page, 1);
        assert_eq!(fetches(&effects).len(), 1);
        assert_eq!(
            writes(&effects),
            vec!["year=2022&province=All&page=1&search=".to_string()]
        );
    }

    #[test]
    fn jurisdiction_change_fetches() {
        let (mut app, _) = ready_app("");
        let effects = app.update(Action::SetJurisdiction(JurisdictionFilter::Only(Jurisdiction::QC)));
        let tickets = fetches(&effects);
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].jurisdiction, JurisdictionFilter::Only(Jurisdiction::QC));
        assert_eq!(writes(&effects).len(), 1);
    }

    #[test]
    fn search_change_filters_locally() {
        let (mut app, effects) = ready_app("");
        load(&mut app, &effects, numbered(30));
        app.update(Action::GoToPage(3));
        assert_eq!(app.filters().page, 3);

        let effects = app.update(Action::SetSearch("Holiday 1".to_string()));
        assert!(fetches(&effects).is_empty());
        assert_eq!(writes(&effects).len(), 1);
        assert_eq!(app.filters().page, 1);
        // "Holiday 1" and "Holiday 10".."Holiday 19"
        assert_eq!(app.view().filtered_count, 11);
    }

    #[test]
    fn page_moves_never_fetch_and_stay_in_bounds() {
        let (mut app, effects) = ready_app("");
        load(&mut app, &effects, numbered(23));

        let effects = app.update(Action::PreviousPage);
        assert!(effects.is_empty());
        assert_eq!(app.filters().page, 1);

        for _ in 0..5 {
            let effects = app.update(Action::NextPage);
            assert!(fetches(&effects).is_empty());
        }
        assert_eq!(app.filters().page, 3);
        assert_eq!(app.view().records.len(), 3);

        app.update(Action::GoToPage(99));
        assert_eq!(app.filters().page, 3);
    }

    #[test]
    fn unchanged_state_is_not_written_twice() {
        let (mut app, _) = ready_app("");
        let first = app.update(Action::SetYear(2026));
        assert_eq!(writes(&first).len(), 1);

        assert!(writes(&app.update(Action::SetYear(2026))).is_empty());
        assert!(writes(&app.update(Action::Tick)).is_empty());
        assert!(writes(&app.update(Action::SetSearch(String::new()))).is_empty());
    }

    #[test]
    fn navigation_burst_is_coalesced_into_one_write() {
        let (mut app, _) = ready_app("");
        let effects = app.update(Action::LocationChanged(LocationState::parse(
            "year=2027&province=nb&page=4&search=civic",
        )));
        assert_eq!(
            writes(&effects),
            vec!["year=2027&province=NB&page=4&search=civic".to_string()]
        );
        assert_eq!(fetches(&effects).len(), 1);
        assert_eq!(app.filters().page, 4);
    }

    #[test]
    fn navigation_to_same_pair_does_not_fetch() {
        let (mut app, _) = ready_app("year=2023&province=ON");
        let effects = app.update(Action::LocationChanged(LocationState::parse(
            "year=2023&province=ON&search=day",
        )));
        assert!(fetches(&effects).is_empty());
        assert_eq!(writes(&effects).len(), 1);
    }

    #[test]
    fn navigation_to_same_pair_clamps_page_to_new_results() {
        let (mut app, effects) = ready_app("year=2023");
        load(&mut app, &effects, numbered(30));

        let effects = app.update(Action::LocationChanged(LocationState::parse(
            "year=2023&province=All&page=9&search=Holiday 2",
        )));
        assert!(fetches(&effects).is_empty());
        // "Holiday 2" and "Holiday 20".."Holiday 29"
        assert_eq!(app.view().total_pages, 2);
        assert_eq!(app.filters().page, 2);
        assert_eq!(
            writes(&effects),
            vec!["year=2023&province=All&page=2&search=Holiday%202".to_string()]
        );
    }

    #[test]
    fn navigation_before_first_snapshot_keeps_page() {
        let (mut app, _) = ready_app("year=2023");
        app.update(Action::LocationChanged(LocationState::parse("year=2023&page=4")));
        assert_eq!(app.filters().page, 4);
    }

    #[test]
    fn stale_fetch_completion_is_discarded() {
        let (mut app, initial) = ready_app("");
        let t2024 = fetches(&initial)[0];

        let t2021 = fetches(&app.update(Action::SetYear(2021)))[0];
        let t2022 = fetches(&app.update(Action::SetYear(2022)))[0];
        assert!(t2022.seq > t2021.seq);

        let results_2022 = vec![holiday(1, "Remembrance Day", true, &[])];
        let results_2021 = numbered(5);

        app.update(Action::HolidaysLoaded(t2022, results_2022.clone()));
        app.update(Action::HolidaysLoaded(t2021, results_2021));
        app.update(Action::HolidaysLoaded(t2024, numbered(9)));

        let snapshot = app.store.snapshot().expect("snapshot");
        assert_eq!(snapshot.year, 2022);
        assert_eq!(&snapshot.records[..], &results_2022[..]);
        assert!(!app.is_loading());
    }

    #[test]
    fn failure_keeps_snapshot_and_raises_notice() {
        let (mut app, effects) = ready_app("year=2023");
        load(&mut app, &effects, numbered(12));

        let ticket = fetches(&app.update(Action::Refresh))[0];
        app.update(Action::FetchFailed(ticket, "failed to load holidays: timeout".to_string()));

        assert_eq!(app.store.records().len(), 12);
        let (msg, _) = app.last_error.as_ref().expect("error notice");
        assert!(msg.contains("timeout"));
        assert!(!app.is_loading());
    }

    #[test]
    fn stale_failure_is_ignored() {
        let (mut app, _) = ready_app("");
        let old = fetches(&app.update(Action::SetYear(2021)))[0];
        app.update(Action::SetYear(2022));
        app.update(Action::FetchFailed(old, "boom".to_string()));
        assert!(app.last_error.is_none());
        assert!(app.is_loading());
    }

    #[test]
    fn loaded_snapshot_clamps_page_and_writes_back() {
        let (mut app, effects) = ready_app("page=9");
        let effects = load(&mut app, &effects, numbered(23));
        assert_eq!(app.filters().page, 3);
        assert_eq!(
            writes(&effects),
            vec!["year=2024&province=All&page=3&search=".to_string()]
        );
    }

    #[test]
    fn ontario_day_scenario() {
        let (mut app, effects) = ready_app("year=2023&province=ON&page=2&search=day");
        assert_eq!(
            app.filters(),
            &FilterState {
                year: 2023,
                jurisdiction: JurisdictionFilter::Only(Jurisdiction::ON),
                search: "day".to_string(),
                page: 2,
            }
        );

        let mut holidays = Vec::new();
        let mut id = 0;
        for i in 1..=12 {
            id += 1;
            holidays.push(holiday(id, &format!("Day {}", i), false, &[Jurisdiction::ON]));
            if i <= 6 {
                id += 1;
                holidays.push(holiday(id, &format!("Fest {}", i), false, &[Jurisdiction::ON]));
            }
            if i <= 7 {
                id += 1;
                holidays.push(holiday(id, &format!("Day {}", i), true, &[Jurisdiction::QC]));
            }
        }
        assert_eq!(holidays.len(), 25);

        let effects = load(&mut app, &effects, holidays);
        assert!(writes(&effects).is_empty());

        let view = app.view();
        assert_eq!(view.filtered_count, 12);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.current_page, 2);
        let names: Vec<&str> = view.records.iter().map(|r| r.name_en.as_str()).collect();
        assert_eq!(names, vec!["Day 11", "Day 12"]);
        assert_eq!((view.first_position(), view.last_position()), (11, 12));
    }

    #[test]
    fn all_jurisdictions_with_eight_holidays() {
        let (mut app, effects) = ready_app("province=All");
        load(&mut app, &effects, numbered(8));
        let view = app.view();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.records.len(), 8);
    }

    #[test]
    fn step_year_stays_in_supported_range() {
        let (mut app, _) = ready_app("year=2030");
        assert!(app.update(Action::StepYear(1)).is_empty());
        assert_eq!(app.filters().year, 2030);
        app.update(Action::StepYear(-1));
        assert_eq!(app.filters().year, 2029);
    }

    #[test]
    fn province_selector_confirms_choice() {
        let (mut app, _) = ready_app("");
        app.update(Action::OpenProvinceSelector);
        assert_eq!(app.selector_state.selected(), Some(0));
        for _ in 0..20 {
            app.update(Action::SelectorDown);
        }
        assert_eq!(app.selector_state.selected(), Some(13));
        app.update(Action::SelectorUp);
        let effects = app.update(Action::SelectorConfirm);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.filters().jurisdiction, JurisdictionFilter::Only(Jurisdiction::SK));
        assert_eq!(fetches(&effects).len(), 1);
    }

    #[test]
    fn live_search_tracks_input_buffer() {
        let (mut app, _) = ready_app("search=easter");
        app.update(Action::OpenSearch);
        assert_eq!(app.input_buffer, "easter");
        app.update(Action::SetSearch("east".to_string()));
        assert_eq!(app.input_buffer, "east");
        assert_eq!(app.filters().search, "east");
    }

    #[test]
    fn commands_drive_the_same_pipeline() {
        let (mut app, _) = ready_app("");

        let effects = app.update(Action::SubmitCommandInput("year 2021".to_string()));
        assert_eq!(fetches(&effects).len(), 1);
        assert_eq!(app.filters().year, 2021);

        let effects = app.update(Action::SubmitCommandInput("prov ab".to_string()));
        assert_eq!(app.filters().jurisdiction, JurisdictionFilter::Only(Jurisdiction::AB));
        assert_eq!(fetches(&effects).len(), 1);

        let effects = app.update(Action::SubmitCommandInput(
            "open year=2028&province=All&search=boxing".to_string(),
        ));
        assert_eq!(app.filters().year, 2028);
        assert_eq!(app.filters().search, "boxing");
        assert_eq!(writes(&effects).len(), 1);

        app.update(Action::SubmitCommandInput("clear".to_string()));
        assert_eq!(app.filters().search, "");

        app.update(Action::SubmitCommandInput("year 1990".to_string()));
        assert!(app.last_error.is_some());
        assert_eq!(app.filters().year, 2028);

        app.update(Action::SubmitCommandInput("bogus".to_string()));
        let (msg, _) = app.last_error.as_ref().expect("error");
        assert_eq!(msg, "unknown command: bogus");
    }
}
