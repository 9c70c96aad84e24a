use crate::domain::*;
use crate::nav::LocationState;
use crate::worker::FetchTicket;

#[derive(Debug, Clone)]
pub enum Action {
    // Session lifecycle
    Attach,
    LocationReady(LocationState),
    LocationChanged(LocationState),

    // Criteria
    SetYear(u16),
    StepYear(i32),
    SetJurisdiction(JurisdictionFilter),
    SetSearch(String),

    // Paging
    NextPage,
    PreviousPage,
    GoToPage(u32),

    // UI
    OpenCommandInput,
    OpenSearch,
    OpenProvinceSelector,
    CloseOverlay,
    SubmitCommandInput(String),
    UpdateInputBuffer(String),
    SelectorUp,
    SelectorDown,
    SelectorConfirm,
    ToggleHelp,

    // Data responses
    HolidaysLoaded(FetchTicket, Vec<HolidayRecord>),
    FetchFailed(FetchTicket, String),

    // App control
    Refresh,
    Quit,
    Tick,
    ClearError,
}
