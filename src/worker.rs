use std::sync::Arc;

use tokio::sync::mpsc;

use crate::action::Action;
use crate::client::HolidaySource;
use crate::domain::JurisdictionFilter;

/// Identity of one issued fetch: the (year, jurisdiction) pair that was active
/// when it was issued, plus a sequence number that increases per issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub year: u16,
    pub jurisdiction: JurisdictionFilter,
}

#[derive(Debug)]
pub enum FetchRequest {
    LoadHolidays { ticket: FetchTicket },
}

#[derive(Clone)]
pub struct FetchHandle {
    tx: mpsc::UnboundedSender<FetchRequest>,
}

impl FetchHandle {
    pub fn send(&self, request: FetchRequest) {
        let _ = self.tx.send(request);
    }
}

pub struct FetchWorker {
    source: Arc<dyn HolidaySource>,
    rx: mpsc::UnboundedReceiver<FetchRequest>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl FetchWorker {
    pub fn new(
        source: Arc<dyn HolidaySource>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> (Self, FetchHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = FetchHandle { tx };
        let worker = Self {
            source,
            rx,
            action_tx,
        };
        (worker, handle)
    }

    /// Each request runs on its own task, so completions may arrive in any
    /// order; the controller sorts that out by ticket.
    pub async fn run(mut self) {
        while let Some(request) = self.rx.recv().await {
            if self.action_tx.is_closed() {
                break;
            }
            let source = Arc::clone(&self.source);
            let action_tx = self.action_tx.clone();
            tokio::spawn(async move {
                let action = process(source.as_ref(), request).await;
                let _ = action_tx.send(action);
            });
        }
    }
}

async fn process(source: &dyn HolidaySource, request: FetchRequest) -> Action {
    match request {
        FetchRequest::LoadHolidays { ticket } => {
            match source.fetch_holidays(ticket.year).await {
                Ok(holidays) => Action::HolidaysLoaded(ticket, holidays),
                Err(e) => {
                    tracing::warn!("fetch #{} for {} failed: {}", ticket.seq, ticket.year, e);
                    Action::FetchFailed(ticket, format!("failed to load holidays: {}", e))
                }
            }
        }
    }
}
