use std::sync::Arc;

use crate::domain::{is_supported_year, FilterState, HolidayRecord, JurisdictionFilter};
use crate::view::{self, DerivedView};

/// The full record set for one fetched year.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub year: u16,
    pub records: Arc<[HolidayRecord]>,
}

/// What a store mutation actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Change {
    pub year: bool,
    pub jurisdiction: bool,
    pub search: bool,
    pub page: bool,
}

impl Change {
    pub fn any(&self) -> bool {
        self.year || self.jurisdiction || self.search || self.page
    }

    /// Year or jurisdiction moved, so the snapshot no longer belongs to the
    /// active pair.
    pub fn needs_fetch(&self) -> bool {
        self.year || self.jurisdiction
    }
}

/// Sole owner of the filter criteria and the cached snapshot.
#[derive(Debug, Default)]
pub struct FilterStore {
    filters: FilterState,
    snapshot: Option<Snapshot>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn records(&self) -> &[HolidayRecord] {
        self.snapshot
            .as_ref()
            .map(|s| &s.records[..])
            .unwrap_or(&[])
    }

    pub fn view(&self) -> DerivedView<'_> {
        view::derive_view(
            self.records(),
            self.filters.jurisdiction,
            &self.filters.search,
            self.filters.page,
        )
    }

    pub fn total_pages(&self) -> u32 {
        view::total_pages(view::filtered_count(
            self.records(),
            self.filters.jurisdiction,
            &self.filters.search,
        ))
    }

    pub fn set_year(&mut self, year: u16) -> Change {
        if !is_supported_year(year) || year == self.filters.year {
            return Change::default();
        }
        self.filters.year = year;
        let mut change = self.reset_page();
        change.year = true;
        change
    }

    pub fn set_jurisdiction(&mut self, jurisdiction: JurisdictionFilter) -> Change {
        if jurisdiction == self.filters.jurisdiction {
            return Change::default();
        }
        self.filters.jurisdiction = jurisdiction;
        let mut change = self.reset_page();
        change.jurisdiction = true;
        change
    }

    pub fn set_search(&mut self, search: &str) -> Change {
        if search == self.filters.search {
            return Change::default();
        }
        self.filters.search = search.to_string();
        let mut change = self.reset_page();
        change.search = true;
        change
    }

    /// Page-only mutation; criteria stay as they are.
    pub fn set_page(&mut self, page: u32) -> Change {
        let page = page.max(1);
        if page == self.filters.page {
            return Change::default();
        }
        self.filters.page = page;
        Change {
            page: true,
            ..Change::default()
        }
    }

    /// Wholesale replacement from an external location. The page comes along
    /// as given rather than being reset.
    pub fn replace_filters(&mut self, filters: FilterState) -> Change {
        let change = Change {
            year: filters.year != self.filters.year,
            jurisdiction: filters.jurisdiction != self.filters.jurisdiction,
            search: filters.search != self.filters.search,
            page: filters.page != self.filters.page,
        };
        self.filters = FilterState {
            page: filters.page.max(1),
            ..filters
        };
        change
    }

    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Pulls the page back inside `[1, max(total_pages, 1)]`.
    pub fn clamp_page(&mut self) -> Change {
        let clamped = view::clamp_page(self.filters.page, self.total_pages());
        self.set_page(clamped)
    }

    fn reset_page(&mut self) -> Change {
        self.set_page(1)
    }
}
