//! Derivation of the visible page from the cached snapshot and the current
//! criteria. Everything here is pure: the same inputs always give the same
//! page, and nothing is stored between calls.

use crate::domain::{HolidayRecord, JurisdictionFilter};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub records: Vec<&'a HolidayRecord>,
    pub filtered_count: usize,
    pub total_pages: u32,
    /// Requested page clamped into `[1, max(total_pages, 1)]`.
    pub current_page: u32,
}

impl DerivedView<'_> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based position of the first visible record, 0 when nothing is visible.
    pub fn first_position(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            (self.current_page as usize - 1) * PAGE_SIZE + 1
        }
    }

    pub fn last_position(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            self.first_position() + self.records.len() - 1
        }
    }
}

pub fn matches_jurisdiction(record: &HolidayRecord, filter: JurisdictionFilter) -> bool {
    match filter {
        JurisdictionFilter::All => true,
        JurisdictionFilter::Only(code) => record.applies_to(code),
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches_needle(record: &HolidayRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name_en.to_lowercase().contains(needle)
        || record.name_fr.to_lowercase().contains(needle)
}

pub fn normalize_search(search: &str) -> String {
    search.trim().to_lowercase()
}

pub fn filter_records<'a>(
    records: &'a [HolidayRecord],
    jurisdiction: JurisdictionFilter,
    search: &str,
) -> Vec<&'a HolidayRecord> {
    let needle = normalize_search(search);
    records
        .iter()
        .filter(|r| matches_jurisdiction(r, jurisdiction))
        .filter(|r| matches_needle(r, &needle))
        .collect()
}

pub fn filtered_count(
    records: &[HolidayRecord],
    jurisdiction: JurisdictionFilter,
    search: &str,
) -> usize {
    filter_records(records, jurisdiction, search).len()
}

pub fn total_pages(count: usize) -> u32 {
    count.div_ceil(PAGE_SIZE) as u32
}

pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

pub fn derive_view<'a>(
    records: &'a [HolidayRecord],
    jurisdiction: JurisdictionFilter,
    search: &str,
    page: u32,
) -> DerivedView<'a> {
    let filtered = filter_records(records, jurisdiction, search);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count);
    let current_page = clamp_page(page, total_pages);

    let start = (current_page as usize - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered_count);
    let records = if start < end {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    DerivedView {
        records,
        filtered_count,
        total_pages,
        current_page,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::domain::{HolidayRecord, Jurisdiction};

    pub fn holiday(
        id: u32,
        name_en: &str,
        federal: bool,
        jurisdictions: &[Jurisdiction],
    ) -> HolidayRecord {
        HolidayRecord {
            id,
            date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
                + chrono::Days::new(u64::from(id)),
            observed_date: None,
            name_en: name_en.to_string(),
            name_fr: format!("{} (fr)", name_en),
            federal,
            jurisdictions: jurisdictions.to_vec(),
        }
    }

    pub fn numbered(count: u32) -> Vec<HolidayRecord> {
        (1..=count)
            .map(|i| holiday(i, &format!("Holiday {}", i), false, &Jurisdiction::ALL))
            .collect()
    }
}
