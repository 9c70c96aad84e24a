use std::ops::RangeInclusive;

use super::JurisdictionFilter;

pub const SUPPORTED_YEARS: RangeInclusive<u16> = 2020..=2030;
pub const DEFAULT_YEAR: u16 = 2024;

/// The query-relevant criteria behind the visible table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub year: u16,
    pub jurisdiction: JurisdictionFilter,
    pub search: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            jurisdiction: JurisdictionFilter::All,
            search: String::new(),
            page: 1,
        }
    }
}

pub fn is_supported_year(year: u16) -> bool {
    SUPPORTED_YEARS.contains(&year)
}
