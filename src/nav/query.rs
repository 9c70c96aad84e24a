use crate::domain::{is_supported_year, FilterState, JurisdictionFilter};

use super::LocationState;

pub const YEAR_KEY: &str = "year";
pub const PROVINCE_KEY: &str = "province";
pub const PAGE_KEY: &str = "page";
pub const SEARCH_KEY: &str = "search";

/// Reads filter criteria from a location. Absent or malformed fields fall
/// back to their defaults individually; this never fails.
pub fn decode(location: &LocationState) -> FilterState {
    let defaults = FilterState::default();

    let year = location
        .get(YEAR_KEY)
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|y| is_supported_year(*y))
        .unwrap_or(defaults.year);

    let jurisdiction = location
        .get(PROVINCE_KEY)
        .and_then(JurisdictionFilter::parse)
        .unwrap_or(defaults.jurisdiction);

    let page = location
        .get(PAGE_KEY)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(defaults.page);

    let search = location
        .get(SEARCH_KEY)
        .map(str::to_string)
        .unwrap_or(defaults.search);

    FilterState {
        year,
        jurisdiction,
        search,
        page,
    }
}

pub fn encode(state: &FilterState) -> LocationState {
    LocationState::new(vec![
        (YEAR_KEY.to_string(), state.year.to_string()),
        (PROVINCE_KEY.to_string(), state.jurisdiction.as_str().to_string()),
        (PAGE_KEY.to_string(), state.page.to_string()),
        (SEARCH_KEY.to_string(), state.search.clone()),
    ])
}

/// The location as the state engine would write it back.
pub fn canonicalize(location: &LocationState) -> LocationState {
    encode(&decode(location))
}

pub(crate) fn format_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn parse_query(input: &str) -> Vec<(String, String)> {
    let query = input.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params = Vec::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        params.push((percent_decode(key), percent_decode(value)));
    }
    params
}

fn percent_encode(input: &str) -> String {
    let mut out = String::new();
    for b in input.as_bytes() {
        match *b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(*b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

// Works on bytes so multi-byte escapes reassemble into the original UTF-8.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    out.push(((hi << 4) + lo) as u8);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            b'+' => out.push(b' '),
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
