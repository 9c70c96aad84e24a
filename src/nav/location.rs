use std::path::PathBuf;

use super::query::{format_query, parse_query};

/// External key/value form of the filter criteria, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationState {
    pub params: Vec<(String, String)>,
}

impl LocationState {
    pub fn new(params: Vec<(String, String)>) -> Self {
        Self { params }
    }

    /// Parses `year=2023&province=ON`, with or without a leading `?`.
    pub fn parse(input: &str) -> Self {
        Self::new(parse_query(input))
    }

    pub fn to_query_string(&self) -> String {
        format_query(&self.params)
    }

    /// First value for `key`; later duplicates are ignored.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The live, shareable location. Holds a single current value: replacing it
/// never accumulates history.
#[derive(Debug, Default)]
pub struct AddressBar {
    current: LocationState,
    mirror: Option<PathBuf>,
}

impl AddressBar {
    pub fn new(initial: LocationState, mirror: Option<PathBuf>) -> Self {
        Self {
            current: initial,
            mirror,
        }
    }

    pub fn link(&self) -> String {
        self.current.to_query_string()
    }

    pub fn replace(&mut self, location: LocationState) -> std::io::Result<()> {
        self.current = location;
        if let Some(ref path) = self.mirror {
            std::fs::write(path, format!("{}\n", self.link()))?;
        }
        Ok(())
    }
}
