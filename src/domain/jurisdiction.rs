#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Jurisdiction {
    AB,
    BC,
    MB,
    NB,
    NL,
    NS,
    NT,
    NU,
    ON,
    PE,
    QC,
    SK,
    YT,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 13] = [
        Self::AB,
        Self::BC,
        Self::MB,
        Self::NB,
        Self::NL,
        Self::NS,
        Self::NT,
        Self::NU,
        Self::ON,
        Self::PE,
        Self::QC,
        Self::SK,
        Self::YT,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::AB => "AB",
            Self::BC => "BC",
            Self::MB => "MB",
            Self::NB => "NB",
            Self::NL => "NL",
            Self::NS => "NS",
            Self::NT => "NT",
            Self::NU => "NU",
            Self::ON => "ON",
            Self::PE => "PE",
            Self::QC => "QC",
            Self::SK => "SK",
            Self::YT => "YT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AB => "Alberta",
            Self::BC => "British Columbia",
            Self::MB => "Manitoba",
            Self::NB => "New Brunswick",
            Self::NL => "Newfoundland and Labrador",
            Self::NS => "Nova Scotia",
            Self::NT => "Northwest Territories",
            Self::NU => "Nunavut",
            Self::ON => "Ontario",
            Self::PE => "Prince Edward Island",
            Self::QC => "Quebec",
            Self::SK => "Saskatchewan",
            Self::YT => "Yukon",
        }
    }

    /// Case-insensitive lookup by two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|j| j.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Jurisdiction criterion: either no restriction or a single province/territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JurisdictionFilter {
    #[default]
    All,
    Only(Jurisdiction),
}

impl JurisdictionFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(j) => j.code(),
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(Self::All);
        }
        Jurisdiction::from_code(input).map(Self::Only)
    }

    /// Selector entries in display order, `All` first.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Jurisdiction::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

impl std::fmt::Display for JurisdictionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Jurisdiction::from_code("on"), Some(Jurisdiction::ON));
        assert_eq!(Jurisdiction::from_code(" QC "), Some(Jurisdiction::QC));
        assert_eq!(Jurisdiction::from_code("XX"), None);
        assert_eq!(Jurisdiction::from_code(""), None);
    }

    #[test]
    fn filter_parses_all_sentinel() {
        assert_eq!(JurisdictionFilter::parse("All"), Some(JurisdictionFilter::All));
        assert_eq!(JurisdictionFilter::parse("all"), Some(JurisdictionFilter::All));
        assert_eq!(
            JurisdictionFilter::parse("YT"),
            Some(JurisdictionFilter::Only(Jurisdiction::YT))
        );
        assert_eq!(JurisdictionFilter::parse("Canada"), None);
    }

    #[test]
    fn options_list_all_first_then_thirteen_codes() {
        let options = JurisdictionFilter::options();
        assert_eq!(options.len(), 14);
        assert_eq!(options[0], JurisdictionFilter::All);
        assert_eq!(options[9], JurisdictionFilter::Only(Jurisdiction::ON));
    }
}
