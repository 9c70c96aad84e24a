use chrono::NaiveDate;

use super::Jurisdiction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub observed_date: Option<NaiveDate>,
    pub name_en: String,
    pub name_fr: String,
    pub federal: bool,
    pub jurisdictions: Vec<Jurisdiction>,
}

impl HolidayRecord {
    pub fn applies_to(&self, jurisdiction: Jurisdiction) -> bool {
        self.jurisdictions.contains(&jurisdiction)
    }

    /// Text for the "Province(s)" column.
    pub fn jurisdiction_label(&self) -> String {
        if self.federal {
            return String::from("Federal");
        }
        self.jurisdictions
            .iter()
            .map(|j| j.code())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(federal: bool, jurisdictions: Vec<Jurisdiction>) -> HolidayRecord {
        HolidayRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date"),
            observed_date: None,
            name_en: "Canada Day".to_string(),
            name_fr: "Fête du Canada".to_string(),
            federal,
            jurisdictions,
        }
    }

    #[test]
    fn federal_records_label_as_federal() {
        let r = record(true, vec![Jurisdiction::ON, Jurisdiction::QC]);
        assert_eq!(r.jurisdiction_label(), "Federal");
    }

    #[test]
    fn provincial_records_list_codes() {
        let r = record(false, vec![Jurisdiction::ON, Jurisdiction::QC]);
        assert_eq!(r.jurisdiction_label(), "ON QC");
        assert!(r.applies_to(Jurisdiction::QC));
        assert!(!r.applies_to(Jurisdiction::AB));
    }
}
