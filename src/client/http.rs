use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::{ClientError, ClientResult, HolidaySource};
use crate::domain::*;

pub const DEFAULT_API_URL: &str = "https://canada-holidays.ca";

const HOLIDAYS_PATH: &str = "/api/v1/holidays";

#[derive(Debug, Deserialize)]
struct HolidaysResponse {
    holidays: Vec<WireHoliday>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireHoliday {
    id: u32,
    date: String,
    #[serde(default)]
    observed_date: Option<String>,
    name_en: String,
    name_fr: String,
    #[serde(deserialize_with = "bool_or_int")]
    federal: bool,
    provinces: Vec<WireProvince>,
}

#[derive(Debug, Deserialize)]
struct WireProvince {
    id: String,
}

// The public API reports `federal` as 0/1; accept a real boolean as well.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "federal flag must be 0 or 1, got {}",
            other
        ))),
    }
}

fn parse_date(field: &str, value: &str) -> ClientResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| ClientError::ParseError(format!("invalid {} {:?}: {}", field, value, e)))
}

impl TryFrom<WireHoliday> for HolidayRecord {
    type Error = ClientError;

    fn try_from(wire: WireHoliday) -> ClientResult<Self> {
        let date = parse_date("date", &wire.date)?;
        let observed_date = wire
            .observed_date
            .as_deref()
            .map(|d| parse_date("observedDate", d))
            .transpose()?;

        let jurisdictions = wire
            .provinces
            .iter()
            .map(|p| {
                Jurisdiction::from_code(&p.id).ok_or_else(|| {
                    ClientError::ParseError(format!(
                        "holiday {} names unknown province {:?}",
                        wire.id, p.id
                    ))
                })
            })
            .collect::<ClientResult<Vec<_>>>()?;

        Ok(HolidayRecord {
            id: wire.id,
            date,
            observed_date,
            name_en: wire.name_en,
            name_fr: wire.name_fr,
            federal: wire.federal,
            jurisdictions,
        })
    }
}

/// Decodes a `/api/v1/holidays` response body.
pub fn parse_holidays(body: &str) -> ClientResult<Vec<HolidayRecord>> {
    let response: HolidaysResponse =
        serde_json::from_str(body).map_err(|e| ClientError::ParseError(e.to_string()))?;
    response
        .holidays
        .into_iter()
        .map(HolidayRecord::try_from)
        .collect()
}

pub struct HttpHolidaySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHolidaySource {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("holidays/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, HOLIDAYS_PATH)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else if err.is_connect() {
        ClientError::ConnectionError(err.to_string())
    } else {
        ClientError::RequestFailed(err.to_string())
    }
}

#[async_trait]
impl HolidaySource for HttpHolidaySource {
    async fn fetch_holidays(&self, year: u16) -> ClientResult<Vec<HolidayRecord>> {
        let url = self.endpoint();
        tracing::debug!("GET {} year={}", url, year);

        let response = self
            .client
            .get(&url)
            .query(&[("year", year)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("holiday request for {} returned {}", year, status);
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        let holidays = parse_holidays(&body)?;
        tracing::info!("fetched {} holidays for {}", holidays.len(), year);
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "holidays": [
            {
                "id": 1,
                "date": "2024-01-01",
                "observedDate": "2024-01-01",
                "nameEn": "New Year's Day",
                "nameFr": "Jour de l'An",
                "federal": 1,
                "provinces": [{"id": "AB", "nameEn": "Alberta"}, {"id": "ON"}]
            },
            {
                "id": 14,
                "date": "2024-08-05",
                "nameEn": "Civic Holiday",
                "nameFr": "Premier lundi d'août",
                "federal": false,
                "provinces": [{"id": "NT"}]
            }
        ]
    }"#;

    #[test]
    fn parses_public_api_shape() {
        let holidays = parse_holidays(SAMPLE).expect("parse sample");
        assert_eq!(holidays.len(), 2);

        let first = &holidays[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
        assert!(first.federal);
        assert_eq!(first.jurisdictions, vec![Jurisdiction::AB, Jurisdiction::ON]);

        let second = &holidays[1];
        assert!(!second.federal);
        assert_eq!(second.observed_date, None);
        assert_eq!(second.name_fr, "Premier lundi d'août");
    }

    #[test]
    fn rejects_unknown_province() {
        let body = r#"{"holidays":[{"id":2,"date":"2024-02-19","nameEn":"Family Day",
            "nameFr":"Fête de la famille","federal":0,"provinces":[{"id":"ZZ"}]}]}"#;
        assert!(matches!(parse_holidays(body), Err(ClientError::ParseError(_))));
    }

    #[test]
    fn rejects_bad_dates_and_shapes() {
        let bad_date = r#"{"holidays":[{"id":2,"date":"19/02/2024","nameEn":"x",
            "nameFr":"x","federal":0,"provinces":[]}]}"#;
        assert!(matches!(parse_holidays(bad_date), Err(ClientError::ParseError(_))));

        let bad_flag = r#"{"holidays":[{"id":2,"date":"2024-02-19","nameEn":"x",
            "nameFr":"x","federal":2,"provinces":[]}]}"#;
        assert!(matches!(parse_holidays(bad_flag), Err(ClientError::ParseError(_))));

        assert!(matches!(parse_holidays(r#"{"data":[]}"#), Err(ClientError::ParseError(_))));
        assert!(matches!(parse_holidays("<html>"), Err(ClientError::ParseError(_))));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let source = HttpHolidaySource::new("http://localhost:8080/", Duration::from_secs(1))
            .expect("build client");
        assert_eq!(source.endpoint(), "http://localhost:8080/api/v1/holidays");
    }
}
