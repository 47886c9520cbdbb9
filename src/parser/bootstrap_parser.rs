// FPL bootstrap-static payload schema
use crate::model::SchemaError;
use crate::utils::parse_datetime;
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub trait Parser {
    fn parse(&self, body: &str) -> Result<BootstrapData, SchemaError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapData {
    pub elements: Vec<Element>,
    pub teams: Vec<Team>,
    pub events: Vec<Event>,
}

/// A player.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: u32,
    pub web_name: String,
    pub team: u32,
    pub now_cost: u32,
    #[serde(default)]
    pub transfers_in_event: u64,
    #[serde(default)]
    pub transfers_out_event: u64,
    /// Reported by the API as a string, e.g. `"45.3"`.
    #[serde(default)]
    pub selected_by_percent: String,
    #[serde(default)]
    pub event_points: i32,
}

impl Element {
    pub fn selected_by(&self) -> Option<f64> {
        self.selected_by_percent.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: u32,
    pub short_name: String,
}

/// A gameweek.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: u32,
    pub deadline_time: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
    #[serde(default)]
    pub finished: bool,
    pub average_entry_score: Option<i32>,
    pub highest_score: Option<i32>,
}

impl Event {
    pub fn deadline(&self) -> Result<DateTime<Utc>, SchemaError> {
        parse_datetime(&self.deadline_time)
            .ok_or_else(|| SchemaError::InvalidDeadline(self.deadline_time.clone()))
    }
}

pub struct BootstrapParser;

impl BootstrapParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for BootstrapParser {
    fn parse(&self, body: &str) -> Result<BootstrapData, SchemaError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn element(id: u32, name: &str, team: u32, now_cost: u32) -> Element {
        Element {
            id,
            web_name: name.to_string(),
            team,
            now_cost,
            transfers_in_event: 0,
            transfers_out_event: 0,
            selected_by_percent: "0.0".into(),
            event_points: 0,
        }
    }

    pub fn team(id: u32, short_name: &str) -> Team {
        Team {
            id,
            short_name: short_name.to_string(),
        }
    }

    pub fn event(id: u32, deadline_time: &str) -> Event {
        Event {
            id,
            deadline_time: deadline_time.to_string(),
            is_current: false,
            is_next: false,
            finished: false,
            average_entry_score: None,
            highest_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "elements": [
            {"id": 1, "web_name": "Salah", "team": 12, "now_cost": 130,
             "transfers_in_event": 120000, "transfers_out_event": 300,
             "selected_by_percent": "45.3", "total_points": 80, "event_points": 12,
             "status": "a"}
        ],
        "teams": [{"id": 12, "short_name": "LIV", "name": "Liverpool"}],
        "events": [
            {"id": 7, "deadline_time": "2024-10-05T10:00:00Z", "is_current": true,
             "is_next": false, "is_previous": false, "finished": true,
             "average_entry_score": 48, "highest_score": null}
        ],
        "total_players": 11000000
    }"#;

    #[test]
    fn parses_known_fields_and_ignores_the_rest() {
        let data = BootstrapParser::new().parse(PAYLOAD).unwrap();
        assert_eq!(data.elements.len(), 1);
        let salah = &data.elements[0];
        assert_eq!(salah.web_name, "Salah");
        assert_eq!(salah.now_cost, 130);
        assert_eq!(salah.selected_by(), Some(45.3));
        assert_eq!(data.teams[0].short_name, "LIV");
        assert_eq!(data.events[0].average_entry_score, Some(48));
        assert_eq!(data.events[0].highest_score, None);
    }

    #[test]
    fn missing_required_field_is_a_schema_error() {
        let body = r#"{"elements": [{"id": 1, "team": 1, "now_cost": 50}],
                       "teams": [], "events": []}"#;
        let err = BootstrapParser::new().parse(body).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPayload(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let body = r#"{"elements": [{"id": 1, "web_name": "X", "team": 1, "now_cost": -5}],
                       "teams": [], "events": []}"#;
        assert!(BootstrapParser::new().parse(body).is_err());
    }

    #[test]
    fn event_deadline_parses_rfc3339() {
        let data = BootstrapParser::new().parse(PAYLOAD).unwrap();
        let deadline = data.events[0].deadline().unwrap();
        assert_eq!(deadline.to_rfc3339(), "2024-10-05T10:00:00+00:00");

        let broken = fixtures::event(8, "next saturday");
        assert!(matches!(broken.deadline(), Err(SchemaError::InvalidDeadline(_))));
    }
}
