use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One normalized meeting, as handed to the export layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meeting {
    pub title: String,
    pub description: String,
    pub classification: Classification,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub time_notes: String,
    pub location: Location,
    pub links: Vec<Link>,
    pub source: String,
    pub status: MeetingStatus,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub title: String,
    pub href: String,
}

impl Link {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Link {
            title: title.into(),
            href: href.into(),
        }
    }
}

/// Kind of governing body a source publishes meetings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Advisory Committee", alias = "advisory_committee")]
    AdvisoryCommittee,
    #[serde(rename = "Board", alias = "board")]
    Board,
    #[serde(rename = "City Council", alias = "city_council")]
    CityCouncil,
    #[serde(rename = "Commission", alias = "commission")]
    Commission,
    #[serde(rename = "Committee", alias = "committee")]
    Committee,
    #[serde(rename = "Forum", alias = "forum")]
    Forum,
    #[serde(rename = "Police Beat", alias = "police_beat")]
    PoliceBeat,
    #[serde(rename = "Not classified", alias = "not_classified")]
    NotClassified,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::AdvisoryCommittee => "Advisory Committee",
            Classification::Board => "Board",
            Classification::CityCouncil => "City Council",
            Classification::Commission => "Commission",
            Classification::Committee => "Committee",
            Classification::Forum => "Forum",
            Classification::PoliceBeat => "Police Beat",
            Classification::NotClassified => "Not classified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Cancelled,
    Tentative,
    Confirmed,
    Passed,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Cancelled => "cancelled",
            MeetingStatus::Tentative => "tentative",
            MeetingStatus::Confirmed => "confirmed",
            MeetingStatus::Passed => "passed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serializes_with_export_field_names() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 20)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let m = Meeting {
            title: "Special Meeting".into(),
            description: String::new(),
            classification: Classification::Board,
            start,
            end: None,
            all_day: false,
            time_notes: String::new(),
            location: Location::default(),
            links: vec![Link::new("Agenda", "https://meetings.example/a")],
            source: "https://meetings.example".into(),
            status: MeetingStatus::Passed,
            id: "x".into(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["classification"], "Board");
        assert_eq!(v["status"], "passed");
        assert_eq!(v["status"], m.status.as_str());
        assert_eq!(v["start"], "2026-01-20T18:00:00");
        assert!(v["end"].is_null());
        assert_eq!(v["links"][0]["title"], "Agenda");
        assert_eq!(v["location"]["address"], "");
    }

    #[test]
    fn classification_reads_either_spelling() {
        let c: Classification = serde_json::from_str("\"City Council\"").unwrap();
        assert_eq!(c, Classification::CityCouncil);
        let c: Classification = serde_json::from_str("\"board\"").unwrap();
        assert_eq!(c, Classification::Board);
        assert_eq!(c.as_str(), "Board");
    }
}
