use serde::{Deserialize, Serialize};
use strum::Display;
use time::Date;

use super::{iso_date, DailyLogId, ProjectId};
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
}

/// One entry of the site diary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: DailyLogId,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub project_id: ProjectId,
    pub weather: Weather,
    pub notes: String,
    pub activities: Vec<String>,
    pub workforce_count: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub waste_reported: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyLog {
    #[serde(default, with = "iso_date::option")]
    pub date: Option<Date>,
    pub project_id: ProjectId,
    pub weather: Weather,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub workforce_count: u32,
    #[serde(default)]
    pub waste_reported: Option<String>,
}

impl NewDailyLog {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.notes.trim().is_empty() && self.activities.iter().all(|a| a.trim().is_empty()) {
            return Err(ValidationError::new(
                "notes",
                "a log needs notes or at least one activity",
            ));
        }
        Ok(())
    }

    pub fn into_daily_log(self, id: DailyLogId, today: Date) -> DailyLog {
        DailyLog {
            id,
            date: self.date.unwrap_or(today),
            project_id: self.project_id,
            weather: self.weather,
            notes: self.notes.trim().to_string(),
            activities: self
                .activities
                .into_iter()
                .map(|activity| activity.trim().to_string())
                .filter(|activity| !activity.is_empty())
                .collect(),
            workforce_count: self.workforce_count,
            waste_reported: self
                .waste_reported
                .map(|waste| waste.trim().to_string())
                .filter(|waste| !waste.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn empty_log_is_rejected() {
        let new = NewDailyLog {
            date: None,
            project_id: ProjectId::new("1"),
            weather: Weather::Rainy,
            notes: "  ".to_string(),
            activities: vec![" ".to_string()],
            workforce_count: 3,
            waste_reported: None,
        };
        assert_eq!(new.validate().unwrap_err().field, "notes");
    }

    #[test]
    fn blank_activities_and_waste_are_dropped() {
        let log = NewDailyLog {
            date: None,
            project_id: ProjectId::new("1"),
            weather: Weather::Sunny,
            notes: "Concretagem da laje".to_string(),
            activities: vec!["Armação".to_string(), "".to_string()],
            workforce_count: 12,
            waste_reported: Some(" ".to_string()),
        }
        .into_daily_log(DailyLogId::new("d"), date!(2024 - 02 - 21));

        assert_eq!(log.date, date!(2024 - 02 - 21));
        assert_eq!(log.activities, vec!["Armação".to_string()]);
        assert_eq!(log.waste_reported, None);

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["weather"], "Sunny");
        assert!(value.get("wasteReported").is_none());
    }
}
