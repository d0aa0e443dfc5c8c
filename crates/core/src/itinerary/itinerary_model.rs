//! Planned activity models.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_ACTIVITY_PRIORITY, MIN_ACTIVITY_PRIORITY};
use crate::errors::{Result, ValidationError};

/// Progress of a planned activity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::Pending,
        ActivityStatus::InProgress,
        ActivityStatus::Completed,
        ActivityStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "pending",
            ActivityStatus::InProgress => "in_progress",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().replace([' ', '-'], "_");
        ActivityStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown activity status: {s}"))
    }
}

/// Human label for a priority value.
pub fn priority_label(priority: i32) -> &'static str {
    match priority {
        3 => "High",
        2 => "Medium",
        1 => "Low",
        _ => "Unknown",
    }
}

fn default_priority() -> i32 {
    2
}

/// Something to do at a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub trip_id: String,
    pub destination_id: String,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub planned_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub status: ActivityStatus,
    pub category: Option<String>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    #[serde(default)]
    pub booking_required: bool,
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: NaiveDateTime,
}

/// Input model for creating an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub trip_id: String,
    pub destination_id: String,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub planned_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub priority: i32,
    pub status: ActivityStatus,
    pub category: Option<String>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub booking_required: bool,
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
}

impl Default for NewActivity {
    fn default() -> Self {
        Self {
            id: None,
            trip_id: String::new(),
            destination_id: String::new(),
            title: String::new(),
            description: None,
            planned_date: None,
            planned_time: None,
            duration_minutes: None,
            cost: 0.0,
            priority: default_priority(),
            status: ActivityStatus::Pending,
            category: None,
            location: None,
            contact_info: None,
            booking_required: false,
            booking_reference: None,
            notes: None,
        }
    }
}

impl NewActivity {
    pub fn validate(&self) -> Result<()> {
        if self.destination_id.trim().is_empty() {
            return Err(ValidationError::MissingField("destination_id".to_string()).into());
        }
        validate_activity_fields(&self.title, self.cost, self.priority)
    }
}

/// Full replacement of an activity's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityUpdate {
    pub id: String,
    pub destination_id: String,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub planned_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub priority: i32,
    pub status: ActivityStatus,
    pub category: Option<String>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub booking_required: bool,
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
}

impl ActivityUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_activity_fields(&self.title, self.cost, self.priority)
    }
}

impl From<Activity> for ActivityUpdate {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            destination_id: a.destination_id,
            title: a.title,
            description: a.description,
            planned_date: a.planned_date,
            planned_time: a.planned_time,
            duration_minutes: a.duration_minutes,
            cost: a.cost,
            priority: a.priority,
            status: a.status,
            category: a.category,
            location: a.location,
            contact_info: a.contact_info,
            booking_required: a.booking_required,
            booking_reference: a.booking_reference,
            notes: a.notes,
        }
    }
}

pub(crate) fn validate_priority(priority: i32) -> Result<()> {
    if !(MIN_ACTIVITY_PRIORITY..=MAX_ACTIVITY_PRIORITY).contains(&priority) {
        return Err(ValidationError::invalid(format!(
            "Priority must be between {MIN_ACTIVITY_PRIORITY} and {MAX_ACTIVITY_PRIORITY}, got {priority}"
        ))
        .into());
    }
    Ok(())
}

fn validate_activity_fields(title: &str, cost: f64, priority: i32) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::invalid("Activity title cannot be empty").into());
    }
    if !cost.is_finite() || cost < 0.0 {
        return Err(ValidationError::invalid("Activity cost must be non-negative").into());
    }
    validate_priority(priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_accepts_display_forms() {
        assert_eq!("in_progress".parse(), Ok(ActivityStatus::InProgress));
        assert_eq!("In Progress".parse(), Ok(ActivityStatus::InProgress));
        assert_eq!("COMPLETED".parse(), Ok(ActivityStatus::Completed));
        assert!("done".parse::<ActivityStatus>().is_err());
    }

    #[test]
    fn test_priority_bounds() {
        assert!(validate_priority(1).is_ok());
        assert!(validate_priority(3).is_ok());
        assert!(validate_priority(0).is_err());
        assert!(validate_priority(4).is_err());
    }

    #[test]
    fn test_new_activity_requires_destination() {
        let activity = NewActivity {
            trip_id: "trip-1".to_string(),
            title: "Senso-ji".to_string(),
            ..Default::default()
        };
        assert!(activity.validate().is_err());
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(priority_label(1), "Low");
        assert_eq!(priority_label(2), "Medium");
        assert_eq!(priority_label(3), "High");
    }
}
