//! In-memory filtering and ordering of a trip's activities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::itinerary_model::{Activity, ActivityStatus};
use crate::utils::undated_sentinel;

/// Ordering applied by [`filter_and_sort_activities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySort {
    /// Highest priority first.
    Priority,
    /// Earliest planned date first, undated last.
    #[default]
    Date,
    /// Alphabetical by stored status name.
    Status,
    /// Alphabetical by title.
    Title,
}

impl fmt::Display for ActivitySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivitySort::Priority => "priority",
            ActivitySort::Date => "date",
            ActivitySort::Status => "status",
            ActivitySort::Title => "title",
        };
        f.write_str(name)
    }
}

impl FromStr for ActivitySort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(ActivitySort::Priority),
            "date" => Ok(ActivitySort::Date),
            "status" => Ok(ActivitySort::Status),
            "title" => Ok(ActivitySort::Title),
            other => Err(format!("Unknown activity sort: {other}")),
        }
    }
}

/// Criteria for an activity listing. `None` filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityQuery {
    pub status: Option<ActivityStatus>,
    pub priority: Option<i32>,
    #[serde(default)]
    pub sort: ActivitySort,
}

impl ActivityQuery {
    fn matches(&self, activity: &Activity) -> bool {
        self.status.map_or(true, |status| activity.status == status)
            && self
                .priority
                .map_or(true, |priority| activity.priority == priority)
    }
}

/// Returns the activities matching `query`, in the requested order.
///
/// The sort is stable, so ties keep their input order. The input is untouched.
pub fn filter_and_sort_activities(activities: &[Activity], query: &ActivityQuery) -> Vec<Activity> {
    let mut selected: Vec<Activity> = activities
        .iter()
        .filter(|activity| query.matches(activity))
        .cloned()
        .collect();

    match query.sort {
        ActivitySort::Priority => selected.sort_by(|a, b| b.priority.cmp(&a.priority)),
        ActivitySort::Date => {
            let sentinel = undated_sentinel();
            selected.sort_by_key(|activity| activity.planned_date.unwrap_or(sentinel));
        }
        ActivitySort::Status => selected.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        ActivitySort::Title => selected.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn activity(id: &str, priority: i32, status: ActivityStatus, date: Option<(i32, u32, u32)>) -> Activity {
        let now = NaiveDate::from_ymd_opt(2024, 11, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Activity {
            id: id.to_string(),
            trip_id: "trip-1".to_string(),
            destination_id: "dest-1".to_string(),
            title: format!("Activity {id}"),
            description: None,
            planned_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            planned_time: None,
            duration_minutes: None,
            cost: 0.0,
            priority,
            status,
            category: None,
            location: None,
            contact_info: None,
            booking_required: false,
            booking_reference: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn ids(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.id.as_str()).collect()
    }

    fn sample() -> Vec<Activity> {
        vec![
            activity("a", 1, ActivityStatus::Pending, Some((2024, 11, 10))),
            activity("b", 3, ActivityStatus::Completed, None),
            activity("c", 2, ActivityStatus::InProgress, Some((2024, 11, 9))),
            activity("d", 3, ActivityStatus::Cancelled, Some((2024, 11, 12))),
        ]
    }

    #[test]
    fn test_date_sort_puts_undated_last() {
        let query = ActivityQuery::default();
        let sorted = filter_and_sort_activities(&sample(), &query);
        assert_eq!(ids(&sorted), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_priority_sort_is_descending_and_stable() {
        let query = ActivityQuery {
            sort: ActivitySort::Priority,
            ..Default::default()
        };
        let sorted = filter_and_sort_activities(&sample(), &query);
        assert_eq!(ids(&sorted), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_status_sort_is_alphabetical_by_stored_name() {
        let query = ActivityQuery {
            sort: ActivitySort::Status,
            ..Default::default()
        };
        let sorted = filter_and_sort_activities(&sample(), &query);
        // cancelled < completed < in_progress < pending
        assert_eq!(ids(&sorted), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_filters_combine() {
        let query = ActivityQuery {
            status: Some(ActivityStatus::Cancelled),
            priority: Some(3),
            sort: ActivitySort::Title,
        };
        let sorted = filter_and_sort_activities(&sample(), &query);
        assert_eq!(ids(&sorted), vec!["d"]);

        let none = ActivityQuery {
            priority: Some(2),
            status: Some(ActivityStatus::Pending),
            ..Default::default()
        };
        assert!(filter_and_sort_activities(&sample(), &none).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = sample();
        let query = ActivityQuery {
            sort: ActivitySort::Priority,
            ..Default::default()
        };
        let _ = filter_and_sort_activities(&input, &query);
        assert_eq!(ids(&input), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("Priority".parse(), Ok(ActivitySort::Priority));
        assert!("cost".parse::<ActivitySort>().is_err());
    }
}
