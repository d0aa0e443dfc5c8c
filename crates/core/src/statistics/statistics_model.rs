//! Derived trip figures. Everything here is computed, never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::budget::BudgetOverview;
use crate::destinations::Destination;
use crate::hotels::Hotel;
use crate::itinerary::{Activity, ActivityStatus};
use crate::transportation::Transportation;
use crate::trips::Trip;

/// Row counts and sums read straight from storage for one trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripCounts {
    pub destinations: i64,
    pub activities: i64,
    pub transportation: i64,
    pub hotels: i64,
    pub expense_total: f64,
}

/// Headline numbers of a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripStatistics {
    pub total_days: i64,
    pub total_cities: i64,
    pub total_activities: i64,
    pub total_budget: f64,
    pub total_transport: i64,
    pub total_hotels: i64,
    pub total_expenses: f64,
}

impl TripStatistics {
    pub fn compose(trip: &Trip, counts: TripCounts) -> Self {
        Self {
            total_days: trip.total_days(),
            total_cities: counts.destinations,
            total_activities: counts.activities,
            total_budget: trip.total_budget,
            total_transport: counts.transportation,
            total_hotels: counts.hotels,
            total_expenses: counts.expense_total,
        }
    }
}

/// Activity completion at one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationProgress {
    pub destination_id: String,
    pub name: String,
    pub country: String,
    pub total_activities: usize,
    pub completed_activities: usize,
    /// Percent of activities completed, 0 when there are none.
    pub completion_rate: f64,
}

pub fn destination_progress(
    destinations: &[Destination],
    activities: &[Activity],
) -> Vec<DestinationProgress> {
    destinations
        .iter()
        .map(|destination| {
            let (total, completed) = activities
                .iter()
                .filter(|a| a.destination_id == destination.id)
                .fold((0usize, 0usize), |(total, completed), a| {
                    let done = usize::from(a.status == ActivityStatus::Completed);
                    (total + 1, completed + done)
                });
            let completion_rate = if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            DestinationProgress {
                destination_id: destination.id.clone(),
                name: destination.name.clone(),
                country: destination.country.clone(),
                total_activities: total,
                completed_activities: completed,
                completion_rate,
            }
        })
        .collect()
}

pub fn activity_status_counts(activities: &[Activity]) -> BTreeMap<ActivityStatus, usize> {
    let mut counts = BTreeMap::new();
    for activity in activities {
        *counts.entry(activity.status).or_insert(0) += 1;
    }
    counts
}

/// Count and spend for one transport type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportTypeBreakdown {
    pub segments: usize,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportSummary {
    pub segments: usize,
    pub total_cost: f64,
    pub average_cost: f64,
    pub standby_segments: usize,
    pub by_type: BTreeMap<String, TransportTypeBreakdown>,
}

impl TransportSummary {
    pub fn build(segments: &[Transportation]) -> Self {
        let mut summary = TransportSummary {
            segments: segments.len(),
            ..Default::default()
        };
        for segment in segments {
            summary.total_cost += segment.cost;
            if segment.is_standby {
                summary.standby_segments += 1;
            }
            let entry = summary
                .by_type
                .entry(segment.transport_type.clone())
                .or_default();
            entry.segments += 1;
            entry.cost += segment.cost;
        }
        if summary.segments > 0 {
            summary.average_cost = summary.total_cost / summary.segments as f64;
        }
        summary
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationSummary {
    pub hotels: usize,
    pub total_nights: i64,
    pub total_cost: f64,
    /// `total_cost / total_nights`, 0 without any nights.
    pub average_nightly_rate: f64,
}

impl AccommodationSummary {
    pub fn build(hotels: &[Hotel]) -> Self {
        let total_nights = hotels.iter().map(Hotel::nights).sum::<i64>();
        let total_cost = hotels.iter().map(|h| h.total_cost).sum::<f64>();
        let average_nightly_rate = if total_nights > 0 {
            total_cost / total_nights as f64
        } else {
            0.0
        };
        Self {
            hotels: hotels.len(),
            total_nights,
            total_cost,
            average_nightly_rate,
        }
    }
}

/// Everything the trip dashboard shows, in one value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripOverview {
    pub trip: Trip,
    pub statistics: TripStatistics,
    pub budget: BudgetOverview,
    pub destination_progress: Vec<DestinationProgress>,
    pub activity_status_counts: BTreeMap<ActivityStatus, usize>,
    pub transport: TransportSummary,
    pub accommodation: AccommodationSummary,
}
