use serde::Serialize;

use voyage_core::budget::{BudgetCategory, BudgetOverview};
use voyage_core::contacts::EmergencyContact;
use voyage_core::destinations::Destination;
use voyage_core::expenses::{totals_by_category, Expense};
use voyage_core::hotels::Hotel;
use voyage_core::interchange::ImportSummary;
use voyage_core::itinerary::{priority_label, Activity};
use voyage_core::statistics::{TripOverview, TripStatistics};
use voyage_core::transportation::Transportation;
use voyage_core::trips::Trip;

/// Renders command results either as pretty JSON or as plain lines.
pub(crate) struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn emit<T, F>(&self, value: &T, text: F) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            let rendered = text(value);
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
        Ok(())
    }

    /// Confirmation for commands whose only result is a count.
    pub fn deleted(&self, what: &str, id: &str, rows: usize) -> anyhow::Result<()> {
        let value = serde_json::json!({ "id": id, "deleted": rows });
        self.emit(&value, |_| match rows {
            0 => format!("No {} with id {}", what, id),
            _ => format!("Deleted {} {}", what, id),
        })
    }
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

fn lines<T>(items: &[T], empty: &str, line: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

pub(crate) fn trip_line(trip: &Trip) -> String {
    format!(
        "{}  {}  {} .. {}  budget {:.2}",
        trip.id,
        trip.name,
        opt(&trip.start_date),
        opt(&trip.end_date),
        trip.total_budget
    )
}

pub(crate) fn trips(trips: &[Trip]) -> String {
    lines(trips, "No trips yet", trip_line)
}

pub(crate) fn destinations(destinations: &[Destination]) -> String {
    lines(destinations, "No destinations", |d| {
        format!(
            "{}  {}  {} .. {}  budget {:.2}",
            d.id,
            d.label(),
            opt(&d.arrival_date),
            opt(&d.departure_date),
            d.budget
        )
    })
}

pub(crate) fn activity_line(a: &Activity) -> String {
    format!(
        "{}  [{}] {}  {} {}  priority {}  cost {:.2}",
        a.id,
        a.status,
        a.title,
        opt(&a.planned_date),
        opt(&a.planned_time),
        priority_label(a.priority),
        a.cost
    )
}

pub(crate) fn activities(activities: &[Activity]) -> String {
    lines(activities, "No activities", activity_line)
}

pub(crate) fn segment_line(s: &Transportation) -> String {
    format!(
        "{}  [{}] {}{}  {}  departs {}  cost {:.2} {}",
        s.id,
        s.status,
        s.transport_type,
        if s.is_standby { " (standby)" } else { "" },
        opt(&s.provider),
        opt(&s.departure_datetime),
        s.cost,
        s.currency
    )
}

pub(crate) fn segments(segments: &[Transportation]) -> String {
    lines(segments, "No transportation", segment_line)
}

pub(crate) fn hotel_line(h: &Hotel) -> String {
    format!(
        "{}  [{}] {}  {} .. {}  {:.2}/night  total {:.2} {}",
        h.id,
        h.status,
        h.name,
        opt(&h.check_in_date),
        opt(&h.check_out_date),
        h.rate_per_night,
        h.total_cost,
        h.currency
    )
}

pub(crate) fn hotels(hotels: &[Hotel]) -> String {
    lines(hotels, "No hotels", hotel_line)
}

pub(crate) fn category_line(c: &BudgetCategory) -> String {
    format!(
        "{}  {}  allocated {:.2}  spent {:.2}",
        c.id, c.category_name, c.allocated_amount, c.spent_amount
    )
}

pub(crate) fn categories(categories: &[BudgetCategory]) -> String {
    lines(categories, "No budget categories", category_line)
}

pub(crate) fn budget(overview: &BudgetOverview) -> String {
    let mut out = format!(
        "Total budget {:.2}  allocated {:.2}  spent {:.2} ({:.1}%)  remaining {:.2}",
        overview.total_budget,
        overview.total_allocated,
        overview.total_spent,
        overview.spent_percent,
        overview.remaining
    );
    for c in &overview.categories {
        out.push_str(&format!(
            "\n  {:<28} {:>10.2} / {:>10.2}  {:>5.1}%{}",
            c.category_name,
            c.spent_amount,
            c.allocated_amount,
            c.percent_used,
            if c.is_over_budget { "  OVER" } else { "" }
        ));
    }
    out
}

pub(crate) fn expense_line(e: &Expense) -> String {
    format!(
        "{}  {}  {}  {}  {:.2} {}",
        e.id, e.expense_date, e.category, e.description, e.amount, e.currency
    )
}

pub(crate) fn expenses(expenses: &[Expense]) -> String {
    let mut out = lines(expenses, "No expenses", expense_line);
    let totals = totals_by_category(expenses);
    if !totals.is_empty() {
        out.push('\n');
        for (category, total) in totals {
            out.push_str(&format!("\n  {:<28} {:>10.2}", category, total));
        }
    }
    out
}

pub(crate) fn contact_line(c: &EmergencyContact) -> String {
    format!(
        "{}  {}  {}  {}",
        c.id,
        c.name,
        c.phone,
        opt(&c.relationship)
    )
}

pub(crate) fn contacts(contacts: &[EmergencyContact]) -> String {
    lines(contacts, "No emergency contacts", contact_line)
}

pub(crate) fn statistics(stats: &TripStatistics) -> String {
    [
        format!("Days          {}", stats.total_days),
        format!("Cities        {}", stats.total_cities),
        format!("Activities    {}", stats.total_activities),
        format!("Transport     {}", stats.total_transport),
        format!("Hotels        {}", stats.total_hotels),
        format!("Budget        {:.2}", stats.total_budget),
        format!("Spent         {:.2}", stats.total_expenses),
    ]
    .join("\n")
}

pub(crate) fn overview(overview: &TripOverview) -> String {
    let mut out = format!(
        "{}\n\n{}\n\n{}",
        trip_line(&overview.trip),
        statistics(&overview.statistics),
        budget(&overview.budget)
    );
    out.push_str("\n\nDestinations");
    for p in &overview.destination_progress {
        out.push_str(&format!(
            "\n  {:<24} {}/{} activities done ({:.0}%)",
            format!("{}, {}", p.name, p.country),
            p.completed_activities,
            p.total_activities,
            p.completion_rate
        ));
    }
    let transport = &overview.transport;
    out.push_str(&format!(
        "\n\nTransport: {} segments, {:.2} total, {:.2} average, {} standby",
        transport.segments, transport.total_cost, transport.average_cost, transport.standby_segments
    ));
    let lodging = &overview.accommodation;
    out.push_str(&format!(
        "\nLodging: {} hotels, {} nights, {:.2} total, {:.2} per night",
        lodging.hotels, lodging.total_nights, lodging.total_cost, lodging.average_nightly_rate
    ));
    out
}

pub(crate) fn import_summary(summary: &ImportSummary) -> String {
    let mut out = format!(
        "Imported \"{}\" as {}\n  {} destinations, {} activities, {} transportation, {} categories, {} expenses, {} hotels, {} contacts",
        summary.trip.name,
        summary.trip.id,
        summary.destinations,
        summary.activities,
        summary.transportation,
        summary.budget_categories,
        summary.expenses,
        summary.hotels,
        summary.emergency_contacts
    );
    if summary.skipped > 0 {
        out.push_str(&format!(
            "\n  {} records skipped (unknown destination)",
            summary.skipped
        ));
    }
    out
}
