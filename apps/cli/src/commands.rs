use anyhow::Context;
use std::path::{Path, PathBuf};

use voyage_core::budget::NewBudgetCategory;
use voyage_core::contacts::NewEmergencyContact;
use voyage_core::destinations::NewDestination;
use voyage_core::expenses::{ExpenseFilter, NewExpense};
use voyage_core::hotels::NewHotel;
use voyage_core::itinerary::{ActivityQuery, NewActivity};
use voyage_core::transportation::NewTransportation;
use voyage_core::trips::{NewTrip, TripUpdate};

use crate::cli::{
    ActivityCommand, BudgetCommand, Command, ContactCommand, DestinationCommand, ExpenseCommand,
    HotelCommand, TransportCommand, TripCommand,
};
use crate::main_lib::AppState;
use crate::output::{self, Output};

pub(crate) async fn run(state: &AppState, command: Command, out: &Output) -> anyhow::Result<()> {
    match command {
        Command::Trip(cmd) => trip(state, cmd, out).await,
        Command::Destination(cmd) => destination(state, cmd, out).await,
        Command::Activity(cmd) => activity(state, cmd, out).await,
        Command::Transport(cmd) => transport(state, cmd, out).await,
        Command::Hotel(cmd) => hotel(state, cmd, out).await,
        Command::Budget(cmd) => budget(state, cmd, out).await,
        Command::Expense(cmd) => expense(state, cmd, out).await,
        Command::Contact(cmd) => contact(state, cmd, out).await,
        Command::Stats { trip_id, overview } => {
            if overview {
                let overview = state.statistics_service.get_trip_overview(&trip_id)?;
                out.emit(&overview, output::overview)
            } else {
                let stats = state.statistics_service.get_trip_statistics(&trip_id);
                out.emit(&stats, output::statistics)
            }
        }
        Command::Export {
            trip_id,
            format,
            out: target,
        } => {
            let exported = state.interchange_service.export_trip(&trip_id, format)?;
            let path = export_path(target, &exported.file_name);
            std::fs::write(&path, &exported.bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Exported trip {} to {}", trip_id, path.display());
            let value = serde_json::json!({
                "path": path.display().to_string(),
                "format": exported.format.to_string(),
                "bytes": exported.bytes.len(),
            });
            out.emit(&value, |_| format!("Wrote {}", path.display()))
        }
        Command::Import { path } => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            let summary = state
                .interchange_service
                .import_file(&file_name, &bytes)
                .await?;
            out.emit(&summary, output::import_summary)
        }
    }
}

/// A directory target receives the suggested file name.
fn export_path(target: Option<PathBuf>, file_name: &str) -> PathBuf {
    match target {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path,
        None => Path::new(".").join(file_name),
    }
}

async fn trip(state: &AppState, cmd: TripCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.trip_service;
    match cmd {
        TripCommand::List => out.emit(service.get_trips()?.as_slice(), output::trips),
        TripCommand::Show { trip_id } => out.emit(&service.get_trip(&trip_id)?, output::trip_line),
        TripCommand::Create {
            name,
            description,
            start,
            end,
            budget,
        } => {
            let trip = service
                .create_trip(NewTrip {
                    id: None,
                    name,
                    description,
                    start_date: start,
                    end_date: end,
                    total_budget: budget,
                })
                .await?;
            out.emit(&trip, output::trip_line)
        }
        TripCommand::Update {
            trip_id,
            name,
            description,
            start,
            end,
            budget,
        } => {
            let current = service.get_trip(&trip_id)?;
            let trip = service
                .update_trip(TripUpdate {
                    id: current.id,
                    name: name.unwrap_or(current.name),
                    description: description.or(current.description),
                    start_date: start.or(current.start_date),
                    end_date: end.or(current.end_date),
                    total_budget: budget.unwrap_or(current.total_budget),
                })
                .await?;
            out.emit(&trip, output::trip_line)
        }
        TripCommand::Delete { trip_id } => {
            service.delete_trip(&trip_id).await?;
            out.deleted("trip", &trip_id, 1)
        }
        TripCommand::Sample => out.emit(&service.create_sample_trip().await?, output::trip_line),
    }
}

async fn destination(
    state: &AppState,
    cmd: DestinationCommand,
    out: &Output,
) -> anyhow::Result<()> {
    let service = &state.destination_service;
    match cmd {
        DestinationCommand::List { trip_id } => out.emit(
            service.get_destinations(&trip_id)?.as_slice(),
            output::destinations,
        ),
        DestinationCommand::Add {
            trip_id,
            name,
            country,
            arrive,
            depart,
            budget,
            description,
            highlights,
        } => {
            let duration_days = match (arrive, depart) {
                (Some(a), Some(d)) if d >= a => Some((d - a).num_days() as i32 + 1),
                _ => None,
            };
            let destination = service
                .create_destination(NewDestination {
                    trip_id,
                    name,
                    country,
                    arrival_date: arrive,
                    departure_date: depart,
                    duration_days,
                    budget,
                    description,
                    highlights,
                    ..Default::default()
                })
                .await?;
            out.emit(std::slice::from_ref(&destination), output::destinations)
        }
        DestinationCommand::Delete { destination_id } => {
            let rows = service.delete_destination(&destination_id).await?;
            out.deleted("destination", &destination_id, rows)
        }
    }
}

async fn activity(state: &AppState, cmd: ActivityCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.activity_service;
    match cmd {
        ActivityCommand::List {
            trip_id,
            destination,
            status,
            priority,
            sort,
        } => {
            let query = ActivityQuery {
                status,
                priority,
                sort,
            };
            let mut activities = service.search_activities(&trip_id, &query)?;
            if let Some(destination_id) = destination {
                activities.retain(|a| a.destination_id == destination_id);
            }
            out.emit(activities.as_slice(), output::activities)
        }
        ActivityCommand::Add {
            trip_id,
            destination_id,
            title,
            date,
            time,
            cost,
            priority,
            category,
            location,
        } => {
            let activity = service
                .create_activity(NewActivity {
                    trip_id,
                    destination_id,
                    title,
                    planned_date: date,
                    planned_time: time,
                    cost,
                    priority,
                    category,
                    location,
                    ..Default::default()
                })
                .await?;
            out.emit(&activity, output::activity_line)
        }
        ActivityCommand::Status {
            activity_id,
            status,
        } => out.emit(
            &service.set_status(&activity_id, status).await?,
            output::activity_line,
        ),
        ActivityCommand::Delete { activity_id } => {
            let rows = service.delete_activity(&activity_id).await?;
            out.deleted("activity", &activity_id, rows)
        }
    }
}

async fn transport(state: &AppState, cmd: TransportCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.transportation_service;
    match cmd {
        TransportCommand::List { trip_id } => {
            out.emit(service.get_segments(&trip_id)?.as_slice(), output::segments)
        }
        TransportCommand::Add {
            trip_id,
            transport_type,
            from,
            to,
            provider,
            departure,
            arrival,
            cost,
            standby,
        } => {
            let duration_minutes = match (departure, arrival) {
                (Some(d), Some(a)) if a >= d => Some((a - d).num_minutes() as i32),
                _ => None,
            };
            let segment = service
                .create_segment(NewTransportation {
                    trip_id,
                    transport_type,
                    from_destination_id: from,
                    to_destination_id: to,
                    provider,
                    departure_datetime: departure,
                    arrival_datetime: arrival,
                    duration_minutes,
                    cost,
                    is_standby: standby,
                    ..Default::default()
                })
                .await?;
            out.emit(&segment, output::segment_line)
        }
        TransportCommand::Status {
            transportation_id,
            status,
        } => out.emit(
            &service.set_status(&transportation_id, status).await?,
            output::segment_line,
        ),
        TransportCommand::Delete { transportation_id } => {
            let rows = service.delete_segment(&transportation_id).await?;
            out.deleted("transportation", &transportation_id, rows)
        }
    }
}

async fn hotel(state: &AppState, cmd: HotelCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.hotel_service;
    match cmd {
        HotelCommand::List { trip_id } => {
            out.emit(service.get_hotels(&trip_id)?.as_slice(), output::hotels)
        }
        HotelCommand::Add {
            trip_id,
            destination_id,
            name,
            check_in,
            check_out,
            rate,
            status,
            amenities,
        } => {
            let hotel = service
                .create_hotel(NewHotel {
                    trip_id,
                    destination_id,
                    name,
                    check_in_date: check_in,
                    check_out_date: check_out,
                    rate_per_night: rate,
                    status,
                    amenities,
                    ..Default::default()
                })
                .await?;
            out.emit(&hotel, output::hotel_line)
        }
        HotelCommand::Delete { hotel_id } => {
            let rows = service.delete_hotel(&hotel_id).await?;
            out.deleted("hotel", &hotel_id, rows)
        }
    }
}

async fn budget(state: &AppState, cmd: BudgetCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.budget_service;
    match cmd {
        BudgetCommand::Show { trip_id } => {
            out.emit(&service.get_budget_overview(&trip_id)?, output::budget)
        }
        BudgetCommand::Init { trip_id } => {
            let categories = service.initialize_default_categories(&trip_id).await?;
            out.emit(categories.as_slice(), output::categories)
        }
        BudgetCommand::SetTotal { trip_id, amount } => {
            let update = service.update_total_budget(&trip_id, amount).await?;
            if !update.reallocated {
                tracing::warn!("Categories of trip {} have no allocation to rescale", trip_id);
            }
            out.emit(&update, |u| {
                format!(
                    "{}\n{}",
                    output::trip_line(&u.trip),
                    output::categories(&u.categories)
                )
            })
        }
        BudgetCommand::AddCategory {
            trip_id,
            name,
            allocated,
            description,
        } => {
            let category = service
                .create_category(NewBudgetCategory {
                    description,
                    ..NewBudgetCategory::new(&trip_id, &name, allocated)
                })
                .await?;
            out.emit(&category, output::category_line)
        }
    }
}

async fn expense(state: &AppState, cmd: ExpenseCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.expense_service;
    match cmd {
        ExpenseCommand::List {
            trip_id,
            category,
            destination,
        } => {
            let filter = ExpenseFilter {
                category,
                destination_id: destination,
            };
            out.emit(
                service.get_expenses(&trip_id, &filter)?.as_slice(),
                output::expenses,
            )
        }
        ExpenseCommand::Record {
            trip_id,
            category,
            description,
            amount,
            date,
            destination,
            activity,
            payment_method,
        } => {
            let expense_date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut new_expense =
                NewExpense::new(&trip_id, &category, &description, amount, expense_date);
            new_expense.destination_id = destination;
            new_expense.activity_id = activity;
            new_expense.payment_method = payment_method;
            let expense = service.record_expense(new_expense).await?;
            out.emit(&expense, output::expense_line)
        }
        ExpenseCommand::Delete { expense_id } => {
            let rows = service.delete_expense(&expense_id).await?;
            out.deleted("expense", &expense_id, rows)
        }
    }
}

async fn contact(state: &AppState, cmd: ContactCommand, out: &Output) -> anyhow::Result<()> {
    let service = &state.contact_service;
    match cmd {
        ContactCommand::List { trip_id } => {
            out.emit(service.get_contacts(&trip_id)?.as_slice(), output::contacts)
        }
        ContactCommand::Add {
            trip_id,
            name,
            phone,
            relationship,
            email,
        } => {
            let contact = service
                .create_contact(NewEmergencyContact {
                    trip_id,
                    name,
                    phone,
                    relationship,
                    email,
                    ..Default::default()
                })
                .await?;
            out.emit(&contact, output::contact_line)
        }
        ContactCommand::Delete { contact_id } => {
            let rows = service.delete_contact(&contact_id).await?;
            out.deleted("contact", &contact_id, rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_path_into_directory_uses_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_path(Some(dir.path().to_path_buf()), "Trip_export.json");
        assert_eq!(path, dir.path().join("Trip_export.json"));
    }

    #[test]
    fn test_export_path_defaults_to_current_directory() {
        assert_eq!(
            export_path(None, "Trip_export.zip"),
            Path::new(".").join("Trip_export.zip")
        );
        assert_eq!(
            export_path(Some(PathBuf::from("out/my.json")), "ignored.json"),
            PathBuf::from("out/my.json")
        );
    }
}
