use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use voyage_core::expenses::PAYMENT_METHODS;
use voyage_core::hotels::HotelStatus;
use voyage_core::interchange::ExportFormat;
use voyage_core::itinerary::{ActivitySort, ActivityStatus};
use voyage_core::transportation::TransportStatus;

#[derive(Parser)]
#[command(name = "voyage", version, about = "Plan multi-city trips")]
pub(crate) struct Cli {
    /// SQLite file to use instead of VOYAGE_DB_PATH.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[command(subcommand)]
    Trip(TripCommand),
    #[command(subcommand)]
    Destination(DestinationCommand),
    #[command(subcommand)]
    Activity(ActivityCommand),
    #[command(subcommand)]
    Transport(TransportCommand),
    #[command(subcommand)]
    Hotel(HotelCommand),
    #[command(subcommand)]
    Budget(BudgetCommand),
    #[command(subcommand)]
    Expense(ExpenseCommand),
    #[command(subcommand)]
    Contact(ContactCommand),
    /// Headline numbers, or the full overview with --overview.
    Stats {
        trip_id: String,
        #[arg(long)]
        overview: bool,
    },
    /// Writes a trip to a JSON document, a ZIP of CSV files, or an xlsx workbook.
    Export {
        trip_id: String,
        #[arg(long, default_value = "json")]
        format: ExportFormat,
        /// Target file or directory. Defaults to the suggested name in the current directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Creates a new trip from a .json, .zip, .xlsx or .csv file.
    Import { path: PathBuf },
}

#[derive(Subcommand)]
pub(crate) enum TripCommand {
    List,
    Show {
        trip_id: String,
    },
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
    },
    Update {
        trip_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Sets the total without rescaling categories; see `budget set-total`.
        #[arg(long)]
        budget: Option<f64>,
    },
    Delete {
        trip_id: String,
    },
    /// Seeds the "Calgary to Zhongshan Journey" sample.
    Sample,
}

#[derive(Subcommand)]
pub(crate) enum DestinationCommand {
    List {
        trip_id: String,
    },
    Add {
        trip_id: String,
        name: String,
        country: String,
        #[arg(long)]
        arrive: Option<NaiveDate>,
        #[arg(long)]
        depart: Option<NaiveDate>,
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "highlight")]
        highlights: Vec<String>,
    },
    Delete {
        destination_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ActivityCommand {
    List {
        trip_id: String,
        #[arg(long)]
        destination: Option<String>,
        #[arg(long)]
        status: Option<ActivityStatus>,
        #[arg(long)]
        priority: Option<i32>,
        #[arg(long, default_value = "date")]
        sort: ActivitySort,
    },
    Add {
        trip_id: String,
        destination_id: String,
        title: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        time: Option<NaiveTime>,
        #[arg(long, default_value_t = 0.0)]
        cost: f64,
        /// 1 low, 2 medium, 3 high.
        #[arg(long, default_value_t = 2)]
        priority: i32,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    Status {
        activity_id: String,
        status: ActivityStatus,
    },
    Delete {
        activity_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum TransportCommand {
    List {
        trip_id: String,
    },
    Add {
        trip_id: String,
        transport_type: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        provider: Option<String>,
        /// e.g. 2024-11-08T09:00:00
        #[arg(long)]
        departure: Option<NaiveDateTime>,
        #[arg(long)]
        arrival: Option<NaiveDateTime>,
        #[arg(long, default_value_t = 0.0)]
        cost: f64,
        #[arg(long)]
        standby: bool,
    },
    Status {
        transportation_id: String,
        status: TransportStatus,
    },
    Delete {
        transportation_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum HotelCommand {
    List {
        trip_id: String,
    },
    Add {
        trip_id: String,
        destination_id: String,
        name: String,
        #[arg(long)]
        check_in: Option<NaiveDate>,
        #[arg(long)]
        check_out: Option<NaiveDate>,
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
        #[arg(long, default_value = "planned")]
        status: HotelStatus,
        #[arg(long = "amenity")]
        amenities: Vec<String>,
    },
    Delete {
        hotel_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum BudgetCommand {
    Show {
        trip_id: String,
    },
    /// Adds the default categories to a trip that has none.
    Init {
        trip_id: String,
    },
    /// Changes the trip total and rescales category allocations.
    SetTotal {
        trip_id: String,
        amount: f64,
    },
    AddCategory {
        trip_id: String,
        name: String,
        allocated: f64,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ExpenseCommand {
    List {
        trip_id: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        destination: Option<String>,
    },
    Record {
        trip_id: String,
        category: String,
        description: String,
        amount: f64,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        destination: Option<String>,
        #[arg(long)]
        activity: Option<String>,
        #[arg(long, value_parser = PAYMENT_METHODS)]
        payment_method: Option<String>,
    },
    Delete {
        expense_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ContactCommand {
    List {
        trip_id: String,
    },
    Add {
        trip_id: String,
        name: String,
        phone: String,
        #[arg(long)]
        relationship: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Delete {
        contact_id: String,
    },
}
