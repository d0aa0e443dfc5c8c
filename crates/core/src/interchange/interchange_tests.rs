#[cfg(test)]
mod tests {
    use crate::budget::BudgetRepositoryTrait;
    use crate::destinations::DestinationRepositoryTrait;
    use crate::errors::Error;
    use crate::expenses::{ExpenseService, ExpenseServiceTrait, NewExpense};
    use crate::hotels::{HotelRepositoryTrait, NewHotel};
    use crate::interchange::{
        suggested_file_name, summary_rows, ExportFormat, ImportFormat, InterchangeError,
        InterchangeRepositories, InterchangeService, InterchangeServiceTrait,
    };
    use crate::itinerary::{ActivityRepositoryTrait, NewActivity};
    use crate::test_support::InMemoryStore;
    use crate::trips::{TripService, TripServiceTrait};
    use calamine::{open_workbook_auto_from_rs, Data, Reader};
    use chrono::NaiveDate;
    use std::io::{Cursor, Read};
    use std::sync::Arc;

    fn interchange(store: &InMemoryStore) -> InterchangeService {
        let s = Arc::new(store.clone());
        InterchangeService::new(InterchangeRepositories {
            trips: s.clone(),
            destinations: s.clone(),
            activities: s.clone(),
            transportation: s.clone(),
            budget: s.clone(),
            expenses: s.clone(),
            hotels: s.clone(),
            contacts: s,
        })
    }

    /// Sample trip plus an activity, a hotel and a linked expense in Tokyo.
    async fn populated_trip(store: &InMemoryStore) -> String {
        let s = Arc::new(store.clone());
        let trip = TripService::new(s.clone(), s.clone(), s.clone(), s.clone())
            .create_sample_trip()
            .await
            .unwrap();
        let tokyo = DestinationRepositoryTrait::list_by_trip(store, &trip.id)
            .unwrap()
            .into_iter()
            .find(|d| d.name == "Tokyo")
            .unwrap();
        let activity = ActivityRepositoryTrait::create(
            store,
            NewActivity {
                trip_id: trip.id.clone(),
                destination_id: tokyo.id.clone(),
                title: "Senso-ji".to_string(),
                priority: 3,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        HotelRepositoryTrait::create(
            store,
            NewHotel {
                trip_id: trip.id.clone(),
                destination_id: tokyo.id.clone(),
                name: "Narita Airport Hotel".to_string(),
                amenities: vec!["Shuttle".to_string(), "Breakfast".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let mut ramen = NewExpense::new(
            &trip.id,
            "Food & Dining",
            "Ramen",
            45.0,
            NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
        );
        ramen.destination_id = Some(tokyo.id.clone());
        ramen.activity_id = Some(activity.id);
        ExpenseService::new(s.clone(), s)
            .record_expense(ramen)
            .await
            .unwrap();
        trip.id
    }

    async fn assert_round_trip(format: ExportFormat) {
        let store = InMemoryStore::new();
        let source_id = populated_trip(&store).await;
        let service = interchange(&store);

        let exported = service.export_trip(&source_id, format).unwrap();
        let summary = service
            .import_file(&exported.file_name, &exported.bytes)
            .await
            .unwrap();

        assert_ne!(summary.trip.id, source_id);
        assert_eq!(summary.trip.name, "Calgary to Zhongshan Journey");
        assert_eq!(summary.trip.total_days(), 51);
        assert_eq!(summary.destinations, 6);
        assert_eq!(summary.activities, 1);
        assert_eq!(summary.transportation, 2);
        assert_eq!(summary.budget_categories, 6);
        assert_eq!(summary.hotels, 1);
        assert_eq!(summary.expenses, 1);
        assert_eq!(summary.skipped, 0);

        let state = store.state();
        let new_tokyo = state
            .destinations
            .iter()
            .find(|d| d.trip_id == summary.trip.id && d.name == "Tokyo")
            .unwrap();
        let activity = state
            .activities
            .iter()
            .find(|a| a.trip_id == summary.trip.id)
            .unwrap();
        assert_eq!(activity.destination_id, new_tokyo.id);
        let expense = state
            .expenses
            .iter()
            .find(|e| e.trip_id == summary.trip.id)
            .unwrap();
        assert_eq!(expense.destination_id.as_deref(), Some(new_tokyo.id.as_str()));
        assert_eq!(expense.activity_id.as_deref(), Some(activity.id.as_str()));
        let hotel = state
            .hotels
            .iter()
            .find(|h| h.trip_id == summary.trip.id)
            .unwrap();
        assert_eq!(hotel.amenities, vec!["Shuttle", "Breakfast"]);
        let flight = state
            .transportation
            .iter()
            .find(|t| t.trip_id == summary.trip.id && t.provider.as_deref() == Some("WestJet"))
            .unwrap();
        assert_eq!(flight.to_destination_id.as_deref(), Some(new_tokyo.id.as_str()));
        drop(state);

        // Spend is carried over as exported, not re-added by the imported expense.
        let food = BudgetRepositoryTrait::list_by_trip(&store, &summary.trip.id)
            .unwrap()
            .into_iter()
            .find(|c| c.category_name == "Food & Dining")
            .unwrap();
        assert_eq!(food.spent_amount, 45.0);
    }

    #[tokio::test]
    async fn test_json_round_trip_remaps_ids() {
        assert_round_trip(ExportFormat::Json).await;
    }

    #[tokio::test]
    async fn test_csv_archive_round_trip_remaps_ids() {
        assert_round_trip(ExportFormat::CsvArchive).await;
    }

    #[tokio::test]
    async fn test_xlsx_round_trip_remaps_ids() {
        assert_round_trip(ExportFormat::Xlsx).await;
    }

    #[tokio::test]
    async fn test_xlsx_export_has_sheet_per_table_and_summary() {
        let store = InMemoryStore::new();
        let trip_id = populated_trip(&store).await;

        let exported = interchange(&store)
            .export_trip(&trip_id, ExportFormat::Xlsx)
            .unwrap();
        assert!(exported.file_name.ends_with(".xlsx"));

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(exported.bytes)).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec![
                "Trip_Info",
                "Destinations",
                "Activities",
                "Transportation",
                "Budget_Categories",
                "Expenses",
                "Hotels",
                "Emergency_Contacts",
                "Summary",
            ]
        );

        let destinations = workbook.worksheet_range("Destinations").unwrap();
        assert_eq!(destinations.height(), 7);
        assert_eq!(
            destinations.get_value((0, 0)),
            Some(&Data::String("id".to_string()))
        );
        assert!(workbook
            .worksheet_range("Emergency_Contacts")
            .unwrap()
            .is_empty());

        let summary = workbook.worksheet_range("Summary").unwrap();
        let rows: Vec<Vec<String>> = summary
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        assert_eq!(rows[0], vec!["Category", "Value"]);
        assert!(rows.contains(&vec!["Total Destinations".to_string(), "6".to_string()]));
        assert!(rows.contains(&vec![
            "Tokyo, Japan".to_string(),
            "3 days, 1 activities, $1200".to_string()
        ]));
    }

    #[tokio::test]
    async fn test_blank_optional_text_imports_the_same_from_every_format() {
        let store = InMemoryStore::new();
        let source_id = populated_trip(&store).await;
        let tokyo = DestinationRepositoryTrait::list_by_trip(&store, &source_id)
            .unwrap()
            .into_iter()
            .find(|d| d.name == "Tokyo")
            .unwrap();
        ActivityRepositoryTrait::create(
            &store,
            NewActivity {
                trip_id: source_id.clone(),
                destination_id: tokyo.id,
                title: "Tea ceremony".to_string(),
                description: Some(String::new()),
                notes: Some("   ".to_string()),
                location: Some("Asakusa".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let service = interchange(&store);

        let mut imported = Vec::new();
        for format in [ExportFormat::Json, ExportFormat::CsvArchive, ExportFormat::Xlsx] {
            let exported = service.export_trip(&source_id, format).unwrap();
            let summary = service
                .import_file(&exported.file_name, &exported.bytes)
                .await
                .unwrap();
            let state = store.state();
            let tea = state
                .activities
                .iter()
                .find(|a| a.trip_id == summary.trip.id && a.title == "Tea ceremony")
                .unwrap();
            imported.push((tea.description.clone(), tea.notes.clone(), tea.location.clone()));
        }

        let expected = (None, None, Some("Asakusa".to_string()));
        assert!(imported.iter().all(|fields| *fields == expected), "{imported:?}");
    }

    #[tokio::test]
    async fn test_csv_archive_contains_summary_sheet() {
        let store = InMemoryStore::new();
        let trip_id = populated_trip(&store).await;

        let exported = interchange(&store)
            .export_trip(&trip_id, ExportFormat::CsvArchive)
            .unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(exported.bytes)).unwrap();
        let mut summary = String::new();
        archive
            .by_name("summary.csv")
            .unwrap()
            .read_to_string(&mut summary)
            .unwrap();
        assert!(summary.starts_with("Category,Value"));
        assert!(summary.contains("Total Destinations,6"));
        assert!(summary.contains("\"Tokyo, Japan\",\"3 days, 1 activities, $1200\""));
        assert!(archive.by_name("emergency_contacts.csv").is_err());
    }

    #[tokio::test]
    async fn test_single_csv_imports_destinations_into_new_trip() {
        let store = InMemoryStore::new();
        let csv = "name,country,arrival_date,departure_date,budget\n\
                   Tokyo,Japan,2024-11-09,2024-11-12,1200\n\
                   Jinan,,2024-11-18,,\n";

        let summary = interchange(&store)
            .import_file("cities.csv", csv.as_bytes())
            .await
            .unwrap();

        assert!(summary.trip.name.starts_with("Imported Trip "));
        assert_eq!(summary.trip.total_budget, 0.0);
        assert_eq!(summary.trip.total_days(), 1);
        assert_eq!(summary.destinations, 2);
        let state = store.state();
        let jinan = state.destinations.iter().find(|d| d.name == "Jinan").unwrap();
        assert_eq!(jinan.country, "Unknown");
    }

    #[tokio::test]
    async fn test_activities_with_unknown_destination_are_skipped() {
        let store = InMemoryStore::new();
        let document = r#"{
            "trip": {"name": "Hand written", "total_budget": 500},
            "destinations": [{"id": "d1", "trip_id": "t", "name": "Beijing", "country": "China"}],
            "activities": [
                {"id": "a1", "trip_id": "t", "destination_id": "d1", "title": "Great Wall"},
                {"id": "a2", "trip_id": "t", "destination_id": "gone", "title": "Orphan"}
            ]
        }"#;

        let summary = interchange(&store)
            .import_file("trip.json", document.as_bytes())
            .await
            .unwrap();

        assert_eq!(summary.trip.name, "Hand written");
        assert_eq!(summary.activities, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(store.state().activities[0].priority, 2);
    }

    #[tokio::test]
    async fn test_unknown_extension_and_broken_workbook_are_rejected() {
        let store = InMemoryStore::new();
        let service = interchange(&store);

        let err = service.import_file("trip.pdf", b"%PDF").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Interchange(InterchangeError::UnsupportedFormat(_))
        ));
        let err = service.import_file("trip.xlsx", b"PK").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Interchange(InterchangeError::Spreadsheet(_))
        ));
        assert!(store.state().trips.is_empty());

        assert_eq!(ImportFormat::from_file_name("a.ZIP").unwrap(), ImportFormat::CsvArchive);
        assert_eq!(ImportFormat::from_file_name("Budget.XLSX").unwrap(), ImportFormat::Xlsx);
    }

    #[tokio::test]
    async fn test_export_unknown_trip_fails() {
        let store = InMemoryStore::new();
        let err = interchange(&store)
            .export_trip("missing", ExportFormat::Json)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_summary_rows_and_file_name() {
        let store = InMemoryStore::new();
        let trip_id = populated_trip(&store).await;
        let export = interchange(&store).build_export(&trip_id).unwrap();

        let rows = summary_rows(&export);
        assert!(rows.contains(&("Total Budget".to_string(), "$10000".to_string())));
        assert!(rows.contains(&("Total Expenses Recorded".to_string(), "$45.00".to_string())));

        let at = NaiveDate::from_ymd_opt(2024, 11, 8)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        assert_eq!(
            suggested_file_name(&export.trip.name, ExportFormat::CsvArchive, at),
            "Calgary_to_Zhongshan_Journey_export_20241108_090503.zip"
        );
    }
}
