/// Currency assumed when a record does not carry one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Activity priority bounds (1 = low, 2 = medium, 3 = high).
pub const MIN_ACTIVITY_PRIORITY: i32 = 1;
pub const MAX_ACTIVITY_PRIORITY: i32 = 3;

/// Name given to trips created from imports that carry no trip record.
pub const IMPORTED_TRIP_NAME_PREFIX: &str = "Imported Trip";

/// Serde default for `currency` fields.
pub(crate) fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
