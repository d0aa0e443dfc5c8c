pub mod time_utils;

pub use time_utils::{
    ensure_date_order, inclusive_day_count, nights_between, today, undated_sentinel,
};
