//! SQLite storage implementation for planned activities.

mod model;
mod repository;

pub use model::{ActivityChangesetDB, ActivityDB, NewActivityDB};
pub use repository::ActivityRepository;
