pub mod conflict;
pub mod importer;
pub mod workflow;

pub use conflict::{evaluate_candidate, Outcome, Rejection};
pub use importer::{confirm_import, normalize_date, normalize_row, normalize_status, Mapping};
