pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use models::{LeaveInput, LeaveRecord, LeaveStatus, PlannerState};
pub use services::{evaluate_candidate, Mapping, Outcome, Rejection};
pub use store::StateStore;
