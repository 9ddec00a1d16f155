use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use leave_planner::models::{LeaveRecord, LeaveStatus, PlannerState};

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ymd(text: &str) -> NaiveDate {
    text.parse().expect("test date must be valid")
}

pub fn record(
    name: &str,
    campus: &str,
    start: &str,
    end: &str,
    status: LeaveStatus,
) -> LeaveRecord {
    LeaveRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        campus: campus.to_string(),
        role: String::new(),
        start: ymd(start),
        end: ymd(end),
        status,
        approver: None,
        decided_at: None,
    }
}

/// State holding the given records, with explicit limits per campus.
pub fn state_with(leaves: Vec<LeaveRecord>, limits: &[(&str, u32)]) -> PlannerState {
    let campus_limits: HashMap<String, u32> = limits
        .iter()
        .map(|(campus, limit)| (campus.to_string(), *limit))
        .collect();

    PlannerState {
        campuses: limits.iter().map(|(campus, _)| campus.to_string()).collect(),
        campus_limits,
        leaves,
    }
}
