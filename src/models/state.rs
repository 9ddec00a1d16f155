use std::collections::HashMap;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::leave::{LeaveRecord, LeaveStatus};

pub const DEFAULT_CAMPUSES: [&str; 5] =
    ["Melbourne", "Sydney", "Brisbane", "Adelaide", "Perth"];

/// Concurrency limits clamp to this range.
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 50;

/// The whole persisted structure. Owned by the caller and replaced
/// wholesale on every accepted mutation; the core never aliases it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerState {
    pub campuses: Vec<String>,
    #[serde(default)]
    pub campus_limits: HashMap<String, u32>,
    pub leaves: Vec<LeaveRecord>,
}

impl PlannerState {
    /// Default state used when nothing has been persisted yet: the stock
    /// campuses at limit 1 and a couple of records a week out.
    pub fn seed() -> Self {
        let today = Utc::now().date_naive();
        let next_week = today + Duration::days(7);

        PlannerState {
            campuses: DEFAULT_CAMPUSES.iter().map(|c| c.to_string()).collect(),
            campus_limits: DEFAULT_CAMPUSES.iter().map(|c| (c.to_string(), 1)).collect(),
            leaves: vec![
                LeaveRecord {
                    id: Uuid::new_v4(),
                    name: "Alex".to_string(),
                    campus: "Melbourne".to_string(),
                    role: "Advisor".to_string(),
                    start: next_week,
                    end: next_week + Duration::days(4),
                    status: LeaveStatus::Pending,
                    approver: None,
                    decided_at: None,
                },
                LeaveRecord {
                    id: Uuid::new_v4(),
                    name: "Priya".to_string(),
                    campus: "Sydney".to_string(),
                    role: "Reception".to_string(),
                    start: next_week + Duration::days(2),
                    end: next_week + Duration::days(6),
                    status: LeaveStatus::Approved,
                    approver: Some("System".to_string()),
                    decided_at: Some(Utc::now()),
                },
            ],
        }
    }

    /// The concurrency cap for a campus. Campuses without an explicit
    /// entry default to 1 (no overlap at all).
    pub fn limit_for(&self, campus: &str) -> u32 {
        self.campus_limits.get(campus).copied().unwrap_or(1)
    }

    pub fn leave(&self, id: Uuid) -> Option<&LeaveRecord> {
        self.leaves.iter().find(|l| l.id == id)
    }
}
