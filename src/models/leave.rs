use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: Uuid,
    pub name: String,
    pub campus: String,
    #[serde(default)]
    pub role: String,
    pub start: NaiveDate, // calendar day, inclusive
    pub end: NaiveDate,   // calendar day, inclusive
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl LeaveRecord {
    /// Whether this record's day range intersects the given closed range.
    /// Ranges that touch on a boundary day count as overlapping.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveInput {
    pub name: String,
    pub campus: String,
    #[serde(default)]
    pub role: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub status: LeaveStatus,
}

impl From<&LeaveRecord> for LeaveInput {
    fn from(record: &LeaveRecord) -> Self {
        LeaveInput {
            name: record.name.clone(),
            campus: record.campus.clone(),
            role: record.role.clone(),
            start: record.start,
            end: record.end,
            status: record.status.clone(),
        }
    }
}

string_enum! {
    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    pub enum LeaveStatus {
        #[default]
        Pending => "pending",
        Approved => "approved",
        Declined => "declined",
    }
}
