use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{LeaveInput, LeaveRecord, LeaveStatus};

/// Decision for a candidate record. `Accepted` may carry the advisory
/// pending-overlap flag; whether to ask the user for confirmation is the
/// caller's business, the engine only classifies.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted { pending_overlap: bool },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("Start date must be on or before end date")]
    InvalidRange,

    #[error(
        "Limit of {limit} concurrent approved leave reached at {campus} for the selected dates"
    )]
    LimitReached { campus: String, limit: u32 },
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::InvalidRange => AppError::InvalidRange,
            Rejection::LimitReached { campus, limit } => AppError::LimitReached { campus, limit },
        }
    }
}

/// Decide whether a candidate may enter (or stay in) the collection as
/// Approved. Pure over its inputs; never mutates anything.
///
/// `ignore_id` excludes a record from comparison, for re-evaluating an
/// existing record's own edit or approval without counting itself.
pub fn evaluate_candidate(
    candidate: &LeaveInput,
    leaves: &[LeaveRecord],
    limits: &HashMap<String, u32>,
    ignore_id: Option<Uuid>,
) -> Outcome {
    if candidate.start > candidate.end {
        return Outcome::Rejected(Rejection::InvalidRange);
    }

    let limit = limits.get(&candidate.campus).copied().unwrap_or(1);

    let in_scope = |record: &&LeaveRecord| {
        record.campus == candidate.campus
            && ignore_id != Some(record.id)
            && record.overlaps(candidate.start, candidate.end)
    };

    let approved_clashes = leaves
        .iter()
        .filter(|record| in_scope(record))
        .filter(|record| record.status == LeaveStatus::Approved)
        .count();

    if approved_clashes >= limit as usize {
        return Outcome::Rejected(Rejection::LimitReached {
            campus: candidate.campus.clone(),
            limit,
        });
    }

    let pending_overlap = leaves
        .iter()
        .filter(|record| in_scope(record))
        .any(|record| record.status == LeaveStatus::Pending);

    Outcome::Accepted { pending_overlap }
}
