use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{
    LeaveInput, LeaveRecord, LeaveStatus, PlannerState, SheetTable, MAX_LIMIT, MIN_LIMIT,
};
use crate::services::conflict::{evaluate_candidate, Outcome};
use crate::services::importer::{confirm_import, Mapping};

/// Advisory message passed back when an accepted candidate overlaps
/// pending requests. The caller decides whether to ask for confirmation
/// before adopting the returned state.
pub const PENDING_OVERLAP_WARNING: &str = "Warning: pending requests overlap in this window.";

/// Field edits applied to an existing record. Unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct LeaveUpdate {
    pub name: Option<String>,
    pub campus: Option<String>,
    pub role: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Add a manually entered record. Every candidate runs through the
/// conflict engine on entry, whatever its status.
pub fn add_leave(
    state: &PlannerState,
    input: LeaveInput,
) -> Result<(PlannerState, Option<&'static str>), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::MissingField("name"));
    }
    if input.campus.trim().is_empty() {
        return Err(AppError::MissingField("campus"));
    }

    let pending_overlap = match evaluate_candidate(&input, &state.leaves, &state.campus_limits, None)
    {
        Outcome::Rejected(rejection) => return Err(rejection.into()),
        Outcome::Accepted { pending_overlap } => pending_overlap,
    };

    let mut next = state.clone();
    next.leaves.push(LeaveRecord {
        id: Uuid::new_v4(),
        name: input.name.trim().to_string(),
        campus: input.campus.trim().to_string(),
        role: input.role.trim().to_string(),
        start: input.start,
        end: input.end,
        status: input.status,
        approver: None,
        decided_at: None,
    });

    Ok((next, pending_overlap.then_some(PENDING_OVERLAP_WARNING)))
}

/// Transition a record to Approved, gated by the conflict engine. The
/// record itself is excluded from the evaluation so editing an
/// already-approved record never counts against its own limit.
pub fn approve(state: &PlannerState, id: Uuid, approver: &str) -> Result<PlannerState, AppError> {
    let record = state.leave(id).ok_or(AppError::NotFound(id))?;

    let candidate = LeaveInput::from(record);
    if let Outcome::Rejected(rejection) =
        evaluate_candidate(&candidate, &state.leaves, &state.campus_limits, Some(id))
    {
        return Err(rejection.into());
    }

    Ok(with_record(state, id, |record| {
        record.status = LeaveStatus::Approved;
        record.approver = Some(approver.to_string());
        record.decided_at = Some(Utc::now());
    }))
}

/// Transition a record to Declined. Unconditional.
pub fn decline(state: &PlannerState, id: Uuid, approver: &str) -> Result<PlannerState, AppError> {
    state.leave(id).ok_or(AppError::NotFound(id))?;

    Ok(with_record(state, id, |record| {
        record.status = LeaveStatus::Declined;
        record.approver = Some(approver.to_string());
        record.decided_at = Some(Utc::now());
    }))
}

/// Reset a record to Pending, clearing the decision stamp. Unconditional.
pub fn reset_pending(state: &PlannerState, id: Uuid) -> Result<PlannerState, AppError> {
    state.leave(id).ok_or(AppError::NotFound(id))?;

    Ok(with_record(state, id, |record| {
        record.status = LeaveStatus::Pending;
        record.approver = None;
        record.decided_at = None;
    }))
}

/// Apply field edits. The edited record must keep `start <= end`.
pub fn update_leave(
    state: &PlannerState,
    id: Uuid,
    patch: LeaveUpdate,
) -> Result<PlannerState, AppError> {
    let record = state.leave(id).ok_or(AppError::NotFound(id))?;

    let start = patch.start.unwrap_or(record.start);
    let end = patch.end.unwrap_or(record.end);
    if start > end {
        return Err(AppError::InvalidRange);
    }
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AppError::MissingField("name"));
        }
    }

    Ok(with_record(state, id, |record| {
        if let Some(name) = patch.name {
            record.name = name.trim().to_string();
        }
        if let Some(campus) = patch.campus {
            record.campus = campus;
        }
        if let Some(role) = patch.role {
            record.role = role;
        }
        record.start = start;
        record.end = end;
    }))
}

pub fn delete_leave(state: &PlannerState, id: Uuid) -> Result<PlannerState, AppError> {
    state.leave(id).ok_or(AppError::NotFound(id))?;

    let mut next = state.clone();
    next.leaves.retain(|l| l.id != id);
    Ok(next)
}

/// Run a column-mapped import and append the surviving rows. Returns the
/// new state and the number of records imported.
pub fn import_table(
    state: &PlannerState,
    table: &SheetTable,
    mapping: &Mapping,
    default_campus: &str,
) -> Result<(PlannerState, usize), AppError> {
    let imported = confirm_import(table, mapping, default_campus)?;
    let count = imported.len();

    let mut next = state.clone();
    next.leaves.extend(imported);
    Ok((next, count))
}

pub fn add_campus(state: &PlannerState, name: &str) -> Result<PlannerState, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::MissingField("campus"));
    }
    if state.campuses.iter().any(|c| c == name) {
        return Err(AppError::DuplicateCampus(name.to_string()));
    }

    let mut next = state.clone();
    next.campuses.push(name.to_string());
    next.campus_limits.insert(name.to_string(), 1);
    Ok(next)
}

/// Set a campus concurrency cap, clamped to the allowed range. The campus
/// does not have to exist or hold any records yet.
pub fn set_limit(state: &PlannerState, campus: &str, limit: u32) -> PlannerState {
    let mut next = state.clone();
    next.campus_limits
        .insert(campus.to_string(), limit.clamp(MIN_LIMIT, MAX_LIMIT));
    next
}

fn with_record(state: &PlannerState, id: Uuid, apply: impl FnOnce(&mut LeaveRecord)) -> PlannerState {
    let mut next = state.clone();
    if let Some(record) = next.leaves.iter_mut().find(|l| l.id == id) {
        apply(record);
    }
    next
}
