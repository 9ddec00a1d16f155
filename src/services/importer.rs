use chrono::{DateTime, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::macros::string_enum;
use crate::models::{Cell, LeaveRecord, LeaveStatus, SheetTable};

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ImportField {
        Name => "name",
        Role => "role",
        Campus => "campus",
        Start => "start",
        End => "end",
        Status => "status",
    }
}

/// Columns required before an import may run at all.
const REQUIRED_FIELDS: [ImportField; 4] = [
    ImportField::Name,
    ImportField::Campus,
    ImportField::Start,
    ImportField::End,
];

/// Header name chosen for each target field. An empty string means the
/// field is unmapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub name: String,
    pub role: String,
    pub campus: String,
    pub start: String,
    pub end: String,
    pub status: String,
}

impl Mapping {
    /// Best-effort guess from the header row: for each field, the first
    /// header containing one of the ranked candidate substrings wins
    /// (case-insensitive). An empty guess is a valid result.
    pub fn infer(headers: &[String]) -> Mapping {
        let guess = |needles: &[&str]| -> String {
            for needle in needles {
                if let Some(header) = headers
                    .iter()
                    .find(|h| h.to_lowercase().contains(needle))
                {
                    return header.clone();
                }
            }
            String::new()
        };

        Mapping {
            name: guess(&["name", "staff", "employee"]),
            role: guess(&["role", "position"]),
            campus: guess(&["campus", "location"]),
            start: guess(&["start", "from", "leave start", "begin"]),
            end: guess(&["end", "to", "leave end", "finish"]),
            status: guess(&["status"]),
        }
    }

    pub fn column(&self, field: ImportField) -> &str {
        match field {
            ImportField::Name => &self.name,
            ImportField::Role => &self.role,
            ImportField::Campus => &self.campus,
            ImportField::Start => &self.start,
            ImportField::End => &self.end,
            ImportField::Status => &self.status,
        }
    }
}

/// Case-insensitive prefix rule: "appr..." approves, "decl..." / "rej..."
/// declines, anything else (blank included) stays pending.
pub fn normalize_status(text: &str) -> LeaveStatus {
    let t = text.trim().to_lowercase();
    if t.starts_with("appr") {
        LeaveStatus::Approved
    } else if t.starts_with("decl") || t.starts_with("rej") {
        LeaveStatus::Declined
    } else {
        LeaveStatus::Pending
    }
}

// Spreadsheet serials count days from this epoch (which absorbs the
// historical 1900 leap-year quirk for serials >= 61).
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Text date formats tried in order. ISO first; slashed forms try
/// month-first before day-first, matching the source application's parser.
const TEXT_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%b %d %Y",
];

/// Coerce a raw cell to a calendar date. `None` is the failure marker
/// that makes `normalize_row` skip the row.
pub fn normalize_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(date) => Some(*date),
        Cell::Number(serial) => {
            if !serial.is_finite() || *serial < 1.0 {
                return None;
            }
            let (y, m, d) = SERIAL_EPOCH;
            let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
            // Fractional part is time-of-day; days are all we keep.
            epoch.checked_add_signed(Duration::days(serial.floor() as i64))
        }
        Cell::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
                return Some(stamp.date_naive());
            }
            TEXT_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        }
    }
}

/// Normalize one data row into a leave record, or skip it.
///
/// A row is skipped (not an error) when the name cell is blank or missing,
/// when either date fails to normalize, or when the dates come out
/// reversed. Campus falls back to `default_campus` when blank.
pub fn normalize_row(
    row: &[Cell],
    headers: &[String],
    mapping: &Mapping,
    default_campus: &str,
) -> Option<LeaveRecord> {
    let cell = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| row.get(i))
    };

    let name = cell(&mapping.name).filter(|c| !c.is_blank())?.as_text();

    let campus = match cell(&mapping.campus) {
        Some(c) if !c.is_blank() => c.as_text(),
        _ => default_campus.to_string(),
    };

    let role = cell(&mapping.role)
        .map(|c| c.as_text())
        .unwrap_or_default();

    let status = cell(&mapping.status)
        .map(|c| normalize_status(&c.as_text()))
        .unwrap_or(LeaveStatus::Pending);

    let start = normalize_date(cell(&mapping.start)?)?;
    let end = normalize_date(cell(&mapping.end)?)?;
    if start > end {
        return None;
    }

    Some(LeaveRecord {
        id: Uuid::new_v4(),
        name,
        campus,
        role,
        start,
        end,
        status,
        approver: None,
        decided_at: None,
    })
}

/// Run a validated import over the whole table.
///
/// Fails up front, with every missing field named, when any of the
/// required columns is unmapped or names a header that does not exist —
/// no partial import happens in that case. Unusable rows are dropped
/// silently; zero survivors is an error of its own.
pub fn confirm_import(
    table: &SheetTable,
    mapping: &Mapping,
    default_campus: &str,
) -> Result<Vec<LeaveRecord>, AppError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| {
            let column = mapping.column(**field);
            !table.headers.iter().any(|h| h == column)
        })
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::UnmappedColumns(missing));
    }

    let imported: Vec<LeaveRecord> = table
        .rows
        .iter()
        .filter_map(|row| normalize_row(row, &table.headers, mapping, default_campus))
        .collect();

    if imported.is_empty() {
        return Err(AppError::NoValidRows);
    }

    Ok(imported)
}
