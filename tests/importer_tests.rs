use leave_planner::error::AppError;
use leave_planner::models::{Cell, LeaveStatus, SheetTable};
use leave_planner::services::importer::{confirm_import, normalize_row, Mapping};
use pretty_assertions::assert_eq;

mod common;

use common::ymd;

fn table(rows: Vec<Vec<Cell>>) -> SheetTable {
    SheetTable {
        headers: ["Staff", "Campus", "From", "To", "Status"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows,
    }
}

fn mapping() -> Mapping {
    Mapping {
        name: "Staff".to_string(),
        role: String::new(),
        campus: "Campus".to_string(),
        start: "From".to_string(),
        end: "To".to_string(),
        status: "Status".to_string(),
    }
}

fn text_row(cells: [&str; 5]) -> Vec<Cell> {
    cells.iter().map(|c| Cell::from(*c)).collect()
}

#[test]
fn test_import_scenario_from_mapped_text_row() {
    common::setup_test_env();
    let table = table(vec![text_row([
        "Jo",
        "Perth",
        "2025-01-05",
        "2025-01-07",
        "Approved",
    ])]);

    let imported = confirm_import(&table, &mapping(), "Melbourne").unwrap();

    assert_eq!(imported.len(), 1);
    let record = &imported[0];
    assert_eq!(record.name, "Jo");
    assert_eq!(record.campus, "Perth");
    assert_eq!(record.start, ymd("2025-01-05"));
    assert_eq!(record.end, ymd("2025-01-07"));
    assert_eq!(record.status, LeaveStatus::Approved);
    assert_eq!(record.approver, None);
}

#[test]
fn test_blank_name_row_is_dropped_silently() {
    let table = table(vec![
        text_row(["", "Perth", "2025-01-05", "2025-01-07", ""]),
        text_row(["Jo", "Perth", "2025-01-05", "2025-01-07", ""]),
    ]);

    let imported = confirm_import(&table, &mapping(), "Melbourne").unwrap();

    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].name, "Jo");
}

#[test]
fn test_unparseable_date_row_is_dropped_silently() {
    let table = table(vec![
        text_row(["Jo", "Perth", "sometime", "2025-01-07", ""]),
        text_row(["Kim", "Perth", "2025-01-05", "never", ""]),
        text_row(["Lee", "Perth", "2025-01-05", "2025-01-07", ""]),
    ]);

    let imported = confirm_import(&table, &mapping(), "Melbourne").unwrap();

    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].name, "Lee");
}

#[test]
fn test_status_text_normalization_on_import() {
    let table = table(vec![
        text_row(["Jo", "Perth", "2025-01-05", "2025-01-07", "Rejected"]),
        text_row(["Kim", "Perth", "2025-02-05", "2025-02-07", ""]),
    ]);

    let imported = confirm_import(&table, &mapping(), "Melbourne").unwrap();

    assert_eq!(imported[0].status, LeaveStatus::Declined);
    assert_eq!(imported[1].status, LeaveStatus::Pending);
}

#[test]
fn test_blank_campus_falls_back_to_default() {
    let table = table(vec![text_row([
        "Jo",
        "",
        "2025-01-05",
        "2025-01-07",
        "",
    ])]);

    let imported = confirm_import(&table, &mapping(), "Melbourne").unwrap();

    assert_eq!(imported[0].campus, "Melbourne");
}

#[test]
fn test_unmapped_required_column_fails_the_whole_import() {
    let table = table(vec![text_row([
        "Jo",
        "Perth",
        "2025-01-05",
        "2025-01-07",
        "",
    ])]);
    let mut mapping = mapping();
    mapping.campus = String::new();

    let err = confirm_import(&table, &mapping, "Melbourne").unwrap_err();

    let AppError::UnmappedColumns(missing) = err else {
        panic!("expected UnmappedColumns, got {err:?}");
    };
    assert_eq!(missing, vec!["campus".to_string()]);
}

#[test]
fn test_mapping_naming_a_nonexistent_header_counts_as_unmapped() {
    let table = table(vec![]);
    let mut mapping = mapping();
    mapping.start = "Leave Begins".to_string();
    mapping.end = "Leave Ends".to_string();

    let err = confirm_import(&table, &mapping, "Melbourne").unwrap_err();

    let AppError::UnmappedColumns(missing) = err else {
        panic!("expected UnmappedColumns, got {err:?}");
    };
    assert_eq!(missing, vec!["start".to_string(), "end".to_string()]);
}

#[test]
fn test_zero_surviving_rows_is_reported_as_no_valid_rows() {
    let table = table(vec![
        text_row(["", "Perth", "2025-01-05", "2025-01-07", ""]),
        text_row(["Jo", "Perth", "junk", "2025-01-07", ""]),
    ]);

    let err = confirm_import(&table, &mapping(), "Melbourne").unwrap_err();

    assert!(matches!(err, AppError::NoValidRows));
}

#[test]
fn test_rows_with_serial_and_structured_date_cells() {
    // Mixed cell shapes in the date columns: serial number and real date
    let row = vec![
        Cell::from("Jo"),
        Cell::from("Perth"),
        Cell::Number(45662.0), // 2025-01-05
        Cell::Date(ymd("2025-01-07")),
        Cell::from("approved"),
    ];
    let table = table(vec![row]);

    let imported = confirm_import(&table, &mapping(), "Melbourne").unwrap();

    assert_eq!(imported[0].start, ymd("2025-01-05"));
    assert_eq!(imported[0].end, ymd("2025-01-07"));
    assert_eq!(imported[0].status, LeaveStatus::Approved);
}

#[test]
fn test_normalize_row_skips_reversed_ranges() {
    let headers: Vec<String> = ["Staff", "Campus", "From", "To", "Status"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let row = text_row(["Jo", "Perth", "2025-01-07", "2025-01-05", ""]);

    assert!(normalize_row(&row, &headers, &mapping(), "Melbourne").is_none());
}

#[test]
fn test_short_rows_skip_instead_of_panicking() {
    let headers: Vec<String> = ["Staff", "Campus", "From", "To", "Status"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let row = vec![Cell::from("Jo"), Cell::from("Perth")];

    assert!(normalize_row(&row, &headers, &mapping(), "Melbourne").is_none());
}
