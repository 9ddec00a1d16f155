use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw spreadsheet cell as handed over by the sheet-reading collaborator.
/// Never assumed to already match the target field's type; every consumer
/// goes through the normalization functions in `services::importer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Date(NaiveDate),
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text content of the cell, trimmed. Numbers and dates render in
    /// their canonical form so text-typed fields can still consume them.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Date(d) => d.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Header row plus data rows, as extracted from a user-selected file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}
