//! Workbook parser
//!
//! Reads a spreadsheet exported as JSON: one key per sheet, each holding the
//! sheet's rows as arrays of raw cell values (no header interpretation).

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// A raw spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Numeric value; numeric text is accepted as well
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text rendering; empty cells have none
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) if n.fract() == 0.0 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Text(s) if s.trim().is_empty() => None,
            Cell::Text(s) => Some(s.trim().to_string()),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<Value> for Cell {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or_default(),
            Value::String(s) => Cell::Text(s),
            Value::Bool(b) => Cell::Bool(b),
            _ => Cell::Empty,
        }
    }
}

/// One worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Cell at (row, column); missing trailing cells read as empty
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows.get(row).and_then(|r| r.get(column)).unwrap_or(EMPTY)
    }
}

/// Sheets in workbook order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let raw: IndexMap<String, Vec<Vec<Value>>> = serde_json::from_str(json)?;
        let sheets = raw
            .into_iter()
            .map(|(name, rows)| Sheet {
                name,
                rows: rows
                    .into_iter()
                    .map(|r| r.into_iter().map(Cell::from).collect())
                    .collect(),
            })
            .collect();
        Ok(Self { sheets })
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let workbook = Self::from_json_str(&json)
            .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Read {} sheets from {}", workbook.sheets.len(), path.display());
        Ok(workbook)
    }
}

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Parse a sheet name such as `"January 2026"` into `(year, month)`
pub fn parse_sheet_name(name: &str) -> Option<(i32, u32)> {
    let mut parts = name.split_whitespace();
    let month_name = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    Some((year, month))
}
