//! Import report for the spreadsheet-to-schedule transform.

use serde::{Deserialize, Serialize};

/// Why a workbook row or sheet was not imported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnrecognizedSheetName,
    InvalidDate,
    MissingTime,
    OutOfOrder,
}

/// One skipped sheet or row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedRow {
    pub sheet: String,
    /// Row index within the sheet; none when the whole sheet was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub reason: SkipReason,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

/// Summary returned alongside the imported document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub sheets_read: usize,
    pub entries_written: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    pub fn skip(&mut self, sheet: &str, row: Option<usize>, reason: SkipReason, detail: impl Into<String>) {
        self.skipped.push(SkippedRow {
            sheet: sheet.to_string(),
            row,
            reason,
            detail: detail.into(),
        });
    }
}
