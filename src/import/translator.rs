//! Workbook to schedule translator
//!
//! Translates monthly timetable sheets into the schedule document.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::parser::{parse_sheet_name, Sheet, Workbook};
use crate::models::{
    import_report::{ImportReport, SkipReason},
    schedule::{DailySchedule, PrayerSlot, ScheduleDocument, ScheduleEntry, DATE_KEY_FORMAT},
    time::TimeOfDay,
};

/// Rows 0 and 1 hold the title and the column headers
pub const FIRST_DATA_ROW: usize = 2;

/// Column layout of a monthly sheet
pub mod columns {
    pub const DAY_OF_MONTH: usize = 1;
    pub const HIJRI: usize = 2;
    pub const FAJR_ADHAN: usize = 3;
    pub const FAJR_JAMAT: usize = 4;
    pub const SHURUQ: usize = 5;
    pub const DHUHR_ADHAN: usize = 6;
    pub const DHUHR_JAMAT: usize = 7;
    pub const ASR_ADHAN: usize = 8;
    pub const ASR_JAMAT: usize = 9;
    /// Maghrib has a single column used for both adhan and jamat
    pub const MAGHRIB: usize = 10;
    pub const ISHA_ADHAN: usize = 11;
    pub const ISHA_JAMAT: usize = 12;
}

/// Convert a spreadsheet fractional-day time to a time of day.
///
/// Only the fractional part is used, rounded to whole seconds; seconds are
/// then dropped. The sheets store afternoon times without a reliable AM/PM
/// marker (3 PM may appear as 0.125, i.e. 03:00), so with `force_pm` any
/// hour below 12 is moved to the afternoon. A 12:xx value is left as is.
/// Zero, non-finite and full-day (24:00) values give no time.
pub fn excel_fraction_to_time(value: f64, force_pm: bool) -> Option<TimeOfDay> {
    if !value.is_finite() || value == 0.0 {
        return None;
    }

    let fraction = value.rem_euclid(1.0);
    let total_seconds = (fraction * 86_400.0).round() as u32;
    let mut hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    if force_pm && hours < 12 {
        hours += 12;
    }

    TimeOfDay::new(hours as u8, minutes as u8).ok()
}

/// Schedule translator
#[derive(Debug, Default)]
pub struct ScheduleTranslator;

impl ScheduleTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate every recognised sheet; the document comes out in date order
    pub fn translate(&self, workbook: &Workbook) -> (ScheduleDocument, ImportReport) {
        let mut report = ImportReport::default();
        let mut days = BTreeMap::new();

        for sheet in &workbook.sheets {
            let Some((year, month)) = parse_sheet_name(&sheet.name) else {
                tracing::warn!("Skipping sheet: {}", sheet.name);
                report.skip(&sheet.name, None, SkipReason::UnrecognizedSheetName, "");
                continue;
            };
            report.sheets_read += 1;
            self.translate_sheet(sheet, year, month, &mut days, &mut report);
        }

        let document: ScheduleDocument = days
            .into_iter()
            .map(|(date, entry): (NaiveDate, ScheduleEntry)| (date.format(DATE_KEY_FORMAT).to_string(), entry))
            .collect();
        report.entries_written = document.len();
        (document, report)
    }

    fn translate_sheet(
        &self,
        sheet: &Sheet,
        year: i32,
        month: u32,
        days: &mut BTreeMap<NaiveDate, ScheduleEntry>,
        report: &mut ImportReport,
    ) {
        for row in FIRST_DATA_ROW..sheet.rows.len() {
            // Blank day cell: spacer or footer row
            let Some(day) = sheet
                .cell(row, columns::DAY_OF_MONTH)
                .as_number()
                .filter(|d| *d >= 1.0)
            else {
                continue;
            };

            let date = (day.fract() == 0.0)
                .then(|| NaiveDate::from_ymd_opt(year, month, day as u32))
                .flatten();
            let Some(date) = date else {
                tracing::warn!("{} row {}: invalid day {}", sheet.name, row, day);
                report.skip(&sheet.name, Some(row), SkipReason::InvalidDate, format!("day {}", day));
                continue;
            };

            match self.translate_row(sheet, row) {
                Ok(entry) => {
                    let check = DailySchedule::from_entry(date, entry.clone()).check_ordering();
                    if let Err(e) = check {
                        tracing::warn!("{} row {}: {}", sheet.name, row, e);
                        report.skip(&sheet.name, Some(row), SkipReason::OutOfOrder, e.to_string());
                        continue;
                    }
                    days.insert(date, entry);
                }
                Err(column) => {
                    tracing::warn!("{} row {}: missing or unreadable {}", sheet.name, row, column);
                    report.skip(&sheet.name, Some(row), SkipReason::MissingTime, column);
                }
            }
        }
    }

    /// Build one entry; the error names the first unreadable column
    fn translate_row(&self, sheet: &Sheet, row: usize) -> Result<ScheduleEntry, &'static str> {
        let time = |column: usize, force_pm: bool, name: &'static str| {
            sheet
                .cell(row, column)
                .as_number()
                .and_then(|v| excel_fraction_to_time(v, force_pm))
                .ok_or(name)
        };

        let maghrib = time(columns::MAGHRIB, true, "maghrib")?;

        Ok(ScheduleEntry {
            fajr: PrayerSlot {
                adhan: time(columns::FAJR_ADHAN, false, "fajr adhan")?,
                jamat: time(columns::FAJR_JAMAT, false, "fajr jamat")?,
            },
            shuruq: time(columns::SHURUQ, false, "shuruq")?,
            dhuhr: PrayerSlot {
                adhan: time(columns::DHUHR_ADHAN, true, "dhuhr adhan")?,
                jamat: time(columns::DHUHR_JAMAT, true, "dhuhr jamat")?,
            },
            asr: PrayerSlot {
                adhan: time(columns::ASR_ADHAN, true, "asr adhan")?,
                jamat: time(columns::ASR_JAMAT, true, "asr jamat")?,
            },
            maghrib: PrayerSlot {
                adhan: maghrib,
                jamat: maghrib,
            },
            isha: PrayerSlot {
                adhan: time(columns::ISHA_ADHAN, true, "isha adhan")?,
                jamat: time(columns::ISHA_JAMAT, true, "isha jamat")?,
            },
            hijri: sheet.cell(row, columns::HIJRI).as_text(),
        })
    }
}
