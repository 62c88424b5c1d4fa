//! Debt reports and debt calculation.
//!
//! Each team's outstanding debt lives in a `{name}_debt.csv` report with
//! two columns, `days_passed` and `debt_amount`. Reports can be read for
//! the debt summary, or recomputed from the payment snapshot: days are
//! counted from the day after the team's last payment through today,
//! Sundays excluded, and charged at the team's daily rate.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::DebtRates;
use crate::error::{AppError, AppResult};
use crate::models::{ChartData, DebtRecord};

const REPORT_SUFFIX: &str = "_debt.csv";

#[derive(Debug, Deserialize)]
struct ReportRow {
    days_passed: i64,
    debt_amount: f64,
}

/// Read every `{name}_debt.csv` in `dir`, sorted by descending amount.
/// Unreadable individual reports are skipped with a warning; a missing
/// directory is an error for the caller to surface.
pub fn load_debt_reports(dir: &Path) -> AppResult<Vec<DebtRecord>> {
    let mut records = Vec::new();

    let entries = fs::read_dir(dir)
        .map_err(|e| AppError::Internal(format!("Failed to read debt reports: {}", e)))?;
    for entry in entries {
        let path = entry
            .map_err(|e| AppError::Internal(format!("Failed to read debt reports: {}", e)))?
            .path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = file_name.strip_suffix(REPORT_SUFFIX) else {
            continue;
        };

        match read_report(&path) {
            Ok(row) => records.push(DebtRecord {
                name: stem.replace('_', " "),
                amount_cents: to_cents(row.debt_amount),
                days: row.days_passed,
            }),
            Err(e) => {
                warn!(path = %path.display(), "skipping unreadable debt report: {}", e);
            }
        }
    }

    records.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents));
    debug!(report_count = records.len(), "debt reports loaded");
    Ok(records)
}

fn read_report(path: &Path) -> AppResult<ReportRow> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| AppError::CsvParse(e.to_string()))?;
    reader
        .deserialize()
        .next()
        .ok_or_else(|| AppError::CsvParse("empty debt report".into()))?
        .map_err(|e| AppError::CsvParse(e.to_string()))
}

/// Compute debts for every team with at least one payment, sorted by
/// descending amount.
pub fn calculate_debts(data: &ChartData, today: NaiveDate, rates: &DebtRates) -> Vec<DebtRecord> {
    let mut records: Vec<DebtRecord> = data
        .teams
        .iter()
        .filter_map(|(name, payments)| {
            let last_payment = payments.iter().map(|p| p.end).max()?;
            let days = chargeable_days(last_payment, today);
            Some(DebtRecord {
                name: name.clone(),
                amount_cents: days * rates.rate_for(name),
                days,
            })
        })
        .collect();

    records.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents));
    records
}

/// Days from the day after `last_payment` through `today`, excluding
/// Sundays. Zero when the last payment is today or later.
pub fn chargeable_days(last_payment: NaiveDate, today: NaiveDate) -> i64 {
    if last_payment >= today {
        return 0;
    }

    last_payment
        .iter_days()
        .skip(1)
        .take_while(|d| *d <= today)
        .filter(|d| d.weekday() != Weekday::Sun)
        .count() as i64
}

/// Write one `{name}_debt.csv` per record into `dir`, creating it if
/// needed. Amounts are written as dollars with two decimal places.
pub fn write_debt_reports(dir: &Path, records: &[DebtRecord]) -> AppResult<()> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::Internal(format!("Failed to write debt report: {}", e)))?;

    for record in records {
        let path = dir.join(format!("{}{}", file_stem_for(&record.name), REPORT_SUFFIX));
        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| AppError::Internal(format!("Failed to write debt report: {}", e)))?;

        writer
            .write_record(["days_passed", "debt_amount"])
            .and_then(|_| {
                writer.write_record([
                    record.days.to_string(),
                    format!("{:.2}", record.amount_dollars()),
                ])
            })
            .map_err(|e| AppError::Internal(format!("Failed to write debt report: {}", e)))?;
        writer
            .flush()
            .map_err(|e| AppError::Internal(format!("Failed to write debt report: {}", e)))?;
    }

    debug!(report_count = records.len(), dir = %dir.display(), "debt reports written");
    Ok(())
}

fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Turn a team name into a safe report file stem: characters illegal on
/// common filesystems and spaces become underscores, trailing dots are
/// trimmed.
fn file_stem_for(name: &str) -> String {
    let mut stem: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | ' ' => '_',
            other => other,
        })
        .collect();

    while stem.ends_with('.') {
        stem.pop();
    }

    if stem.is_empty() {
        "unnamed".into()
    } else {
        stem
    }
}
