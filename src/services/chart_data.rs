//! Chart data snapshot loading.
//!
//! Reads the JSON data file and validates it into a typed [`ChartData`].
//! Date strings are treated as literal calendar dates; no timezone
//! arithmetic is applied, so an interval crossing a month boundary can
//! never shift by a day.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::{ChartData, PaymentInterval};

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    teams: BTreeMap<String, Vec<RawPayment>>,
}

#[derive(Debug, Deserialize)]
struct RawPayment {
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
    link: Option<String>,
}

/// Read and validate the snapshot at `path`. IO and JSON syntax errors
/// are fatal for the render attempt; individually bad records are not.
pub fn load_chart_data(path: &Path) -> AppResult<ChartData> {
    let content = fs::read_to_string(path)?;
    parse_chart_data(&content)
}

/// Parse a snapshot from JSON text.
///
/// Records with unparseable dates are dropped with a warning. Records
/// whose end date precedes their start date are clamped to a one-day
/// interval at the start date.
pub fn parse_chart_data(content: &str) -> AppResult<ChartData> {
    let raw: RawSnapshot = serde_json::from_str(content)?;

    let mut teams = BTreeMap::new();
    for (name, records) in raw.teams {
        let mut payments = Vec::with_capacity(records.len());

        for (row, record) in records.into_iter().enumerate() {
            let (Some(start), Some(end)) = (
                parse_date(&name, row, "startDate", &record.start_date),
                parse_date(&name, row, "endDate", &record.end_date),
            ) else {
                continue;
            };

            let end = if end < start {
                warn!(
                    team = %name,
                    row,
                    start = %start,
                    end = %end,
                    "payment ends before it starts, clamping to one day"
                );
                start
            } else {
                end
            };

            payments.push(PaymentInterval {
                start,
                end,
                link: record.link,
            });
        }

        teams.insert(name, payments);
    }

    let data = ChartData { teams };
    debug!(
        team_count = data.teams.len(),
        interval_count = data.teams.values().map(Vec::len).sum::<usize>(),
        "chart data loaded"
    );
    Ok(data)
}

fn parse_date(team: &str, row: usize, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(team, row, field, value, "dropping record with bad date");
            None
        }
    }
}
