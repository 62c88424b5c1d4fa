use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// One payment period for a team. Dates are whole calendar days; `end`
/// is never before `start` (the loader clamps malformed records).
/// Identity is positional within the team's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInterval {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
    /// Carried through the data endpoint, ignored by layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl PaymentInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            link: None,
        }
    }
}

/// The full chart snapshot: team name -> ordered payment periods.
/// Interval order is source order; team iteration order is name-sorted
/// so column order is deterministic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartData {
    pub teams: BTreeMap<String, Vec<PaymentInterval>>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.teams.values().all(|payments| payments.is_empty())
    }
}
