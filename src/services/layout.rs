//! Timeline layout engine.
//!
//! Maps calendar dates to pixel coordinates on an inverted vertical axis:
//! the most recent day sits at the bottom of the scrollable region and a
//! block is anchored at its end date, extending downward to its start
//! date's row. The engine is pure geometry; rendering is a separate
//! concern.

use chrono::NaiveDate;

use crate::filters;
use crate::models::{ChartData, PaymentInterval};
use crate::services::date_range::DateWindow;

/// Pixel constants for the chart. Threaded explicitly so tests can vary
/// them; the defaults match the production chart.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Height of one calendar day row.
    pub pixels_per_day: i64,
    /// Space reserved at the top of the axis and every column for headers.
    pub header_offset_px: i64,
    /// Vertical gap subtracted from each block for visual separation.
    pub block_gap_px: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_day: 40,
            header_offset_px: 60,
            block_gap_px: 4,
        }
    }
}

/// Geometry for one payment interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBlock {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Offset of the block's top edge from the top of the column.
    pub top_px: i64,
    pub height_px: i64,
    pub duration_days: i64,
    pub is_most_recent: bool,
}

/// One label + gridline pair on the shared axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTick {
    pub date: NaiveDate,
    pub top_px: i64,
    pub label: String,
}

/// The vertical lane of blocks for one team, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamColumn {
    pub name: String,
    pub blocks: Vec<LayoutBlock>,
}

/// Complete chart geometry for one render. Recomputed from scratch every
/// time; never patched incrementally.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub window: DateWindow,
    pub total_days: i64,
    /// Scrollable height shared by the axis and every column.
    pub total_height_px: i64,
    pub axis: Vec<AxisTick>,
    pub columns: Vec<TeamColumn>,
}

impl ChartLayout {
    pub fn compute(data: &ChartData, window: DateWindow, config: &LayoutConfig) -> Self {
        let total_days = window.total_days();
        let total_height_px = total_days * config.pixels_per_day + config.header_offset_px;

        let axis = window
            .days()
            .map(|date| AxisTick {
                date,
                top_px: offset_from_top(&window, config, total_days, date),
                label: filters::format_day_label(date),
            })
            .collect();

        let columns = data
            .teams
            .iter()
            .map(|(name, payments)| TeamColumn {
                name: name.clone(),
                blocks: layout_blocks(name, payments, &window, config, total_days),
            })
            .collect();

        Self {
            window,
            total_days,
            total_height_px,
            axis,
            columns,
        }
    }
}

/// Pixel offset of a date's row from the top of the chart. Inverted:
/// the window's end date lands directly below the header, the start date
/// at the bottom.
fn offset_from_top(
    window: &DateWindow,
    config: &LayoutConfig,
    total_days: i64,
    date: NaiveDate,
) -> i64 {
    (total_days - 1 - window.day_index(date)) * config.pixels_per_day + config.header_offset_px
}

fn layout_blocks(
    team: &str,
    payments: &[PaymentInterval],
    window: &DateWindow,
    config: &LayoutConfig,
    total_days: i64,
) -> Vec<LayoutBlock> {
    let most_recent = most_recent_index(payments);

    payments
        .iter()
        .enumerate()
        .map(|(index, payment)| {
            // The loader clamps end < start; guard here as well so a bad
            // interval can never produce a negative-height block.
            let end = if payment.end < payment.start {
                tracing::warn!(
                    team,
                    start = %payment.start,
                    end = %payment.end,
                    "interval ends before it starts, clamping to one day"
                );
                payment.start
            } else {
                payment.end
            };

            let duration_days = window.day_index(end) - window.day_index(payment.start) + 1;

            LayoutBlock {
                start: payment.start,
                end,
                top_px: offset_from_top(window, config, total_days, end),
                height_px: duration_days * config.pixels_per_day - config.block_gap_px,
                duration_days,
                is_most_recent: most_recent == Some(index),
            }
        })
        .collect()
}

/// Index of the interval with the latest end date. Strictly-greater
/// comparison, so the earliest-indexed of equal end dates wins.
fn most_recent_index(payments: &[PaymentInterval]) -> Option<usize> {
    let mut best: Option<(usize, NaiveDate)> = None;
    for (index, payment) in payments.iter().enumerate() {
        if best.map_or(true, |(_, end)| payment.end > end) {
            best = Some((index, payment.end));
        }
    }
    best.map(|(index, _)| index)
}
