//! Quick-add deep links for a generic web calendar.
//!
//! Secondary export path next to the full ICS export: a URL-encoded link
//! to the calendar's event-creation template, used for single-day quick
//! adds. The link is handed to the UI layer, which decides how to open it.

use chrono::{Duration, NaiveDate};

use crate::board::PlanBoard;

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Build an event-creation link for an all-day event on `date`.
///
/// Uses the calendar's `TEMPLATE` action with an exclusive end date one
/// day after the start, matching the all-day convention of the ICS export.
pub fn event_link(title: &str, details: &str, date: NaiveDate) -> String {
    let start = date.format("%Y%m%d");
    let end = (date + Duration::days(1)).format("%Y%m%d");
    format!(
        "{RENDER_URL}?action=TEMPLATE&text={}&details={}&dates={start}/{end}",
        urlencoding::encode(title),
        urlencoding::encode(details),
    )
}

/// Quick-add link for the first populated day of the board, or `None`
/// when no day has items.
pub fn quick_add_link(board: &PlanBoard) -> Option<String> {
    let bucket = board.buckets().iter().find(|b| !b.items.is_empty())?;
    let details = bucket
        .items
        .iter()
        .map(|i| format!("\u{2022} {}", i.text))
        .collect::<Vec<_>>()
        .join("\n");
    Some(event_link(crate::ics::EVENT_SUMMARY, &details, bucket.date))
}
