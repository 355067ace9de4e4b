//! iCalendar export of the phase plan.
//!
//! Produces one all-day VEVENT per populated day bucket. All-day events
//! use an exclusive DTEND one calendar day after DTSTART, and every line
//! ends with CRLF per RFC 5545. Text fields are escaped so user-entered
//! commas, semicolons and newlines cannot corrupt the document.

use chrono::Duration;

use crate::board::DayBucket;

/// Product identifier written to the VCALENDAR header.
pub const PRODID: &str = "-//CycleSync//Phase Planner//EN";

/// Fixed summary line for every exported day.
pub const EVENT_SUMMARY: &str = "CycleSync Phase Plan";

/// Serialize the populated buckets into an iCalendar document.
///
/// Empty buckets are skipped; if no bucket holds any item the export is a
/// no-op and `None` is returned (not an error).
pub fn export_ics(buckets: &[DayBucket]) -> Option<String> {
    let populated: Vec<&DayBucket> = buckets.iter().filter(|b| !b.items.is_empty()).collect();
    if populated.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str(&format!("PRODID:{PRODID}\r\n"));
    out.push_str("CALSCALE:GREGORIAN\r\n");

    for bucket in populated {
        let start = bucket.date.format("%Y%m%d");
        let end = (bucket.date + Duration::days(1)).format("%Y%m%d");
        let description = bucket
            .items
            .iter()
            .map(|i| format!("[{}] {}", i.category.label(), escape_text(&i.text)))
            .collect::<Vec<_>>()
            .join("\\n");

        out.push_str("BEGIN:VEVENT\r\n");
        out.push_str(&format!("DTSTART;VALUE=DATE:{start}\r\n"));
        out.push_str(&format!("DTEND;VALUE=DATE:{end}\r\n"));
        out.push_str(&format!("SUMMARY:{}\r\n", escape_text(EVENT_SUMMARY)));
        out.push_str(&format!("DESCRIPTION:{description}\r\n"));
        out.push_str("STATUS:CONFIRMED\r\n");
        out.push_str("END:VEVENT\r\n");
    }

    out.push_str("END:VCALENDAR\r\n");
    Some(out)
}

/// RFC 5545 TEXT escaping: backslash first, then semicolon, comma, and
/// embedded newlines.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
