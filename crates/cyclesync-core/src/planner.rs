//! Phase window building and round-robin plan distribution.
//!
//! Both functions are pure: the window is derived from cycle stats and an
//! explicit `today`, and distribution is a stable index-modulo assignment
//! with no randomness.

use chrono::{Duration, NaiveDate};

use crate::board::{DayBucket, PlanBoard};
use crate::cycle::CycleStats;
use crate::selection::PlanItem;

/// Upper bound on the number of window days, keeps the calendar small
/// regardless of phase length.
pub const MAX_WINDOW_DAYS: u32 = 14;

/// Consecutive dates from `today` through the end of the current phase.
///
/// Length is `min(days_until_next_phase + 1, MAX_WINDOW_DAYS)`; the +1
/// includes today, so the window is never empty.
pub fn phase_window(stats: &CycleStats, today: NaiveDate) -> Vec<NaiveDate> {
    let days = (stats.days_until_next_phase + 1).min(MAX_WINDOW_DAYS);
    (0..days)
        .map(|i| today + Duration::days(i64::from(i)))
        .collect()
}

/// Distribute selected items over the window dates, round-robin.
///
/// One bucket per date in order; item `i` lands in bucket `i mod count`.
/// Every item ends up in exactly one bucket and relative order is
/// preserved within each bucket. An empty date list yields an empty board.
pub fn distribute(items: Vec<PlanItem>, dates: &[NaiveDate]) -> PlanBoard {
    let mut buckets: Vec<DayBucket> = dates.iter().copied().map(DayBucket::new).collect();
    if buckets.is_empty() {
        return PlanBoard::default();
    }

    let count = buckets.len();
    for (index, item) in items.into_iter().enumerate() {
        buckets[index % count].items.push(item);
    }
    PlanBoard::from_buckets(buckets)
}
