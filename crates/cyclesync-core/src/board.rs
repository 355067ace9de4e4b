//! The phase-plan board: per-date buckets of plan items and the editing
//! operations over them.
//!
//! All mutations are synchronous and last-write-wins; there is no
//! concurrent writer. Buckets are created once per date when a plan is
//! built and are never deleted, only emptied. An item belongs to exactly
//! one bucket at a time; moving transfers ownership, never duplicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cycle::CyclePhase;
use crate::selection::{Category, PlanItem};

/// Items assigned to one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBucket {
    /// ISO date string, unique bucket key.
    pub id: String,
    pub date: NaiveDate,
    pub items: Vec<PlanItem>,
}

impl DayBucket {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: date.format("%Y-%m-%d").to_string(),
            date,
            items: Vec::new(),
        }
    }
}

/// Editable collection of day buckets for the active planning session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanBoard {
    buckets: Vec<DayBucket>,
}

impl PlanBoard {
    pub fn from_buckets(buckets: Vec<DayBucket>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn bucket(&self, bucket_id: &str) -> Option<&DayBucket> {
        self.buckets.iter().find(|b| b.id == bucket_id)
    }

    /// Total item count across all buckets.
    pub fn item_count(&self) -> usize {
        self.buckets.iter().map(|b| b.items.len()).sum()
    }

    /// Append a user-entered item to the bucket for `date`.
    ///
    /// Matches by calendar-day equality, not bucket identity. Empty or
    /// whitespace-only text is a silent no-op. Returns the id of the new
    /// item when one was added.
    pub fn add_custom(
        &mut self,
        date: NaiveDate,
        text: &str,
        category: Category,
        phase: CyclePhase,
    ) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let bucket = self.buckets.iter_mut().find(|b| b.date == date)?;
        let item = PlanItem::custom(text, category, phase);
        let id = item.id.clone();
        bucket.items.push(item);
        Some(id)
    }

    /// Remove an item from the named bucket. No-op if either is absent.
    pub fn remove_item(&mut self, bucket_id: &str, item_id: &str) {
        if let Some(bucket) = self.buckets.iter_mut().find(|b| b.id == bucket_id) {
            bucket.items.retain(|i| i.id != item_id);
        }
    }

    /// Replace an item's text and category in place, preserving its id.
    /// Returns true when the item was found and updated.
    pub fn edit_item(
        &mut self,
        bucket_id: &str,
        item_id: &str,
        new_text: &str,
        new_category: Category,
    ) -> bool {
        let Some(bucket) = self.buckets.iter_mut().find(|b| b.id == bucket_id) else {
            return false;
        };
        let Some(item) = bucket.items.iter_mut().find(|i| i.id == item_id) else {
            return false;
        };
        item.text = new_text.to_string();
        item.category = new_category;
        true
    }

    /// Atomically relocate an item between buckets: removed from source,
    /// appended to the end of target. Moving within the same bucket is a
    /// no-op and never duplicates the item.
    pub fn move_item(&mut self, item_id: &str, source_bucket_id: &str, target_bucket_id: &str) {
        if source_bucket_id == target_bucket_id {
            return;
        }
        if !self.buckets.iter().any(|b| b.id == target_bucket_id) {
            return;
        }

        let item = {
            let Some(source) = self.buckets.iter_mut().find(|b| b.id == source_bucket_id) else {
                return;
            };
            let Some(pos) = source.items.iter().position(|i| i.id == item_id) else {
                return;
            };
            source.items.remove(pos)
        };

        if let Some(target) = self.buckets.iter_mut().find(|b| b.id == target_bucket_id) {
            target.items.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn board_with_items() -> PlanBoard {
        let mut a = DayBucket::new(date(1));
        a.items.push(PlanItem::suggested(
            "Plan outline",
            Category::Work,
            CyclePhase::Follicular,
        ));
        a.items.push(PlanItem::suggested(
            "Light jog",
            Category::Movement,
            CyclePhase::Follicular,
        ));
        let b = DayBucket::new(date(2));
        PlanBoard::from_buckets(vec![a, b])
    }

    #[test]
    fn add_custom_rejects_whitespace() {
        let mut board = board_with_items();
        assert!(board.add_custom(date(1), "   ", Category::Selfcare, CyclePhase::Follicular).is_none());
        assert_eq!(board.bucket("2024-06-01").unwrap().items.len(), 2);
    }

    #[test]
    fn add_custom_matches_by_calendar_day() {
        let mut board = board_with_items();
        let id = board.add_custom(date(2), "Evening tea", Category::Selfcare, CyclePhase::Follicular);
        assert!(id.is_some());
        let bucket = board.bucket("2024-06-02").unwrap();
        assert_eq!(bucket.items.len(), 1);
        assert_eq!(bucket.items[0].text, "Evening tea");
    }

    #[test]
    fn add_custom_to_unknown_date_is_noop() {
        let mut board = board_with_items();
        assert!(board.add_custom(date(20), "x", Category::Work, CyclePhase::Follicular).is_none());
        assert_eq!(board.item_count(), 2);
    }

    #[test]
    fn remove_item_filters_named_bucket() {
        let mut board = board_with_items();
        board.remove_item("2024-06-01", "work-Plan outline");
        let bucket = board.bucket("2024-06-01").unwrap();
        assert_eq!(bucket.items.len(), 1);
        assert_eq!(bucket.items[0].text, "Light jog");

        // Absent item: no-op.
        board.remove_item("2024-06-01", "missing");
        assert_eq!(board.bucket("2024-06-01").unwrap().items.len(), 1);
    }

    #[test]
    fn edit_preserves_item_id() {
        let mut board = board_with_items();
        let edited = board.edit_item(
            "2024-06-01",
            "work-Plan outline",
            "Draft the outline",
            Category::Selfcare,
        );
        assert!(edited);
        let item = &board.bucket("2024-06-01").unwrap().items[0];
        assert_eq!(item.id, "work-Plan outline");
        assert_eq!(item.text, "Draft the outline");
        assert_eq!(item.category, Category::Selfcare);
    }

    #[test]
    fn move_transfers_ownership_and_appends() {
        let mut board = board_with_items();
        board.move_item("work-Plan outline", "2024-06-01", "2024-06-02");

        let source = board.bucket("2024-06-01").unwrap();
        let target = board.bucket("2024-06-02").unwrap();
        assert_eq!(source.items.len(), 1);
        assert_eq!(target.items.len(), 1);
        assert_eq!(target.items.last().unwrap().id, "work-Plan outline");
        assert_eq!(board.item_count(), 2);
    }

    #[test]
    fn move_to_same_bucket_is_noop() {
        let mut board = board_with_items();
        board.move_item("work-Plan outline", "2024-06-01", "2024-06-01");
        assert_eq!(board.bucket("2024-06-01").unwrap().items.len(), 2);
        assert_eq!(board.item_count(), 2);
    }

    #[test]
    fn move_to_unknown_target_keeps_item_in_source() {
        let mut board = board_with_items();
        board.move_item("work-Plan outline", "2024-06-01", "2024-07-01");
        assert_eq!(board.bucket("2024-06-01").unwrap().items.len(), 2);
    }

    #[test]
    fn buckets_are_emptied_never_deleted() {
        let mut board = board_with_items();
        board.remove_item("2024-06-01", "work-Plan outline");
        board.remove_item("2024-06-01", "movement-Light jog");
        assert_eq!(board.buckets().len(), 2);
        assert!(board.bucket("2024-06-01").unwrap().items.is_empty());
    }
}
