//! Plan items and the pre-build selection store.
//!
//! Suggestion chips toggled by the user land here before a plan is built.
//! Suggested items derive their id from `category + text` so toggling the
//! same chip twice is a clean round trip; custom items get a fresh token.

use serde::{Deserialize, Serialize};

use crate::cycle::CyclePhase;

/// Minimum number of selected items before a plan can be built.
pub const BUILD_THRESHOLD: usize = 3;

/// Recommendation category for a plan item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Movement,
    Nutrition,
    Selfcare,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Movement => "movement",
            Category::Nutrition => "nutrition",
            Category::Selfcare => "selfcare",
        }
    }

    /// Upper-cased label used in export descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "WORK",
            Category::Movement => "MOVEMENT",
            Category::Nutrition => "NUTRITION",
            Category::Selfcare => "SELFCARE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Some(Category::Work),
            "movement" => Some(Category::Movement),
            "nutrition" => Some(Category::Nutrition),
            "selfcare" => Some(Category::Selfcare),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single actionable suggestion, tagged with its category and the phase
/// it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub phase: CyclePhase,
}

impl PlanItem {
    /// Item backed by a suggestion chip. Id is `category + "-" + text`,
    /// which makes toggling idempotent.
    pub fn suggested(text: impl Into<String>, category: Category, phase: CyclePhase) -> Self {
        let text = text.into();
        Self {
            id: format!("{}-{}", category.as_str(), text),
            text,
            category,
            phase,
        }
    }

    /// User-entered item with a fresh unique id.
    pub fn custom(text: impl Into<String>, category: Category, phase: CyclePhase) -> Self {
        Self {
            id: format!("custom-{}", uuid::Uuid::new_v4()),
            text: text.into(),
            category,
            phase,
        }
    }
}

/// Ordered set of selected plan items, keyed by item id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    items: Vec<PlanItem>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a suggestion chip. Removes the item when already selected,
    /// appends it otherwise. Never produces duplicate ids.
    pub fn toggle(&mut self, text: &str, category: Category, phase: CyclePhase) {
        let id = format!("{}-{}", category.as_str(), text);
        if let Some(pos) = self.items.iter().position(|i| i.id == id) {
            self.items.remove(pos);
        } else {
            self.items.push(PlanItem::suggested(text, category, phase));
        }
    }

    pub fn contains(&self, text: &str, category: Category) -> bool {
        let id = format!("{}-{}", category.as_str(), text);
        self.items.iter().any(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether enough items are selected to build a plan.
    pub fn can_build(&self) -> bool {
        self.items.len() >= BUILD_THRESHOLD
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    /// Consume the selection when a plan is built.
    pub fn into_items(self) -> Vec<PlanItem> {
        self.items
    }
}
