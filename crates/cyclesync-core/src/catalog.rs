//! Onboarding option catalogs.
//!
//! Static choice lists presented during onboarding. The CLI uses them for
//! help output; none of them constrain what a user may actually type.

/// A themed group of interest choices.
#[derive(Debug, Clone, Copy)]
pub struct InterestGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const INTEREST_GROUPS: &[InterestGroup] = &[
    InterestGroup {
        category: "Wellness & Health",
        items: &["Yoga", "Meditation", "Sleep Hygiene", "Nutrition", "Mental Health"],
    },
    InterestGroup {
        category: "Fitness",
        items: &["Weight Lifting", "Running", "Pilates", "HIIT", "Walking"],
    },
    InterestGroup {
        category: "Career & Study",
        items: &["Deep Work", "Learning Languages", "Coding", "Public Speaking", "Leadership"],
    },
    InterestGroup {
        category: "Creativity",
        items: &["Writing", "Painting", "Music", "Design", "Content Creation"],
    },
    InterestGroup {
        category: "Social & Lifestyle",
        items: &["Networking", "Relationships", "Travel", "Events", "Volunteering"],
    },
];

pub const DIETARY_OPTIONS: &[&str] = &[
    "Omnivore (Eat everything)",
    "Vegetarian",
    "Vegan",
    "Pescatarian",
    "Gluten-Free",
    "Keto/Low Carb",
    "Paleo",
];

pub const WORK_STYLE_OPTIONS: &[&str] = &[
    "9-5 Corporate",
    "Student / Academic",
    "Freelance / Flexible",
    "Shift Work",
    "Stay-at-home Parent",
];

pub const CHRONOTYPE_OPTIONS: &[&str] = &[
    "Early Bird (Morning Energy)",
    "Night Owl (Evening Energy)",
    "Variable / Irregular",
];

pub const SYMPTOM_OPTIONS: &[&str] = &[
    "Painful Cramps",
    "Mood Swings / PMS",
    "Fatigue / Low Energy",
    "Bloating",
    "Headaches / Migraines",
    "Acne / Skin Issues",
    "Insomnia",
    "Food Cravings",
    "Anxiety",
];
