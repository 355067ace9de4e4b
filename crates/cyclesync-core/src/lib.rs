//! # CycleSync Core Library
//!
//! Core business logic for CycleSync, a cycle-synced wellness planner.
//! All operations are available through this library; the CLI binary is a
//! thin front-end over it.
//!
//! ## Architecture
//!
//! - **Cycle engine**: pure functions mapping a profile and an explicit
//!   `today` to the current cycle day and phase
//! - **Planner**: phase-window building and round-robin distribution of
//!   selected items into per-date buckets
//! - **Board**: the editable plan (add, remove, edit, move)
//! - **Exports**: iCalendar serialization and web-calendar quick-add links
//! - **Advice gateway**: typed client for the external advice service
//! - **Storage**: TOML profile and JSON plan session under the data dir
//!
//! ## Key Components
//!
//! - [`CycleStats`]: derived cycle position for a given day
//! - [`PlanBoard`]: per-date item buckets with editing operations
//! - [`AdviceGateway`]: client for the advice service
//! - [`AppState`]: explicit session state with init/reset lifecycle

pub mod advice;
pub mod board;
pub mod catalog;
pub mod cycle;
pub mod error;
pub mod ics;
pub mod links;
pub mod planner;
pub mod profile;
pub mod selection;
pub mod state;
pub mod storage;

pub use advice::{AdviceGateway, AdviceKey, AdviceSlot, DayPlan};
pub use board::{DayBucket, PlanBoard};
pub use cycle::{CyclePhase, CycleStats};
pub use error::{AdviceError, ConfigError, CoreError, ValidationError};
pub use ics::export_ics;
pub use planner::{distribute, phase_window};
pub use profile::UserProfile;
pub use selection::{Category, PlanItem, Selection};
pub use state::{AppState, ViewMode};
pub use storage::{PlanSession, ProfileStore};
