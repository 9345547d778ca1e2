//! # slot-engine
//!
//! Finds the best common meeting window for each date of a group's planning
//! window, given every member's availability for those dates.
//!
//! Each member answers every date with either one contiguous interval or
//! nothing. For each date the engine recommends:
//!
//! - the intersection of all intervals, when every member gave one and the
//!   intersection lasts at least an hour (`"everyone"`), otherwise
//! - the longest window of at least an hour where two or more intervals
//!   overlap (`"most"`), otherwise
//! - nothing.
//!
//! Times are naive local clock times. There is no timezone or DST support and
//! intervals cannot cross midnight.
//!
//! ## Modules
//!
//! - [`engine`] — Snapshot of records → per-date recommendations
//! - [`consensus`] — Full/partial consensus classification for one date
//! - [`coverage`] — Per-minute coverage counting and run scanning
//! - [`grouping`] — Split a snapshot by date
//! - [`record`] — Availability records and snapshot decoding
//! - [`time`] — Clock string ↔ minutes since midnight
//! - [`window`] — Group date windows
//! - [`submission`] — Build a user's replacement record set
//! - [`error`] — Error types

pub mod consensus;
pub mod coverage;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod record;
pub mod submission;
pub mod time;
pub mod window;

pub use consensus::{EngineConfig, OverlapType, SlotRecommendation};
pub use engine::{compute_best_slots, compute_best_slots_with, BestSlots};
pub use error::SlotError;
pub use record::{parse_snapshot, AvailabilityRecord};
pub use submission::{build_submission, DayAnswer};
pub use time::{clock_to_minutes, minutes_to_clock, ClockTime};
pub use window::{date_range, GroupWindow};
