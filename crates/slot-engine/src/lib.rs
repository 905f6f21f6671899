//! # slot-engine
//!
//! Deterministic appointment-slot availability computation for facility
//! scheduling.
//!
//! Given one facility-local calendar day, a set of operating-hour rules, the
//! day's booked appointments, and the organization holiday calendar, the
//! engine produces an ordered grid of candidate start times, each flagged
//! available or unavailable with a reason and a remaining-capacity count.
//! The computation is a pure, synchronous pipeline — no I/O, no clock reads,
//! no hidden state — so identical inputs always produce identical output.
//!
//! ## Modules
//!
//! - [`holiday`] — organization-holiday gate (whole-day short circuit)
//! - [`projector`] — weekday rule filtering and scan-window derivation
//! - [`enumerator`] — candidate start-time generation and step resolution
//! - [`evaluator`] — per-candidate rule containment, overlap, and ceilings
//! - [`engine`] — pipeline orchestration and result assembly
//! - [`types`] — the day-local data model
//! - [`error`] — error types
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{compute_day_availability, AvailabilityQuery, AvailabilityRule};
//! use slot_engine::types::AppointmentMode;
//!
//! let rule = AvailabilityRule {
//!     facility_id: "gate-7".into(),
//!     appointment_type_id: None,
//!     day_of_week: None,
//!     start_time: "08:00".parse().unwrap(),
//!     end_time: "17:00".parse().unwrap(),
//!     max_concurrent: Some(2),
//!     max_appointments_per_day: None,
//!     buffer_time: Some(30),
//! };
//! let query = AvailabilityQuery {
//!     facility_id: "gate-7".into(),
//!     appointment_type_id: None,
//!     date: "2026-03-16".parse().unwrap(),
//!     mode: AppointmentMode::Live,
//!     duration_override: None,
//!     step_override: None,
//! };
//!
//! let day = compute_day_availability(&query, &[rule], &[], &[]).unwrap();
//! assert_eq!(day.slots.len(), 17); // 08:00 through 16:00, every 30 minutes
//! assert_eq!(day.first_available, Some("08:00".parse().unwrap()));
//! ```

pub mod engine;
pub mod enumerator;
pub mod error;
pub mod evaluator;
pub mod holiday;
pub mod projector;
pub mod types;

pub use engine::{compute_day_availability, DayAvailability, Diagnostics};
pub use error::EngineError;
pub use types::{
    AvailabilityQuery, AvailabilityRule, AvailabilitySlot, BookedAppointment, HolidayOverride,
    SlotReason, TimeOfDay,
};
