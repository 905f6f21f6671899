//! The availability pipeline: holiday gate → rule projection → slot
//! enumeration → per-slot evaluation → result assembly.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::enumerator::{enumerate, resolve_duration};
use crate::error::{EngineError, Result};
use crate::evaluator::evaluate_slot;
use crate::holiday::holiday_sentinel;
use crate::projector::{applicable_rules, scan_window, ScanWindow, SkippedRule};
use crate::types::{
    AvailabilityQuery, AvailabilityRule, AvailabilitySlot, BookedAppointment, HolidayOverride,
    TimeOfDay,
};

/// Structured trace of one computation, returned alongside the slots rather
/// than interleaved with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Rules governing the date after weekday filtering.
    pub rules_applied: usize,
    /// Rules excluded because their window was inverted.
    pub skipped: Vec<SkippedRule>,
    /// The derived enumeration bounds, when any rule applied.
    pub window: Option<ScanWindow>,
}

/// One day's computed availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// Candidate slots in strictly increasing time order.
    pub slots: Vec<AvailabilitySlot>,
    /// Start time of the first available slot, if any.
    pub first_available: Option<TimeOfDay>,
    pub diagnostics: Diagnostics,
}

/// Compute the availability grid for one facility-local calendar day.
///
/// Pure and synchronous: the caller fetches rules, bookings, and holiday
/// overrides up front and persists a chosen slot through its own booking
/// collaborator. That collaborator must re-check capacity at write time —
/// this result is an optimistic read and cannot by itself prevent a
/// double-booking race.
///
/// Degrading a failed upstream fetch to an empty list is a caller decision;
/// passing empty inputs here yields "no slots", which is not the same thing
/// as "facility fully booked".
///
/// # Errors
///
/// Returns [`EngineError::InvalidDuration`] or [`EngineError::InvalidStep`]
/// when an explicit override is zero. Malformed rules are *not* errors; they
/// are skipped and reported in [`Diagnostics::skipped`].
pub fn compute_day_availability(
    query: &AvailabilityQuery,
    rules: &[AvailabilityRule],
    bookings: &[BookedAppointment],
    holidays: &[HolidayOverride],
) -> Result<DayAvailability> {
    if query.duration_override == Some(0) {
        return Err(EngineError::InvalidDuration(0));
    }
    if query.step_override == Some(0) {
        return Err(EngineError::InvalidStep(0));
    }

    if let Some(sentinel) = holiday_sentinel(query.date, holidays) {
        return Ok(DayAvailability {
            date: query.date,
            slots: vec![sentinel],
            first_available: None,
            diagnostics: Diagnostics::default(),
        });
    }

    let weekday = query.date.weekday().num_days_from_sunday() as u8;
    let (applicable, skipped) = applicable_rules(rules, weekday);
    let window = scan_window(&applicable);
    let diagnostics = Diagnostics {
        rules_applied: applicable.len(),
        skipped,
        window,
    };

    let Some(window) = window else {
        tracing::debug!(date = %query.date, weekday, "no operating hours for date");
        return Ok(DayAvailability {
            date: query.date,
            slots: Vec::new(),
            first_available: None,
            diagnostics,
        });
    };

    let duration = resolve_duration(query.mode, query.duration_override);
    let candidates = enumerate(window, duration, query.step_override, &applicable);
    tracing::debug!(
        date = %query.date,
        window_start = %window.start,
        window_end = %window.end,
        duration,
        candidates = candidates.len(),
        "enumerated candidate slots"
    );

    let slots: Vec<AvailabilitySlot> = candidates
        .into_iter()
        .map(|start| evaluate_slot(query.date, start, duration, &applicable, bookings))
        .collect();

    let first_available = slots.iter().find(|s| s.available).map(|s| s.time);

    Ok(DayAvailability {
        date: query.date,
        slots,
        first_available,
        diagnostics,
    })
}
