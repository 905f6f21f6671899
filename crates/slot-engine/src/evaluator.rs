//! Per-candidate availability evaluation.
//!
//! A candidate is available iff at least one rule window fully contains it
//! and no containing rule's concurrency ceiling is exhausted by overlapping
//! bookings. Booked intervals are compared closed-open and are never
//! dilated — buffer time only spaces the offered slots.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::types::{
    AvailabilityRule, AvailabilitySlot, BookedAppointment, SlotReason, TimeOfDay,
};

/// Count bookings overlapping the candidate `[start, start + duration)`
/// anchored on `date`.
///
/// Overlap is the closed-open test `slot_start < booked_end && booked_start
/// < slot_end`: a booking that ends exactly when the candidate starts does
/// not occupy it, and bookings on other days never overlap.
fn overlapping_bookings(
    date: NaiveDate,
    start: TimeOfDay,
    duration: u32,
    bookings: &[BookedAppointment],
) -> u32 {
    let slot_start =
        date.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(start.minutes()));
    let slot_end = slot_start + Duration::minutes(i64::from(duration));
    bookings
        .iter()
        .filter(|b| slot_start < b.end_time && b.start_time < slot_end)
        .count() as u32
}

/// Minimum remaining capacity across the containing rules that declare a
/// ceiling — the tightest constraint wins. `None` when no containing rule
/// declares one: capacity is unbounded for this candidate.
///
/// The value is signed: a window already holding more overlapping bookings
/// than a rule permits yields a negative remainder, which the caller clamps
/// to zero.
pub fn min_remaining(relevant: &[&AvailabilityRule], overlapping: u32) -> Option<i64> {
    relevant
        .iter()
        .filter_map(|r| r.max_concurrent)
        .map(|ceiling| i64::from(ceiling) - i64::from(overlapping))
        .min()
}

/// Evaluate one candidate `[start, start + duration)` against the day's
/// applicable rules and bookings.
pub fn evaluate_slot(
    date: NaiveDate,
    start: TimeOfDay,
    duration: u32,
    rules: &[&AvailabilityRule],
    bookings: &[BookedAppointment],
) -> AvailabilitySlot {
    let relevant: Vec<&AvailabilityRule> = rules
        .iter()
        .copied()
        .filter(|r| r.contains_candidate(start, duration))
        .collect();

    if relevant.is_empty() {
        return AvailabilitySlot {
            time: start,
            available: false,
            reason: Some(SlotReason::OutsideOperatingHours),
            remaining: Some(0),
            is_buffer_time: false,
        };
    }

    let overlapping = overlapping_bookings(date, start, duration, bookings);

    match min_remaining(&relevant, overlapping) {
        Some(remaining) if remaining <= 0 => AvailabilitySlot {
            time: start,
            available: false,
            reason: Some(SlotReason::FullyBooked),
            remaining: Some(0),
            is_buffer_time: false,
        },
        Some(remaining) => AvailabilitySlot {
            time: start,
            available: true,
            reason: None,
            remaining: Some(remaining as u32),
            is_buffer_time: false,
        },
        None => AvailabilitySlot {
            time: start,
            available: true,
            reason: None,
            remaining: None,
            is_buffer_time: false,
        },
    }
}
