//! Slot enumeration — walks the scan window producing candidate start times.
//!
//! Buffer time is the spacing between offered slots. The step is re-resolved
//! at every candidate because morning and afternoon rules may carry
//! different buffers; it never dilates booked intervals (see the evaluator).

use crate::projector::ScanWindow;
use crate::types::{AppointmentMode, AvailabilityRule, TimeOfDay};

/// Slot spacing used when the caller supplies no step override and no
/// containing rule declares a positive `buffer_time`.
pub const DEFAULT_STEP_MINUTES: u32 = 30;

/// Resolve the appointment duration: an explicit override wins, otherwise
/// the mode default.
pub fn resolve_duration(mode: AppointmentMode, duration_override: Option<u32>) -> u32 {
    duration_override.unwrap_or_else(|| mode.default_duration_minutes())
}

/// The spacing in effect for a candidate starting at `start`: the smallest
/// positive `buffer_time` among rules whose window fully contains the
/// candidate, else [`DEFAULT_STEP_MINUTES`].
fn step_at(rules: &[&AvailabilityRule], start: TimeOfDay, duration: u32) -> u32 {
    rules
        .iter()
        .filter(|r| r.contains_candidate(start, duration))
        .filter_map(|r| r.buffer_time)
        .filter(|&b| b > 0)
        .min()
        .unwrap_or(DEFAULT_STEP_MINUTES)
}

/// Enumerate candidate start times from `window.start` through
/// `window.end - duration` inclusive.
///
/// With a `step_override` the spacing is fixed; otherwise it is derived per
/// candidate from the buffers of the rules containing it. An empty result is
/// valid — the window was shorter than `duration`.
pub fn enumerate(
    window: ScanWindow,
    duration: u32,
    step_override: Option<u32>,
    rules: &[&AvailabilityRule],
) -> Vec<TimeOfDay> {
    let end = window.end.minutes();
    let mut candidates = Vec::new();
    let mut cursor = window.start.minutes();
    while cursor + duration <= end {
        let Some(start) = TimeOfDay::from_minutes(cursor) else {
            break;
        };
        candidates.push(start);
        let step = step_override.unwrap_or_else(|| step_at(rules, start, duration));
        cursor += step.max(1);
    }
    candidates
}
