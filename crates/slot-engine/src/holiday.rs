//! Organization-holiday gate — short-circuits a blocked day.
//!
//! The gate runs before any rule or booking is consulted: an enabled holiday
//! override for the requested date answers the whole day with a single
//! sentinel slot.

use chrono::NaiveDate;

use crate::types::{AvailabilitySlot, HolidayOverride, SlotReason, TimeOfDay};

/// Return the sentinel slot for `date` when an enabled holiday override
/// matches it exactly; `None` means the pipeline proceeds.
///
/// The sentinel is the entire day's answer: one unavailable slot with reason
/// `Organization Holiday` and zero remaining capacity.
pub fn holiday_sentinel(
    date: NaiveDate,
    holidays: &[HolidayOverride],
) -> Option<AvailabilitySlot> {
    if !holidays.iter().any(|h| h.enabled && h.date == date) {
        return None;
    }
    tracing::debug!(%date, "date blocked by organization holiday");
    Some(AvailabilitySlot {
        time: TimeOfDay::MIDNIGHT,
        available: false,
        reason: Some(SlotReason::OrganizationHoliday),
        remaining: Some(0),
        is_buffer_time: false,
    })
}
