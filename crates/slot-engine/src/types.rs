//! The day-local data model for availability computation.
//!
//! Everything here is scoped to a single facility-local calendar day:
//! [`TimeOfDay`] is a validated wall-clock value, and booked appointments
//! carry naive day-scoped instants. No type performs timezone conversion.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Parses from and displays as strict zero-padded 24-hour `HH:MM`. The
/// derived numeric ordering coincides with lexicographic ordering of the
/// zero-padded string form, which is what rule windows rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00 — the time carried by the holiday sentinel slot.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from hour/minute components. `None` when out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub(crate) fn from_minutes(minutes: u32) -> Option<Self> {
        u16::try_from(minutes)
            .ok()
            .filter(|&m| m < MINUTES_PER_DAY)
            .map(TimeOfDay)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    /// Accepts exactly `HH:MM`. Anything else — missing zero padding, a
    /// stray sign, out-of-range components — is an input error, not a value
    /// to be silently repaired.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        TimeOfDay::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A declarative operating-hours constraint for a facility.
///
/// Multiple rules may govern the same day; none are exclusive. They are
/// reconciled together: window union for enumeration bounds (projector),
/// minimum of declared ceilings for concurrency (evaluator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRule {
    pub facility_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type_id: Option<String>,
    /// Day of week this rule applies to, 0 = Sunday. `None` applies every day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Maximum simultaneous appointments inside this rule's window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent: Option<u32>,
    /// Carried through for the booking collaborator; not consumed by slot
    /// generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_appointments_per_day: Option<u32>,
    /// Spacing between offered slots, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_time: Option<u32>,
}

impl AvailabilityRule {
    /// Whether this rule governs a date falling on `weekday` (0 = Sunday).
    pub fn applies_on(&self, weekday: u8) -> bool {
        self.day_of_week.is_none_or(|d| d == weekday)
    }

    /// Whether this rule's window fully contains the candidate
    /// `[start, start + duration)`.
    pub fn contains_candidate(&self, start: TimeOfDay, duration: u32) -> bool {
        self.start_time <= start && start.minutes() + duration <= self.end_time.minutes()
    }
}

/// An appointment already on the books, expressed as day-local instants.
/// Represents occupancy to subtract from capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedAppointment {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type_id: Option<String>,
}

/// An organization-level block on a specific date. When enabled for the
/// requested date, the whole day is unavailable regardless of rules or
/// bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayOverride {
    pub date: NaiveDate,
    pub enabled: bool,
}

/// Why a candidate slot is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotReason {
    #[serde(rename = "Organization Holiday")]
    OrganizationHoliday,
    #[serde(rename = "Outside operating hours")]
    OutsideOperatingHours,
    #[serde(rename = "No available slots")]
    FullyBooked,
}

impl fmt::Display for SlotReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SlotReason::OrganizationHoliday => "Organization Holiday",
            SlotReason::OutsideOperatingHours => "Outside operating hours",
            SlotReason::FullyBooked => "No available slots",
        };
        f.write_str(text)
    }
}

/// One candidate start time with its derived availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub time: TimeOfDay,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SlotReason>,
    /// Remaining capacity; `None` when no containing rule declares a ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    /// Always `false` under the slot-spacing buffer policy; retained for
    /// response-shape compatibility.
    pub is_buffer_time: bool,
}

/// Appointment mode at the facility gate. Only used to derive a default
/// duration when the caller supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentMode {
    /// Trailer drop — quick gate turnaround.
    #[default]
    Drop,
    /// Live load/unload — the truck waits at the door.
    Live,
}

impl AppointmentMode {
    /// Default appointment duration for this mode, in minutes.
    pub fn default_duration_minutes(self) -> u32 {
        match self {
            AppointmentMode::Drop => 30,
            AppointmentMode::Live => 60,
        }
    }
}

/// Input parameters for one day's availability computation.
///
/// Duration, mode, and step are explicit fields rather than ambient
/// configuration, so the computation stays referentially transparent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub facility_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type_id: Option<String>,
    /// Facility-local calendar day.
    pub date: NaiveDate,
    #[serde(default)]
    pub mode: AppointmentMode,
    /// Appointment duration in minutes; wins over the mode default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_override: Option<u32>,
    /// Slot spacing in minutes; wins over buffer-derived spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_override: Option<u32>,
}
