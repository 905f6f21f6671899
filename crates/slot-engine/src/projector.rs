//! Rule projection — selects the rules that govern a calendar date and
//! derives the scan window bounding slot enumeration.

use serde::Serialize;

use crate::types::{AvailabilityRule, TimeOfDay};

/// Enumeration bounds for one day: the union of all applicable rule windows.
///
/// This bounds *candidate generation* only. Each candidate's availability is
/// re-evaluated against individual rules, never against this merged window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A rule excluded from the computation because its window is inverted
/// (`start_time` not before `end_time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRule {
    /// Index of the rule in the caller-supplied list.
    pub index: usize,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Filter `rules` down to those governing a date with the given weekday
/// (0 = Sunday). A rule with no `day_of_week` applies every day.
///
/// A rule whose window is inverted cannot contain any candidate; it is
/// skipped and reported rather than aborting the day — one malformed rule
/// must not zero out a facility's availability.
pub fn applicable_rules<'a>(
    rules: &'a [AvailabilityRule],
    weekday: u8,
) -> (Vec<&'a AvailabilityRule>, Vec<SkippedRule>) {
    let mut kept = Vec::new();
    let mut skipped = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        if !rule.applies_on(weekday) {
            continue;
        }
        if rule.start_time >= rule.end_time {
            tracing::warn!(
                index,
                start = %rule.start_time,
                end = %rule.end_time,
                "skipping rule with inverted window"
            );
            skipped.push(SkippedRule {
                index,
                start_time: rule.start_time,
                end_time: rule.end_time,
            });
            continue;
        }
        kept.push(rule);
    }
    (kept, skipped)
}

/// Fold the applicable rules into the day's scan window:
/// `[min(start_time), max(end_time)]`.
///
/// `None` when no rule applies — the date simply has no operating hours,
/// which downstream turns into an empty slot list (distinct from the holiday
/// sentinel).
pub fn scan_window(rules: &[&AvailabilityRule]) -> Option<ScanWindow> {
    rules.iter().fold(None, |acc, rule| {
        Some(match acc {
            None => ScanWindow {
                start: rule.start_time,
                end: rule.end_time,
            },
            Some(window) => ScanWindow {
                start: window.start.min(rule.start_time),
                end: window.end.max(rule.end_time),
            },
        })
    })
}
