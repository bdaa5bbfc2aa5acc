//! Day time grid: the ordered sequence of slot labels.
//!
//! Slot labels are fixed-width "HH:MM" strings at a configured granularity
//! (30 minutes in the default configuration). All span arithmetic resolves
//! labels to indices through the grid; the zero-padded format keeps
//! lexicographic order in agreement with chronological order.

use serde::{Deserialize, Serialize};

/// Parse an "HH:MM" label to minutes since midnight.
pub fn parse_label(label: &str) -> Option<u32> {
    let (hours, minutes) = label.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as an "HH:MM" label.
pub fn format_label(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// The ordered sequence of slot labels for one day.
///
/// The sequence is the universe against which spans and indices are
/// computed: a label outside the grid does not identify a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    labels: Vec<String>,
    slot_minutes: u32,
}

impl TimeGrid {
    /// Build the grid from a day window `[start, end)` and a slot size.
    pub fn new(start: &str, end: &str, slot_minutes: u32) -> Result<Self, String> {
        if slot_minutes == 0 || slot_minutes > 60 * 24 {
            return Err(format!("Invalid slot size: {} minutes", slot_minutes));
        }
        let start_minutes =
            parse_label(start).ok_or_else(|| format!("Invalid day start '{}'", start))?;
        let end_minutes = parse_label(end).ok_or_else(|| format!("Invalid day end '{}'", end))?;
        if end_minutes <= start_minutes {
            return Err(format!("Day end '{}' must be after start '{}'", end, start));
        }

        let labels = (start_minutes..end_minutes)
            .step_by(slot_minutes as usize)
            .map(format_label)
            .collect();

        Ok(TimeGrid {
            labels,
            slot_minutes,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// Slots per hour at this granularity (2.0 for 30-minute slots).
    pub fn slots_per_hour(&self) -> f64 {
        60.0 / self.slot_minutes as f64
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of slots a duration occupies, rounded up.
    pub fn slots_needed(&self, duration_hours: f64) -> usize {
        (duration_hours * self.slots_per_hour()).ceil().max(1.0) as usize
    }

    /// End label for a span starting at `start` and covering
    /// `duration_hours`.
    ///
    /// Returns `None` for single-slot spans and for spans whose end index
    /// runs past the grid (the span is left open rather than erroring).
    pub fn span_end(&self, start: &str, duration_hours: f64) -> Option<String> {
        let start_index = self.index_of(start)?;
        let needed = self.slots_needed(duration_hours);
        if needed <= 1 {
            return None;
        }
        self.labels.get(start_index + needed - 1).cloned()
    }

    /// Whether a placement starting at `start` (optionally ending at `end`,
    /// inclusive) covers `slot`.
    ///
    /// Without an end label, coverage is an exact start match.
    pub fn covers(&self, start: &str, end: Option<&str>, slot: &str) -> bool {
        let (Some(slot_index), Some(start_index)) = (self.index_of(slot), self.index_of(start))
        else {
            return false;
        };
        match end.and_then(|e| self.index_of(e)) {
            Some(end_index) => slot_index >= start_index && slot_index <= end_index,
            None => slot_index == start_index,
        }
    }
}
