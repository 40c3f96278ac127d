//! Slot-label parsing with memoization.

use std::collections::HashMap;
use std::fmt;

/// Structured form of a slot label: day plus starting minute of that day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedSlot {
    /// Day token, e.g. `"Mon"`.
    pub day: String,

    /// Minute of day the slot starts at, in `[0, 1440)`.
    pub start_minute: u32,
}

/// A slot label that does not match `"<Day> <HH:MM>-<HH:MM>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSlotError {
    /// The offending label.
    pub label: String,
}

impl fmt::Display for MalformedSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed slot label {:?} (expected \"<Day> <HH:MM>-<HH:MM>\")",
            self.label
        )
    }
}

impl std::error::Error for MalformedSlotError {}

/// Parse cache keyed by the exact label string.
///
/// Parsing is a pure function of the label, so the cache is plain
/// memoization and can never change an evaluation result. Call
/// [`invalidate`](SlotIndex::invalidate) whenever the slot catalog
/// changes, then optionally [`prime`](SlotIndex::prime) to re-fill it.
#[derive(Debug, Clone, Default)]
pub struct SlotIndex {
    cache: HashMap<String, ParsedSlot>,
}

impl SlotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a slot label, serving repeat lookups from the cache.
    pub fn parse(&mut self, label: &str) -> Result<ParsedSlot, MalformedSlotError> {
        if let Some(hit) = self.cache.get(label) {
            return Ok(hit.clone());
        }
        let parsed = parse_label(label)?;
        self.cache.insert(label.to_string(), parsed.clone());
        Ok(parsed)
    }

    /// Drops every cached entry.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Eagerly parses a batch of labels, silently skipping malformed
    /// ones. A malformed slot is not fatal at load time; the cost model
    /// charges it when a solution actually uses it.
    pub fn prime<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            let _ = self.parse(label.as_ref());
        }
    }

    /// Number of labels currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

fn parse_label(label: &str) -> Result<ParsedSlot, MalformedSlotError> {
    let err = || MalformedSlotError {
        label: label.to_string(),
    };

    let (day, times) = label.split_once(' ').ok_or_else(err)?;
    let (start, _end) = times.split_once('-').ok_or_else(err)?;
    let (hh, mm) = start.split_once(':').ok_or_else(err)?;

    let hh: u32 = hh.parse().map_err(|_| err())?;
    let mm: u32 = mm.parse().map_err(|_| err())?;
    if hh >= 24 || mm >= 60 {
        return Err(err());
    }

    Ok(ParsedSlot {
        day: day.to_string(),
        start_minute: hh * 60 + mm,
    })
}
