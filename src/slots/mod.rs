//! Slot-label parsing and memoization.

mod index;

pub use index::{MalformedSlotError, ParsedSlot, SlotIndex};
