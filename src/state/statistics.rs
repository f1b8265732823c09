// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the generation context and incremented by the
//! engine as it appends, skips, prunes and emits.

use std::fmt;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Complete sequences handed to the caller.
    Emitted,
    /// Candidates pushed onto the partial sequence.
    Appended,
    /// Candidates rejected with `Feasibility::Skip`.
    Skipped,
    /// Levels abandoned early with `Feasibility::Exhausted`.
    Pruned,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Emitted), 0);
        assert_eq!(stats.get(Counters::Pruned), 0);
    }

    #[test]
    fn test_increment_and_reset() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Appended);
        stats.increment_counter(Counters::Appended);
        stats.increment_counter(Counters::Skipped);
        assert_eq!(stats.get(Counters::Appended), 2);
        assert_eq!(stats.get(Counters::Skipped), 1);

        stats.reset();
        assert_eq!(stats, Statistics::new());
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Emitted);
        assert_eq!(
            stats.to_string(),
            "emitted=1 appended=0 skipped=0 pruned=0"
        );
    }
}
