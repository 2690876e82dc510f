//! ID prefix constants and fresh-ID sources.
//!
//! Record IDs look like `emp-<suffix>`. A wall-clock timestamp alone can repeat
//! when two records are created inside one clock tick, so both sources here
//! guarantee distinct values per process: `MonotonicIds` never hands out a
//! value twice, and `RandomIds` draws 64 bits from the OS.

use chrono::Utc;

use crate::enums::IdStrategy;

/// Prefix for employee record IDs.
pub const PREFIX_EMPLOYEE: &str = "emp";

/// A source of fresh record IDs.
pub trait IdSource {
    /// Produce the next ID. Callers still check it against the collection.
    fn next_id(&mut self) -> String;
}

/// Clock-seeded, strictly increasing counter.
///
/// Each ID is `max(clock_millis, previous + 1)`, so IDs sort in creation order
/// and never repeat even when the clock stalls or steps backwards.
pub struct MonotonicIds {
    last: u64,
    clock: fn() -> u64,
}

impl MonotonicIds {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(unix_millis)
    }

    /// Use a custom clock (tests pin this to a constant).
    #[must_use]
    pub const fn with_clock(clock: fn() -> u64) -> Self {
        Self { last: 0, clock }
    }

    /// The last counter value handed out, or 0 before the first call.
    #[must_use]
    pub const fn last(&self) -> u64 {
        self.last
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for MonotonicIds {
    fn next_id(&mut self) -> String {
        let now = (self.clock)();
        self.last = now.max(self.last.saturating_add(1));
        format!("{PREFIX_EMPLOYEE}-{}", self.last)
    }
}

/// 64 random bits per ID, hex encoded.
///
/// Falls back to a monotonic counter if the OS randomness source fails.
#[derive(Default)]
pub struct RandomIds {
    fallback: MonotonicIds,
}

impl RandomIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        let mut buf = [0u8; 8];
        match getrandom::fill(&mut buf) {
            Ok(()) => format!("{PREFIX_EMPLOYEE}-{:016x}", u64::from_be_bytes(buf)),
            Err(_) => self.fallback.next_id(),
        }
    }
}

impl IdStrategy {
    /// Build the ID source for this strategy.
    #[must_use]
    pub fn source(self) -> Box<dyn IdSource> {
        match self {
            Self::Monotonic => Box::new(MonotonicIds::new()),
            Self::Random => Box::new(RandomIds::new()),
        }
    }
}

fn unix_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}
