use vocab_core::daily;
use vocab_core::{Catalog, Clock, WordEntry};

/// Serves the deterministic word of the day.
///
/// Thin wrapper tying the pure daily selector to a clock, so "today" stays
/// deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyService {
    clock: Clock,
}

impl DailyService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the clock (usually for deterministic testing).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Today's entry under the fixed anchor rotation.
    #[must_use]
    pub fn word_of_day<'a>(&self, catalog: &'a Catalog) -> &'a WordEntry {
        daily::select_for_date(catalog, self.clock.today(), daily::anchor())
    }
}
