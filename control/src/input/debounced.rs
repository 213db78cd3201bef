//! Debounce filter of a digital input.

/// Hold-off debouncer.
///
/// An accepted transition takes effect right away. The filter then ignores
/// the input for `hold_off` ticks, so contact bounce following the edge never
/// reaches the caller. Transitions happening during the hold-off are dropped
/// for good, the stable level is corrected only once the filter is idle again
/// and sees the difference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounced {
    countdown: u32,
    level: bool,
    hold_off: u32,
}

impl Debounced {
    /// Start idle at the given level.
    ///
    /// Pass the current raw level of the pin so the first tick does not
    /// report a phantom edge.
    #[must_use]
    pub fn new(level: bool, hold_off: u32) -> Self {
        Self {
            countdown: 0,
            level,
            hold_off,
        }
    }

    /// Feed the raw level read on this tick.
    ///
    /// Returns `true` only on the tick when a rising edge was accepted.
    pub fn update(&mut self, raw: bool) -> bool {
        if self.countdown > 0 {
            self.countdown -= 1;
            return false;
        }

        if raw == self.level {
            return false;
        }

        self.level = raw;
        self.countdown = self.hold_off;
        raw
    }

    /// The last accepted level.
    #[must_use]
    pub fn level(&self) -> bool {
        self.level
    }

    /// Whether the filter would accept a transition on the next tick.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.countdown == 0
    }
}
