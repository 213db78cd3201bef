//! Timing constants of the controller.
//!
//! All durations are counted in ticks of the control loop. The defaults are
//! tuned for the reference tick rate of 120 Hz, roughly 8.3 ms per tick.

/// Frequency of the control loop the default timing is tuned for.
pub const TICK_RATE_HZ: u32 = 120;

/// Ticks during which the pedal is ignored after an accepted transition.
pub const DEBOUNCE_HOLD_OFF: u32 = 50;

/// Ticks after the timer started during which another press latches the
/// output on instead of cancelling it.
pub const DOUBLE_PRESS_WINDOW: u32 = 200;

/// Shortest on-duration, used with the pot turned all the way down.
pub const ON_DURATION_BASE: u32 = 1000;

/// Ticks added to the on-duration per step of the pot's sample.
pub const ON_DURATION_SCALE: u32 = 5;

/// The largest sample a 10-bit converter can report.
pub const MAX_SAMPLE: u16 = 0x03FF;

/// Period after which a watchdog that was not fed resets the device.
pub const WATCHDOG_PERIOD_MS: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub debounce_hold_off: u32,
    pub double_press_window: u32,
    pub on_duration_base: u32,
    pub on_duration_scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_hold_off: DEBOUNCE_HOLD_OFF,
            double_press_window: DOUBLE_PRESS_WINDOW,
            on_duration_base: ON_DURATION_BASE,
            on_duration_scale: ON_DURATION_SCALE,
        }
    }
}

impl Config {
    /// Rescale the default timing for a control loop running at `tick_rate_hz`.
    ///
    /// Durations keep their length in seconds. Each tick count is rounded to
    /// the nearest whole tick.
    #[must_use]
    pub fn for_tick_rate(tick_rate_hz: u32) -> Self {
        let default = Self::default();
        Self {
            debounce_hold_off: rescale(default.debounce_hold_off, tick_rate_hz),
            double_press_window: rescale(default.double_press_window, tick_rate_hz),
            on_duration_base: rescale(default.on_duration_base, tick_rate_hz),
            on_duration_scale: rescale(default.on_duration_scale, tick_rate_hz),
        }
    }

    /// Number of ticks the timer runs for with the given pot sample.
    ///
    /// Samples above the 10-bit range are clamped.
    #[must_use]
    pub fn on_duration(&self, sample: u16) -> u32 {
        let sample = u32::from(sample.min(MAX_SAMPLE));
        self.on_duration_base
            .saturating_add(self.on_duration_scale.saturating_mul(sample))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn rescale(ticks: u32, tick_rate_hz: u32) -> u32 {
    let reference = u64::from(TICK_RATE_HZ);
    let scaled = (u64::from(ticks) * u64::from(tick_rate_hz) + reference / 2) / reference;
    scaled.min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_pot_is_at_minimum_it_runs_for_base_duration() {
        assert_eq!(Config::default().on_duration(0), 1000);
    }

    #[test]
    fn when_pot_is_at_maximum_it_runs_for_the_longest_duration() {
        assert_eq!(Config::default().on_duration(1023), 6115);
    }

    #[test]
    fn when_sample_exceeds_ten_bits_it_is_clamped() {
        assert_eq!(Config::default().on_duration(u16::MAX), 6115);
    }

    #[test]
    fn when_rescaled_to_reference_rate_it_equals_default() {
        assert_eq!(Config::for_tick_rate(TICK_RATE_HZ), Config::default());
    }

    #[test]
    fn when_tick_rate_doubles_all_durations_double() {
        let config = Config::for_tick_rate(240);
        assert_eq!(config.debounce_hold_off, 100);
        assert_eq!(config.double_press_window, 400);
        assert_eq!(config.on_duration_base, 2000);
        assert_eq!(config.on_duration_scale, 10);
    }

    #[test]
    fn when_rescaled_it_rounds_to_nearest_tick() {
        // 50 ticks at 120 Hz are 41.67 ticks at 100 Hz.
        assert_eq!(Config::for_tick_rate(100).debounce_hold_off, 42);
    }
}
