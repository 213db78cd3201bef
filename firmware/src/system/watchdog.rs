use pedal_timer_control::config::WATCHDOG_PERIOD_MS;
use pedal_timer_control::peripherals::Watchdog as FeedWatchdog;

use crate::system::hal::pac::IWDG;

const LSI_FREQUENCY_HZ: u32 = 32_000;
const MAX_RELOAD: u32 = 0x0FFF;
const MAX_PRESCALER: u8 = 6;

const KEY_UNLOCK: u32 = 0x5555;
const KEY_START: u32 = 0xCCCC;
const KEY_FEED: u32 = 0xAAAA;

/// Independent watchdog resetting the MCU when the control loop stalls.
///
/// It stays dormant until `start` is called, so the manual on-target tests
/// are not interrupted by resets.
pub struct Watchdog {
    iwdg: IWDG,
}

impl Watchdog {
    #[must_use]
    pub fn new(iwdg: IWDG) -> Self {
        Self { iwdg }
    }

    /// Once started, the watchdog cannot be stopped until the next reset.
    pub fn start(&mut self) {
        let (prescaler, reload) = prescaler_and_reload(WATCHDOG_PERIOD_MS);

        // Enabling first makes the prescaler and reload registers writable.
        self.write_key(KEY_START);
        self.write_key(KEY_UNLOCK);
        self.iwdg.pr.write(|w| unsafe { w.bits(u32::from(prescaler)) });
        self.iwdg.rlr.write(|w| unsafe { w.bits(reload) });
        while self.iwdg.sr.read().bits() & 0b11 != 0 {}
        self.write_key(KEY_FEED);
    }

    fn write_key(&mut self, key: u32) {
        self.iwdg.kr.write(|w| unsafe { w.bits(key) });
    }
}

impl FeedWatchdog for Watchdog {
    fn feed(&mut self) {
        self.write_key(KEY_FEED);
    }
}

/// The smallest prescaler that fits the period into the 12-bit reload.
///
/// The counter runs at `LSI / (4 << prescaler)`.
#[must_use]
pub fn prescaler_and_reload(period_ms: u32) -> (u8, u32) {
    let mut prescaler = 0;
    loop {
        let divider = 4 << prescaler;
        let counts = period_ms * (LSI_FREQUENCY_HZ / 1000) / divider;
        if counts <= MAX_RELOAD + 1 || prescaler == MAX_PRESCALER {
            return (prescaler, counts.clamp(1, MAX_RELOAD + 1) - 1);
        }
        prescaler += 1;
    }
}
