use pedal_timer_control::config::{DEBOUNCE_HOLD_OFF, TICK_RATE_HZ};
use pedal_timer_control::input::debounced::Debounced;

use crate::system::PedalPin;

const CPU_FREQUENCY_HZ: u32 = 480_000_000;

/// Poll the pedal at the control loop's rate until it gets pressed.
pub fn sample_until_pedal_is_pressed(pedal: &PedalPin) {
    let mut debounced = Debounced::new(pedal.is_high(), DEBOUNCE_HOLD_OFF);
    loop {
        if debounced.update(pedal.is_high()) {
            break;
        }
        cortex_m::asm::delay(CPU_FREQUENCY_HZ / TICK_RATE_HZ);
    }
}
