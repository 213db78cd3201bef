#![no_std]
#![no_main]

use pedal_timer_firmware as _; // Panic handler

#[defmt_test::tests]
mod tests {
    use pedal_timer_control::config::MAX_SAMPLE;
    use pedal_timer_control::Converter;
    use pedal_timer_firmware::system::{Peripherals, System};
    use pedal_timer_firmware::testlib::sample_until_pedal_is_pressed;

    #[init]
    fn init() -> Peripherals {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp).peripherals
    }

    #[test]
    fn pot_moves_in_expected_range(peripherals: &mut Peripherals) {
        macro_rules! sample {
            () => {{
                peripherals.pot.start();
                nb::block!(peripherals.pot.read()).unwrap()
            }};
        }

        defmt::info!("Turn the pot to its minimum, then press the pedal");
        sample_until_pedal_is_pressed(&peripherals.pedal);
        let sample = sample!();
        defmt::assert!(sample < 8, "Assert failed, actual value: {:?}", sample);
        defmt::info!("OK");

        defmt::info!("Turn the pot to its maximum, then press the pedal");
        sample_until_pedal_is_pressed(&peripherals.pedal);
        let sample = sample!();
        defmt::assert!(
            sample > MAX_SAMPLE - 8 && sample <= MAX_SAMPLE,
            "Assert failed, actual value: {:?}",
            sample
        );
        defmt::info!("OK");
    }
}
