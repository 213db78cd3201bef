mod pot;
mod tick;
mod watchdog;

pub use daisy::hal;

use hal::adc::{AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::gpio;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use pedal_timer_control::config::TICK_RATE_HZ;

pub use pot::Pot;
pub use tick::Tick;
pub use watchdog::{prescaler_and_reload, Watchdog};

pub type PedalPin = gpio::ErasedPin<gpio::Input>;
pub type RelayPin = gpio::ErasedPin<gpio::Output>;
pub type IndicatorPin = gpio::ErasedPin<gpio::Output>;

pub type Peripherals =
    pedal_timer_control::Peripherals<PedalPin, RelayPin, IndicatorPin, Pot, Watchdog, Tick>;

pub struct System {
    pub peripherals: Peripherals,
}

impl System {
    /// Initialize system abstraction
    ///
    /// The watchdog is configured but not started and the tick timer is
    /// listening, but its interrupt is served only once unmasked.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        cp.SCB.enable_icache();

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let adc = {
            let mut adc = hal::adc::Adc::adc1(
                dp.ADC1,
                &mut delay,
                ccdr.peripheral.ADC12,
                &ccdr.clocks,
            );
            adc.set_resolution(Resolution::TENBIT);
            adc.set_sample_time(AdcSampleTime::T_16);
            adc.enable()
        };

        let tick = dp
            .TIM3
            .timer(TICK_RATE_HZ.Hz(), ccdr.peripheral.TIM3, &ccdr.clocks);

        let peripherals = Peripherals {
            pedal: pins.GPIO.PIN_B10.into_floating_input().erase(),
            relay: pins.GPIO.PIN_B5.into_push_pull_output().erase(),
            indicator: pins.GPIO.PIN_B6.into_push_pull_output().erase(),
            pot: Pot::new(adc, pins.GPIO.PIN_C5.into_analog()),
            watchdog: Watchdog::new(dp.IWDG),
            tick: Tick::new(tick),
        };

        Self { peripherals }
    }
}
