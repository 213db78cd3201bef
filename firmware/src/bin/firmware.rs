#![no_main]
#![no_std]

use pedal_timer_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true)]
mod app {
    use pedal_timer_control::config::TICK_RATE_HZ;
    use pedal_timer_control::{Config, System as Control};

    use pedal_timer_firmware::system::{
        IndicatorPin, PedalPin, Pot, RelayPin, System, Tick, Watchdog,
    };

    type Controller = Control<PedalPin, RelayPin, IndicatorPin, Pot, Watchdog, Tick>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        control: Controller,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let mut peripherals = System::init(cx.core, cx.device).peripherals;

        // Interrupts stay disabled until init returns, the first feed comes
        // with the first tick.
        peripherals.watchdog.start();

        // Pins on the board are infallible.
        let control = Control::init(peripherals, Config::for_tick_rate(TICK_RATE_HZ)).unwrap();

        (Shared {}, Local { control }, init::Monotonics())
    }

    #[task(binds = TIM3, local = [control], priority = 2)]
    fn tick(cx: tick::Context) {
        if let Err(error) = cx.local.control.tick() {
            defmt::error!("Tick failed: {:?}", error);
        }
    }
}
