use std::convert::Infallible;

use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

use pedal_timer_control::{Config, Converter, Peripherals, State, System, TickSource};

#[derive(Default)]
struct Pot {
    sample: u16,
    running: bool,
}

impl Converter for Pot {
    fn start(&mut self) {
        self.running = true;
    }

    fn read(&mut self) -> nb::Result<u16, Infallible> {
        if self.running {
            self.running = false;
            Ok(self.sample)
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

#[derive(Default)]
struct Dog {
    fed: u32,
}

impl embedded_hal::watchdog::Watchdog for Dog {
    fn feed(&mut self) {
        self.fed += 1;
    }
}

#[derive(Default)]
struct Tick {
    cleared: u32,
}

impl TickSource for Tick {
    fn clear(&mut self) {
        self.cleared += 1;
    }
}

#[test]
fn pedal_press_switches_relay_and_indicator_pins() {
    let pedal = PinMock::new(&[
        PinTransaction::get(PinState::Low),
        PinTransaction::get(PinState::Low),
        PinTransaction::get(PinState::High),
    ]);
    let relay = PinMock::new(&[
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);
    let indicator = PinMock::new(&[
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);

    let peripherals = Peripherals {
        pedal,
        relay,
        indicator,
        pot: Pot {
            sample: 200,
            running: false,
        },
        watchdog: Dog::default(),
        tick: Tick::default(),
    };
    let mut system = System::init(peripherals, Config::default()).unwrap();

    system.tick().unwrap();
    let output = system.tick().unwrap();
    assert!(output.relay);
    assert!(output.indicator);
    assert_eq!(system.controller().state(), State::TimedOn);
    assert_eq!(system.controller().on_duration_remaining(), 2000);

    let mut peripherals = system.release();
    peripherals.pedal.done();
    peripherals.relay.done();
    peripherals.indicator.done();
    assert_eq!(peripherals.watchdog.fed, 2);
    assert_eq!(peripherals.tick.cleared, 2);
}
