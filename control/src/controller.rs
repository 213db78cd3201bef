//! The state machine deciding whether the relay should be on.

use crate::config::Config;
use crate::log;
use crate::output::DesiredOutput;

/// The controller's state machine.
///
/// A press of the pedal starts a timer with its duration taken from the pot.
/// Another press shortly after latches the relay on until the next press,
/// a later press cancels the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller {
    // Kept raw so a corrupted value can be recognized and reset.
    state: u8,
    on_duration_remaining: u32,
    double_press_window_remaining: u32,
    config: Config,
}

/// The current state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum State {
    Off = 0,
    TimedOn = 1,
    LatchedOn = 2,
}

impl TryFrom<u8> for State {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(State::Off),
            1 => Ok(State::TimedOn),
            2 => Ok(State::LatchedOn),
            unknown => Err(unknown),
        }
    }
}

impl State {
    #[must_use]
    pub fn output(self) -> DesiredOutput {
        match self {
            State::Off => DesiredOutput {
                relay: false,
                indicator: false,
            },
            State::TimedOn => DesiredOutput {
                relay: true,
                indicator: true,
            },
            State::LatchedOn => DesiredOutput {
                relay: true,
                indicator: false,
            },
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Controller {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            state: State::Off as u8,
            on_duration_remaining: 0,
            double_press_window_remaining: 0,
            config,
        }
    }

    /// Advance by one tick.
    ///
    /// `pressed` is the debounced press event of this tick, `sample` the
    /// latest reading of the pot. A press is handled before the timers count
    /// down, so it wins over a timeout on the same tick.
    pub fn tick(&mut self, pressed: bool, sample: u16) -> DesiredOutput {
        match State::try_from(self.state) {
            Ok(State::Off) => {
                if pressed {
                    self.start_timer(sample);
                }
            }
            Ok(State::TimedOn) => self.tick_timer(pressed),
            Ok(State::LatchedOn) => {
                if pressed {
                    log::info!("Releasing latched relay");
                    self.switch_off();
                }
            }
            Err(_raw) => {
                log::warning!("Resetting unknown state={:?}", _raw);
                self.switch_off();
            }
        }

        self.state().output()
    }

    /// The current state. An unrecognized raw state reads as `Off`.
    #[must_use]
    pub fn state(&self) -> State {
        State::try_from(self.state).unwrap_or(State::Off)
    }

    #[must_use]
    pub fn on_duration_remaining(&self) -> u32 {
        self.on_duration_remaining
    }

    #[must_use]
    pub fn double_press_window_remaining(&self) -> u32 {
        self.double_press_window_remaining
    }

    fn start_timer(&mut self, sample: u16) {
        self.state = State::TimedOn as u8;
        self.on_duration_remaining = self.config.on_duration(sample);
        self.double_press_window_remaining = self.config.double_press_window;
        log::info!(
            "Starting timer sample={:?} duration={:?}",
            sample,
            self.on_duration_remaining
        );
    }

    fn tick_timer(&mut self, pressed: bool) {
        if pressed {
            if self.double_press_window_remaining == 0 {
                log::info!("Cancelling timer");
                self.switch_off();
            } else {
                log::info!("Latching relay");
                self.latch();
            }
            return;
        }

        self.on_duration_remaining = self.on_duration_remaining.saturating_sub(1);
        self.double_press_window_remaining = self.double_press_window_remaining.saturating_sub(1);

        if self.on_duration_remaining == 0 {
            log::info!("Timer elapsed");
            self.switch_off();
        }
    }

    fn latch(&mut self) {
        self.state = State::LatchedOn as u8;
        self.clear_timers();
    }

    fn switch_off(&mut self) {
        self.state = State::Off as u8;
        self.clear_timers();
    }

    fn clear_timers(&mut self) {
        self.on_duration_remaining = 0;
        self.double_press_window_remaining = 0;
    }
}
