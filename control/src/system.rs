//! The control loop, executed once per tick.

use crate::config::Config;
use crate::controller::{Controller, State};
use crate::input::debounced::Debounced;
use crate::input::sampler::Sampler;
use crate::output::DesiredOutput;
use crate::peripherals::{Converter, InputPin, OutputPin, Peripherals, TickSource, Watchdog};

/// Owner of the peripherals and of all the state of the controller.
///
/// `tick` must be called from a single periodic interrupt handler, which the
/// platform must never re-enter while it runs. Taking `&mut self` keeps
/// nested calls out on the Rust side.
pub struct System<P, R, L, C, W, T> {
    peripherals: Peripherals<P, R, L, C, W, T>,
    sampler: Sampler,
    pedal: Debounced,
    controller: Controller,
}

/// A pin that failed to be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Pedal(E),
    Relay(E),
    Indicator(E),
}

impl<P, R, L, C, W, T, E> System<P, R, L, C, W, T>
where
    P: InputPin<Error = E>,
    R: OutputPin<Error = E>,
    L: OutputPin<Error = E>,
    C: Converter,
    W: Watchdog,
    T: TickSource,
{
    /// Bring the controller to its initial state.
    ///
    /// The debounce filter starts at the current level of the pedal, the
    /// first conversion gets started and both outputs get switched off. This
    /// is also what happens after a watchdog reset.
    ///
    /// # Errors
    ///
    /// Fails if the pedal cannot be read or the outputs cannot be set.
    pub fn init(
        mut peripherals: Peripherals<P, R, L, C, W, T>,
        config: Config,
    ) -> Result<Self, Error<E>> {
        let level = peripherals.pedal.is_high().map_err(Error::Pedal)?;

        let mut sampler = Sampler::default();
        sampler.prime(&mut peripherals.pot);

        let mut system = Self {
            peripherals,
            sampler,
            pedal: Debounced::new(level, config.debounce_hold_off),
            controller: Controller::new(config),
        };
        system.set_outputs(State::Off.output())?;

        Ok(system)
    }

    /// Run one iteration of the control loop.
    ///
    /// The watchdog is fed first, whatever happens later. The tick gets
    /// acknowledged last, even when a pin fails on the way.
    ///
    /// # Errors
    ///
    /// Fails if the pedal cannot be read or the outputs cannot be set.
    pub fn tick(&mut self) -> Result<DesiredOutput, Error<E>> {
        self.peripherals.watchdog.feed();
        let result = self.process();
        self.peripherals.tick.clear();
        result
    }

    fn process(&mut self) -> Result<DesiredOutput, Error<E>> {
        self.sampler.update(&mut self.peripherals.pot);

        let raw = self.peripherals.pedal.is_high().map_err(Error::Pedal)?;
        let pressed = self.pedal.update(raw);

        let output = self.controller.tick(pressed, self.sampler.sample());
        self.set_outputs(output)?;

        Ok(output)
    }

    fn set_outputs(&mut self, output: DesiredOutput) -> Result<(), Error<E>> {
        set_pin(&mut self.peripherals.relay, output.relay).map_err(Error::Relay)?;
        set_pin(&mut self.peripherals.indicator, output.indicator).map_err(Error::Indicator)
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn pedal(&self) -> &Debounced {
        &self.pedal
    }

    #[must_use]
    pub fn sample(&self) -> u16 {
        self.sampler.sample()
    }

    /// Give the peripherals back, e.g. to reuse them in a test.
    pub fn release(self) -> Peripherals<P, R, L, C, W, T> {
        self.peripherals
    }
}

fn set_pin<O: OutputPin>(pin: &mut O, high: bool) -> Result<(), O::Error> {
    if high {
        pin.set_high()
    } else {
        pin.set_low()
    }
}
