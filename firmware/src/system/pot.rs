use core::convert::Infallible;

use pedal_timer_control::Converter;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

/// The duration pot, read by the first ADC configured to 10 bits.
pub struct Pot {
    adc: Adc<ADC1, Enabled>,
    pin: Pin,
}

pub type Pin = gpio::gpioa::PA3<gpio::Analog>;

impl Pot {
    #[must_use]
    pub fn new(adc: Adc<ADC1, Enabled>, pin: Pin) -> Self {
        Self { adc, pin }
    }
}

impl Converter for Pot {
    fn start(&mut self) {
        self.adc.start_conversion(&mut self.pin);
    }

    fn read(&mut self) -> nb::Result<u16, Infallible> {
        let sample: u32 = self.adc.read_sample()?;
        Ok(u16::try_from(sample).unwrap_or(u16::MAX))
    }
}
