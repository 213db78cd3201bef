//! Free-running sampling of the duration pot.

use crate::config::MAX_SAMPLE;
use crate::peripherals::Converter;

/// Cache of the most recently finished conversion.
///
/// One conversion is always in flight. Each tick, a finished conversion gets
/// stored and a new one is started right away. A conversion that is still
/// running is left alone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sampler {
    sample: u16,
}

impl Sampler {
    /// Start the very first conversion.
    pub fn prime<C: Converter>(&mut self, converter: &mut C) {
        converter.start();
    }

    pub fn update<C: Converter>(&mut self, converter: &mut C) {
        match converter.read() {
            Ok(sample) => {
                self.sample = sample.min(MAX_SAMPLE);
                converter.start();
            }
            Err(nb::Error::WouldBlock) => (),
            Err(nb::Error::Other(infallible)) => match infallible {},
        }
    }

    /// The latest sample, 0 until the first conversion finishes.
    #[must_use]
    pub fn sample(&self) -> u16 {
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;

    #[derive(Default)]
    struct FakeConverter {
        ready: Option<u16>,
        started: u32,
    }

    impl Converter for FakeConverter {
        fn start(&mut self) {
            self.started += 1;
        }

        fn read(&mut self) -> nb::Result<u16, Infallible> {
            self.ready.take().ok_or(nb::Error::WouldBlock)
        }
    }

    #[test]
    fn when_primed_it_starts_a_conversion() {
        let mut sampler = Sampler::default();
        let mut converter = FakeConverter::default();
        sampler.prime(&mut converter);
        assert_eq!(converter.started, 1);
        assert_eq!(sampler.sample(), 0);
    }

    #[test]
    fn when_conversion_finished_it_stores_it_and_restarts() {
        let mut sampler = Sampler::default();
        let mut converter = FakeConverter {
            ready: Some(512),
            ..FakeConverter::default()
        };
        sampler.update(&mut converter);
        assert_eq!(sampler.sample(), 512);
        assert_eq!(converter.started, 1);
    }

    #[test]
    fn when_conversion_is_running_it_keeps_previous_sample() {
        let mut sampler = Sampler::default();
        let mut converter = FakeConverter {
            ready: Some(300),
            ..FakeConverter::default()
        };
        sampler.update(&mut converter);
        sampler.update(&mut converter);
        sampler.update(&mut converter);
        assert_eq!(sampler.sample(), 300);
        assert_eq!(converter.started, 1);
    }

    #[test]
    fn when_converter_reports_more_than_ten_bits_it_is_clamped() {
        let mut sampler = Sampler::default();
        let mut converter = FakeConverter {
            ready: Some(4095),
            ..FakeConverter::default()
        };
        sampler.update(&mut converter);
        assert_eq!(sampler.sample(), MAX_SAMPLE);
    }
}
