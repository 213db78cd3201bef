//! Interfaces of the hardware the controller runs on.
//!
//! Digital pins and the watchdog use the `embedded-hal` traits. Analog
//! conversion and the tick timer get their own small traits, since the
//! controller needs them split into request and poll, and acknowledge.

use core::convert::Infallible;

pub use embedded_hal::digital::v2::{InputPin, OutputPin};
pub use embedded_hal::watchdog::Watchdog;

/// Analog to digital converter wired to the duration pot.
pub trait Converter {
    /// Start a new conversion.
    fn start(&mut self);

    /// Collect the result of the last started conversion.
    ///
    /// Returns `WouldBlock` while the conversion is still running. The
    /// conversion cannot fail.
    fn read(&mut self) -> nb::Result<u16, Infallible>;
}

/// Timer peripheral triggering the control loop.
pub trait TickSource {
    /// Acknowledge the tick, so the interrupt can fire again.
    fn clear(&mut self);
}

/// Everything the control loop reads from and writes to.
///
/// All pins must share one error type. On the board they are all
/// infallible.
pub struct Peripherals<P, R, L, C, W, T> {
    pub pedal: P,
    pub relay: R,
    pub indicator: L,
    pub pot: C,
    pub watchdog: W,
    pub tick: T,
}
