//! Control of a pedal-operated timer switching a relay.
//!
//! A single control loop runs on every tick of a periodic timer. It samples
//! the duration pot, debounces the pedal, advances the state machine and
//! drives the relay with its indicator LED:
//!
//! ```text
//!        [ Watchdog ] <--- feed
//!                            |
//!   [ Pot ] --> [ Sampler ] -+--(sample)--+
//!                                         V
//!   [ Pedal ] --> [ Debounced ] --> [ Controller ] --> [ Relay, LED ]
//!                            (press)
//! ```
//!
//! The crate does not touch any registers. It is generic over the traits in
//! [`peripherals`] and can be tested on the host.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod controller;
pub mod input;
mod log;
pub mod output;
pub mod peripherals;
pub mod system;

pub use config::Config;
pub use controller::{Controller, State};
pub use output::DesiredOutput;
pub use peripherals::{Converter, Peripherals, TickSource};
pub use system::{Error, System};
