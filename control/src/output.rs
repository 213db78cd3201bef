/// Desired state of the output peripherals.
///
/// This structure is derived purely from the state of the controller. It
/// asks the hardware to switch the relay and to lit the indicator LED.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub relay: bool,
    pub indicator: bool,
}
