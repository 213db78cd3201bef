use pedal_timer_control::TickSource;

use crate::system::hal::pac::TIM3;
use crate::system::hal::timer::{Event, Timer};

/// Timer interrupting at the rate of the control loop.
pub struct Tick {
    timer: Timer<TIM3>,
}

impl Tick {
    #[must_use]
    pub fn new(mut timer: Timer<TIM3>) -> Self {
        timer.listen(Event::TimeOut);
        Self { timer }
    }
}

impl TickSource for Tick {
    fn clear(&mut self) {
        self.timer.clear_irq();
    }
}
