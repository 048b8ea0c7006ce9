//! Timer core: modes and their durations, the countdown state machine, and the
//! clock that drives it.

pub mod clock;
pub mod mode;
pub mod state;

pub use clock::{Clock, IntervalClock};
pub use mode::{Durations, Mode};
pub use state::{ClockCommand, TimerEvent, TimerState};
