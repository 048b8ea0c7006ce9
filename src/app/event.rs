use crate::timer::clock::ClockTick;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second elapsed on the clock armed under `generation`
    Tick { generation: u64 },
}

impl From<ClockTick> for AppEvent {
    fn from(tick: ClockTick) -> Self {
        AppEvent::Tick {
            generation: tick.generation,
        }
    }
}
