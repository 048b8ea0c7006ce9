//! Core application logic: state management, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod settings;
pub mod state;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::timer::Clock;
use tracing::{debug, info};

/// Run one event through the handler and apply the resulting actions to the
/// clock. Ticks from a cancelled or replaced arm are dropped here.
pub fn dispatch(state: &mut AppState, clock: &mut impl Clock, event: AppEvent) {
    if let AppEvent::Tick { generation } = event {
        if !clock.accepts(generation) {
            debug!(generation, "dropping stale tick");
            return;
        }
    }

    for action in handler::handle_event(state, event) {
        match action {
            Action::ArmClock => clock.arm(),
            Action::CancelClock => clock.cancel(),
            Action::Quit => {
                clock.cancel();
                state.should_quit = true;
                info!(
                    sessions = state.timer.sessions_completed(),
                    "quit requested"
                );
            }
        }
    }
}
