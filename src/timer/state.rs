//! Countdown state machine.
//!
//! `TimerState` is an immutable value: every event goes through
//! [`TimerState::transition`], which returns the next state together with the
//! clock command the caller must apply. Nothing in here touches a real clock,
//! so tests drive it by feeding `TimerEvent::Tick` directly.

use super::mode::{Durations, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    SelectMode(Mode),
    Start,
    Pause,
    /// Start when idle, pause when running. Start and pause share one control.
    Toggle,
    Reset,
    Tick,
    SaveSettings { work: u32, short_break: u32, long_break: u32 },
}

/// What the owner of the clock has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    Keep,
    Arm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub clock: ClockCommand,
    /// Mode whose countdown reached zero during this transition.
    pub completed: Option<Mode>,
}

impl Transition {
    fn keep(state: TimerState) -> Self {
        Self {
            state,
            clock: ClockCommand::Keep,
            completed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: Mode,
    remaining_seconds: u32,
    is_running: bool,
    sessions_completed: u32,
    durations: Durations,
}

impl TimerState {
    pub fn new() -> Self {
        Self::with_durations(Durations::default())
    }

    pub fn with_durations(durations: Durations) -> Self {
        Self {
            mode: Mode::Work,
            remaining_seconds: durations.seconds(Mode::Work),
            is_running: false,
            sessions_completed: 0,
            durations,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// Full length of the current mode's countdown, in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.durations.seconds(self.mode)
    }

    pub fn transition(&self, event: TimerEvent) -> Transition {
        match event {
            TimerEvent::SelectMode(mode) => {
                let next = Self {
                    mode,
                    remaining_seconds: self.durations.seconds(mode),
                    is_running: false,
                    ..self.clone()
                };
                self.stopped(next)
            }
            TimerEvent::Toggle if self.is_running => self.transition(TimerEvent::Pause),
            TimerEvent::Toggle => self.transition(TimerEvent::Start),
            TimerEvent::Start => {
                if self.is_running || self.remaining_seconds == 0 {
                    return Transition::keep(self.clone());
                }
                Transition {
                    state: Self {
                        is_running: true,
                        ..self.clone()
                    },
                    clock: ClockCommand::Arm,
                    completed: None,
                }
            }
            TimerEvent::Pause => {
                if !self.is_running {
                    return Transition::keep(self.clone());
                }
                self.stopped(Self {
                    is_running: false,
                    ..self.clone()
                })
            }
            TimerEvent::Reset => self.stopped(Self {
                remaining_seconds: self.total_seconds(),
                is_running: false,
                ..self.clone()
            }),
            TimerEvent::Tick => self.tick(),
            TimerEvent::SaveSettings {
                work,
                short_break,
                long_break,
            } => {
                let durations = Durations::clamped(work, short_break, long_break);
                let new_total = durations.seconds(self.mode);
                let untouched =
                    !self.is_running && self.remaining_seconds == self.total_seconds();
                let remaining_seconds = if untouched {
                    new_total
                } else {
                    self.remaining_seconds.min(new_total)
                };
                Transition::keep(Self {
                    durations,
                    remaining_seconds,
                    ..self.clone()
                })
            }
        }
    }

    fn tick(&self) -> Transition {
        if !self.is_running {
            return Transition::keep(self.clone());
        }
        let remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if remaining_seconds > 0 {
            return Transition::keep(Self {
                remaining_seconds,
                ..self.clone()
            });
        }
        let sessions_completed = if self.mode == Mode::Work {
            self.sessions_completed + 1
        } else {
            self.sessions_completed
        };
        Transition {
            state: Self {
                remaining_seconds: 0,
                is_running: false,
                sessions_completed,
                ..self.clone()
            },
            clock: ClockCommand::Cancel,
            completed: Some(self.mode),
        }
    }

    /// Leaving the running state always cancels the clock; staying idle
    /// leaves it alone.
    fn stopped(&self, next: TimerState) -> Transition {
        let clock = if self.is_running {
            ClockCommand::Cancel
        } else {
            ClockCommand::Keep
        };
        Transition {
            state: next,
            clock,
            completed: None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let total = self.total_seconds();
        let progress = if total == 0 {
            0.0
        } else {
            (1.0 - self.remaining_seconds as f64 / total as f64).clamp(0.0, 1.0)
        };
        Snapshot {
            mode: self.mode,
            clock_text: format_clock(self.remaining_seconds),
            remaining_seconds: self.remaining_seconds,
            total_seconds: total,
            is_running: self.is_running,
            sessions_completed: self.sessions_completed,
            progress,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view handed to the renderer after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub mode: Mode,
    pub clock_text: String,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub is_running: bool,
    pub sessions_completed: u32,
    /// Fraction of the countdown already elapsed, in `[0, 1]`.
    pub progress: f64,
}

/// `MM:SS`, minutes not wrapped at the hour.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &TimerState, events: &[TimerEvent]) -> TimerState {
        events
            .iter()
            .fold(state.clone(), |s, e| s.transition(*e).state)
    }

    fn tick_n(state: TimerState, n: u32) -> TimerState {
        (0..n).fold(state, |s, _| s.transition(TimerEvent::Tick).state)
    }

    fn assert_bounded(state: &TimerState) {
        assert!(state.remaining_seconds() <= state.total_seconds());
        if state.remaining_seconds() == 0 {
            assert!(!state.is_running());
        }
    }

    #[test]
    fn test_initial_state() {
        let s = TimerState::new();
        assert_eq!(s.mode(), Mode::Work);
        assert_eq!(s.remaining_seconds(), 1500);
        assert!(!s.is_running());
        assert_eq!(s.sessions_completed(), 0);
    }

    #[test]
    fn test_select_mode_resets_and_stops() {
        let running = apply(&TimerState::new(), &[TimerEvent::Start, TimerEvent::Tick]);
        for mode in Mode::ALL {
            let t = running.transition(TimerEvent::SelectMode(mode));
            assert_eq!(t.state.mode(), mode);
            assert_eq!(t.state.remaining_seconds(), Durations::default().seconds(mode));
            assert!(!t.state.is_running());
            assert_eq!(t.clock, ClockCommand::Cancel);
        }

        let idle = TimerState::new().transition(TimerEvent::SelectMode(Mode::LongBreak));
        assert_eq!(idle.clock, ClockCommand::Keep);
        assert_eq!(idle.state.remaining_seconds(), 900);
    }

    #[test]
    fn test_start_arms_once() {
        let t = TimerState::new().transition(TimerEvent::Start);
        assert!(t.state.is_running());
        assert_eq!(t.clock, ClockCommand::Arm);

        let again = t.state.transition(TimerEvent::Start);
        assert_eq!(again.clock, ClockCommand::Keep);
        assert_eq!(again.state, t.state);
    }

    #[test]
    fn test_start_at_zero_is_noop() {
        let s = apply(
            &TimerState::new(),
            &[TimerEvent::SelectMode(Mode::ShortBreak), TimerEvent::Start],
        );
        let done = tick_n(s, 300);
        assert_eq!(done.remaining_seconds(), 0);

        let t = done.transition(TimerEvent::Start);
        assert!(!t.state.is_running());
        assert_eq!(t.clock, ClockCommand::Keep);
    }

    #[test]
    fn test_toggle() {
        let s = TimerState::new();
        let t = s.transition(TimerEvent::Toggle);
        assert!(t.state.is_running());
        assert_eq!(t.clock, ClockCommand::Arm);
        let t = t.state.transition(TimerEvent::Toggle);
        assert!(!t.state.is_running());
        assert_eq!(t.clock, ClockCommand::Cancel);
    }

    #[test]
    fn test_pause_resume_preserves_remaining() {
        let s = tick_n(TimerState::new().transition(TimerEvent::Start).state, 37);
        assert_eq!(s.remaining_seconds(), 1463);

        let paused = s.transition(TimerEvent::Pause);
        assert_eq!(paused.clock, ClockCommand::Cancel);
        assert_eq!(paused.state.remaining_seconds(), 1463);

        // Ticks while paused are ignored.
        let still = tick_n(paused.state, 5);
        assert_eq!(still.remaining_seconds(), 1463);

        let resumed = still.transition(TimerEvent::Start);
        assert!(resumed.state.is_running());
        assert_eq!(resumed.state.remaining_seconds(), 1463);
    }

    #[test]
    fn test_pause_when_idle_is_noop() {
        let t = TimerState::new().transition(TimerEvent::Pause);
        assert_eq!(t.clock, ClockCommand::Keep);
        assert_eq!(t.state, TimerState::new());
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let s = tick_n(TimerState::new().transition(TimerEvent::Start).state, 100);
        let t = s.transition(TimerEvent::Reset);
        assert_eq!(t.state.remaining_seconds(), 1500);
        assert!(!t.state.is_running());
        assert_eq!(t.clock, ClockCommand::Cancel);
        assert_eq!(t.state.sessions_completed(), 0);

        let idle = TimerState::new().transition(TimerEvent::Reset);
        assert_eq!(idle.clock, ClockCommand::Keep);
        assert_eq!(idle.state.remaining_seconds(), 1500);
    }

    #[test]
    fn test_work_completion_counts_session() {
        let mut s = TimerState::new().transition(TimerEvent::Start).state;
        for _ in 0..1499 {
            let t = s.transition(TimerEvent::Tick);
            assert_eq!(t.completed, None);
            assert_bounded(&t.state);
            s = t.state;
        }
        let last = s.transition(TimerEvent::Tick);
        assert_eq!(last.completed, Some(Mode::Work));
        assert_eq!(last.clock, ClockCommand::Cancel);
        assert_eq!(last.state.remaining_seconds(), 0);
        assert!(!last.state.is_running());
        assert_eq!(last.state.sessions_completed(), 1);

        // Extra ticks after completion change nothing.
        let after = tick_n(last.state.clone(), 3);
        assert_eq!(after, last.state);
    }

    #[test]
    fn test_break_completion_does_not_count() {
        for mode in [Mode::ShortBreak, Mode::LongBreak] {
            let s = apply(
                &TimerState::new(),
                &[TimerEvent::SelectMode(mode), TimerEvent::Start],
            );
            let done = tick_n(s, Durations::default().seconds(mode));
            assert_eq!(done.remaining_seconds(), 0);
            assert!(!done.is_running());
            assert_eq!(done.sessions_completed(), 0);
            assert_eq!(done.mode(), mode);
        }
    }

    #[test]
    fn test_no_auto_advance() {
        let done = tick_n(TimerState::new().transition(TimerEvent::Start).state, 1500);
        assert_eq!(done.mode(), Mode::Work);
    }

    #[test]
    fn test_full_work_then_short_break() {
        let done = tick_n(TimerState::new().transition(TimerEvent::Start).state, 1500);
        assert_eq!(done.remaining_seconds(), 0);
        assert!(!done.is_running());
        assert_eq!(done.sessions_completed(), 1);

        let t = done.transition(TimerEvent::SelectMode(Mode::ShortBreak));
        assert_eq!(t.state.remaining_seconds(), 300);
        assert!(!t.state.is_running());
        assert_eq!(t.state.sessions_completed(), 1);
    }

    #[test]
    fn test_save_settings_clamps() {
        let s = TimerState::new().transition(TimerEvent::SaveSettings {
            work: 5,
            short_break: 20,
            long_break: 100,
        });
        assert_eq!(s.clock, ClockCommand::Keep);
        let d = s.state.durations();
        assert_eq!(d.minutes(Mode::Work), 10);
        assert_eq!(d.minutes(Mode::ShortBreak), 15);
        assert_eq!(d.minutes(Mode::LongBreak), 45);

        let work = s.state.transition(TimerEvent::SelectMode(Mode::Work));
        assert_eq!(work.state.remaining_seconds(), 600);
    }

    #[test]
    fn test_save_settings_refreshes_untouched_countdown() {
        let t = TimerState::new().transition(TimerEvent::SaveSettings {
            work: 50,
            short_break: 5,
            long_break: 15,
        });
        assert_eq!(t.state.remaining_seconds(), 3000);
    }

    #[test]
    fn test_save_settings_keeps_running_countdown() {
        let s = tick_n(TimerState::new().transition(TimerEvent::Start).state, 10);
        let t = s.transition(TimerEvent::SaveSettings {
            work: 50,
            short_break: 5,
            long_break: 15,
        });
        assert!(t.state.is_running());
        assert_eq!(t.clock, ClockCommand::Keep);
        assert_eq!(t.state.remaining_seconds(), 1490);
        assert_eq!(t.state.total_seconds(), 3000);
    }

    #[test]
    fn test_save_settings_shorter_caps_remaining() {
        let s = tick_n(TimerState::new().transition(TimerEvent::Start).state, 10);
        let t = s.transition(TimerEvent::SaveSettings {
            work: 10,
            short_break: 5,
            long_break: 15,
        });
        assert_eq!(t.state.remaining_seconds(), 600);
        assert!(t.state.is_running());
        assert_bounded(&t.state);
    }

    #[test]
    fn test_invariants_over_mixed_sequence() {
        let events = [
            TimerEvent::Start,
            TimerEvent::Tick,
            TimerEvent::SelectMode(Mode::ShortBreak),
            TimerEvent::Toggle,
            TimerEvent::Tick,
            TimerEvent::SaveSettings { work: 60, short_break: 3, long_break: 10 },
            TimerEvent::Tick,
            TimerEvent::Pause,
            TimerEvent::Tick,
            TimerEvent::Reset,
            TimerEvent::SelectMode(Mode::LongBreak),
            TimerEvent::Start,
            TimerEvent::Start,
            TimerEvent::Tick,
        ];
        let mut s = TimerState::new();
        for e in events {
            s = s.transition(e).state;
            assert_bounded(&s);
        }
        assert_eq!(s.remaining_seconds(), 599);
    }

    #[test]
    fn test_snapshot() {
        let s = tick_n(TimerState::new().transition(TimerEvent::Start).state, 375);
        let snap = s.snapshot();
        assert_eq!(snap.clock_text, "18:45");
        assert_eq!(snap.total_seconds, 1500);
        assert!(snap.is_running);
        assert!((snap.progress - 0.25).abs() < 1e-9);

        assert_eq!(TimerState::new().snapshot().progress, 0.0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(3600), "60:00");
    }
}
