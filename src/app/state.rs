use crate::app::action::Action;
use crate::app::settings::SettingsEditor;
use crate::config::AppConfig;
use crate::timer::{ClockCommand, Mode, TimerEvent, TimerState};
use chrono::Local;
use tracing::info;

pub struct AppState {
    pub config: AppConfig,
    pub timer: TimerState,
    pub settings: SettingsEditor,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            timer: TimerState::new(),
            settings: SettingsEditor::new(),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Feed one event through the timer and translate the clock command
    /// into actions for the event loop.
    pub fn apply(&mut self, event: TimerEvent) -> Vec<Action> {
        let transition = self.timer.transition(event);
        if transition.state != self.timer {
            self.dirty = true;
        }

        match event {
            TimerEvent::Tick => {}
            TimerEvent::SaveSettings { .. } => {
                let d = transition.state.durations();
                info!(
                    work = d.minutes(Mode::Work),
                    short_break = d.minutes(Mode::ShortBreak),
                    long_break = d.minutes(Mode::LongBreak),
                    "settings saved"
                );
                self.set_status("Settings saved".to_string());
            }
            _ => {
                info!(
                    ?event,
                    mode = transition.state.mode().label(),
                    remaining = transition.state.remaining_seconds(),
                    running = transition.state.is_running(),
                    "timer transition"
                );
                self.status_message = None;
            }
        }

        if let Some(mode) = transition.completed {
            info!(
                mode = mode.label(),
                sessions = transition.state.sessions_completed(),
                "countdown complete"
            );
            let at = Local::now().format("%H:%M");
            let text = match mode {
                Mode::Work => format!("Work session complete at {}", at),
                _ => format!("{} over at {}", mode.label(), at),
            };
            self.set_status(text);
        }

        self.timer = transition.state;
        match transition.clock {
            ClockCommand::Keep => vec![],
            ClockCommand::Arm => vec![Action::ArmClock],
            ClockCommand::Cancel => vec![Action::CancelClock],
        }
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(text);
        self.dirty = true;
    }

    /// Short word describing where the countdown stands.
    pub fn phase_label(&self) -> &'static str {
        if self.timer.is_running() {
            "RUNNING"
        } else if self.timer.remaining_seconds() == 0 {
            "DONE"
        } else if self.timer.remaining_seconds() == self.timer.total_seconds() {
            "READY"
        } else {
            "PAUSED"
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let snap = self.timer.snapshot();
        format!(
            "{} | {} | Sessions: {}",
            snap.mode.label(),
            snap.clock_text,
            snap.sessions_completed
        )
    }
}
