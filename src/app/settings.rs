//! Settings editor overlay state.
//!
//! Holds pending minute values for each mode while the overlay is open.
//! Nothing reaches the timer until [`SettingsEditor::commit`], which hands all
//! three values over in a single `SaveSettings` event.

use crate::timer::{Durations, Mode, TimerEvent};

#[derive(Debug)]
pub struct SettingsEditor {
    pub visible: bool,
    pub selected: usize,
    values: [u32; 3],
}

impl SettingsEditor {
    pub fn new() -> Self {
        let d = Durations::default();
        Self {
            visible: false,
            selected: 0,
            values: Mode::ALL.map(|m| d.minutes(m)),
        }
    }

    /// Open the editor seeded with the durations currently in effect.
    pub fn open(&mut self, durations: Durations) {
        self.values = Mode::ALL.map(|m| durations.minutes(m));
        self.selected = 0;
        self.visible = true;
    }

    /// Close and drop every pending edit.
    pub fn cancel(&mut self) {
        self.visible = false;
    }

    /// Close and return the event carrying all three pending values.
    pub fn commit(&mut self) -> TimerEvent {
        self.visible = false;
        let [work, short_break, long_break] = self.values;
        TimerEvent::SaveSettings {
            work,
            short_break,
            long_break,
        }
    }

    pub fn value(&self, mode: Mode) -> u32 {
        self.values[Self::index(mode)]
    }

    pub fn selected_mode(&self) -> Mode {
        Mode::ALL[self.selected]
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.values.len() {
            self.selected += 1;
        }
    }

    /// Step the selected field by `delta` minutes, staying inside its range.
    pub fn adjust(&mut self, delta: i32) {
        let mode = self.selected_mode();
        let current = self.values[self.selected] as i64;
        let next = (current + delta as i64).max(0) as u32;
        self.values[self.selected] = mode.clamp_minutes(next);
    }

    pub fn set_min(&mut self) {
        self.values[self.selected] = *self.selected_mode().minutes_range().start();
    }

    pub fn set_max(&mut self) {
        self.values[self.selected] = *self.selected_mode().minutes_range().end();
    }

    fn index(mode: Mode) -> usize {
        match mode {
            Mode::Work => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }
}

/// Slider caption, e.g. `Work Duration: 25 minutes`.
pub fn field_label(mode: Mode, minutes: u32) -> String {
    let title = match mode {
        Mode::Work => "Work Duration",
        Mode::ShortBreak => "Short Break",
        Mode::LongBreak => "Long Break",
    };
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!("{}: {} {}", title, minutes, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_current_values() {
        let mut editor = SettingsEditor::new();
        editor.open(Durations::clamped(40, 10, 30));
        assert!(editor.visible);
        assert_eq!(editor.value(Mode::Work), 40);
        assert_eq!(editor.value(Mode::ShortBreak), 10);
        assert_eq!(editor.value(Mode::LongBreak), 30);
    }

    #[test]
    fn test_adjust_stays_in_range() {
        let mut editor = SettingsEditor::new();
        editor.open(Durations::default());

        editor.adjust(100);
        assert_eq!(editor.value(Mode::Work), 60);
        editor.adjust(-100);
        assert_eq!(editor.value(Mode::Work), 10);

        editor.move_down();
        editor.set_max();
        assert_eq!(editor.value(Mode::ShortBreak), 15);
        editor.set_min();
        assert_eq!(editor.value(Mode::ShortBreak), 3);

        editor.move_down();
        editor.move_down();
        assert_eq!(editor.selected_mode(), Mode::LongBreak);
        editor.adjust(1);
        assert_eq!(editor.value(Mode::LongBreak), 16);
    }

    #[test]
    fn test_commit_delivers_all_values() {
        let mut editor = SettingsEditor::new();
        editor.open(Durations::default());
        editor.adjust(5);
        editor.move_down();
        editor.adjust(-1);
        editor.move_down();
        editor.adjust(2);

        let event = editor.commit();
        assert!(!editor.visible);
        assert_eq!(
            event,
            TimerEvent::SaveSettings {
                work: 30,
                short_break: 4,
                long_break: 17
            }
        );
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut editor = SettingsEditor::new();
        editor.open(Durations::default());
        editor.adjust(10);
        editor.cancel();
        assert!(!editor.visible);

        editor.open(Durations::default());
        assert_eq!(editor.value(Mode::Work), 25);
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label(Mode::Work, 25), "Work Duration: 25 minutes");
        assert_eq!(field_label(Mode::ShortBreak, 1), "Short Break: 1 minute");
    }
}
