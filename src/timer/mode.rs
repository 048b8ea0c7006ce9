use std::ops::RangeInclusive;

/// One of the three timer activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

/// Display accent of a mode, mapped to a concrete color by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Gray,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    pub fn default_minutes(self) -> u32 {
        match self {
            Mode::Work => 25,
            Mode::ShortBreak => 5,
            Mode::LongBreak => 15,
        }
    }

    /// Inclusive range of minutes the settings editor accepts for this mode.
    pub fn minutes_range(self) -> RangeInclusive<u32> {
        match self {
            Mode::Work => 10..=60,
            Mode::ShortBreak => 3..=15,
            Mode::LongBreak => 10..=45,
        }
    }

    pub fn clamp_minutes(self, minutes: u32) -> u32 {
        let range = self.minutes_range();
        minutes.clamp(*range.start(), *range.end())
    }

    pub fn accent(self) -> Accent {
        match self {
            Mode::Work => Accent::Red,
            Mode::ShortBreak | Mode::LongBreak => Accent::Gray,
        }
    }

    pub fn next(self) -> Mode {
        match self {
            Mode::Work => Mode::ShortBreak,
            Mode::ShortBreak => Mode::LongBreak,
            Mode::LongBreak => Mode::Work,
        }
    }

    pub fn prev(self) -> Mode {
        match self {
            Mode::Work => Mode::LongBreak,
            Mode::ShortBreak => Mode::Work,
            Mode::LongBreak => Mode::ShortBreak,
        }
    }
}

/// Configured minutes per mode. Every value is kept inside its mode's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    work: u32,
    short_break: u32,
    long_break: u32,
}

impl Durations {
    /// Build from raw minute values, clamping each into its mode's range.
    pub fn clamped(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work: Mode::Work.clamp_minutes(work),
            short_break: Mode::ShortBreak.clamp_minutes(short_break),
            long_break: Mode::LongBreak.clamp_minutes(long_break),
        }
    }

    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    pub fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode) * 60
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: Mode::Work.default_minutes(),
            short_break: Mode::ShortBreak.default_minutes(),
            long_break: Mode::LongBreak.default_minutes(),
        }
    }
}
