//! Large `MM:SS` readout drawn with a 3x5 block font.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

const GLYPH_HEIGHT: usize = 5;

fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        _ => ["   "; GLYPH_HEIGHT],
    }
}

/// Rows of the big-font rendering of `text`, one space between glyphs.
pub fn big_text_rows(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let snap = state.timer.snapshot();
    let style = Theme::clock(snap.is_running);
    let rows = big_text_rows(&snap.clock_text);
    let big_width = rows
        .first()
        .map(|r| r.chars().count())
        .unwrap_or(0) as u16;

    let lines: Vec<Line> = if area.height as usize >= GLYPH_HEIGHT && area.width >= big_width {
        rows.into_iter()
            .map(|r| Line::from(Span::styled(r, style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(snap.clock_text.clone(), style))]
    };

    let pad = (area.height as usize).saturating_sub(lines.len()) / 2;
    let mut padded: Vec<Line> = vec![Line::default(); pad];
    padded.extend(lines);

    frame.render_widget(Paragraph::new(padded).alignment(Alignment::Center), area);
}

pub fn render_progress(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.config.ui.show_progress {
        return;
    }
    let snap = state.timer.snapshot();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Theme::accent(snap.mode)).bg(Theme::BG_SURFACE))
        .ratio(snap.progress)
        .label("");
    frame.render_widget(gauge, area);
}
