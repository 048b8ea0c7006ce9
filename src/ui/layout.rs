use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub mode_bar: Rect,
    pub countdown: Rect,
    pub progress: Rect,
    pub controls: Rect,
    pub sessions: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode bar
            Constraint::Min(3),    // Countdown
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Start/Pause + Reset
            Constraint::Length(1), // Sessions completed
            Constraint::Length(1), // Bottom padding
        ])
        .split(content);

    // Keep the gauge away from the window edges.
    let [progress] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(chunks[2]);

    AppLayout {
        mode_bar: chunks[0],
        countdown: chunks[1],
        progress,
        controls: chunks[4],
        sessions: chunks[5],
        status_bar,
    }
}

/// Rectangle of `percent_x` by `height` centred in `area`, never smaller than
/// `min_w` columns where the area allows it.
pub fn centered_popup(area: Rect, percent_x: u16, min_w: u16, height: u16) -> Rect {
    let w = (area.width * percent_x / 100)
        .max(min_w)
        .min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
