mod controls;
mod countdown;
mod layout;
mod mode_bar;
mod settings_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    mode_bar::render(frame, app_layout.mode_bar, state);
    countdown::render(frame, app_layout.countdown, state);
    countdown::render_progress(frame, app_layout.progress, state);
    controls::render(frame, app_layout.controls, state);
    controls::render_sessions(frame, app_layout.sessions, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlay last so it sits on top
    settings_panel::render(frame, state);
}
