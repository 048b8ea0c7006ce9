use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HELP: &str = "1/2/3 mode  space start/pause  r reset  s settings  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Phase indicator in the mode's accent
    parts.push(Span::styled(
        format!(" [{}] ", state.phase_label()),
        Style::default()
            .fg(Color::White)
            .bg(Theme::accent(state.timer.mode()))
            .add_modifier(Modifier::BOLD),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Pad to fill remaining space, then key help on the right
    let help = if state.config.ui.show_help { HELP } else { "" };
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + help.len() + 1);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    if !help.is_empty() {
        parts.push(Span::styled(
            format!("{} ", help),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
