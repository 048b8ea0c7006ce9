use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (toggle_icon, toggle_label) = if state.timer.is_running() {
        ("⏸", "Pause")
    } else {
        ("▶", "Start")
    };
    let button = Style::default()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(format!(" {} {} ", toggle_icon, toggle_label), button),
        Span::styled(" space", Theme::key_hint()),
        Span::raw("    "),
        Span::styled(" ↺ Reset ", Theme::border().add_modifier(Modifier::BOLD)),
        Span::styled(" r", Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_sessions(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = format!("Sessions completed: {}", state.timer.sessions_completed());
    let paragraph = Paragraph::new(Span::styled(text, Theme::hint_text()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
