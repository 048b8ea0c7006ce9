use crate::app::state::AppState;
use crate::timer::Mode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let active = state.timer.mode();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, mode) in Mode::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, mode.label());
        let style = if *mode == active {
            Theme::tab_active(*mode)
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
