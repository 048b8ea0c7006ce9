use crate::app::settings::field_label;
use crate::app::state::AppState;
use crate::timer::Mode;
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Text slider for `value` within `min..=max`, `width` cells wide.
pub fn slider(value: u32, min: u32, max: u32, width: usize) -> String {
    if width < 2 {
        return String::new();
    }
    let span = max.saturating_sub(min).max(1) as usize;
    let pos = (value.saturating_sub(min) as usize * (width - 1)) / span;
    let pos = pos.min(width - 1);
    let mut s = String::with_capacity(width * 3);
    for i in 0..width {
        s.push(if i < pos {
            '━'
        } else if i == pos {
            '●'
        } else {
            '─'
        });
    }
    s
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let editor = &state.settings;
    if !editor.visible {
        return;
    }

    let popup_area = centered_popup(frame.area(), 60, 44, 13);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Settings ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_AMBER))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 || inner.width < 20 {
        return;
    }

    let slider_w = (inner.width as usize).saturating_sub(12);
    let mut lines: Vec<Line> = Vec::new();
    for (i, mode) in Mode::ALL.into_iter().enumerate() {
        let minutes = editor.value(mode);
        let range = mode.minutes_range();
        let label_style = if i == editor.selected {
            Theme::selected_row()
        } else {
            Style::default().fg(Theme::TEXT_PRIMARY)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ", field_label(mode, minutes)),
            label_style,
        )));
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>3} ", range.start()), Theme::hint_text()),
            Span::styled(
                slider(minutes, *range.start(), *range.end(), slider_w),
                Style::default().fg(Theme::accent(mode)),
            ),
            Span::styled(format!(" {:<3}", range.end()), Theme::hint_text()),
        ]));
        lines.push(Line::default());
    }

    let list_h = inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, list_h),
    );

    // Keybinding help
    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(" ↑↓", Theme::key_hint()),
        Span::styled(" Field  ", Theme::hint_text()),
        Span::styled("←→", Theme::key_hint()),
        Span::styled(" ±1  ", Theme::hint_text()),
        Span::styled("PgUp/PgDn", Theme::key_hint()),
        Span::styled(" ±5  ", Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Save  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Cancel", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
