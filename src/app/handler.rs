use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::timer::{Mode, TimerEvent};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick { .. } => state.apply(TimerEvent::Tick),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Settings overlay captures all input when visible
    if state.settings.visible {
        state.dirty = true;
        return handle_settings_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('1') => state.apply(TimerEvent::SelectMode(Mode::Work)),
        KeyCode::Char('2') => state.apply(TimerEvent::SelectMode(Mode::ShortBreak)),
        KeyCode::Char('3') => state.apply(TimerEvent::SelectMode(Mode::LongBreak)),
        KeyCode::Tab => {
            let next = state.timer.mode().next();
            state.apply(TimerEvent::SelectMode(next))
        }
        KeyCode::BackTab => {
            let prev = state.timer.mode().prev();
            state.apply(TimerEvent::SelectMode(prev))
        }
        KeyCode::Char(' ') | KeyCode::Enter => state.apply(TimerEvent::Toggle),
        KeyCode::Char('r') | KeyCode::Char('R') => state.apply(TimerEvent::Reset),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            let durations = state.timer.durations();
            state.settings.open(durations);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let editor = &mut state.settings;
    match key.code {
        KeyCode::Esc => editor.cancel(),
        KeyCode::Enter => {
            let event = editor.commit();
            return state.apply(event);
        }
        KeyCode::Up | KeyCode::Char('k') => editor.move_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => editor.move_down(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => editor.adjust(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => editor.adjust(1),
        KeyCode::PageDown => editor.adjust(-5),
        KeyCode::PageUp => editor.adjust(5),
        KeyCode::Home => editor.set_min(),
        KeyCode::End => editor.set_max(),
        _ => {}
    }
    vec![]
}
