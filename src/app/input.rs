use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{AppState, InputMode};

/// Route one key event. Returns true when the app should quit.
pub(crate) fn handle_key_event(key: KeyEvent, state: &mut AppState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if state.input_mode() == InputMode::Normal
        && state.hotkey.is_some_and(|hotkey| hotkey.matches(&key))
    {
        if let Some(filter) = state.filter.as_mut() {
            filter.on_hotkey_triggered();
            return false;
        }
    }

    match state.input_mode() {
        InputMode::Normal => handle_normal_mode(key, state),
        InputMode::Filter => handle_filter_mode(key, state),
    }
}

fn handle_normal_mode(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('/') => {
            if let Some(filter) = state.filter.as_mut() {
                filter.on_hotkey_triggered();
            }
        }
        KeyCode::Char('x') => {
            let Some(filter) = state.filter.as_mut() else {
                return false;
            };
            if !filter.query().is_empty() {
                filter.on_query_change(&mut state.registry, "");
                state.set_message("Filter cleared");
            }
        }
        KeyCode::Enter => submit(state),
        _ => {}
    }

    false
}

fn handle_filter_mode(key: KeyEvent, state: &mut AppState) -> bool {
    let Some(filter) = state.filter.as_mut() else {
        return false;
    };

    match key.code {
        KeyCode::Esc => filter.blur(),
        KeyCode::Enter => submit(state),
        KeyCode::Backspace => {
            let mut query = filter.query().to_string();
            query.pop();
            filter.on_query_change(&mut state.registry, query);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            filter.on_query_change(&mut state.registry, "");
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                let mut query = filter.query().to_string();
                query.push(ch);
                filter.on_query_change(&mut state.registry, query);
            }
        }
        _ => {}
    }

    false
}

fn submit(state: &mut AppState) {
    let Some(filter) = state.filter.as_mut() else {
        return;
    };
    let Some(index) = filter.on_submit(&mut state.registry) else {
        state.set_message("No visible label to select");
        return;
    };
    let label = state
        .active_candidates()
        .get(index)
        .map(|ch| ch.label.clone())
        .unwrap_or_default();
    state.set_message(format!("Selected: {label}"));
}
