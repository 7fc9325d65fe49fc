//! Window open/close/minimize/maximize transitions and the raise-on-interaction guards.
//!
//! Every operation is a silent no-op for unknown window ids: UI wiring references ids
//! defensively and a missing target is not an error. Each function returns whether state changed.

use crate::{
    model::{HomepageState, RaiseGuard, WindowId, WindowState},
    z_order::next_z_index,
};

/// Raises `window_id` to the current top of the stack.
pub fn raise_window(state: &mut HomepageState, window_id: &WindowId) -> bool {
    let z_index = next_z_index(&state.windows);
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.z_index = Some(z_index);
    true
}

/// Shows a window in normal state on top and arms its one-shot raise guard.
pub fn open_window(state: &mut HomepageState, window_id: &WindowId) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.state = WindowState::Normal;
    raise_window(state, window_id);
    arm_raise_guard(state, window_id);
    true
}

/// Hides a window. There is no destroy; closing and minimizing are the same transition.
pub fn close_window(state: &mut HomepageState, window_id: &WindowId) -> bool {
    hide_window(state, window_id)
}

/// Hides a window, clearing any maximized state.
pub fn minimize_window(state: &mut HomepageState, window_id: &WindowId) -> bool {
    hide_window(state, window_id)
}

/// Toggles between maximized and normal, raising the window either way.
pub fn maximize_window(state: &mut HomepageState, window_id: &WindowId) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.state = if window.is_maximized() {
        WindowState::Normal
    } else {
        WindowState::Maximized
    };
    raise_window(state, window_id)
}

/// Reports a user interaction (pointer down) on a window.
///
/// Fires the window's armed raise guard at most once: the window is raised to the then-current
/// top, which covers windows opened after it but before the user touched it.
pub fn notify_window_interaction(state: &mut HomepageState, window_id: &WindowId) -> bool {
    let Some(guard) = state
        .raise_guards
        .iter_mut()
        .find(|guard| &guard.window_id == window_id && !guard.fired)
    else {
        return false;
    };
    guard.fired = true;
    raise_window(state, window_id)
}

fn hide_window(state: &mut HomepageState, window_id: &WindowId) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.state = WindowState::Minimized;
    true
}

fn arm_raise_guard(state: &mut HomepageState, window_id: &WindowId) {
    match state
        .raise_guards
        .iter_mut()
        .find(|guard| &guard.window_id == window_id)
    {
        Some(guard) => guard.fired = false,
        None => state.raise_guards.push(RaiseGuard {
            window_id: window_id.clone(),
            fired: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRecord;

    fn state_with(ids: &[&str]) -> HomepageState {
        HomepageState::new(ids.iter().map(|id| WindowRecord::new(*id)).collect())
    }

    fn window<'a>(state: &'a HomepageState, id: &str) -> &'a WindowRecord {
        state.window(&WindowId::new(id)).expect("window exists")
    }

    #[test]
    fn open_restores_normal_state_and_raises() {
        let mut state = state_with(&["about", "links"]);
        let about = WindowId::new("about");
        state.window_mut(&about).unwrap().state = WindowState::Maximized;

        assert!(open_window(&mut state, &about));
        assert_eq!(window(&state, "about").state, WindowState::Normal);
        assert_eq!(window(&state, "about").z_index, Some(21));

        assert!(open_window(&mut state, &WindowId::new("links")));
        assert_eq!(window(&state, "links").z_index, Some(22));
    }

    #[test]
    fn open_then_maximize_yields_maximized_and_double_toggle_restores() {
        let mut state = state_with(&["about"]);
        let about = WindowId::new("about");
        minimize_window(&mut state, &about);

        open_window(&mut state, &about);
        maximize_window(&mut state, &about);
        assert_eq!(window(&state, "about").state, WindowState::Maximized);

        maximize_window(&mut state, &about);
        assert_eq!(window(&state, "about").state, WindowState::Normal);
    }

    #[test]
    fn maximize_raises_on_each_toggle() {
        let mut state = state_with(&["about", "links"]);
        let about = WindowId::new("about");
        state.window_mut(&WindowId::new("links")).unwrap().z_index = Some(40);

        maximize_window(&mut state, &about);
        assert_eq!(window(&state, "about").z_index, Some(41));
        maximize_window(&mut state, &about);
        assert_eq!(window(&state, "about").z_index, Some(42));
    }

    #[test]
    fn close_and_minimize_are_observably_identical() {
        for initial in [
            WindowState::Normal,
            WindowState::Minimized,
            WindowState::Maximized,
        ] {
            let mut closed = state_with(&["about"]);
            closed.windows[0].state = initial;
            closed.windows[0].z_index = Some(33);
            let mut minimized = closed.clone();

            close_window(&mut closed, &WindowId::new("about"));
            minimize_window(&mut minimized, &WindowId::new("about"));

            assert_eq!(closed, minimized);
            assert_eq!(closed.windows[0].state, WindowState::Minimized);
            assert_eq!(closed.windows[0].z_index, Some(33));
        }
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let mut state = state_with(&["about"]);
        let before = state.clone();
        let ghost = WindowId::new("ghost");

        assert!(!open_window(&mut state, &ghost));
        assert!(!close_window(&mut state, &ghost));
        assert!(!minimize_window(&mut state, &ghost));
        assert!(!maximize_window(&mut state, &ghost));
        assert!(!raise_window(&mut state, &ghost));
        assert!(!notify_window_interaction(&mut state, &ghost));
        assert_eq!(state, before);
    }

    #[test]
    fn raise_guard_fires_once_after_later_windows_open() {
        let mut state = state_with(&["about", "links"]);
        let about = WindowId::new("about");
        let links = WindowId::new("links");

        open_window(&mut state, &about);
        open_window(&mut state, &links);
        assert_eq!(window(&state, "about").z_index, Some(21));
        assert_eq!(window(&state, "links").z_index, Some(22));

        assert!(notify_window_interaction(&mut state, &about));
        assert_eq!(window(&state, "about").z_index, Some(23));

        assert!(!notify_window_interaction(&mut state, &about));
        assert_eq!(window(&state, "about").z_index, Some(23));
    }

    #[test]
    fn reopening_rearms_the_guard_without_duplicating_it() {
        let mut state = state_with(&["about"]);
        let about = WindowId::new("about");

        open_window(&mut state, &about);
        notify_window_interaction(&mut state, &about);
        open_window(&mut state, &about);
        open_window(&mut state, &about);

        assert_eq!(state.raise_guards.len(), 1);
        assert!(notify_window_interaction(&mut state, &about));
        assert!(!notify_window_interaction(&mut state, &about));
    }

    #[test]
    fn interaction_without_open_does_not_raise() {
        let mut state = state_with(&["about"]);
        assert!(!notify_window_interaction(&mut state, &WindowId::new("about")));
        assert_eq!(window(&state, "about").z_index, None);
    }
}
