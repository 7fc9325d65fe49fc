//! Pointer-drag sessions for moving windows.
//!
//! There is one drag slot for the whole page. Starting a drag replaces whatever session was
//! active; moves are routed only to the latest session.

use crate::{
    model::{DragSession, HomepageState, InteractionState, PointerPosition, WindowId},
    z_order::next_z_index,
};

/// Starts a drag session on `window_id` at `pointer`.
///
/// Static windows (including the home window) and unknown ids are ignored. Maximized windows
/// still open a session; their moves are dropped until the gesture ends.
pub fn begin_drag(
    state: &HomepageState,
    interaction: &mut InteractionState,
    window_id: &WindowId,
    pointer: PointerPosition,
) -> bool {
    let draggable = state
        .window(window_id)
        .map(|w| w.is_draggable())
        .unwrap_or(false);
    if !draggable {
        return false;
    }
    interaction.dragging = Some(DragSession {
        window_id: window_id.clone(),
        last_pointer: pointer,
    });
    true
}

/// Moves the dragged window by the pointer delta since the last recorded position and raises it.
///
/// While the window is maximized the event is dropped entirely: neither the position nor the
/// recorded pointer changes.
pub fn update_drag(
    state: &mut HomepageState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(session) = interaction.dragging.as_mut() else {
        return false;
    };
    let z_index = next_z_index(&state.windows);
    let Some(window) = state.window_mut(&session.window_id) else {
        return false;
    };
    if window.is_maximized() {
        return false;
    }

    let dx = session.last_pointer.x - pointer.x;
    let dy = session.last_pointer.y - pointer.y;
    session.last_pointer = pointer;

    window.position.top -= dy;
    window.position.left -= dx;
    window.z_index = Some(z_index);
    true
}

/// Ends the active drag session, if any.
pub fn end_drag(interaction: &mut InteractionState) -> bool {
    interaction.dragging.take().is_some()
}
