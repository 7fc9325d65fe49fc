use super::{guestbook::GuestbookPanel, *};
use crate::model::{DragBinding, WindowContent, WindowPosition, WindowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowLayout {
    state: WindowState,
    position: WindowPosition,
    z_index: Option<i32>,
}

fn window_class(state: WindowState) -> String {
    match state.css_class() {
        Some(marker) => format!("window {marker}"),
        None => "window".to_string(),
    }
}

fn window_style(layout: WindowLayout) -> String {
    let z_index = layout
        .z_index
        .map(|z| z.to_string())
        .unwrap_or_else(|| "auto".to_string());
    let display = if layout.state.is_hidden() {
        "display:none;"
    } else {
        ""
    };
    format!(
        "top:{}px;left:{}px;z-index:{};{}",
        layout.position.top, layout.position.left, z_index, display
    )
}

#[component]
pub(super) fn HomepageWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_homepage_runtime();
    let Some(record) = runtime
        .state
        .with_untracked(|s| s.window(&window_id).cloned())
    else {
        return ().into_view();
    };

    let id = store_value(window_id);
    let drag = record.drag;

    // Title, drag binding, and content are fixed; only the layout tracks state.
    let layout = create_memo(move |_| {
        runtime.state.with(|s| {
            id.with_value(|window_id| {
                s.window(window_id).map(|w| WindowLayout {
                    state: w.state,
                    position: w.position,
                    z_index: w.z_index,
                })
            })
        })
    });

    let touch = move |ev: web_sys::PointerEvent| {
        let window_id = id.get_value();
        runtime.dispatch_action(HomepageAction::WindowInteraction {
            window_id: window_id.clone(),
        });
        if drag == DragBinding::WholeSurface && ev.button() == 0 {
            ev.prevent_default();
            runtime.dispatch_action(HomepageAction::BeginDrag {
                window_id,
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let begin_handle_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        stop_pointer_event(&ev);
        runtime.dispatch_action(HomepageAction::BeginDrag {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move |_| {
        runtime.dispatch_action(HomepageAction::MinimizeWindow {
            window_id: id.get_value(),
        })
    };
    let maximize = move |_| {
        runtime.dispatch_action(HomepageAction::MaximizeWindow {
            window_id: id.get_value(),
        })
    };
    let close = move |_| {
        runtime.dispatch_action(HomepageAction::CloseWindow {
            window_id: id.get_value(),
        })
    };

    let header_id = (drag == DragBinding::Handle).then(|| record.id.drag_handle_dom_id());
    let controls = (drag != DragBinding::Static).then(|| {
        view! {
            <div class="window-controls">
                <button
                    class="minimize"
                    aria-label="Minimize window"
                    on:pointerdown=move |ev| stop_pointer_event(&ev)
                    on:click=minimize
                >
                    "_"
                </button>
                <button
                    class="maximize"
                    aria-label="Maximize window"
                    on:pointerdown=move |ev| stop_pointer_event(&ev)
                    on:click=maximize
                >
                    "□"
                </button>
                <button
                    class="close"
                    aria-label="Close window"
                    on:pointerdown=move |ev| stop_pointer_event(&ev)
                    on:click=close
                >
                    "×"
                </button>
            </div>
        }
    });

    let header = if drag == DragBinding::Handle {
        view! {
            <header id=header_id class="window-header" on:pointerdown=begin_handle_drag>
                <span class="window-title">{record.title.clone()}</span>
                {controls}
            </header>
        }
    } else {
        view! {
            <header class="window-header">
                <span class="window-title">{record.title.clone()}</span>
                {controls}
            </header>
        }
    };

    view! {
        <section
            id=record.id.as_str().to_string()
            class=move || layout.get().map(|l| window_class(l.state)).unwrap_or_default()
            style=move || layout.get().map(window_style).unwrap_or_default()
            on:pointerdown=touch
            role="dialog"
            aria-label=record.title.clone()
        >
            {header}
            <div class="window-content">
                <WindowBody content=record.content.clone() own_id=record.id.clone() />
            </div>
        </section>
    }
    .into_view()
}

#[component]
fn WindowBody(content: WindowContent, own_id: WindowId) -> impl IntoView {
    match content {
        WindowContent::Launcher => view! { <LauncherIcons own_id=own_id /> }.into_view(),
        WindowContent::Text { paragraphs } => paragraphs
            .into_iter()
            .map(|paragraph| view! { <p>{paragraph}</p> })
            .collect_view(),
        WindowContent::Guestbook => view! { <GuestbookPanel /> }.into_view(),
    }
}

#[component]
fn LauncherIcons(own_id: WindowId) -> impl IntoView {
    let runtime = use_homepage_runtime();
    let targets = runtime.state.with_untracked(|s| {
        s.windows
            .iter()
            .filter(|w| w.id != own_id && w.drag != DragBinding::Static)
            .map(|w| (w.id.clone(), w.title.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="launcher-icons">
            {targets
                .into_iter()
                .map(|(window_id, title)| {
                    let target = store_value(window_id);
                    view! {
                        <button
                            class="launcher-icon"
                            on:click=move |_| {
                                runtime.dispatch_action(HomepageAction::OpenWindow {
                                    window_id: target.get_value(),
                                })
                            }
                        >
                            {title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_windows_render_display_none_and_auto_stacking() {
        let style = window_style(WindowLayout {
            state: WindowState::Minimized,
            position: WindowPosition { top: 40, left: 12 },
            z_index: None,
        });
        assert_eq!(style, "top:40px;left:12px;z-index:auto;display:none;");
    }

    #[test]
    fn window_class_carries_state_marker() {
        assert_eq!(window_class(WindowState::Normal), "window");
        assert_eq!(window_class(WindowState::Maximized), "window maximized");
        assert_eq!(window_class(WindowState::Minimized), "window minimized");
    }
}
