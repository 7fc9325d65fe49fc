use super::*;
use crate::{
    guestbook::{MessageEntry, MessageKind},
    host::{CHAT_MESSAGES_ID, MESSAGE_INPUT_ID},
};

/// Enter submits, except while an input method is still composing text.
fn submits_on_key(key: &str, is_composing: bool) -> bool {
    key == "Enter" && !is_composing
}

#[component]
pub(super) fn GuestbookPanel() -> impl IntoView {
    let runtime = use_homepage_runtime();
    let input_ref = create_node_ref::<html::Input>();

    let entries = move || {
        runtime.state.with(|s| {
            s.guestbook
                .entries()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<(usize, MessageEntry)>>()
        })
    };

    let submit = move || {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        runtime.dispatch_action(HomepageAction::SendGuestbookMessage {
            text: input.value(),
        });
    };

    view! {
        <div class="guestbook">
            <div id=CHAT_MESSAGES_ID class="chat-messages">
                <For each=entries key=|(index, _)| *index let:item>
                    <GuestbookEntry entry=item.1 />
                </For>
            </div>
            <div class="chat-input">
                <input
                    id=MESSAGE_INPUT_ID
                    type="text"
                    placeholder="Type a message..."
                    node_ref=input_ref
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if submits_on_key(&ev.key(), ev.is_composing()) {
                            submit();
                        }
                    }
                />
                <button class="send-button" on:click=move |_| submit()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

#[component]
fn GuestbookEntry(entry: MessageEntry) -> impl IntoView {
    let MessageEntry {
        kind,
        sender_label,
        text,
    } = entry;

    view! {
        <div class=kind.css_class()>
            {(kind == MessageKind::Guest)
                .then(|| view! { <div class="sender-name">{sender_label}</div> })}
            {text}
        </div>
    }
}
