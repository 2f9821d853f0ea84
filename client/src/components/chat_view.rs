//! Pizza Bot chat view: transcript, typing indicator, and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<ChatState>` from context. The send
//! turn itself lives in `state::chat::submit`; this component only wires DOM
//! events to it and keeps the newest message in view.

#[cfg(test)]
#[path = "chat_view_test.rs"]
mod chat_view_test;

use leptos::prelude::*;

use crate::net::types::{ChatMessage, Sender};
use crate::state::chat::ChatState;

fn wrapper_class(sender: Sender) -> String {
    format!("message-wrapper {}", sender.css_modifier())
}

fn bubble_class(sender: Sender) -> String {
    format!("message {}", sender.css_modifier())
}

fn is_send_key(key: &str) -> bool {
    key == "Enter"
}

/// Input and buttons are locked while a request is outstanding.
fn controls_disabled(state: &ChatState) -> bool {
    state.loading
}

/// Transcript length and pending flag. Keystrokes leave it unchanged, so the
/// memo does not notify while the user is typing.
fn scroll_trigger(chat: RwSignal<ChatState>) -> Memo<(usize, bool)> {
    Memo::new(move |_| chat.with(|c| (c.messages.len(), c.loading)))
}

/// Chat view showing the transcript and an input for sending new messages.
#[component]
pub fn ChatView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Rehydrate the stored transcript once on mount. SSR renders the greeting.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        chat.set(ChatState::restore(&crate::util::storage::BrowserStorage));
    });

    let trigger = scroll_trigger(chat);
    let messages = Memo::new(move |_| chat.with(|c| c.messages.clone()));
    let disabled = Memo::new(move |_| chat.with(controls_disabled));

    Effect::new(move || {
        trigger.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let is_loading = move || disabled.get();

    let do_send = move || {
        if !chat.with_untracked(ChatState::can_send) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let backend = crate::net::api::HttpChatBackend::default();
                crate::state::chat::submit(&chat, &backend, &crate::util::storage::BrowserStorage).await;
            });
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let on_reset = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::state::chat::clear_transcript(&chat, &crate::util::storage::BrowserStorage);
        }
    };

    view! {
        <div class="chat-container">
            <div class="chat-header">
                <h1>"\u{1F355} Pizza Bot"</h1>
                <button class="chat-header__reset" on:click=on_reset disabled=is_loading>
                    "Nova conversa"
                </button>
            </div>

            <div class="messages-container" node_ref=messages_ref>
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message/> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    is_loading()
                        .then(|| {
                            view! {
                                <div class=wrapper_class(Sender::Bot)>
                                    <div class="avatar">{Sender::Bot.avatar()}</div>
                                    <div class=bubble_class(Sender::Bot)>
                                        <div class="typing-indicator">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="input-container">
                <input
                    type="text"
                    placeholder="Digite sua mensagem..."
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.input = value);
                    }
                    on:keydown=on_keydown
                    disabled=is_loading
                />
                <button on:click=on_click disabled=is_loading>
                    "Enviar"
                </button>
            </div>
        </div>
    }
}

/// One transcript entry with its sender avatar.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    view! {
        <div class=wrapper_class(message.sender)>
            <div class="avatar">{message.sender.avatar()}</div>
            <div class=bubble_class(message.sender)>
                <div class="message-content">{message.text}</div>
            </div>
        </div>
    }
}
