use dioxus::prelude::*;

use remate_common::chat::{Conversation, ConversationId};
use remate_common::filter;
use remate_common::ids::{Clock, SystemClock};

use super::session_state::use_session;
use super::shared_state::use_shared_state;
use super::toast::use_toasts;

/// Conversation list on the left, the open thread on the right.
#[component]
pub fn ChatView() -> Element {
    let session = use_session();
    let mut shared_state = use_shared_state();
    let mut toasts = use_toasts();
    let mut selected = use_signal(|| None::<ConversationId>);
    let mut draft = use_signal(String::new);

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };

    let conversations: Vec<Conversation> =
        filter::conversations_for(shared_state.read().store.conversations(), &user.id)
            .into_iter()
            .cloned()
            .collect();
    let open = {
        let wanted = selected.read().clone();
        match wanted {
            Some(id) => conversations.iter().find(|c| c.id == id).cloned(),
            None => conversations.first().cloned(),
        }
    };
    let open_id = open.as_ref().map(|c| c.id.clone());

    let sender = user.clone();
    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(conversation) = open_id.clone() else {
            return;
        };
        let text = draft.read().clone();
        let sent = shared_state
            .write()
            .store
            .send_message(&conversation, &sender, &text, SystemClock.now())
            .map(|_| ());
        match sent {
            Ok(()) => draft.set(String::new()),
            Err(err) => {
                tracing::warn!(%conversation, "message not sent: {err}");
                toasts.write().market_error(&err);
            }
        }
    };

    let thread = match open.as_ref() {
        Some(conv) => {
            let other = conv
                .other_participant_name(&user.name)
                .unwrap_or("Unknown")
                .to_string();
            rsx! {
                div { class: "thread-header", h3 { "{other}" } }
                div { class: "messages",
                    for msg in conv.messages.iter() {
                        {
                            let class = if msg.sender_id == user.id { "message own" } else { "message" };
                            let time = msg.sent_at.format("%H:%M").to_string();
                            rsx! {
                                div { class: "{class}", key: "{msg.id}",
                                    span { class: "sender", "{msg.sender_name}" }
                                    p { "{msg.text}" }
                                    span { class: "timestamp", "{time}" }
                                }
                            }
                        }
                    }
                }
                form { class: "message-input", onsubmit: send,
                    input {
                        r#type: "text",
                        placeholder: "Type a message...",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: draft.read().trim().is_empty(),
                        "Send"
                    }
                }
            }
        }
        None => rsx! {
            p { class: "empty-state", "Select a conversation to start chatting" }
        },
    };

    rsx! {
        div { class: "chat-view",
            div { class: "conversation-list",
                h3 { "Messages" }
                if conversations.is_empty() {
                    p { class: "empty-state", "No conversations yet" }
                }
                for conv in conversations.iter() {
                    {
                        let id = conv.id.clone();
                        let is_open = open.as_ref().is_some_and(|o| o.id == conv.id);
                        let class = if is_open { "conversation active" } else { "conversation" };
                        let other = conv.other_participant_name(&user.name).unwrap_or("Unknown").to_string();
                        let when = conv
                            .last_message_at
                            .map(|t| t.format("%d %b %H:%M").to_string())
                            .unwrap_or_default();
                        rsx! {
                            button {
                                key: "{conv.id}",
                                class: "{class}",
                                onclick: move |_| selected.set(Some(id.clone())),
                                strong { "{other}" }
                                p { class: "last-message", "{conv.last_message}" }
                                span { class: "timestamp", "{when}" }
                            }
                        }
                    }
                }
            }
            div { class: "chat-thread", {thread} }
        }
    }
}
