use dioxus::prelude::*;

use remate_common::error::MarketError;

/// Only the newest toast stays on screen.
const TOAST_LIMIT: usize = 1;
/// How long a toast stays up before it dismisses itself.
const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastState {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        let excess = self.toasts.len().saturating_sub(TOAST_LIMIT);
        self.toasts.drain(..excess);
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, ToastVariant::Default);
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, ToastVariant::Destructive);
    }

    /// Surface a refused marketplace action.
    pub fn market_error(&mut self, err: &MarketError) {
        match err {
            MarketError::NotAvailable(_) => self.info("Not available yet", err.to_string()),
            _ => self.error("Something went wrong", err.to_string()),
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<ToastState> {
    use_context::<Signal<ToastState>>()
}

/// Stack of toasts in the corner of the screen.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    // Every toast on screen gets a timer; dismissing an id twice is a no-op.
    use_effect(move || {
        let ids: Vec<u32> = toasts.read().toasts.iter().map(|t| t.id).collect();
        for id in ids {
            spawn(async move {
                #[cfg(target_family = "wasm")]
                gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                #[cfg(not(target_family = "wasm"))]
                {
                    let _ = TOAST_TIMEOUT_MS;
                    std::future::pending::<()>().await;
                }
                toasts.write().dismiss(id);
            });
        }
    });

    let current = toasts.read().toasts.clone();

    if current.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toasts",
            for toast in current {
                {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    rsx! {
                        div { class: "{class}", key: "{toast.id}",
                            strong { "{toast.title}" }
                            p { "{toast.description}" }
                            button {
                                onclick: move |_| toasts.write().dismiss(id),
                                "Dismiss"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use remate_common::error::Action;

    use super::*;

    #[test]
    fn newest_toast_replaces_the_previous_one() {
        let mut state = ToastState::default();
        state.info("Welcome back!", "first");
        state.error("Login failed", "second");
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].description, "second");
        assert_eq!(state.toasts[0].variant, ToastVariant::Destructive);
    }

    #[test]
    fn dismiss_ignores_stale_ids() {
        let mut state = ToastState::default();
        state.market_error(&MarketError::NotAvailable(Action::EditListing));
        let id = state.toasts[0].id;
        state.dismiss(id + 1);
        assert_eq!(state.toasts.len(), 1);
        state.dismiss(id);
        state.dismiss(id);
        assert!(state.toasts.is_empty());
    }
}
