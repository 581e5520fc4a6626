use dioxus::prelude::*;

use super::session_state::use_session;
use super::shared_state::use_shared_state;
use super::toast::use_toasts;

/// Component kinds a business wants to be told about.
#[component]
pub fn WishlistView() -> Element {
    let session = use_session();
    let mut shared_state = use_shared_state();
    let mut toasts = use_toasts();
    let mut new_item = use_signal(String::new);

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };
    let items = shared_state.read().store.wishlist(&user.id).to_vec();

    let owner = user.id.clone();
    let add = move |evt: FormEvent| {
        evt.prevent_default();
        let item = new_item.read().trim().to_string();
        if shared_state.write().store.add_wishlist_item(&owner, &item) {
            new_item.set(String::new());
            toasts
                .write()
                .info("Added to wishlist", format!("You'll see listings for {item}."));
        }
    };

    rsx! {
        div { class: "wishlist-view",
            h2 { "Wishlist" }
            p { "Components your business is looking for" }
            form { class: "wishlist-add", onsubmit: add,
                input {
                    r#type: "text",
                    placeholder: "e.g., SSD Drives",
                    value: "{new_item}",
                    oninput: move |evt| new_item.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: new_item.read().trim().is_empty(),
                    "Add"
                }
            }
            if items.is_empty() {
                p { class: "empty-state", "Your wishlist is empty" }
            } else {
                ul { class: "wishlist-items",
                    for (i, item) in items.into_iter().enumerate() {
                        {
                            let owner = user.id.clone();
                            let label = item.clone();
                            rsx! {
                                li { key: "{i}",
                                    span { "{label}" }
                                    button {
                                        class: "link",
                                        onclick: move |_| {
                                            if shared_state.write().store.remove_wishlist_item(&owner, &item) {
                                                toasts.write().info("Removed from wishlist", item.clone());
                                            }
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
