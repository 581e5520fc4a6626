use std::time::Duration;

use dioxus::prelude::*;

use remate_common::ids::{Clock, SystemClock};
use remate_common::listing::{Condition, ListingId, CATEGORIES};
use remate_common::upload::{ListingDraft, SubmitState};

use super::app::Route;
use super::session_state::use_session;
use super::shared_state::use_shared_state;
use super::toast::use_toasts;

/// Preview reference for a locally picked photo. Browsers report the path
/// as `C:\fakepath\<name>`; only the file name is kept.
fn local_preview(picked: &str) -> Option<String> {
    let name = picked.rsplit(['\\', '/']).next()?.trim();
    (!name.is_empty()).then(|| format!("local:{name}"))
}

/// Preview references for every file in one selection, in picker order.
fn local_previews<I, S>(picked: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    picked
        .into_iter()
        .filter_map(|p| local_preview(p.as_ref()))
        .collect()
}

async fn simulated_latency(delay: Duration) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
        .await;
    #[cfg(not(target_family = "wasm"))]
    let _ = delay;
}

#[component]
pub fn UploadForm() -> Element {
    let session = use_session();
    let mut shared_state = use_shared_state();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut draft = use_signal(ListingDraft::default);
    let mut submit_state = use_signal(|| SubmitState::Editing);

    // Keep the button state in step with the form fields.
    use_effect(move || {
        let next = submit_state.peek().on_edit(&draft.read());
        submit_state.set(next);
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(owner) = session.read().current().cloned() else {
            return;
        };
        let Ok(submitting) = submit_state.peek().begin_submit() else {
            return;
        };
        submit_state.set(submitting);

        let now = SystemClock.now();
        let built = {
            let mut shared = shared_state.write();
            let id = ListingId(shared.store.next_id('l', now));
            let listing = draft
                .read()
                .build(id, &owner, now.date_naive(), &shared.config);
            listing.map(|l| shared.store.add_listing(l))
        };
        if let Err(err) = built {
            toasts.write().market_error(&err);
            submit_state.set(SubmitState::for_draft(&draft.peek()));
            return;
        }

        let delay = shared_state.peek().config.submit_delay();
        spawn(async move {
            simulated_latency(delay).await;
            if let Ok(done) = submit_state.peek().finish() {
                submit_state.set(done);
            }
            toasts.write().info(
                "Component uploaded successfully!",
                "Your component is now live on the marketplace.",
            );
            nav.push(Route::ConsumerListings {});
        });
    };

    let state = *submit_state.read();
    let current = draft.read().clone();

    rsx! {
        div { class: "upload-form",
            h2 { "Upload Component" }
            p { "List a component so businesses can give it a second life" }
            form { onsubmit: submit,
                div { class: "form-group",
                    label { "Photo" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        onchange: move |evt| {
                            let names: Vec<String> = evt.files().iter().map(|f| f.name()).collect();
                            draft.write().images = local_previews(names);
                        },
                    }
                    div { class: "image-previews",
                        for (i, image) in current.images.iter().enumerate() {
                            {
                                let name = image.trim_start_matches("local:").to_string();
                                rsx! {
                                    div { class: "image-preview", key: "{i}",
                                        span { class: "image-name", "{name}" }
                                        button {
                                            r#type: "button",
                                            class: "link",
                                            onclick: move |_| {
                                                let mut d = draft.write();
                                                if i < d.images.len() {
                                                    d.images.remove(i);
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
                div { class: "form-group",
                    label { "Title" }
                    input {
                        r#type: "text",
                        placeholder: "e.g., MacBook Pro 2019 Motherboard",
                        value: "{current.title}",
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Description" }
                    textarea {
                        placeholder: "Describe condition, issues, reason for disposal",
                        rows: "4",
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Category" }
                    select {
                        value: "{current.category}",
                        onchange: move |evt| draft.write().category = evt.value(),
                        option { value: "", "Select category" }
                        for cat in CATEGORIES.iter() {
                            option { key: "{cat}", value: "{cat}", "{cat}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Condition" }
                    select {
                        value: current.condition.map(|c| c.label()).unwrap_or_default(),
                        onchange: move |evt| draft.write().condition = evt.value().parse::<Condition>().ok(),
                        option { value: "", "Select condition" }
                        for cond in Condition::all().iter() {
                            option { key: "{cond}", value: "{cond}", "{cond}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Location" }
                    input {
                        r#type: "text",
                        placeholder: "e.g., Mumbai, MH",
                        value: "{current.location}",
                        oninput: move |evt| draft.write().location = evt.value(),
                    }
                }
                div { class: "form-actions",
                    button {
                        r#type: "button",
                        onclick: move |_| { nav.push(Route::ConsumerDashboard {}); },
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        disabled: !state.button_enabled(),
                        "{state.button_label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fakepath_is_stripped() {
        assert_eq!(
            local_preview(r"C:\fakepath\board.jpg"),
            Some("local:board.jpg".to_string())
        );
        assert_eq!(local_preview("photo.png"), Some("local:photo.png".to_string()));
        assert_eq!(local_preview(""), None);
    }

    #[test]
    fn every_selected_file_is_kept() {
        let picked = [r"C:\fakepath\board.jpg", "ram.png", "", "/tmp/psu.webp"];
        assert_eq!(
            local_previews(picked),
            vec![
                "local:board.jpg".to_string(),
                "local:ram.png".to_string(),
                "local:psu.webp".to_string(),
            ]
        );
    }
}
