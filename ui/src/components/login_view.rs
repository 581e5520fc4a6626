use dioxus::prelude::*;

use remate_common::fixtures::{DEMO_BUSINESS_EMAIL, DEMO_CONSUMER_EMAIL, DEMO_PASSWORD};
use remate_common::identity::Role;
use remate_common::ids::{Clock, SystemClock};
use remate_common::route;
use remate_common::session::SignupRequest;

use super::app::Route;
use super::session_state::use_session;
use super::shared_state::use_shared_state;
use super::toast::use_toasts;

fn demo_email(role: Role) -> &'static str {
    match role {
        Role::Consumer => DEMO_CONSUMER_EMAIL,
        Role::Business => DEMO_BUSINESS_EMAIL,
    }
}

#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let shared_state = use_shared_state();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut active_tab = use_signal(|| Role::Consumer);

    let brand = shared_state.read().config.brand.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let role = *active_tab.read();
        let ok = session.write().login(
            &shared_state.read().store,
            &email.read(),
            &password.read(),
            role,
        );
        if ok {
            toasts
                .write()
                .info("Welcome back!", "You have been successfully logged in.");
            nav.push(Route::from(&route::home(role)));
        } else {
            toasts.write().error(
                "Login failed",
                "Invalid credentials. Try the demo accounts below.",
            );
        }
    };

    rsx! {
        div { class: "login-page",
            div { class: "branding",
                h1 { "{brand}" }
                p { "Giving electronics a second life, one connection at a time" }
            }
            div { class: "login-card",
                h2 { "Welcome Back" }
                p { "Sign in to continue" }
                div { class: "tabs",
                    for role in Role::all().iter().copied() {
                        {
                            let class = if *active_tab.read() == role { "tab active" } else { "tab" };
                            rsx! {
                                button {
                                    key: "{role}",
                                    class: "{class}",
                                    onclick: move |_| active_tab.set(role),
                                    "{role.label()}"
                                }
                            }
                        }
                    }
                }
                div { class: "demo-account",
                    p { "Demo: {demo_email(*active_tab.read())} / {DEMO_PASSWORD}" }
                    button {
                        onclick: move |_| {
                            email.set(demo_email(*active_tab.read()).to_string());
                            password.set(DEMO_PASSWORD.to_string());
                        },
                        "Use Demo Account"
                    }
                }
                form { onsubmit: submit,
                    div { class: "form-group",
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: email.read().trim().is_empty() || password.read().is_empty(),
                        "Sign In"
                    }
                }
                p { class: "footer-links",
                    "Don't have an account? "
                    button {
                        class: "link",
                        onclick: move |_| { nav.push(Route::Signup {}); },
                        "Sign up"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    let mut session = use_session();
    let mut shared_state = use_shared_state();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut role = use_signal(|| Role::Consumer);

    let can_submit = use_memo(move || {
        !name.read().trim().is_empty()
            && !email.read().trim().is_empty()
            && !password.read().is_empty()
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !can_submit() {
            return;
        }
        let chosen = *role.read();
        let loc = location.read().trim().to_string();
        let request = SignupRequest {
            name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            password: password.read().clone(),
            role: chosen,
            location: (!loc.is_empty()).then_some(loc),
        };
        let ok = session
            .write()
            .signup(&mut shared_state.write().store, request, SystemClock.now());
        if ok {
            toasts
                .write()
                .info("Account created", "Welcome to the marketplace.");
            nav.push(Route::from(&route::home(chosen)));
        }
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h2 { "Create an account" }
                form { onsubmit: submit,
                    div { class: "form-group",
                        label { "I am a" }
                        select {
                            value: "{role.read().as_str()}",
                            onchange: move |evt| {
                                if let Ok(r) = evt.value().parse::<Role>() {
                                    role.set(r);
                                }
                            },
                            for r in Role::all().iter().copied() {
                                option { key: "{r}", value: "{r}", "{r.label()}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Location (optional)" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., Pune, MH",
                            value: "{location}",
                            oninput: move |evt| location.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: !can_submit(),
                        "Sign Up"
                    }
                }
                p { class: "footer-links",
                    "Already registered? "
                    button {
                        class: "link",
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Sign in"
                    }
                }
            }
        }
    }
}
