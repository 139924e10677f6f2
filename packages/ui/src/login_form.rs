//! Sign-in form.
//!
//! The arcade's auth service issues the token out of band; this form takes
//! the finished token and profile and hands them to the auth state.

use auth::{Credential, UserProfile};
use dioxus::prelude::*;

use crate::session::use_login;

#[component]
pub fn LoginForm() -> Element {
    let login = use_login();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let name = username().trim().to_string();
        let tok = token().trim().to_string();
        if name.is_empty() || tok.is_empty() {
            error.set(Some("Username and token are required"));
            return;
        }
        error.set(None);
        let mail = email().trim().to_string();
        let user = UserProfile {
            email: (!mail.is_empty()).then_some(mail),
            ..UserProfile::with_username(name)
        };
        login.call(Credential::new(tok, user));
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: onsubmit,
            input {
                r#type: "text",
                placeholder: "Username",
                value: "{username}",
                oninput: move |e| username.set(e.value()),
            }
            input {
                r#type: "email",
                placeholder: "Email (optional)",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            input {
                r#type: "password",
                placeholder: "Token",
                value: "{token}",
                oninput: move |e| token.set(e.value()),
            }
            if let Some(message) = error() {
                p { class: "login-error", "{message}" }
            }
            button { r#type: "submit", "Sign in" }
        }
    }
}
