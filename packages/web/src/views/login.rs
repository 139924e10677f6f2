//! Login page view.

use dioxus::prelude::*;
use ui::LoginForm;

/// Login page component. Only reachable while signed out.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "login-container",
            h1 { "Arcade" }
            p { "Sign in to play and keep your scores." }
            LoginForm {}
        }
    }
}
