use dioxus::prelude::*;
use ui::use_auth;

/// Start page shown after signing in.
#[component]
pub fn Start() -> Element {
    let auth_state = use_auth();
    let greeting = match auth_state.read().username() {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome!".to_string(),
    };

    rsx! {
        div {
            class: "start-page",
            h1 { "{greeting}" }
            Link { to: "/game", class: "start-button", "Start game" }
        }
    }
}
