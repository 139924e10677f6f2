use dioxus::prelude::*;

use crate::session::{use_auth, use_route_table, LogoutButton};

/// Top navigation: links to every page the visitor may open, plus the
/// signed-in user and a logout button.
#[component]
pub fn Navbar() -> Element {
    let auth_state = use_auth();
    let routes = use_route_table();

    let signed_in = auth_state.read().is_authenticated();
    let username = auth_state
        .read()
        .username()
        .unwrap_or_default()
        .to_string();
    let links: Vec<_> = routes
        .iter()
        .filter(|r| r.meta.policy().admits(signed_in))
        .map(|r| (r.path, r.name))
        .collect();

    rsx! {
        nav {
            class: "navbar",
            for (path, name) in links {
                Link { key: "{name}", to: path, "{name}" }
            }
            if signed_in {
                span { class: "navbar-user", "{username}" }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
