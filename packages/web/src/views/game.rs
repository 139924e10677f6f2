use dioxus::prelude::*;

/// Game screen.
#[component]
pub fn Game() -> Element {
    let mut score = use_signal(|| 0u32);

    rsx! {
        div {
            class: "game-screen",
            p { "Score: {score}" }
            button { onclick: move |_| score += 1, "Hit" }
            button { onclick: move |_| score.set(0), "Reset" }
        }
    }
}
