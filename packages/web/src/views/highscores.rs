use dioxus::prelude::*;

/// Public highscore page.
#[component]
pub fn Highscores() -> Element {
    rsx! {
        div {
            class: "highscore-page",
            h1 { "Highscores" }
            p { "No scores yet." }
        }
    }
}
