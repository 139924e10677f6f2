use auth::{guard, NavigationOutcome, RouteName, RouteTable};
use dioxus::prelude::*;
use store::AppConfig;

use ui::{use_auth, use_route_table, use_router_navigator, AuthProvider, Navbar};
use views::{Game, Highscores, Login, Start};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AccessGate)]
        #[route("/login")]
        Login {},
        #[route("/")]
        Start {},
        #[route("/game")]
        Game {},
        #[route("/highscores")]
        Highscores {},
}

/// Bundled client configuration.
const CONFIG: &str = include_str!("../arcade.toml");

fn load_config() -> AppConfig {
    AppConfig::from_toml(CONFIG).unwrap_or_else(|e| {
        tracing::warn!("invalid {}, using defaults: {}", AppConfig::filename(), e);
        AppConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        AuthProvider {
            config: config.storage,
            routes: RouteTable::arcade(),
            Router::<Route> {}
        }
    }
}

/// Layout wrapping every route: runs the navigation guard before the page
/// renders and redirects when the visitor may not see it.
#[component]
fn AccessGate() -> Element {
    let auth_state = use_auth();
    let routes = use_route_table();
    let nav = use_router_navigator();
    let mut previous = use_signal(|| None::<RouteName>);

    let path = use_route::<Route>().to_string();
    let target = routes.resolve(&path);
    let authenticated = auth_state.read().is_authenticated();
    let outcome = match target {
        Some(to) => {
            let from = (*previous.peek()).and_then(|name| routes.by_name(name));
            guard(to, from, authenticated)
        }
        None => NavigationOutcome::Allow,
    };

    // Remember the last page actually shown; it is the source of the next
    // navigation.
    let entered = match outcome {
        NavigationOutcome::Allow => target.map(|to| to.name),
        NavigationOutcome::Redirect(_) => None,
    };
    use_effect(use_reactive((&entered,), move |(entered,)| {
        if entered.is_some() {
            previous.set(entered);
        }
    }));

    match outcome {
        NavigationOutcome::Allow => rsx! {
            Navbar {}
            Outlet::<Route> {}
        },
        NavigationOutcome::Redirect(to) => {
            nav.replace(to);
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_every_route_has_a_descriptor() {
        let routes = RouteTable::arcade();
        let pages = [
            (Route::Login {}, RouteName::Login),
            (Route::Start {}, RouteName::Start),
            (Route::Game {}, RouteName::Game),
            (Route::Highscores {}, RouteName::Highscores),
        ];
        for (route, name) in pages {
            let descriptor = routes.resolve(&route.to_string()).unwrap();
            assert_eq!(descriptor.name, name);
        }
    }
}
