//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] is the composition root for auth: it builds the platform
//! store, hydrates an [`AuthStore`] from it and shares it as a
//! `Signal<AppAuth>` together with the [`RouteTable`]. Components read it with
//! [`use_auth`], so every view re-renders when the credential changes.

use auth::{AuthStore, Credential, Navigate, RouteName, RouteTable, StorageKeys};
use dioxus::prelude::*;
use store::StorageConfig;

use crate::storage::{make_store, PlatformStore};

/// Auth state as used by the app, persisted to the platform store.
pub type AppAuth = AuthStore<PlatformStore>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AppAuth> {
    use_context::<Signal<AppAuth>>()
}

/// Get the route table the app was started with.
pub fn use_route_table() -> RouteTable {
    use_context::<RouteTable>()
}

/// [`Navigate`] implementation backed by the Dioxus router.
#[derive(Clone)]
pub struct RouterNavigator {
    navigator: Navigator,
    routes: RouteTable,
}

impl RouterNavigator {
    /// Replace the current history entry instead of pushing a new one.
    pub fn replace(&self, to: RouteName) {
        match self.routes.by_name(to) {
            Some(route) => {
                self.navigator.replace(route.path);
            }
            None => tracing::warn!(route = %to, "cannot navigate to route without a path"),
        }
    }
}

impl Navigate for RouterNavigator {
    fn navigate(&self, to: RouteName) {
        match self.routes.by_name(to) {
            Some(route) => {
                self.navigator.push(route.path);
            }
            None => tracing::warn!(route = %to, "cannot navigate to route without a path"),
        }
    }
}

/// Navigation capability for the current router, to hand to auth actions.
pub fn use_router_navigator() -> RouterNavigator {
    RouterNavigator {
        navigator: use_navigator(),
        routes: use_route_table(),
    }
}

/// Hook returning a callback that stores a finished login result and moves
/// on to the start page.
pub fn use_login() -> Callback<Credential> {
    let mut auth = use_auth();
    let nav = use_router_navigator();
    use_callback(move |credential: Credential| {
        let nav = nav.clone();
        spawn(async move {
            let done = auth.write().login(credential);
            done.await;
            nav.navigate(RouteName::Start);
        });
    })
}

/// Provider component that manages authentication state.
/// Wrap the router with this component so the gate and views can read it.
#[component]
pub fn AuthProvider(config: StorageConfig, routes: RouteTable, children: Element) -> Element {
    let auth_state = use_signal(move || {
        AuthStore::hydrate_with(make_store(&config), StorageKeys::from(&config))
    });

    use_context_provider(|| auth_state);
    use_context_provider(move || routes);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let nav = use_router_navigator();

    let onclick = move |_| {
        auth_state.write().logout(&nav);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
