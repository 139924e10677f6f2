//! Navigation guard: runs before every route transition.

use crate::routes::{AccessPolicy, RouteDescriptor, RouteName};

/// What the router should do with a pending navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Allow,
    Redirect(RouteName),
}

/// Decide whether navigating to `to` may proceed.
///
/// Auth-only routes send anonymous visitors to [`RouteName::Login`];
/// guest-only routes send signed-in users to [`RouteName::Start`].
pub fn guard(
    to: &RouteDescriptor,
    from: Option<&RouteDescriptor>,
    authenticated: bool,
) -> NavigationOutcome {
    let outcome = match to.meta.policy() {
        AccessPolicy::RequiresAuth if !authenticated => NavigationOutcome::Redirect(RouteName::Login),
        AccessPolicy::RequiresGuest if authenticated => NavigationOutcome::Redirect(RouteName::Start),
        _ => NavigationOutcome::Allow,
    };

    let from = from.map(|r| r.name.as_str()).unwrap_or("-");
    match outcome {
        NavigationOutcome::Allow => {
            tracing::debug!(to = %to.name, from, authenticated, "navigation allowed");
        }
        NavigationOutcome::Redirect(target) => {
            tracing::info!(to = %to.name, from, %target, authenticated, "navigation redirected");
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    use crate::routes::{RouteMeta, RouteTable};
    use crate::state::AuthStore;

    fn route(meta: RouteMeta) -> RouteDescriptor {
        RouteDescriptor::new("/somewhere", RouteName::Game, "Somewhere", meta)
    }

    #[test]
    fn test_requires_auth_anonymous_goes_to_login() {
        assert_eq!(
            guard(&route(RouteMeta::AUTH), None, false),
            NavigationOutcome::Redirect(RouteName::Login)
        );
    }

    #[test]
    fn test_requires_guest_signed_in_goes_to_start() {
        assert_eq!(
            guard(&route(RouteMeta::GUEST), None, true),
            NavigationOutcome::Redirect(RouteName::Start)
        );
    }

    #[test]
    fn test_public_route_always_allowed() {
        assert_eq!(guard(&route(RouteMeta::PUBLIC), None, false), NavigationOutcome::Allow);
        assert_eq!(guard(&route(RouteMeta::PUBLIC), None, true), NavigationOutcome::Allow);
    }

    #[test]
    fn test_policy_satisfied_is_allowed() {
        assert_eq!(guard(&route(RouteMeta::AUTH), None, true), NavigationOutcome::Allow);
        assert_eq!(guard(&route(RouteMeta::GUEST), None, false), NavigationOutcome::Allow);
    }

    #[test]
    fn test_both_flags_behave_as_requires_auth() {
        let both = RouteMeta {
            requires_auth: true,
            requires_guest: true,
        };
        assert_eq!(
            guard(&route(both), None, false),
            NavigationOutcome::Redirect(RouteName::Login)
        );
        assert_eq!(guard(&route(both), None, true), NavigationOutcome::Allow);
    }

    #[test]
    fn test_source_route_does_not_change_outcome() {
        let table = RouteTable::arcade();
        let login = table.by_name(RouteName::Login).unwrap();
        let game = table.by_name(RouteName::Game).unwrap();

        assert_eq!(
            guard(game, Some(login), false),
            guard(game, None, false)
        );
    }

    #[test]
    fn test_hydrated_session_is_sent_away_from_login() {
        let storage = MemoryStore::with_entries([
            ("authToken", "abc"),
            ("authUser", r#"{"username":"alice"}"#),
        ]);
        let auth = AuthStore::hydrate(storage);
        let table = RouteTable::arcade();
        let login = table.by_name(RouteName::Login).unwrap();

        assert_eq!(
            guard(login, None, auth.is_authenticated()),
            NavigationOutcome::Redirect(RouteName::Start)
        );
        assert_eq!(
            table.check(RouteName::Game, None, auth.is_authenticated()),
            NavigationOutcome::Allow
        );
    }

    #[test]
    fn test_empty_storage_is_sent_to_login() {
        let auth = AuthStore::hydrate(MemoryStore::new());
        let table = RouteTable::arcade();

        assert_eq!(
            table.check(RouteName::Game, None, auth.is_authenticated()),
            NavigationOutcome::Redirect(RouteName::Login)
        );
        assert_eq!(
            table.check(RouteName::Highscores, None, auth.is_authenticated()),
            NavigationOutcome::Allow
        );
    }

    #[test]
    fn test_arcade_table_decisions() {
        let table = RouteTable::arcade();

        assert_eq!(
            table.check(RouteName::Game, Some(RouteName::Highscores), false),
            NavigationOutcome::Redirect(RouteName::Login)
        );
        assert_eq!(
            table.check(RouteName::Login, Some(RouteName::Game), true),
            NavigationOutcome::Redirect(RouteName::Start)
        );
        assert_eq!(
            table.check(RouteName::Highscores, None, false),
            NavigationOutcome::Allow
        );
        assert_eq!(table.check(RouteName::Start, None, true), NavigationOutcome::Allow);
    }
}
