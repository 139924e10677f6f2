//! Authentication state and route access policy for the arcade client.
//!
//! This crate has no UI dependency: [`AuthStore`] owns the credential and
//! mirrors it into a [`store::KeyValueStore`], and [`guard`] decides whether a
//! navigation may proceed. The Dioxus glue lives in the `ui` crate.

pub mod guard;
pub mod models;
pub mod routes;
pub mod state;

pub use guard::{guard, NavigationOutcome};
pub use models::{Credential, UserProfile};
pub use routes::{AccessPolicy, Navigate, RouteDescriptor, RouteMeta, RouteName, RouteTable};
pub use state::{AuthStore, StorageKeys};
