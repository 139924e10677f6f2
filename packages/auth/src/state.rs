//! # Auth state — the client's single source of truth for "who is signed in"
//!
//! [`AuthStore`] holds the current token and [`UserProfile`] in memory and
//! mirrors every change into a [`KeyValueStore`] under two independent keys
//! (see [`StorageKeys`]). The persisted copy is only read once, by
//! [`AuthStore::hydrate`]; after that memory wins until the next start.
//!
//! ## Failure handling
//!
//! Nothing here returns an error. Unreadable or malformed persisted data
//! hydrates as "absent", and failed writes are logged and dropped, so the
//! worst case is being signed out on the next start.
//!
//! The two keys are written separately. If the process dies between the two
//! writes the next start sees half a credential, which reads as signed out.

use std::fmt;
use std::future::Ready;

use store::{KeyValueStore, StorageConfig};

use crate::models::{Credential, UserProfile};
use crate::routes::{Navigate, RouteName};

/// Storage keys used for the persisted credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for StorageKeys {
    fn from(config: &StorageConfig) -> Self {
        Self {
            token: config.token_key.clone(),
            user: config.user_key.clone(),
        }
    }
}

/// Current authentication state, persisted write-through to `S`.
pub struct AuthStore<S> {
    store: S,
    keys: StorageKeys,
    token: Option<String>,
    user: Option<UserProfile>,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// Load the credential persisted under the default keys.
    pub fn hydrate(store: S) -> Self {
        Self::hydrate_with(store, StorageKeys::default())
    }

    /// Load the credential persisted under `keys`.
    pub fn hydrate_with(store: S, keys: StorageKeys) -> Self {
        let token = read(&store, &keys.token).filter(|t| !t.is_empty());
        let user = read(&store, &keys.user).and_then(|raw| {
            serde_json::from_str::<UserProfile>(&raw)
                .map_err(|e| tracing::warn!(key = %keys.user, "discarding malformed profile: {}", e))
                .ok()
        });

        if token.is_some() != user.is_some() {
            tracing::warn!(
                has_token = token.is_some(),
                has_user = user.is_some(),
                "persisted credential is incomplete, starting signed out"
            );
        }

        let this = Self {
            store,
            keys,
            token,
            user,
        };
        tracing::debug!(authenticated = this.is_authenticated(), "auth state hydrated");
        this
    }

    /// Set or clear the token. An empty token counts as no token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
        match &self.token {
            Some(token) => self.persist(&self.keys.token, token),
            None => self.forget(&self.keys.token),
        }
    }

    /// Set or clear the user profile.
    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.user = user;
        match &self.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.persist(&self.keys.user, &raw),
                Err(e) => tracing::warn!("failed to serialize profile: {}", e),
            },
            None => self.forget(&self.keys.user),
        }
    }

    /// Store a credential obtained from the auth service.
    ///
    /// The state is updated before this returns; the returned future only
    /// signals completion and holds no borrow of the store. Performs no I/O
    /// beyond persistence; the login request itself is the caller's job.
    pub fn login(&mut self, credential: Credential) -> Ready<()> {
        let Credential { token, user } = credential;
        self.set_token(Some(token));
        self.set_user(Some(user));
        tracing::info!(username = ?self.username(), "signed in");
        std::future::ready(())
    }

    /// Clear the credential and send the user to the login page.
    pub fn logout<N: Navigate + ?Sized>(&mut self, navigator: &N) {
        self.set_token(None);
        self.set_user(None);
        tracing::info!("signed out");
        navigator.navigate(RouteName::Login);
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, "failed to persist auth state: {}", e);
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            tracing::warn!(key, "failed to clear persisted auth state: {}", e);
        }
    }
}

impl<S> AuthStore<S> {
    /// True iff both a token and a user profile are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref()?.email.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref()?.username.as_deref()
    }

    pub fn user_avatar(&self) -> Option<&str> {
        self.user.as_ref()?.avatar.as_deref()
    }

    pub fn backing_store(&self) -> &S {
        &self.store
    }
}

fn read<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store
        .get(key)
        .map_err(|e| tracing::warn!(key, "failed to read persisted auth state: {}", e))
        .ok()
        .flatten()
}

impl<S> fmt::Debug for AuthStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("keys", &self.keys)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
