//! Signed-in session, persisted through the same preference store.
//!
//! Keys follow the backend contract: `token`, `refreshToken`, and the `user`
//! JSON blob. A blob that no longer parses clears the whole session rather
//! than limping along half signed-in.

use std::rc::Rc;

use api::models::{AuthResponse, User};
use api::{ApiClient, ApiError};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::prefs::store::{PreferenceStore, StoreError};

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

pub struct Session {
    store: Rc<dyn PreferenceStore>,
}

impl Session {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Restores the stored user, if any. A corrupt blob clears the session.
    pub fn restore(&self) -> Option<User> {
        let raw = self.store.read(USER_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(%err, "stored session no longer parses; signing out");
                self.clear();
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.read(TOKEN_KEY).ok().flatten()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persists a fresh login. The refresh token is optional on the wire and
    /// stays optional here.
    pub fn store_login(&self, response: &AuthResponse) -> Result<(), StoreError> {
        self.store.write(TOKEN_KEY, &response.token)?;
        if let Some(refresh) = &response.refresh_token {
            self.store.write(REFRESH_TOKEN_KEY, refresh)?;
        }
        let user_json = serde_json::to_string(&response.user).map_err(|err| StoreError::Write {
            key: USER_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.store.write(USER_KEY, &user_json)
    }

    /// Overwrites the stored user blob; tokens stay as they are. Used when
    /// the backend hands back a fresher profile than the cached one.
    pub fn store_user(&self, user: &User) -> Result<(), StoreError> {
        let json = serde_json::to_string(user).map_err(|err| StoreError::Write {
            key: USER_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.store.write(USER_KEY, &json)
    }

    /// Best-effort removal of all three session keys.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.store.remove(key) {
                warn!(%err, "session key not removed");
            }
        }
    }
}

/// Session handle for components: the service plus a user signal that
/// re-renders the navbar and views on login/logout.
#[derive(Clone)]
pub struct SessionContext {
    session: Rc<Session>,
    user: Signal<Option<User>>,
}

impl SessionContext {
    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    pub fn is_authenticated(&self) -> bool {
        (self.user)().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    pub fn login(&self, response: &AuthResponse) {
        if let Err(err) = self.session.store_login(response) {
            warn!(%err, "session not persisted; staying signed in for this run");
        }
        let mut user = self.user;
        user.set(Some(response.user.clone()));
    }

    /// Replaces the cached user after a backend refresh.
    pub fn adopt_user(&self, user: User) {
        if let Err(err) = self.session.store_user(&user) {
            warn!(%err, "refreshed user not persisted");
        }
        let mut signal = self.user;
        signal.set(Some(user));
    }

    pub fn logout(&self) {
        self.session.clear();
        let mut user = self.user;
        user.set(None);
    }
}

/// Installs the session at the app root, restoring any stored user.
pub fn use_session_provider(store: Rc<dyn PreferenceStore>) -> SessionContext {
    let context = use_hook(move || {
        let session = Rc::new(Session::new(store));
        let user = Signal::new(session.restore());
        SessionContext { session, user }
    });

    use_context_provider(|| context.clone())
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Revalidates the stored token against the backend once per launch. A token
/// the backend no longer accepts signs the user out instead of leaving a
/// stale name in the navbar; a network failure keeps the cached user.
pub fn use_session_refresh(client: Rc<ApiClient>) {
    let session = use_session();
    use_future(move || {
        let client = Rc::clone(&client);
        let session = session.clone();
        async move {
            let Some(token) = session.token() else {
                return;
            };
            match client.me(&token).await {
                Ok(user) => session.adopt_user(user),
                Err(ApiError::Status {
                    status: 401 | 403, ..
                }) => {
                    warn!("stored token no longer accepted; signing out");
                    session.logout();
                }
                Err(err) => warn!(%err, "session refresh failed; keeping cached user"),
            }
        }
    });
}
