use crate::common::StorageError;
use crate::models::{Session, SessionUser};

use super::navigator::Navigator;
use super::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const PENDING_CAR_KEY: &str = "pendingCarId";

/// Session access over a [`KeyValueStore`].
///
/// Storage failures are never surfaced to callers: a session that cannot be
/// read is treated as absent.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
    login_path: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, login_path: impl Into<String>) -> Self {
        Self {
            store,
            login_path: login_path.into(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not read {key}: {e}");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            crate::log_err!("Could not clear stored key", &format!("{key}: {e}"));
        }
    }

    pub fn get_session(&self) -> Option<Session> {
        let token = self.read(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.read(USER_KEY)?;

        match serde_json::from_str::<Option<SessionUser>>(&raw_user) {
            Ok(Some(user)) => Some(Session { token, user }),
            Ok(None) => None,
            Err(e) => {
                log::debug!("Ignoring malformed stored user: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    /// Persists a session, as the login page does after signing in.
    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_KEY, &user)
    }

    /// Returns true when signed in. Otherwise remembers `pending_car_id`
    /// (if any), sends the browser to the login page and returns false.
    pub fn require_session_or_redirect<N: Navigator + ?Sized>(
        &self,
        pending_car_id: Option<&str>,
        navigator: &N,
    ) -> bool {
        if self.is_authenticated() {
            return true;
        }

        if let Some(id) = pending_car_id.filter(|id| !id.is_empty()) {
            self.set_pending_car_id(id);
        }

        log::info!("Sign in required, redirecting to {}", self.login_path);
        navigator.go_to(&self.login_path);
        false
    }

    pub fn sign_out(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }

    pub fn pending_car_id(&self) -> Option<String> {
        self.read(PENDING_CAR_KEY).filter(|id| !id.is_empty())
    }

    pub fn set_pending_car_id(&self, car_id: &str) {
        if let Err(e) = self.store.set(PENDING_CAR_KEY, car_id) {
            crate::log_err!("Could not remember pending car", &format!("{car_id}: {e}"));
        }
    }

    /// Reads and clears the pending reservation marker.
    pub fn take_pending_car_id(&self) -> Option<String> {
        let pending = self.pending_car_id();
        if pending.is_some() {
            self.remove(PENDING_CAR_KEY);
        }
        pending
    }
}
