use crate::services::{KeyValueStore, Navigator, SessionStore};
use crate::web::templates::NavView;

/// Current navigation state. Only reads the session, so it can be called as
/// often as needed.
pub fn refresh<S: KeyValueStore>(session: &SessionStore<S>) -> NavView {
    NavView::from_session(session.get_session().as_ref())
}

/// Clears the session and reloads the page so every dependent view resets.
pub fn sign_out<S: KeyValueStore, N: Navigator + ?Sized>(
    session: &SessionStore<S>,
    navigator: &N,
) {
    log::info!("Signing out");
    session.sign_out();
    navigator.reload();
}
