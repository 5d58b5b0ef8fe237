mod common;

#[cfg(test)]
pub mod session_tests {
    use super::common::*;
    use rentwheel::models::Session;
    use rentwheel::services::session::{PENDING_CAR_KEY, TOKEN_KEY, USER_KEY};
    use rentwheel::services::{KeyValueStore, MemoryStore, SessionStore};
    use rentwheel::web::handlers::nav;

    fn get_session_store(store: MemoryStore) -> SessionStore<MemoryStore> {
        SessionStore::new(store, "login.html")
    }

    #[test]
    fn test_get_session_success() {
        let session = get_session_store(signed_in_store())
            .get_session()
            .expect("Seeded session should be readable");

        assert_eq!(session.token, SEED_TOKEN);
        assert_eq!(session.user.email, "sara@example.com");
        assert_eq!(session.user.display_name(), "Sara");
        assert_eq!(session.bearer(), format!("Bearer {SEED_TOKEN}"));
        assert_eq!(
            session.user.extra.get("license_no").and_then(|v| v.as_str()),
            Some("LIC12345")
        );
    }

    #[test]
    fn test_get_session_none_without_token() {
        let store = MemoryStore::with_entries([(USER_KEY, SEED_USER_JSON)]);
        assert!(get_session_store(store).get_session().is_none());

        let store = MemoryStore::with_entries([(TOKEN_KEY, ""), (USER_KEY, SEED_USER_JSON)]);
        assert!(get_session_store(store).get_session().is_none());
    }

    #[test]
    fn test_get_session_none_on_malformed_user() {
        for raw in ["{not json", "null", "", "[1,2"] {
            let store = MemoryStore::with_entries([(TOKEN_KEY, SEED_TOKEN), (USER_KEY, raw)]);
            assert!(
                get_session_store(store).get_session().is_none(),
                "user value {raw:?} should not yield a session"
            );
        }
    }

    #[test]
    fn test_save_session_round_trips_through_store() {
        let sessions = get_session_store(MemoryStore::new());
        let session = Session {
            token: "abc".into(),
            user: rentwheel::models::SessionUser::new("omar@example.com", None),
        };

        sessions.save_session(&session).expect("Memory store never fails");

        assert_eq!(sessions.get_session(), Some(session));
        assert!(sessions.is_authenticated());
    }

    #[test]
    fn test_require_session_passes_when_signed_in() {
        let sessions = get_session_store(signed_in_store());
        let navigator = RecordingNavigator::new();

        assert!(sessions.require_session_or_redirect(Some("c1"), &navigator));
        assert!(navigator.visits().is_empty());
        assert_eq!(sessions.pending_car_id(), None);
    }

    #[test]
    fn test_require_session_redirects_and_remembers_car() {
        let store = MemoryStore::new();
        let sessions = get_session_store(store.clone());
        let navigator = RecordingNavigator::new();

        assert!(!sessions.require_session_or_redirect(Some("CAR-12"), &navigator));

        assert_eq!(navigator.visits(), vec![Visit::GoTo("login.html".into())]);
        assert_eq!(
            store.get(PENDING_CAR_KEY).expect("Memory store never fails"),
            Some("CAR-12".to_string())
        );
    }

    #[test]
    fn test_require_session_redirects_without_pending_car() {
        let store = MemoryStore::new();
        let sessions = get_session_store(store.clone());
        let navigator = RecordingNavigator::new();

        assert!(!sessions.require_session_or_redirect(None, &navigator));

        assert_eq!(navigator.visits(), vec![Visit::GoTo("login.html".into())]);
        assert!(!store.contains(PENDING_CAR_KEY));
    }

    #[test]
    fn test_take_pending_car_id_clears_marker() {
        let store = signed_in_store_with_pending("c1");
        let sessions = get_session_store(store.clone());

        assert_eq!(sessions.take_pending_car_id(), Some("c1".to_string()));
        assert_eq!(sessions.take_pending_car_id(), None);
        assert!(!store.contains(PENDING_CAR_KEY));
    }

    #[test]
    fn test_sign_out_clears_session_and_reloads() {
        let store = signed_in_store();
        let sessions = get_session_store(store.clone());
        let navigator = RecordingNavigator::new();

        nav::sign_out(&sessions, &navigator);

        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
        assert!(sessions.get_session().is_none());
        assert_eq!(navigator.visits(), vec![Visit::Reload]);
    }

    #[test]
    fn test_nav_refresh_reflects_session() {
        let signed_in = nav::refresh(&get_session_store(signed_in_store()));
        assert_eq!(signed_in.greeting.as_deref(), Some("Hi, Sara"));
        assert!(signed_in.show_sign_out);
        assert!(!signed_in.show_sign_in);

        let anonymous = nav::refresh(&get_session_store(MemoryStore::new()));
        assert_eq!(anonymous.greeting, None);
        assert!(anonymous.show_sign_in);
        assert!(!anonymous.show_sign_out);
    }

    #[test]
    fn test_nav_greeting_falls_back_to_email() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, SEED_TOKEN),
            (USER_KEY, r#"{"email":"omar@example.com","first_name":""}"#),
        ]);

        let view = nav::refresh(&get_session_store(store));

        assert_eq!(view.greeting.as_deref(), Some("Hi, omar@example.com"));
    }
}
