use super::*;
use crate::net::types::UserRole;
use crate::util::storage::MemoryStorage;
use std::sync::{Arc, Mutex};

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: UserRole::Passenger,
        passport: Some("AB123456".to_owned()),
    }
}

fn assert_consistent(session: &Session) {
    assert_eq!(session.token().is_some(), session.user().is_some());
}

// =============================================================
// Session values
// =============================================================

#[test]
fn anonymous_session_has_nothing() {
    let session = Session::anonymous();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
}

#[test]
fn authenticated_rejects_empty_token() {
    assert_eq!(Session::authenticated("", alice()), None);
}

#[test]
fn encode_then_decode_preserves_session() {
    let session = Session::authenticated("t-1", alice()).unwrap();
    let raw = session.encode().unwrap();
    assert_eq!(Session::decode(&raw).unwrap(), session);
}

#[test]
fn anonymous_encodes_as_nulls() {
    let raw = Session::anonymous().encode().unwrap();
    assert_eq!(raw, r#"{"token":null,"user":null}"#);
}

#[test]
fn decode_rejects_half_populated_record() {
    let raw = r#"{"token":"t-1","user":null}"#;
    assert!(matches!(Session::decode(raw), Err(StorageError::Malformed(_))));
    let raw = r#"{"token":null,"user":{"id":"1","name":"A","email":"a@b.com"}}"#;
    assert!(matches!(Session::decode(raw), Err(StorageError::Malformed(_))));
}

#[test]
fn decode_rejects_empty_token() {
    let raw = r#"{"token":"","user":{"id":"1","name":"A","email":"a@b.com"}}"#;
    assert!(matches!(Session::decode(raw), Err(StorageError::Malformed(_))));
}

// =============================================================
// SessionStore transitions
// =============================================================

#[test]
fn set_auth_authenticates_and_stores_user() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_auth("t-1", alice());
    assert!(store.is_authenticated());
    assert_eq!(store.session().user(), Some(&alice()));
    assert_eq!(store.session().token(), Some("t-1"));
    assert_consistent(store.session());
}

#[test]
fn logout_clears_token_and_user() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_auth("t-1", alice());
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(store.session().token(), None);
    assert_eq!(store.session().user(), None);
}

#[test]
fn expire_clears_session() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_auth("t-1", alice());
    store.expire();
    assert_eq!(store.session(), &Session::anonymous());
}

#[test]
fn set_auth_with_empty_token_leaves_store_unchanged() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_auth("t-1", alice());
    let mut bob = alice();
    bob.name = "Bob".to_owned();
    store.set_auth("", bob);
    assert_eq!(store.session().token(), Some("t-1"));
    assert_eq!(store.session().user().map(|u| u.name.as_str()), Some("Alice"));
}

#[test]
fn apply_uses_response_fields() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.apply(AuthResponse { token: "t-9".to_owned(), user: alice() });
    assert_eq!(store.session().token(), Some("t-9"));
}

#[test]
fn session_is_never_half_populated_across_transitions() {
    let mut store = SessionStore::load(MemoryStorage::new());
    assert_consistent(store.session());
    store.set_auth("t-1", alice());
    assert_consistent(store.session());
    store.set_auth("", alice());
    assert_consistent(store.session());
    store.logout();
    assert_consistent(store.session());
    store.expire();
    assert_consistent(store.session());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn transitions_are_persisted() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::load(storage.clone());
    store.set_auth("t-1", alice());
    let saved = storage.contents().unwrap();
    assert_eq!(Session::decode(&saved).unwrap().token(), Some("t-1"));

    store.logout();
    assert_eq!(storage.contents().as_deref(), Some(r#"{"token":null,"user":null}"#));
}

#[test]
fn load_restores_persisted_session() {
    let storage = MemoryStorage::new();
    SessionStore::load(storage.clone()).set_auth("t-1", alice());

    let reloaded = SessionStore::load(storage);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.session().user(), Some(&alice()));
}

#[test]
fn load_malformed_storage_is_anonymous() {
    for raw in ["not json", "{", "[]", r#"{"token":42}"#, r#"{"token":"t","user":null}"#] {
        let store = SessionStore::load(MemoryStorage::with_contents(raw));
        assert!(!store.is_authenticated(), "{raw} should load as anonymous");
    }
}

#[test]
fn load_unreadable_storage_is_anonymous() {
    let storage = MemoryStorage::with_contents(Session::authenticated("t-1", alice()).unwrap().encode().unwrap());
    let store = SessionStore::load(storage.failing_reads());
    assert!(!store.is_authenticated());
}

#[test]
fn failed_write_still_applies_transition() {
    let storage = MemoryStorage::new().failing_writes();
    let mut store = SessionStore::load(storage.clone());
    store.set_auth("t-1", alice());
    assert!(store.is_authenticated());
    assert_eq!(storage.contents(), None);
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscribers_see_every_transition() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut store = SessionStore::load(MemoryStorage::new());
    let sink = Arc::clone(&seen);
    store.subscribe(move |session, reason| sink.lock().unwrap().push((session.is_authenticated(), reason)));

    store.set_auth("t-1", alice());
    store.logout();
    store.set_auth("t-2", alice());
    store.expire();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (true, ChangeReason::SignedIn),
            (false, ChangeReason::SignedOut),
            (true, ChangeReason::SignedIn),
            (false, ChangeReason::Expired),
        ]
    );
}

#[test]
fn rejected_sign_in_does_not_notify() {
    let count = Arc::new(Mutex::new(0));
    let mut store = SessionStore::load(MemoryStorage::new());
    let sink = Arc::clone(&count);
    store.subscribe(move |_, _| *sink.lock().unwrap() += 1);
    store.set_auth("", alice());
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let count = Arc::new(Mutex::new(0));
    let mut store = SessionStore::load(MemoryStorage::new());
    let sink = Arc::clone(&count);
    let id = store.subscribe(move |_, _| *sink.lock().unwrap() += 1);

    store.set_auth("t-1", alice());
    assert!(store.unsubscribe(id));
    store.logout();

    assert_eq!(*count.lock().unwrap(), 1);
    assert!(!store.unsubscribe(id));
}

#[test]
fn subscription_ids_are_unique() {
    let mut store = SessionStore::load(MemoryStorage::new());
    let a = store.subscribe(|_, _| {});
    let b = store.subscribe(|_, _| {});
    assert_ne!(a, b);
}
