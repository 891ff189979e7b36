use super::*;

#[test]
fn ephemeral_session_starts_anonymous() {
    let session = SessionContext::ephemeral();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn set_token_authenticates_and_persists() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = SessionContext::new(store.clone());

    session.set_token("devtoken:a@b.com", true).unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("devtoken:a@b.com"));
    assert_eq!(store.load().unwrap().as_deref(), Some("devtoken:a@b.com"));
}

#[test]
fn set_token_without_save_skips_store() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = SessionContext::new(store.clone());

    session.set_token("devtoken:a@b.com", false).unwrap();
    assert!(session.is_authenticated());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn empty_token_is_ignored() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = SessionContext::new(store.clone());

    session.set_token("", true).unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn restore_picks_up_persisted_token() {
    let store = Arc::new(MemoryTokenStore::new());
    store.save("devtoken:a@b.com").unwrap();

    let session = SessionContext::restore(store).unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("devtoken:a@b.com"));
}

#[test]
fn restore_with_empty_store_is_anonymous() {
    let session = SessionContext::restore(Arc::new(MemoryTokenStore::new())).unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn clear_drops_memory_and_store() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = SessionContext::new(store.clone());
    session.set_token("devtoken:a@b.com", true).unwrap();

    session.clear().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn clones_share_one_token() {
    let session = SessionContext::ephemeral();
    let other = session.clone();

    session.set_token("devtoken:a@b.com", false).unwrap();
    assert!(other.is_authenticated());

    other.clear().unwrap();
    assert!(!session.is_authenticated());
}
