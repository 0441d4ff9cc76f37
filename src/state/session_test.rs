use super::*;
use crate::test_support::{NOW_MS, expired_token, valid_token};
use crate::util::storage::MemoryStorage;

fn signed_in(storage: &mut MemoryStorage) -> SessionState {
    let mut state = SessionState::default();
    state.establish(storage, &valid_token("reader@example.com", 5), NOW_MS).unwrap();
    state
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_credential_is_absent_and_silent() {
    let mut storage = MemoryStorage::default();
    let (state, notice) = SessionState::restore(&mut storage, NOW_MS);
    assert_eq!(state.session, None);
    assert_eq!(notice, None);
}

#[test]
fn restore_valid_credential_yields_identity() {
    let mut storage = MemoryStorage::with_token(valid_token("reader@example.com", 5));
    let (state, notice) = SessionState::restore(&mut storage, NOW_MS);
    assert_eq!(state.session, Some(Session { email: "reader@example.com".to_owned(), id: 5 }));
    assert_eq!(notice, None);
    assert!(storage.load().is_some());
}

#[test]
fn restore_expired_credential_clears_storage_and_notices_once() {
    let mut storage = MemoryStorage::with_token(expired_token("reader@example.com", 5));
    let (mut state, notice) = SessionState::restore(&mut storage, NOW_MS);
    assert_eq!(state.session, None);
    assert_eq!(notice, Some(SessionNotice::Expired));
    assert_eq!(storage.load(), None);
    // Follow-up checks see nothing left to expire.
    assert_eq!(state.revalidate(&mut storage, NOW_MS), None);
    assert_eq!(state.revalidate(&mut storage, NOW_MS + 60_000), None);
}

#[test]
fn restore_garbage_credential_fails_closed() {
    let mut storage = MemoryStorage::with_token("garbage");
    let (state, notice) = SessionState::restore(&mut storage, NOW_MS);
    assert_eq!(state.session, None);
    assert_eq!(notice, Some(SessionNotice::Expired));
    assert_eq!(storage.load(), None);
}

// =============================================================
// establish / clear
// =============================================================

#[test]
fn establish_persists_and_bumps_epoch() {
    let mut storage = MemoryStorage::default();
    let mut state = SessionState::default();
    let token = valid_token("reader@example.com", 5);
    let session = state.establish(&mut storage, &token, NOW_MS).unwrap();
    assert_eq!(session.id, 5);
    assert_eq!(storage.load(), Some(token));
    assert_eq!(state.epoch, 1);
}

#[test]
fn establish_rejects_unreadable_or_expired_credentials_without_persisting() {
    let mut storage = MemoryStorage::default();
    let mut state = SessionState::default();
    assert_eq!(state.establish(&mut storage, "a.b", NOW_MS), Err(SessionError::Malformed));
    assert_eq!(
        state.establish(&mut storage, &expired_token("a@b.co", 1), NOW_MS),
        Err(SessionError::Expired)
    );
    assert_eq!(storage.load(), None);
    assert_eq!(state, SessionState::default());
}

#[test]
fn clear_removes_credential_and_bumps_epoch() {
    let mut storage = MemoryStorage::default();
    let mut state = signed_in(&mut storage);
    let epoch = state.epoch;
    state.clear(&mut storage);
    assert_eq!(state.session, None);
    assert_eq!(storage.load(), None);
    assert_eq!(state.epoch, epoch + 1);
}

// =============================================================
// revalidate
// =============================================================

#[test]
fn revalidate_keeps_live_session() {
    let mut storage = MemoryStorage::default();
    let mut state = signed_in(&mut storage);
    let before = state.clone();
    assert_eq!(state.revalidate(&mut storage, NOW_MS + 1_000), None);
    assert_eq!(state, before);
}

#[test]
fn revalidate_reports_expiry_once_per_transition() {
    let mut storage = MemoryStorage::default();
    let mut state = signed_in(&mut storage);
    let later = NOW_MS + 2 * 3_600_000;
    // Interval and focus checks racing each other.
    let notices: Vec<_> = (0..3).filter_map(|_| state.revalidate(&mut storage, later)).collect();
    assert_eq!(notices, vec![SessionNotice::Expired]);
    assert_eq!(state.session, None);
    assert_eq!(storage.load(), None);
}

#[test]
fn revalidate_drops_session_silently_when_credential_removed_elsewhere() {
    let mut storage = MemoryStorage::default();
    let mut state = signed_in(&mut storage);
    storage.remove();
    assert_eq!(state.revalidate(&mut storage, NOW_MS), None);
    assert_eq!(state.session, None);
}

#[test]
fn revalidate_adopts_credential_replaced_elsewhere() {
    let mut storage = MemoryStorage::default();
    let mut state = signed_in(&mut storage);
    storage.store(&valid_token("other@example.com", 9));
    assert_eq!(state.revalidate(&mut storage, NOW_MS), None);
    assert_eq!(state.session.map(|s| s.id), Some(9));
}

#[test]
fn revalidate_without_session_is_noop() {
    let mut storage = MemoryStorage::with_token(expired_token("a@b.co", 1));
    let mut state = SessionState::default();
    assert_eq!(state.revalidate(&mut storage, NOW_MS), None);
    assert_eq!(state, SessionState::default());
}

// =============================================================
// unauthorized
// =============================================================

#[test]
fn unauthorized_notices_only_when_session_was_present() {
    let mut storage = MemoryStorage::default();
    let mut state = signed_in(&mut storage);
    assert_eq!(state.unauthorized(&mut storage), Some(SessionNotice::Expired));
    assert_eq!(state.unauthorized(&mut storage), None);
    assert_eq!(storage.load(), None);
}
