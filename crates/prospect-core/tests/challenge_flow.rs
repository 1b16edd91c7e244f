//! End-to-end challenge scenarios against an in-memory store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{Duration, Utc};
use prospect_core::{
    ActionCategory, ChallengeSession, PostCategory, StateDocument, StateGateway, SyncError,
};

/// In-memory stand-in for the remote store. Last write wins, no merge.
/// Clones share the backing map, so one instance per "device" works.
#[derive(Default, Clone)]
struct MemoryGateway {
    store: Rc<RefCell<HashMap<String, StateDocument>>>,
}

impl StateGateway for MemoryGateway {
    fn fetch(&self, user_id: &str) -> Result<Option<StateDocument>, SyncError> {
        Ok(self.store.borrow().get(user_id).cloned())
    }

    fn upsert(&self, user_id: &str, doc: &StateDocument) -> Result<(), SyncError> {
        self.store
            .borrow_mut()
            .insert(user_id.to_string(), doc.clone());
        Ok(())
    }
}

fn fresh_session() -> ChallengeSession<MemoryGateway> {
    ChallengeSession::new("user_flow", MemoryGateway::default(), 1000)
}

#[test]
fn fresh_session_starts_from_defaults() {
    let mut session = fresh_session();
    assert!(!session.load());
    assert_eq!(session.engine().points(), 0);
    assert_eq!(session.engine().state().level, 1);
}

#[test]
fn thirty_calls_reach_the_weekly_target() {
    let mut session = fresh_session();
    session.load();

    session.perform_action(ActionCategory::Calls);
    assert_eq!(
        session.engine().tracker().progress(ActionCategory::Calls).count,
        1
    );
    assert_eq!(session.engine().points(), 50);

    for _ in 0..29 {
        session.perform_action(ActionCategory::Calls);
    }
    assert_eq!(
        session.engine().tracker().progress(ActionCategory::Calls).count,
        30
    );
    assert_eq!(session.engine().progress_percent(ActionCategory::Calls), 100.0);
    assert_eq!(session.engine().points(), 1500);
}

#[test]
fn rotation_cycle_scores_posts_but_not_skips() {
    let mut session = fresh_session();
    session.load();

    assert!(session.perform_linkedin_post(PostCategory::Info).is_some());
    assert!(session.skip_linkedin_post(PostCategory::Humor).is_some());
    assert!(session.skip_linkedin_post(PostCategory::Testimonial).is_some());
    assert!(session.perform_linkedin_post(PostCategory::News).is_some());

    // Exhaustion reset: all four open again, nothing marked done.
    let rotation = session.engine().rotation();
    assert_eq!(rotation.available_count(), 4);
    for category in PostCategory::ALL {
        assert!(!rotation.entry(category).done);
    }
    // Two published posts at 100 each; the skips score nothing.
    assert_eq!(session.engine().points(), 200);
}

#[test]
fn debounce_holds_the_save_until_the_stream_pauses() {
    let gateway = MemoryGateway::default();
    let mut session = ChallengeSession::new("user_flow", gateway.clone(), 1000);
    session.load();

    session.perform_action(ActionCategory::Messages);
    session.perform_action(ActionCategory::Messages);
    assert!(session.status().pending_save);

    // The quiet period has not elapsed yet; nothing reaches the store.
    assert!(!session.tick(Utc::now()));
    assert!(gateway.store.borrow().is_empty());

    // Once it has, exactly one save goes out, carrying the latest state.
    assert!(session.tick(Utc::now() + Duration::seconds(2)));
    assert!(!session.status().pending_save);
    assert!(!session.tick(Utc::now() + Duration::seconds(3)));

    let saved = gateway.store.borrow().get("user_flow").cloned().unwrap();
    assert_eq!(saved.actions.tracker.messages.count, 2);
    assert_eq!(saved.state.points, 100);
}

#[test]
fn two_sessions_share_state_through_the_store() {
    let gateway = MemoryGateway::default();

    let mut first = ChallengeSession::new("user_shared", gateway.clone(), 1000);
    first.load();
    first.perform_action(ActionCategory::PersonalizedEmails);
    first.perform_linkedin_post(PostCategory::Humor);
    let before = first.engine().clone();
    assert!(first.flush());

    let mut second = ChallengeSession::new("user_shared", gateway, 1000);
    assert!(second.load());

    // The whole aggregate survives, last action time included.
    assert_eq!(second.engine(), &before);
    let restored = second.engine().state().last_action_time.unwrap();
    let original = before.state().last_action_time.unwrap();
    assert!((restored - original).num_seconds().abs() < 1);
}

#[test]
fn session_end_without_flush_may_drop_the_pending_save() {
    let gateway = MemoryGateway::default();

    {
        let mut session = ChallengeSession::new("user_dropped", gateway.clone(), 60_000);
        session.load();
        session.perform_action(ActionCategory::Calls);
        // Session ends here without a flush; the pending save dies with it.
    }

    assert!(gateway.store.borrow().get("user_dropped").is_none());
}
