// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use shift_room_domain::{Room, RoomId};
use shift_room_persistence::{MemoryStore, RoomStore};
use tokio::sync::watch;
use tokio::time::timeout;

use super::helpers::create_room_request;
use crate::{
    Identity, PollConfig, Role, RoomPoller, Session, SessionContext, SharedStore, create_room,
    share,
};

fn participant(room: &str, name: &str) -> Session {
    Session::new(
        RoomId::new(room),
        Identity {
            name: name.to_string(),
            role: Role::Participant,
        },
    )
}

#[test]
fn test_session_accessors() {
    let session: Session = participant("abc1234", "A");
    assert_eq!(session.room_id().as_str(), "abc1234");
    assert_eq!(session.name(), "A");
    assert_eq!(session.role(), Role::Participant);
    assert!(!session.identity().is_admin());
}

#[test]
fn test_context_without_session() {
    let mut context: SessionContext = SessionContext::new();
    assert!(context.session().is_none());
    assert!(context.updates().is_none());
    assert_eq!(context.logout(), None);
}

#[test]
fn test_begin_replaces_previous_session() {
    let mut context: SessionContext = SessionContext::default();
    context.begin(participant("abc1234", "A"), None);
    context.begin(participant("xyz9876", "B"), None);

    assert_eq!(context.session().map(Session::name), Some("B"));
    assert!(context.updates().is_none());
}

#[tokio::test]
async fn test_logout_stops_refresh() {
    let store: SharedStore<MemoryStore> = share(RoomStore::in_memory());
    let admin: Session = create_room(&mut *store.lock().await, &create_room_request())
        .unwrap()
        .output;
    let poller: RoomPoller = RoomPoller::spawn(
        store,
        admin.room_id().clone(),
        PollConfig {
            interval: Duration::from_millis(10),
        },
    );

    let mut context: SessionContext = SessionContext::new();
    context.begin(admin.clone(), Some(poller));
    let mut updates: watch::Receiver<Option<Room>> = context.updates().unwrap();
    timeout(Duration::from_secs(2), updates.wait_for(Option::is_some))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(context.logout(), Some(admin));
    assert!(context.session().is_none());
    assert!(context.updates().is_none());

    let closed = timeout(Duration::from_secs(2), updates.changed())
        .await
        .unwrap();
    assert!(closed.is_err());
}
