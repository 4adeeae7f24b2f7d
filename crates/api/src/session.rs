// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side session state.
//!
//! A [`Session`] binds an identity to one room. It lives only as long as
//! the client keeps it and is never written into the room itself.

use shift_room::{Identity, Role};
use shift_room_domain::{Room, RoomId};
use tokio::sync::watch;
use tracing::info;

use crate::poller::RoomPoller;

/// An identity bound to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    room_id: RoomId,
    identity: Identity,
}

impl Session {
    #[must_use]
    pub const fn new(room_id: RoomId, identity: Identity) -> Self {
        Self { room_id, identity }
    }

    #[must_use]
    pub const fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.identity.role
    }
}

struct ActiveSession {
    session: Session,
    poller: Option<RoomPoller>,
}

/// The session a client currently holds, with the refresh task it owns.
///
/// Logging out or starting another session stops the previous refresh task.
#[derive(Default)]
pub struct SessionContext {
    active: Option<ActiveSession>,
}

impl SessionContext {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Makes `session` current, replacing any previous one.
    pub fn begin(&mut self, session: Session, poller: Option<RoomPoller>) {
        info!(room_id = %session.room_id(), name = session.name(), "Session started");
        self.active = Some(ActiveSession { session, poller });
    }

    /// The current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref().map(|active| &active.session)
    }

    /// A receiver for room refreshes, if a refresh task is running.
    #[must_use]
    pub fn updates(&self) -> Option<watch::Receiver<Option<Room>>> {
        self.active
            .as_ref()
            .and_then(|active| active.poller.as_ref())
            .map(RoomPoller::subscribe)
    }

    /// Ends the current session and stops its refresh task.
    pub fn logout(&mut self) -> Option<Session> {
        let active: ActiveSession = self.active.take()?;
        if let Some(poller) = active.poller {
            poller.stop();
        }
        info!(room_id = %active.session.room_id(), name = active.session.name(), "Session ended");
        Some(active.session)
    }
}
