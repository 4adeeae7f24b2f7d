// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use shift_room_domain::{Room, RoomId};
use shift_room_persistence::KeyValueStore;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::store::SharedStore;

/// How often clients re-read their room.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Refresh settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// A background task that re-reads one room and publishes changes.
///
/// The first read happens immediately. Subscribers only see a new value
/// when the stored snapshot differs from the last one published. Dropping
/// the poller cancels the task.
pub struct RoomPoller {
    receiver: watch::Receiver<Option<Room>>,
    task: JoinHandle<()>,
}

impl RoomPoller {
    /// Starts polling `room_id` on the current tokio runtime.
    pub fn spawn<B>(store: SharedStore<B>, room_id: RoomId, config: PollConfig) -> Self
    where
        B: KeyValueStore + 'static,
    {
        let (sender, receiver) = watch::channel(None);
        let period: Duration = config.interval.max(Duration::from_millis(1));

        let task: JoinHandle<()> = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let snapshot = store.lock().await.get(&room_id);
                match snapshot {
                    Ok(room) => {
                        let changed: bool = sender.send_if_modified(|current| {
                            if *current == room {
                                false
                            } else {
                                *current = room;
                                true
                            }
                        });
                        if changed {
                            debug!(room_id = %room_id, "Room changed");
                        }
                    }
                    Err(err) => warn!(room_id = %room_id, error = %err, "Room refresh failed"),
                }
            }
        });

        Self { receiver, task }
    }

    /// A new receiver of room snapshots. `None` until the room is found.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Room>> {
        self.receiver.clone()
    }

    /// The last published snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<Room> {
        self.receiver.borrow().clone()
    }

    /// Returns false once the task has stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancels the task.
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for RoomPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
