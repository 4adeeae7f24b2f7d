// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use shift_room::{GeneratedSchedule, SchedulingProblem, SwapContext};
use shift_room_domain::{Day, RoomId, RoomStatus, Schedule, Shift};
use shift_room_persistence::{KeyValueStore, MemoryStore, PersistenceError, RoomStore};
use shift_room_solver::{Citation, SchedulingTips, Solver, SolverError};

use crate::{
    CreateRoomRequest, JoinRoomRequest, RoomUpdate, Session, SharedStore, create_room, join_room,
    submit_preferences,
};

pub fn day(s: &str) -> Day {
    Day::parse(s).expect("valid test date")
}

/// A two-day room owned by a non-participating admin.
pub fn create_room_request() -> CreateRoomRequest {
    CreateRoomRequest {
        name: String::from("Ward 3"),
        password: Some(String::from("door")),
        admin_name: String::from("Admin"),
        admin_password: String::from("secret"),
        is_participant: false,
        month: None,
        start_date: Some(day("2024-03-01")),
        end_date: Some(day("2024-03-02")),
    }
}

pub fn join_request(name: &str) -> JoinRoomRequest {
    JoinRoomRequest {
        name: name.to_string(),
        password: Some(String::from("door")),
    }
}

/// Creates the test room, joins A and B and submits for both.
///
/// Returns the admin session.
pub fn create_submitted_room<B: KeyValueStore>(store: &mut RoomStore<B>) -> Session {
    let created: RoomUpdate<Session> =
        create_room(store, &create_room_request()).expect("room created");
    let admin: Session = created.output;
    for name in ["A", "B"] {
        let joined: RoomUpdate<Session> =
            join_room(store, admin.room_id(), &join_request(name)).expect("joined");
        submit_preferences(store, &joined.output).expect("submitted");
    }
    admin
}

/// The schedule `StubSolver` returns for the test room.
pub fn stub_schedule() -> Schedule {
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Morning));
    schedule.assign("A", day("2024-03-02"), None);
    schedule.assign("B", day("2024-03-01"), None);
    schedule.assign("B", day("2024-03-02"), Some(Shift::Evening));
    schedule
}

/// What the stub answers to schedule requests.
#[derive(Clone)]
pub enum StubReply {
    Schedule(Schedule),
    Error(SolverError),
}

/// Solver returning canned answers and counting schedule calls.
pub struct StubSolver {
    reply: StubReply,
    delay: Duration,
    pub schedule_calls: AtomicUsize,
}

impl StubSolver {
    pub fn succeeding() -> Self {
        Self::replying(StubReply::Schedule(stub_schedule()))
    }

    pub fn failing() -> Self {
        Self::replying(StubReply::Error(SolverError::Api {
            status: 503,
            body: String::from("model overloaded"),
        }))
    }

    pub const fn replying(reply: StubReply) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            schedule_calls: AtomicUsize::new(0),
        }
    }

    /// Makes every schedule request take `delay`.
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.schedule_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Solver for StubSolver {
    async fn generate_schedule(
        &self,
        _problem: &SchedulingProblem,
    ) -> Result<GeneratedSchedule, SolverError> {
        self.schedule_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match &self.reply {
            StubReply::Schedule(schedule) => Ok(GeneratedSchedule {
                schedule: schedule.clone(),
                notes: String::from("Evenings split evenly."),
            }),
            StubReply::Error(err) => Err(err.clone()),
        }
    }

    async fn analyze_fairness(&self, schedule: &Schedule) -> Result<String, SolverError> {
        Ok(format!("{} rows reviewed", schedule.len()))
    }

    async fn suggest_swap(&self, context: &SwapContext) -> Result<String, SolverError> {
        Ok(format!(
            "{} on {} {}",
            context.participant, context.date, context.shift
        ))
    }

    async fn scheduling_tips(&self) -> Result<SchedulingTips, SolverError> {
        Ok(SchedulingTips {
            text: String::from("Rotate evenings."),
            citations: vec![Citation {
                title: String::from("Rostering"),
                url: String::from("https://example.org/rostering"),
            }],
        })
    }
}

/// Solver that reads the room from the shared store while it works.
pub struct ObservingSolver {
    store: SharedStore<MemoryStore>,
    room_id: RoomId,
    seen: Mutex<Option<RoomStatus>>,
}

impl ObservingSolver {
    pub const fn new(store: SharedStore<MemoryStore>, room_id: RoomId) -> Self {
        Self {
            store,
            room_id,
            seen: Mutex::new(None),
        }
    }

    pub fn seen(&self) -> Option<RoomStatus> {
        *self.seen.lock().unwrap()
    }
}

#[async_trait]
impl Solver for ObservingSolver {
    async fn generate_schedule(
        &self,
        _problem: &SchedulingProblem,
    ) -> Result<GeneratedSchedule, SolverError> {
        let status: Option<RoomStatus> = self
            .store
            .lock()
            .await
            .get(&self.room_id)
            .unwrap()
            .map(|room| room.status);
        *self.seen.lock().unwrap() = status;
        Ok(GeneratedSchedule {
            schedule: stub_schedule(),
            notes: String::new(),
        })
    }

    async fn analyze_fairness(&self, _schedule: &Schedule) -> Result<String, SolverError> {
        Ok(String::new())
    }

    async fn suggest_swap(&self, _context: &SwapContext) -> Result<String, SolverError> {
        Ok(String::new())
    }

    async fn scheduling_tips(&self) -> Result<SchedulingTips, SolverError> {
        Ok(SchedulingTips {
            text: String::new(),
            citations: Vec::new(),
        })
    }
}

/// Memory store whose writes can be switched off.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    pub reject_writes: Arc<AtomicBool>,
}

impl KeyValueStore for FailingStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::DatabaseError(String::from(
                "database or disk is full",
            )));
        }
        self.inner.put(key, value)
    }

    fn get(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.get(key)
    }
}
