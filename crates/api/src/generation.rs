// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations that wait on the solver.
//!
//! The store lock is never held across a solver call.

use std::sync::Arc;

use shift_room::{
    Command, CoreError, SchedulingProblem, SwapContext, TransitionOutcome, TransitionResult,
    apply, build_swap_context,
};
use shift_room_domain::{Room, RoomId, RoomStatus, Schedule};
use shift_room_persistence::KeyValueStore;
use shift_room_solver::{SchedulingTips, Solver};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::error::{ApiError, translate_core_error, translate_solver_error};
use crate::request_response::{RoomUpdate, SuggestSwapRequest};
use crate::rooms::require_admin;
use crate::session::Session;
use crate::store::{SharedStore, load_room, persist};

/// Generates a schedule for the session's room. Admin only.
///
/// The room is saved as `generating` before the solver is called. The
/// solver call and the final save run on a spawned task, so the room is
/// settled even if the caller stops waiting. On success it is saved as
/// `complete` with the solver's schedule. On any solver failure, including
/// a schedule that does not fit the room, it is saved back as `collecting`
/// and the failure is returned.
///
/// # Errors
///
/// Returns an error if:
/// - The session is not the admin
/// - The room is not collecting, has no participants, or someone has not
///   submitted (nothing is changed and the solver is not called)
/// - The solver fails (`SolverFailure`, after the room is reverted)
pub async fn generate_schedule<B>(
    store: &SharedStore<B>,
    solver: Arc<dyn Solver>,
    session: &Session,
) -> Result<RoomUpdate, ApiError>
where
    B: KeyValueStore + 'static,
{
    let (generating, problem): (Room, SchedulingProblem) = {
        let mut guard = store.lock().await;
        let room: Room = load_room(&mut *guard, session.room_id())?;
        require_admin(&room, session, "generate_schedule")?;

        let result: TransitionResult =
            apply(&room, Command::BeginGeneration).map_err(translate_core_error)?;
        let TransitionOutcome::Problem(problem) = result.outcome else {
            return Err(ApiError::ValidationFailure {
                rule: String::from("room_lifecycle"),
                message: String::from("Generation could not be started"),
            });
        };
        if persist(&mut *guard, &result.new_room).is_some() {
            warn!(room_id = %room.id, "Generating without a saved snapshot");
        }
        (result.new_room, *problem)
    };

    let room_id: RoomId = generating.id.clone();
    let task: JoinHandle<Result<RoomUpdate, ApiError>> = tokio::spawn(settle_generation(
        Arc::clone(store),
        solver,
        generating,
        problem,
    ));
    task.await.map_err(|err| {
        error!(room_id = %room_id, error = %err, "Generation task did not finish");
        ApiError::SolverFailure {
            message: format!("Generation task did not finish: {err}"),
        }
    })?
}

/// Calls the solver and saves the room as `complete` or back as `collecting`.
async fn settle_generation<B: KeyValueStore>(
    store: SharedStore<B>,
    solver: Arc<dyn Solver>,
    generating: Room,
    problem: SchedulingProblem,
) -> Result<RoomUpdate, ApiError> {
    info!(
        room_id = %generating.id,
        participants = problem.participants.len(),
        days = problem.dates.len(),
        "Requesting schedule from solver"
    );
    let reply = solver.generate_schedule(&problem).await;

    let completed: Result<TransitionResult, ApiError> = reply
        .map_err(|e| translate_solver_error(&e))
        .and_then(|generated| {
            apply(&generating, Command::CompleteGeneration(generated))
                .map_err(translate_core_error)
        });

    let mut guard = store.lock().await;
    match completed {
        Ok(result) => {
            info!(room_id = %generating.id, "Schedule generated");
            let save_error: Option<ApiError> = persist(&mut *guard, &result.new_room);
            Ok(RoomUpdate {
                room: result.new_room,
                output: (),
                save_error,
            })
        }
        Err(err) => {
            error!(room_id = %generating.id, error = %err, "Schedule generation failed");
            let reverted: TransitionResult =
                apply(&generating, Command::FailGeneration).map_err(translate_core_error)?;
            persist(&mut *guard, &reverted.new_room);
            Err(err)
        }
    }
}

fn completed_schedule(room: &Room) -> Result<Schedule, ApiError> {
    match (&room.status, &room.schedule) {
        (RoomStatus::Complete, Some(schedule)) => Ok(schedule.clone()),
        _ => Err(translate_core_error(CoreError::NoSchedule {
            status: room.status,
        })),
    }
}

/// Asks the solver for a fairness review of the room's schedule.
///
/// # Errors
///
/// Returns an error if the room does not exist, has no completed
/// schedule, or the solver fails.
pub async fn analyze_fairness<B: KeyValueStore>(
    store: &SharedStore<B>,
    solver: &dyn Solver,
    room_id: &RoomId,
) -> Result<String, ApiError> {
    let schedule: Schedule = {
        let mut guard = store.lock().await;
        completed_schedule(&load_room(&mut *guard, room_id)?)?
    };
    solver.analyze_fairness(&schedule).await.map_err(|e| {
        error!(room_id = %room_id, error = %e, "Fairness analysis failed");
        translate_solver_error(&e)
    })
}

/// Asks the solver who could take over one shift.
///
/// The participant defaults to the session's own name.
///
/// # Errors
///
/// Returns an error if the room has no completed schedule, the
/// participant or day is unknown, or the solver fails.
pub async fn suggest_swap<B: KeyValueStore>(
    store: &SharedStore<B>,
    solver: &dyn Solver,
    session: &Session,
    request: &SuggestSwapRequest,
) -> Result<String, ApiError> {
    let participant: &str = request.participant.as_deref().unwrap_or(session.name());
    let context: SwapContext = {
        let mut guard = store.lock().await;
        let room: Room = load_room(&mut *guard, session.room_id())?;
        build_swap_context(&room, participant, request.date, request.shift)
            .map_err(translate_core_error)?
    };
    solver.suggest_swap(&context).await.map_err(|e| {
        error!(room_id = %session.room_id(), error = %e, "Swap suggestion failed");
        translate_solver_error(&e)
    })
}

/// Fetches general scheduling tips.
///
/// # Errors
///
/// Returns `SolverFailure` if the solver fails.
pub async fn scheduling_tips(solver: &dyn Solver) -> Result<SchedulingTips, ApiError> {
    solver.scheduling_tips().await.map_err(|e| {
        error!(error = %e, "Scheduling tips failed");
        translate_solver_error(&e)
    })
}
