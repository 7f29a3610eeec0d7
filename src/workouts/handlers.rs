use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{auth::extractors::AuthUser, error::ApiError, state::AppState, validation};

use super::dto::{
    CreateWorkoutRequest, MessageResponse, SearchWorkoutRequest, UpdateWorkoutRequest,
    WorkoutMessageResponse,
};
use super::repo::{NewWorkout, Workout};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", post(create_workout))
        .route("/workouts/all", get(get_my_workouts))
        .route("/workouts/active", get(get_active_workouts))
        .route("/workouts/search", post(search_workouts))
        .route("/workouts/:id", get(get_workout_by_id))
        .route("/workouts/:id/update", patch(update_workout))
        .route("/workouts/:id/activate", patch(activate_workout))
        .route("/workouts/:id/archive", patch(archive_workout))
        .route("/workouts/deleteWorkout/:id", delete(delete_workout))
        .route("/workouts/completeWorkoutStatus/:id", patch(complete_workout))
}

#[instrument(skip(state, payload))]
pub async fn create_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let workout = Workout::create(
        &state.db,
        &NewWorkout {
            user_id: user.id,
            name: &payload.name,
            duration: &payload.duration,
            status: &payload.status,
            date_added: payload.date_added,
        },
    )
    .await?;

    info!(workout_id = %workout.id, user_id = %user.id, "workout created");
    Ok((StatusCode::CREATED, Json(workout)))
}

#[instrument(skip(state))]
pub async fn get_my_workouts(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = Workout::list_by_user(&state.db, user.id).await?;
    Ok(Json(workouts))
}

#[instrument(skip(state))]
pub async fn get_active_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = Workout::list_active(&state.db).await?;
    Ok(Json(workouts))
}

#[instrument(skip(state))]
pub async fn get_workout_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, ApiError> {
    let id = validation::parse_workout_id(&id)?;
    let workout = Workout::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout not found"))?;
    Ok(Json(workout))
}

#[instrument(skip(state, payload))]
pub async fn search_workouts(
    State(state): State<AppState>,
    Json(payload): Json<SearchWorkoutRequest>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = Workout::search_by_name(&state.db, &payload.name).await?;
    Ok(Json(workouts))
}

#[instrument(skip(state, payload))]
pub async fn update_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateWorkoutRequest>,
) -> Result<Json<WorkoutMessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&id)?;

    let workout = Workout::update_fields(
        &state.db,
        id,
        user.id,
        payload.name.as_deref(),
        payload.duration.as_deref(),
        payload.status.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Workout not found"))?;

    info!(workout_id = %workout.id, "workout updated");
    Ok(Json(WorkoutMessageResponse {
        message: "Workout updated successfully".into(),
        workout,
    }))
}

/// PATCH /workouts/:id/activate — already-active workouts short-circuit
/// with 200 and no write.
#[instrument(skip(state))]
pub async fn activate_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<WorkoutMessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&id)?;

    let workout = Workout::find_owned(&state.db, id, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout not found"))?;

    if workout.is_active {
        return Ok(Json(WorkoutMessageResponse {
            message: "Workout already active".into(),
            workout,
        }));
    }

    let workout = Workout::set_active(&state.db, id, user.id, true)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout not found"))?;

    info!(workout_id = %workout.id, "workout activated");
    Ok(Json(WorkoutMessageResponse {
        message: "Workout activated successfully".into(),
        workout,
    }))
}

/// PATCH /workouts/:id/archive — mirror image of activate.
#[instrument(skip(state))]
pub async fn archive_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<WorkoutMessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&id)?;

    let workout = Workout::find_owned(&state.db, id, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout not found"))?;

    if !workout.is_active {
        return Ok(Json(WorkoutMessageResponse {
            message: "Workout already archived".into(),
            workout,
        }));
    }

    let workout = Workout::set_active(&state.db, id, user.id, false)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout not found"))?;

    info!(workout_id = %workout.id, "workout archived");
    Ok(Json(WorkoutMessageResponse {
        message: "Workout archived successfully".into(),
        workout,
    }))
}

#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&id)?;

    let deleted = Workout::delete(&state.db, id, user.id).await?;
    if !deleted {
        warn!(workout_id = %id, user_id = %user.id, "delete target not found");
        return Err(ApiError::not_found("Workout not found"));
    }

    info!(workout_id = %id, "workout deleted");
    Ok(Json(MessageResponse::new("Workout deleted successfully")))
}

#[instrument(skip(state))]
pub async fn complete_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<WorkoutMessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&id)?;

    let workout = Workout::set_status(&state.db, id, user.id, "completed")
        .await?
        .ok_or_else(|| ApiError::not_found("Workout not found"))?;

    info!(workout_id = %workout.id, "workout completed");
    Ok(Json(WorkoutMessageResponse {
        message: "Workout completed successfully".into(),
        workout,
    }))
}
