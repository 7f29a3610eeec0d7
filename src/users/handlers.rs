use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        extractors::{AdminUser, AuthUser},
        jwt::JwtKeys,
        password,
    },
    error::ApiError,
    state::AppState,
    validation,
};

use super::dto::{
    CheckEmailRequest, LoginRequest, LoginResponse, MessageResponse, ProfileResponse,
    PromotedUserResponse, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest,
    UpdatedProfileResponse,
};
use super::repo::{NewUser, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register).get(list_users))
        .route("/users/login", post(login))
        .route("/users/check-email", post(check_email))
        .route("/users/profile", get(get_profile).patch(update_profile))
        .route("/users/password", patch(update_password))
        .route("/users/:id/admin", patch(promote_admin))
}

/// POST /users — format checks run before the uniqueness lookup so the
/// cheap, user-correctable failures surface first.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !validation::is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::validation("Email Invalid"));
    }
    if !validation::is_valid_mobile_no(&payload.mobile_no) {
        warn!("invalid mobile number");
        return Err(ApiError::validation("Mobile number invalid"));
    }
    if !validation::is_valid_password(&payload.password) {
        warn!("password too short");
        return Err(ApiError::validation("Password must be atleast 8 characters"));
    }
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::conflict("Email already in use"));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &NewUser {
            email: &payload.email,
            password_hash: &hash,
            first_name: &payload.first_name,
            last_name: &payload.last_name,
            mobile_no: &payload.mobile_no,
        },
    )
    .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registered Successfully")),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !validation::is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::validation("Invalid Email"));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::not_found("No email found")
        })?;

    let ok = password::verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::unauthorized("Email and password do not match"));
    }

    let keys = JwtKeys::from_ref(&state);
    let access = keys.sign(user.id, user.is_admin)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse { access }))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(ProfileResponse { user }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdatedProfileResponse>, ApiError> {
    if !validation::is_valid_mobile_no(&payload.mobile_no) {
        warn!(user_id = %user.id, "invalid mobile number");
        return Err(ApiError::validation("Mobile number invalid"));
    }

    let user = User::update_profile(
        &state.db,
        user.id,
        &payload.first_name,
        &payload.last_name,
        &payload.mobile_no,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("User not found"))?;

    info!(user_id = %user.id, "profile updated");
    Ok(Json(UpdatedProfileResponse {
        message: "Profile updated successfully".into(),
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !validation::is_valid_password(&payload.new_password) {
        warn!(user_id = %user.id, "new password too short");
        return Err(ApiError::validation("Password must be atleast 8 characters"));
    }

    let hash = password::hash_password(&payload.new_password)?;
    let updated = User::update_password(&state.db, user.id, &hash).await?;
    if !updated {
        return Err(ApiError::not_found("User not found"));
    }

    info!(user_id = %user.id, "password updated");
    Ok(Json(MessageResponse::new("Password reset successfully")))
}

/// PATCH /users/:id/admin — promotion itself requires an admin caller.
#[instrument(skip(state))]
pub async fn promote_admin(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<PromotedUserResponse>, ApiError> {
    let id = validation::parse_user_id(&id)?;

    let user = User::set_admin(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    info!(user_id = %user.id, promoted_by = %caller.id, "user promoted to admin");
    Ok(Json(PromotedUserResponse {
        updated_user: user,
        message: "User updated successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// POST /users/check-email — the status code carries the answer: 409 when
/// the email is taken, 404 when it is free.
#[instrument(skip(state, payload))]
pub async fn check_email(
    State(state): State<AppState>,
    Json(mut payload): Json<CheckEmailRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !validation::is_valid_email(&payload.email) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("Invalid email format")),
        ));
    }

    let taken = User::find_by_email(&state.db, &payload.email).await?.is_some();
    if taken {
        Ok((
            StatusCode::CONFLICT,
            Json(MessageResponse::new("Duplicate email found")),
        ))
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("No duplicate email found")),
        ))
    }
}
