use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState, users::repo::UserRecord};

use super::dto::{CreatedUser, Message, UserPayload};
use super::services::{validate_new_user, validate_partial_user};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id", get(retrieve_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:user_id", put(update_user).delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<CreatedUser>), ApiError> {
    if !validate_new_user(&payload) {
        warn!("create payload failed schema validation");
        return Err(ApiError::InvalidInput);
    }

    let user = payload.into_record(Uuid::new_v4().to_string());
    state.store.put_user(&user).await?;

    info!(user_id = %user.user_id, "user created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedUser {
            message: "User created".into(),
            user_id: user.user_id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn retrieve_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    match state.store.get_user(&user_id).await? {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(%user_id, "user not found");
            Err(ApiError::NotFound)
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<Message>, ApiError> {
    if !validate_partial_user(&payload) {
        warn!(%user_id, "update payload failed schema validation");
        return Err(ApiError::InvalidInput);
    }

    let Some(mut user) = state.store.get_user(&user_id).await? else {
        warn!(%user_id, "user not found");
        return Err(ApiError::NotFound);
    };

    // Read-then-write with no conditional check; concurrent updates to the
    // same key race and the last writer wins.
    payload.apply_to(&mut user);
    state.store.put_user(&user).await?;

    info!(%user_id, "user updated");
    Ok(Json(Message {
        message: "User updated".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    // The store's delete does not report whether the key existed, so this
    // succeeds whether or not there was a record.
    state.store.delete_user(&user_id).await?;

    info!(%user_id, "user deleted");
    Ok(Json(Message {
        message: "User deleted".into(),
    }))
}
