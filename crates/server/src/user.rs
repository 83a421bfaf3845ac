//! User API endpoints: signup, login, profile, logout.

use api_types::{
    Message,
    user::{LoggedIn, Login, Profile, Signup},
};
use axum::{Json, extract::Path, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn signup(
    State(state): State<ServerState>,
    Json(payload): Json<Signup>,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .signup(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok(Json(Message {
        message: "success".to_string(),
    }))
}

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<Login>,
) -> Result<Json<LoggedIn>, ServerError> {
    let user_id = state.engine.login(&payload.email, &payload.password).await?;

    Ok(Json(LoggedIn { user_id }))
}

pub async fn profile(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, ServerError> {
    let profile = state.engine.profile(&user_id).await?;

    Ok(Json(Profile {
        id: profile.id,
        username: profile.username,
        email: profile.email,
        expenses: profile
            .expenses
            .into_iter()
            .map(crate::expenses::view)
            .collect(),
    }))
}

/// No server-side session exists; the endpoint only acknowledges.
pub async fn logout() -> Json<Message> {
    Json(Message {
        message: "Logged out successfully".to_string(),
    })
}
