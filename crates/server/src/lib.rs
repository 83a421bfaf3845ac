use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{run, run_with_listener, spawn_with_listener};

mod expenses;
mod server;
mod user;

pub mod types {
    pub mod user {
        pub use api_types::user::{LoggedIn, Login, Profile, Signup};
    }

    pub mod expense {
        pub use api_types::expense::{ExpenseListQuery, ExpenseNew, ExpenseUpdate, ExpenseView};
    }
}

/// Error surface of the HTTP layer.
///
/// Every handler failure originates in the engine; malformed requests are
/// rejected by axum's extractors before a handler runs.
pub struct ServerError(EngineError);

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::UserNotFound(_) | EngineError::ExpenseNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::DuplicateEmail(_) => StatusCode::CONFLICT,
        EngineError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        EngineError::InvalidFilter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Credential(_) | EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Credential(cred_err) => {
            tracing::error!("credential error: {cred_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_engine_error(&self.0);
        let error = message_for_engine_error(self.0);

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::UserNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn expense_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::ExpenseNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_email_maps_to_409() {
        let res =
            ServerError::from(EngineError::DuplicateEmail("a@b.c".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        let res = ServerError::from(EngineError::InvalidCredentials).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_filter_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidFilter("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn credential_failure_maps_to_500() {
        let res = ServerError::from(EngineError::Credential("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
