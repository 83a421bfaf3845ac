//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`UserNotFound`] thrown when a user id does not resolve.
//! - [`ExpenseNotFound`] thrown when an expense id does not resolve.
//! - [`DuplicateEmail`] thrown when a signup reuses an existing email.
//!
//!  [`UserNotFound`]: EngineError::UserNotFound
//!  [`ExpenseNotFound`]: EngineError::ExpenseNotFound
//!  [`DuplicateEmail`]: EngineError::DuplicateEmail
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("user \"{0}\" not found!")]
    UserNotFound(String),
    #[error("expense \"{0}\" not found!")]
    ExpenseNotFound(String),
    #[error("email \"{0}\" already registered!")]
    DuplicateEmail(String),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
    #[error("credential error: {0}")]
    Credential(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound(a), Self::UserNotFound(b)) => a == b,
            (Self::ExpenseNotFound(a), Self::ExpenseNotFound(b)) => a == b,
            (Self::DuplicateEmail(a), Self::DuplicateEmail(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::InvalidFilter(a), Self::InvalidFilter(b)) => a == b,
            (Self::Credential(a), Self::Credential(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
