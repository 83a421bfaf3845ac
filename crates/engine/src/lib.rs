//! Core library for Spesa: user accounts and per-user expense sequences.
//!
//! The engine owns all persistence-backed operations (signup/login, expense
//! create/list/update/delete) and the pure [`filter_expenses`] query engine.
//! HTTP concerns live in the `server` crate.

pub use commands::{ExpensePatch, NewExpense};
pub use error::EngineError;
pub use expenses::Expense;
pub use filter::{ExpenseFilter, filter_expenses};
pub use ops::{Engine, EngineBuilder};
pub use users::UserProfile;

mod commands;
mod credentials;
mod error;
mod expenses;
mod filter;
mod ops;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
