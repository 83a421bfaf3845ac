//! Expense API endpoints: record, list (with filters), update, delete.

use api_types::{
    Message,
    expense::{ExpenseListQuery, ExpenseNew, ExpenseUpdate, ExpenseView},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{ServerError, server::ServerState};

pub(crate) fn view(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        kind: expense.kind,
        date: expense.date,
        description: expense.description,
        amount: expense.amount,
    }
}

pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .add_expense(
            &payload.user_id,
            engine::NewExpense {
                kind: payload.kind,
                date: payload.date,
                description: payload.description,
                amount: payload.amount,
            },
        )
        .await?;

    Ok(Json(Message {
        message: "Expense recorded successfully".to_string(),
    }))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ExpenseListQuery>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let filter = engine::ExpenseFilter {
        kind: query.kind,
        month: query.month,
        year: query.year,
    };

    let expenses = state.engine.list_expenses(&query.user_id, &filter).await?;

    Ok(Json(expenses.into_iter().map(view).collect()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<ExpenseView>, ServerError> {
    let updated = state
        .engine
        .update_expense(
            &id,
            engine::ExpensePatch {
                kind: payload.kind,
                date: payload.date,
                description: payload.description,
                amount: payload.amount,
            },
        )
        .await?;

    Ok(Json(view(updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_expense(&id).await?;

    Ok(Json(Message {
        message: "Expense deleted successfully".to_string(),
    }))
}
