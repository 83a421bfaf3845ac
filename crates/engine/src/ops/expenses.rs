use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, Expense, ExpenseFilter, ExpensePatch, NewExpense, ResultEngine, expenses,
    filter::filter_expenses, users,
};

use super::{Engine, with_tx};

impl Engine {
    /// Appends a new expense to a user's sequence and returns it.
    pub async fn add_expense(&self, user_id: &str, new: NewExpense) -> ResultEngine<Expense> {
        with_tx!(self, |db_tx| {
            users::Entity::find_by_id(user_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::UserNotFound(user_id.to_string()))?;

            // Next position in the sequence; listing orders by it.
            let last = expenses::Entity::find()
                .filter(expenses::Column::UserId.eq(user_id))
                .order_by_desc(expenses::Column::Position)
                .one(&db_tx)
                .await?;
            let position = last.map_or(0, |expense| expense.position + 1);

            let expense = Expense::new(
                user_id.to_string(),
                new.kind,
                new.date,
                new.description,
                new.amount,
                position,
            );
            expenses::ActiveModel::from(&expense).insert(&db_tx).await?;

            Ok(expense)
        })
    }

    /// Loads a user's expenses in creation order and applies the filter.
    pub async fn list_expenses(
        &self,
        user_id: &str,
        filter: &ExpenseFilter,
    ) -> ResultEngine<Vec<Expense>> {
        filter.validate()?;

        users::Entity::find_by_id(user_id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::UserNotFound(user_id.to_string()))?;

        let records: Vec<Expense> = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_asc(expenses::Column::Position)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::from)
            .collect();

        filter_expenses(&records, filter)
    }

    /// Replaces the provided fields of an expense and returns the new state.
    ///
    /// Fields absent from the patch keep their stored value, so applying the
    /// same patch twice is idempotent.
    pub async fn update_expense(
        &self,
        expense_id: &str,
        patch: ExpensePatch,
    ) -> ResultEngine<Expense> {
        with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(expense_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::ExpenseNotFound(expense_id.to_string()))?;

            if patch.is_empty() {
                Ok(Expense::from(model))
            } else {
                let mut active: expenses::ActiveModel = model.into();
                if let Some(kind) = patch.kind {
                    active.kind = ActiveValue::Set(kind);
                }
                if let Some(date) = patch.date {
                    active.date = ActiveValue::Set(date);
                }
                if let Some(description) = patch.description {
                    active.description = ActiveValue::Set(description);
                }
                if let Some(amount) = patch.amount {
                    active.amount = ActiveValue::Set(amount);
                }

                let updated = active.update(&db_tx).await?;
                Ok(Expense::from(updated))
            }
        })
    }

    /// Removes exactly one expense; remaining records keep their order.
    pub async fn delete_expense(&self, expense_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_by_id(expense_id)
                .exec(&db_tx)
                .await?;

            if result.rows_affected == 0 {
                Err(EngineError::ExpenseNotFound(expense_id.to_string()))
            } else {
                Ok(())
            }
        })
    }
}
