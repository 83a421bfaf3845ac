//! The module contains the `Expense` type representing one financial event
//! owned by a user.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single expense record inside a user's expense sequence.
///
/// `position` is assigned at creation and never changes; listing orders by
/// it, so insertion order equals creation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    #[serde(skip)]
    pub position: i32,
}

impl Expense {
    pub fn new(
        user_id: String,
        kind: String,
        date: NaiveDate,
        description: String,
        amount: f64,
        position: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            kind,
            date,
            description,
            amount,
            position,
        }
    }
}

impl From<Model> for Expense {
    fn from(expense: Model) -> Self {
        Self {
            id: expense.id,
            user_id: expense.user_id,
            kind: expense.kind,
            date: expense.date,
            description: expense.description,
            amount: expense.amount,
            position: expense.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub date: Date,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Expense> for ActiveModel {
    fn from(expense: &Expense) -> Self {
        Self {
            id: ActiveValue::Set(expense.id.clone()),
            user_id: ActiveValue::Set(expense.user_id.clone()),
            kind: ActiveValue::Set(expense.kind.clone()),
            date: ActiveValue::Set(expense.date),
            description: ActiveValue::Set(expense.description.clone()),
            amount: ActiveValue::Set(expense.amount),
            position: ActiveValue::Set(expense.position),
        }
    }
}
