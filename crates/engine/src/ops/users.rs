use sea_orm::{ActiveValue, QueryFilter, QueryOrder, SqlErr, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{EngineError, Expense, ResultEngine, UserProfile, credentials, expenses, users};

use super::{Engine, with_tx};

impl Engine {
    /// Registers a new user and returns its opaque id.
    ///
    /// The secret is hashed before anything touches the database. A reused
    /// email surfaces as [`EngineError::DuplicateEmail`].
    pub async fn signup(&self, username: &str, email: &str, secret: &str) -> ResultEngine<String> {
        let password_hash = credentials::hash_secret(secret)?;
        let id = Uuid::new_v4().to_string();
        let user = users::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash),
        };

        with_tx!(self, |db_tx| {
            match user.insert(&db_tx).await {
                Ok(_) => Ok(id),
                Err(err) => match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        Err(EngineError::DuplicateEmail(email.to_string()))
                    }
                    _ => Err(EngineError::Database(err)),
                },
            }
        })
    }

    /// Verifies a login attempt and returns the user's id.
    ///
    /// An unknown email and a wrong secret are indistinguishable to the
    /// caller.
    pub async fn login(&self, email: &str, secret: &str) -> ResultEngine<String> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.database)
            .await?;

        let Some(user) = user else {
            return Err(EngineError::InvalidCredentials);
        };

        if credentials::verify_secret(secret, &user.password_hash)? {
            Ok(user.id)
        } else {
            Err(EngineError::InvalidCredentials)
        }
    }

    /// Returns the public view of the user aggregate, without the credential
    /// hash.
    pub async fn profile(&self, user_id: &str) -> ResultEngine<UserProfile> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::UserNotFound(user_id.to_string()))?;

        let expenses = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_asc(expenses::Column::Position)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::from)
            .collect();

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            expenses,
        })
    }
}
