use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Generic success body for endpoints that only acknowledge.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Signup {
        pub username: String,
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Login {
        pub email: String,
        pub password: String,
    }

    /// Returned by a successful login; the id is the handle for every
    /// expense operation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoggedIn {
        pub user_id: String,
    }

    /// Public profile: the user aggregate minus the credential hash.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Profile {
        pub id: String,
        pub username: String,
        pub email: String,
        pub expenses: Vec<super::expense::ExpenseView>,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        #[serde(rename = "userId")]
        pub user_id: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub date: NaiveDate,
        pub description: String,
        pub amount: f64,
    }

    /// Query string for listing expenses. `month` and `year` arrive as
    /// numbers; non-numeric values are rejected at extraction.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListQuery {
        #[serde(rename = "userId")]
        pub user_id: String,
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub month: Option<u32>,
        pub year: Option<i32>,
    }

    /// Partial update: absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub date: Option<NaiveDate>,
        pub description: Option<String>,
        pub amount: Option<f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub date: NaiveDate,
        pub description: String,
        pub amount: f64,
    }
}
