//! Command payloads for expense mutations.

use chrono::NaiveDate;

/// Fields for a brand new expense; id and position are assigned by the engine.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub kind: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// Partial update of an expense. Fields left `None` keep their stored value.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
    }
}
