//! Pure query/filter engine over a user's expense sequence.
//!
//! Filtering never touches the database: callers load the sequence and the
//! functions here produce a new, order-preserving subset.

use chrono::Datelike;

use crate::{EngineError, Expense, ResultEngine};

/// Optional criteria for selecting expenses.
///
/// `kind` matches the category label exactly, case-sensitive. `month` is
/// 1-12 and only meaningful together with `year`; `year` alone selects a
/// whole calendar year.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub kind: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ExpenseFilter {
    /// Rejects criteria that could only ever produce an empty result.
    ///
    /// Out-of-range or orphaned values fail loudly instead of silently
    /// matching nothing.
    pub fn validate(&self) -> ResultEngine<()> {
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(EngineError::InvalidFilter(format!(
                    "month must be between 1 and 12, got {month}"
                )));
            }
            if self.year.is_none() {
                return Err(EngineError::InvalidFilter(
                    "month requires a year".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(kind) = &self.kind
            && expense.kind != *kind
        {
            return false;
        }
        match (self.month, self.year) {
            (Some(month), Some(year)) => {
                expense.date.month() == month && expense.date.year() == year
            }
            (None, Some(year)) => expense.date.year() == year,
            _ => true,
        }
    }
}

/// Returns the matching subset of `expenses`, preserving relative order.
///
/// The input is not mutated; an empty filter yields a full copy.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> ResultEngine<Vec<Expense>> {
    filter.validate()?;
    Ok(expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(
                "alice".to_string(),
                "food".to_string(),
                date(2024, 1, 15),
                "groceries".to_string(),
                10.0,
                0,
            ),
            Expense::new(
                "alice".to_string(),
                "rent".to_string(),
                date(2024, 2, 1),
                "february rent".to_string(),
                500.0,
                1,
            ),
            Expense::new(
                "alice".to_string(),
                "food".to_string(),
                date(2023, 12, 24),
                "dinner".to_string(),
                42.5,
                2,
            ),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let expenses = sample();
        let result = filter_expenses(&expenses, &ExpenseFilter::default()).unwrap();
        assert_eq!(result, expenses);
    }

    #[test]
    fn kind_matches_exactly() {
        let expenses = sample();
        let filter = ExpenseFilter {
            kind: Some("food".to_string()),
            ..Default::default()
        };
        let result = filter_expenses(&expenses, &filter).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.kind == "food"));
    }

    #[test]
    fn kind_is_case_sensitive_and_never_substring() {
        let expenses = sample();
        for kind in ["Food", "foo", "FOOD"] {
            let filter = ExpenseFilter {
                kind: Some(kind.to_string()),
                ..Default::default()
            };
            assert!(filter_expenses(&expenses, &filter).unwrap().is_empty());
        }
    }

    #[test]
    fn year_alone_selects_whole_calendar_year() {
        let expenses = sample();
        let filter = ExpenseFilter {
            year: Some(2024),
            ..Default::default()
        };
        let result = filter_expenses(&expenses, &filter).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.date.year() == 2024));
    }

    #[test]
    fn month_and_year_select_one_calendar_month() {
        let expenses = sample();
        let filter = ExpenseFilter {
            month: Some(2),
            year: Some(2024),
            ..Default::default()
        };
        let result = filter_expenses(&expenses, &filter).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, "rent");
    }

    #[test]
    fn kind_and_date_combine_conjunctively() {
        let expenses = sample();
        let filter = ExpenseFilter {
            kind: Some("food".to_string()),
            month: Some(1),
            year: Some(2024),
        };
        let result = filter_expenses(&expenses, &filter).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "groceries");
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let expenses = sample();
        for month in [0, 13] {
            let filter = ExpenseFilter {
                month: Some(month),
                year: Some(2024),
                ..Default::default()
            };
            assert!(matches!(
                filter_expenses(&expenses, &filter),
                Err(EngineError::InvalidFilter(_))
            ));
        }
    }

    #[test]
    fn month_without_year_is_rejected() {
        let expenses = sample();
        let filter = ExpenseFilter {
            month: Some(3),
            ..Default::default()
        };
        assert!(matches!(
            filter_expenses(&expenses, &filter),
            Err(EngineError::InvalidFilter(_))
        ));
    }

    #[test]
    fn input_sequence_is_untouched() {
        let expenses = sample();
        let before = expenses.clone();
        let filter = ExpenseFilter {
            kind: Some("rent".to_string()),
            ..Default::default()
        };
        filter_expenses(&expenses, &filter).unwrap();
        assert_eq!(expenses, before);
    }
}
