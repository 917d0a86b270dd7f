use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single spending event as it is stored in the ledger.
///
/// Records are never modified after they are created, so there are only getters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    /// Assigned by the store when the record is appended. Never reused.
    id: i64,
    /// Free-form, intended to be an ISO calendar date such as `2024-01-31`.
    date: String,
    /// The grouping key for category totals.
    category: String,
    amount: f64,
    /// `None` when no description was given, which is distinct from an empty description.
    description: Option<String>,
}

impl Expense {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// The columns of a row in the `expenses` table, in table order.
pub(crate) type ExpenseRow = (i64, String, String, f64, Option<String>);

impl From<ExpenseRow> for Expense {
    fn from((id, date, category, amount, description): ExpenseRow) -> Self {
        Self {
            id,
            date,
            category,
            amount,
            description,
        }
    }
}

/// Renders the record as one line of the expense listing.
impl Display for Expense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Date: {}, Category: {}, Amount: {:.2}, Description: {}",
            self.id,
            self.date,
            self.category,
            self.amount,
            self.description.as_deref().unwrap_or("None")
        )
    }
}

/// An expense that has not been appended yet and therefore has no `id`.
///
/// The ledger trusts that the fields were validated by whoever built this value; see
/// `crate::form::ExpenseForm` for the checks done on user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewExpense {
    date: String,
    category: String,
    amount: f64,
    description: Option<String>,
}

impl NewExpense {
    pub fn new(
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Combines this value with the `id` the store assigned to it.
    pub(crate) fn into_expense(self, id: i64) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            amount: self.amount,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_description() {
        let expense = NewExpense::new("Food", 12.5, "2024-01-01", Some("lunch".into()))
            .into_expense(1);
        assert_eq!(
            expense.to_string(),
            "ID: 1, Date: 2024-01-01, Category: Food, Amount: 12.50, Description: lunch"
        );
    }

    #[test]
    fn test_display_without_description() {
        let expense = Expense::from((
            2,
            "2024-01-02".to_string(),
            "Food".to_string(),
            7.25,
            None,
        ));
        assert_eq!(
            expense.to_string(),
            "ID: 2, Date: 2024-01-02, Category: Food, Amount: 7.25, Description: None"
        );
    }

    #[test]
    fn test_empty_description_is_not_absent() {
        let expense = NewExpense::new("Food", 1.0, "2024-01-01", Some(String::new()));
        assert_eq!(expense.description(), Some(""));
        let expense = NewExpense::new("Food", 1.0, "2024-01-01", None);
        assert_eq!(expense.description(), None);
    }
}
