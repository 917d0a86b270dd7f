//! Validation of the expense entry form.
//!
//! The ledger stores whatever it is given. Everything a user types goes through `ExpenseForm`
//! first, which rejects missing fields and amounts that are not numbers.

use crate::{Error, NewExpense, Result};

/// The raw text of the four expense fields as entered by the user.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExpenseForm {
    date: String,
    category: String,
    amount: String,
    description: Option<String>,
}

impl ExpenseForm {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description,
        }
    }

    /// Trims every field and checks that
    /// - date, category and amount are not blank
    /// - amount parses as a finite number
    ///
    /// A description that was given is kept even if it trims to nothing.
    ///
    /// # Errors
    /// Returns an `ErrorType::Validation` error describing the first problem found.
    pub fn validate(&self) -> Result<NewExpense> {
        let date = self.date.trim();
        let category = self.category.trim();
        let amount = self.amount.trim();
        if date.is_empty() || category.is_empty() || amount.is_empty() {
            return Err(Error::validation(
                "Date, Category, and Amount are required.",
            ));
        }

        let amount = match amount.parse::<f64>() {
            Ok(a) if a.is_finite() => a,
            _ => return Err(Error::validation("Amount must be a number.")),
        };

        let description = self.description.as_deref().map(|d| d.trim().to_string());
        Ok(NewExpense::new(category, amount, date, description))
    }
}
