use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::form::ExpenseForm;
use crate::{Config, Expense, Result};

/// The acknowledgment shown after an expense is stored.
pub(crate) const ADDED: &str = "Expense added successfully.";

/// Validates `form` and appends the resulting expense to the ledger.
///
/// # Returns
/// The stored expense, including the `id` the store assigned to it.
///
/// # Errors
/// - Returns an `ErrorType::Validation` error, without touching the store, if a required field
///   is blank or the amount is not a number.
/// - Returns an `ErrorType::Database` error if the store cannot be written.
pub async fn add(config: &Config, form: &ExpenseForm) -> Result<Out<Expense>> {
    let expense = form.validate()?;
    let id = config
        .db()
        .append(&expense)
        .await
        .pub_result(ErrorType::Database)?;
    Ok(Out::new(ADDED, expense.into_expense(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_add() {
        let env = TestEnv::new().await;
        let form = ExpenseForm::new("2024-01-01", "Food", "12.50", Some("lunch".into()));

        let out = add(env.config(), &form).await.unwrap();

        assert_eq!(ADDED, out.message());
        let expense = out.structure().unwrap();
        assert_eq!(1, expense.id());
        assert_eq!(vec![expense.clone()], env.expenses().await);
    }

    #[tokio::test]
    async fn test_add_invalid_form_stores_nothing() {
        let env = TestEnv::new().await;
        let form = ExpenseForm::new("2024-01-01", "Food", "a lot", None);

        let err = add(env.config(), &form).await.unwrap_err();

        assert!(err.is_validation());
        assert!(env.expenses().await.is_empty());
    }
}
