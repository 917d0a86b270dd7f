use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::{Config, Expense, Result};

/// The listing shown when the ledger is empty.
pub const NO_EXPENSES: &str = "No expenses found.";

/// Lists every expense, one line per record, in the order they were added.
pub async fn list(config: &Config) -> Result<Out<Vec<Expense>>> {
    let expenses = config
        .db()
        .list_all()
        .await
        .pub_result(ErrorType::Database)?;
    let message = if expenses.is_empty() {
        NO_EXPENSES.to_string()
    } else {
        expenses
            .iter()
            .map(Expense::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(Out::new(message, expenses))
}
