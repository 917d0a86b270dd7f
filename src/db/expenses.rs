//! The ledger operations: append, list and total by category.

use super::{release, Db};
use crate::model::{CategoryTotals, Expense, ExpenseRow, NewExpense};
use anyhow::{Context, Result};
use tracing::{debug, trace};

impl Db {
    /// Appends `expense` to the ledger and returns the `id` the store assigned to it.
    ///
    /// The insert is committed before this returns, so subsequent reads will include it. The
    /// fields are stored as given; input validation is the caller's job.
    pub(crate) async fn append(&self, expense: &NewExpense) -> Result<i64> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            "INSERT INTO expenses (date, category, amount, description) VALUES (?, ?, ?, ?)",
        )
        .bind(expense.date())
        .bind(expense.category())
        .bind(expense.amount())
        .bind(expense.description())
        .execute(&mut conn)
        .await
        .context("Unable to insert expense")?;
        release(conn).await?;

        let id = result.last_insert_rowid();
        debug!("Appended expense {id}: {expense:?}");
        Ok(id)
    }

    /// Returns every expense in the order it was appended. An empty ledger is not an error.
    pub(crate) async fn list_all(&self) -> Result<Vec<Expense>> {
        let mut conn = self.connect().await?;
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            "SELECT id, date, category, amount, description FROM expenses ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await
        .context("Unable to read expenses")?;
        release(conn).await?;

        trace!("Read {} expenses", rows.len());
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    /// Sums `amount` per category. Negative amounts reduce their category's total.
    pub(crate) async fn totals_by_category(&self) -> Result<CategoryTotals> {
        let mut conn = self.connect().await?;
        let rows: Vec<(String, f64)> =
            sqlx::query_as("SELECT category, SUM(amount) FROM expenses GROUP BY category")
                .fetch_all(&mut conn)
                .await
                .context("Unable to total expenses by category")?;
        release(conn).await?;

        trace!("Totalled {} categories", rows.len());
        Ok(rows.into_iter().collect())
    }
}
