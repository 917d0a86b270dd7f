//! Types that represent the ledger's data: `Expense` records and `CategoryTotals`.
mod expense;
mod totals;

pub(crate) use expense::ExpenseRow;
pub use expense::{Expense, NewExpense};
pub use totals::CategoryTotals;
