pub mod args;
pub mod chart;
pub mod commands;
mod config;
mod db;
mod error;
pub mod form;
mod model;
mod utils;

pub use config::Config;
pub use error::{Error, ErrorType, IntoResult, Result};
pub use model::{CategoryTotals, Expense, NewExpense};
