//! These structs provide the CLI interface for the ledger CLI.

use crate::form::ExpenseForm;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// ledger: A command-line tool for tracking personal expenses.
///
/// Expenses are appended to a local SQLite file and never changed afterwards. You can list them
/// and chart how much you have spent in each category.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory, its configuration file and the expense store.
    ///
    /// Other commands do this on first use as well, so running it is optional.
    Init,
    /// Add an expense.
    Add(AddArgs),
    /// List every expense in the order it was added.
    List,
    /// Show total spending per category as a bar chart.
    Chart,
    /// Add, view and chart expenses interactively.
    Menu,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the expenses and configuration are held. Defaults to ~/ledger
    #[arg(long, env = "LEDGER_HOME", default_value_t = default_ledger_home())]
    ledger_home: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn ledger_home(&self) -> &DisplayPath {
        &self.ledger_home
    }
}

/// Args for the `ledger add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The date of the expense, e.g. 2024-01-31. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// The spending category, e.g. Food. Totals are computed per category.
    #[arg(long)]
    category: String,

    /// The amount spent. Negative amounts, such as refunds, reduce the category total.
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// An optional note about the expense.
    #[arg(long)]
    description: Option<String>,
}

impl AddArgs {
    pub fn new(
        date: Option<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount: amount.into(),
            description,
        }
    }

    /// The expense form as entered, with the date defaulting to today's local date.
    pub fn form(&self) -> ExpenseForm {
        let date = self
            .date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
        ExpenseForm::new(
            date,
            self.category.as_str(),
            self.amount.as_str(),
            self.description.clone(),
        )
    }
}

fn default_ledger_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("ledger"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --ledger-home or LEDGER_HOME instead of relying on the default \
                ledger home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("ledger")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        <Args as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from([
            "ledger",
            "--ledger-home",
            "/tmp/somewhere",
            "--log-level",
            "debug",
            "add",
            "--date",
            "2024-01-01",
            "--category",
            "Food",
            "--amount",
            "-5.00",
            "--description",
            "refund",
        ])
        .unwrap();

        assert_eq!(LevelFilter::DEBUG, args.common().log_level());
        assert_eq!(Path::new("/tmp/somewhere"), args.common().ledger_home().path());
        let Command::Add(add_args) = args.command() else {
            panic!("expected the add command, got {:?}", args.command());
        };
        assert_eq!(
            ExpenseForm::new("2024-01-01", "Food", "-5.00", Some("refund".into())),
            add_args.form()
        );
    }

    #[test]
    fn test_add_date_defaults_to_today() {
        let expense = AddArgs::new(None, "Food", "1", None)
            .form()
            .validate()
            .unwrap();
        assert!(chrono::NaiveDate::parse_from_str(expense.date(), "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_add_requires_category_and_amount() {
        assert!(Args::try_parse_from(["ledger", "add", "--amount", "1"]).is_err());
        assert!(Args::try_parse_from(["ledger", "add", "--category", "Food"]).is_err());
    }

    #[test]
    fn test_parse_unit_commands() {
        for (name, expected) in [
            ("init", "Init"),
            ("list", "List"),
            ("chart", "Chart"),
            ("menu", "Menu"),
        ] {
            let args = Args::try_parse_from(["ledger", name]).unwrap();
            assert_eq!(expected, format!("{:?}", args.command()));
        }
    }
}
