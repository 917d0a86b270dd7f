//! An interactive form for entering and reviewing expenses.

use crate::commands::{add, chart, list, Out};
use crate::error::{ErrorType, IntoResult};
use crate::form::ExpenseForm;
use crate::{Config, Error, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "\
Expense Ledger
  1) Add Expense
  2) View Expenses
  3) Show Chart
  4) Exit";

/// Runs the interactive menu, reading choices and form fields from `input` and writing prompts
/// and results to `output`, until the user exits or `input` ends.
///
/// Mistakes in the form are reported as input errors and failures of the store are reported as
/// errors; neither ends the session.
///
/// # Returns
/// The number of expenses added during the session.
///
/// # Errors
/// - Returns an `ErrorType::Io` error if `input` cannot be read or `output` cannot be written.
pub async fn menu<R, W>(config: &Config, mut input: R, mut output: W) -> Result<Out<usize>>
where
    R: BufRead,
    W: Write,
{
    let mut added = 0;
    loop {
        writeln!(output, "\n{MENU}").pub_result(ErrorType::Io)?;
        let Some(choice) = prompt(&mut input, &mut output, "> ")? else {
            break;
        };
        match choice.to_lowercase().as_str() {
            "1" | "add" => {
                let Some(form) = read_form(&mut input, &mut output)? else {
                    break;
                };
                match add(config, &form).await {
                    Ok(out) => {
                        added += 1;
                        writeln!(output, "{}", out.message()).pub_result(ErrorType::Io)?;
                    }
                    Err(e) => report(&mut output, &e)?,
                }
            }
            "2" | "view" => match list(config).await {
                Ok(out) => writeln!(output, "{}", out.message()).pub_result(ErrorType::Io)?,
                Err(e) => report(&mut output, &e)?,
            },
            "3" | "chart" => match chart(config).await {
                Ok(out) => writeln!(output, "{}", out.message()).pub_result(ErrorType::Io)?,
                Err(e) => report(&mut output, &e)?,
            },
            "4" | "exit" | "quit" => break,
            "" => {}
            other => {
                writeln!(output, "Unknown choice '{other}'").pub_result(ErrorType::Io)?;
            }
        }
    }
    debug!("Menu session ended after adding {added} expenses");
    Ok(Out::new(
        format!(
            "Added {} expense{} this session",
            added,
            if added == 1 { "" } else { "s" }
        ),
        added,
    ))
}

/// Prompts for each form field in turn. Returns `None` if `input` ends before the form is done.
fn read_form<R, W>(input: &mut R, output: &mut W) -> Result<Option<ExpenseForm>>
where
    R: BufRead,
    W: Write,
{
    let mut fields = Vec::with_capacity(4);
    for label in [
        "Date (YYYY-MM-DD): ",
        "Category: ",
        "Amount: ",
        "Description: ",
    ] {
        match prompt(input, output, label)? {
            Some(value) => fields.push(value),
            None => return Ok(None),
        }
    }
    let description = fields.pop().filter(|d| !d.is_empty());
    let amount = fields.pop().unwrap_or_default();
    let category = fields.pop().unwrap_or_default();
    let date = fields.pop().unwrap_or_default();
    Ok(Some(ExpenseForm::new(date, category, amount, description)))
}

/// Writes `label` and reads one trimmed line. Returns `None` at the end of `input`.
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}").pub_result(ErrorType::Io)?;
    output.flush().pub_result(ErrorType::Io)?;
    let mut line = String::new();
    let n = input.read_line(&mut line).pub_result(ErrorType::Io)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report<W: Write>(output: &mut W, e: &Error) -> Result<()> {
    if e.is_validation() {
        writeln!(output, "Input Error: {e}").pub_result(ErrorType::Io)
    } else {
        warn!("{e:?}");
        writeln!(output, "Error: {e}").pub_result(ErrorType::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NO_EXPENSES;
    use crate::test::TestEnv;

    async fn run(env: &TestEnv, script: &str) -> (usize, String) {
        let mut output = Vec::new();
        let out = menu(env.config(), script.as_bytes(), &mut output)
            .await
            .unwrap();
        (
            *out.structure().unwrap(),
            String::from_utf8(output).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_menu_add_view_chart_exit() {
        let env = TestEnv::new().await;
        let script = "1\n2024-01-01\nFood\n12.50\nlunch\n\
                      add\n2024-01-02\nFood\n7.25\n\n\
                      2\n3\n4\n";

        let (added, output) = run(&env, script).await;

        assert_eq!(2, added);
        assert_eq!(2, output.matches("Expense added successfully.").count());
        assert!(output.contains(
            "ID: 1, Date: 2024-01-01, Category: Food, Amount: 12.50, Description: lunch"
        ));
        assert!(output.contains(
            "ID: 2, Date: 2024-01-02, Category: Food, Amount: 7.25, Description: None"
        ));
        assert!(output.contains("Expenses by Category"));
        assert!(output.contains("19.75"));
        assert_eq!(None, env.expenses().await[1].description());
    }

    #[tokio::test]
    async fn test_menu_reports_input_errors_and_continues() {
        let env = TestEnv::new().await;
        let script = "1\n2024-01-01\nFood\nlots\n\n\
                      1\n\nFood\n1\n\n\
                      2\nexit\n";

        let (added, output) = run(&env, script).await;

        assert_eq!(0, added);
        assert!(output.contains("Input Error: Amount must be a number."));
        assert!(output.contains("Input Error: Date, Category, and Amount are required."));
        assert!(output.contains(NO_EXPENSES));
        assert!(env.expenses().await.is_empty());
    }

    #[tokio::test]
    async fn test_menu_ends_at_end_of_input() {
        let env = TestEnv::new().await;
        let (added, output) = run(&env, "bogus\n1\n2024-01-01\nFood\n").await;
        assert_eq!(0, added);
        assert!(output.contains("Unknown choice 'bogus'"));
        assert!(env.expenses().await.is_empty());
    }

    #[tokio::test]
    async fn test_menu_reports_storage_errors_and_continues() {
        let env = TestEnv::new().await;
        std::fs::remove_file(env.config().sqlite_path()).unwrap();

        let (added, output) = run(&env, "2\n3\n4\n").await;

        assert_eq!(0, added);
        assert_eq!(
            2,
            output
                .matches("Error: Unable to open the expense store")
                .count()
        );
        assert!(!output.contains("Input Error"));
    }

    #[tokio::test]
    async fn test_menu_empty_chart() {
        let env = TestEnv::new().await;
        let (_, output) = run(&env, "chart\n").await;
        assert!(output.contains(crate::chart::NO_DATA));
    }
}
