use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::{Config, Result};
use std::path::{Path, PathBuf};

/// Creates the data directory, its `config.json` and the expense store.
///
/// Running this against a directory that was already initialized leaves it untouched.
///
/// # Returns
/// The path of the SQLite file holding the expenses.
///
/// # Errors
/// - Returns an error if the config file is invalid or any file operation fails.
pub async fn init(ledger_home: &Path) -> Result<Out<PathBuf>> {
    let config = Config::open(ledger_home)
        .await
        .pub_result(ErrorType::Config)?;
    let sqlite_path = config.sqlite_path().to_path_buf();
    let message = format!(
        "The ledger is ready in {} with settings in {} and expenses stored at {}",
        config.root().display(),
        config.config_path().display(),
        sqlite_path.display()
    );
    Ok(Out::new(message, sqlite_path))
}
