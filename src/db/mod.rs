//! This module is responsible for creating, writing and reading the SQLite expense store.
//!
//! No connection outlives a single operation: each call opens a connection, executes exactly one
//! statement and closes the connection before returning. If the statement fails, the connection
//! is dropped on the way out, which releases it as well. `Db` itself only knows how to connect.

mod expenses;

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Creates the `expenses` table unless it already exists.
const SCHEMA_SQL: &str = include_str!("schema.sql");

#[derive(Debug, Clone)]
pub(crate) struct Db {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Db {
    /// - Creates the SQLite file at `path` if it does not exist
    /// - Creates the `expenses` table if it does not exist
    /// - Returns a `Db` for further operations
    ///
    /// Calling this on an existing store changes nothing; previously appended expenses are kept.
    ///
    /// # Errors
    /// - Returns an error if the file cannot be created or opened, e.g. because the parent
    ///   directory is missing or not writable.
    pub(crate) async fn ensure_store(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Self {
            path: path.to_path_buf(),
            options: SqliteConnectOptions::new().filename(path),
        };

        let options = db.options.clone().create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options)
            .await
            .with_context(|| format!("Unable to create the expense store at {}", path.display()))?;
        sqlx::query(SCHEMA_SQL)
            .execute(&mut conn)
            .await
            .context("Unable to create the expenses table")?;
        release(conn).await?;

        debug!("Expense store is ready at {}", path.display());
        Ok(db)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection to the existing store.
    async fn connect(&self) -> Result<SqliteConnection> {
        SqliteConnection::connect_with(&self.options)
            .await
            .with_context(|| {
                format!("Unable to open the expense store at {}", self.path.display())
            })
    }
}

/// Closes `conn`, waiting for SQLite to finish with the file.
async fn release(conn: SqliteConnection) -> Result<()> {
    conn.close()
        .await
        .context("Unable to close the expense store connection")
}
