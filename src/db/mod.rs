// src/db/mod.rs

//! Database layer for the recipe store
//!
//! All state lives in one SQLite file: the canonical `recipes` table and the
//! `recipes_fts` full-text index. Every mutation runs inside [`transaction`],
//! which takes the write lock up front and commits or rolls back as a unit.

pub mod migrations;
pub mod models;
pub mod schema;

use crate::error::Result;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// How long a connection waits on another writer before giving up
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Open a connection with the default busy timeout
pub fn open(db_path: impl AsRef<Path>) -> Result<Connection> {
    open_with_timeout(db_path, DEFAULT_BUSY_TIMEOUT)
}

/// Open a connection to an existing or new database file
pub fn open_with_timeout(db_path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Connection> {
    let conn = Connection::open(db_path.as_ref())?;
    conn.busy_timeout(busy_timeout)?;

    // WAL lets readers keep their snapshot while a writer commits
    let mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    debug!("Opened {} (journal_mode={})", db_path.as_ref().display(), mode);

    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

/// Create the database file if needed and bring the schema up to date
pub fn init(db_path: impl AsRef<Path>) -> Result<()> {
    let db_path = db_path.as_ref();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Initializing recipe database at {}", db_path.display());
    let mut conn = open(db_path)?;
    transaction(&mut conn, |tx| schema::migrate(tx))
}

/// Run `f` inside a write transaction
///
/// The write lock is taken when the transaction begins. If `f` returns an
/// error the transaction is dropped and everything it wrote is rolled back.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    run(conn, TransactionBehavior::Immediate, f)
}

/// Run `f` against a single consistent read snapshot
pub fn read_transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    run(conn, TransactionBehavior::Deferred, f)
}

fn run<T, F>(conn: &mut Connection, behavior: TransactionBehavior, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction_with_behavior(behavior)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
