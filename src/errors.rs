//! Unified application error type.
//! All modules (store, db, service, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Local storage
    // ---------------------------
    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),

    // ---------------------------
    // Remote store operations
    // ---------------------------
    #[error("Sign in required: no authenticated identity is present")]
    AuthRequired,

    #[error("Failed to load sessions: {0}")]
    Fetch(String),

    #[error("Failed to create session: {0}")]
    CreateSession(String),

    #[error("Session {session_id} was saved but its tasks were not: {cause}")]
    TasksFailedSessionPersisted { session_id: i64, cause: String },

    #[error("Failed to update task: {0}")]
    UpdateTask(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid session type: {0}")]
    InvalidSessionType(String),

    #[error("Invalid energy rating: {0}")]
    InvalidEnergy(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
