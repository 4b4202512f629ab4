//! Application error types.
//!
//! This module provides the application's error hierarchy. The `AppError`
//! enum is the top-level error type returned by the service layer; the four
//! business kinds (`NotFound`, `CapacityExceeded`, `AlreadyEnrolled`,
//! `Contention`) are distinct variants so a presentation layer can report a
//! different user-facing message for each. Infrastructure errors wrap
//! transparently.

use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced module or user does not exist.
    ///
    /// # Fields
    /// - Message describing which entity was not found
    #[error("{0}")]
    NotFound(String),

    /// Module has no remaining seats at evaluation time.
    ///
    /// Retrying immediately is expected to fail again; capacity never frees
    /// up because no unenroll path exists.
    ///
    /// # Fields
    /// - ID of the full module
    #[error("module {0} has no remaining seats")]
    CapacityExceeded(i32),

    /// The (user, module) pair already holds an enrollment.
    #[error("user {user_id} is already enrolled in module {module_id}")]
    AlreadyEnrolled { user_id: i32, module_id: i32 },

    /// Transient storage conflicts outlasted the retry budget.
    ///
    /// The underlying storage error is logged, not surfaced.
    ///
    /// # Fields
    /// - Number of attempts made before giving up
    #[error("registration did not complete after {0} attempts")]
    Contention(u32),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value `{value}` for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}

/// Classifies a storage error as a transient conflict worth retrying.
///
/// Covers pool acquisition timeouts, SQLite write-lock contention, and the
/// deadlock/serialization failures a server database reports under
/// concurrent transactions. Everything else (constraint violations, bad SQL,
/// lost connections) is not retried.
pub fn is_transient(err: &sea_orm::DbErr) -> bool {
    if matches!(err, sea_orm::DbErr::ConnectionAcquire(_)) {
        return true;
    }

    let msg = err.to_string();
    msg.contains("database is locked")
        || msg.contains("deadlock")
        || msg.contains("could not serialize access")
}

/// Whether a storage error is a unique-constraint violation.
///
/// The register path maps this onto `AppError::AlreadyEnrolled`: pair
/// uniqueness is enforced by the index on (user_id, module_id), not by an
/// application-level pre-check.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
