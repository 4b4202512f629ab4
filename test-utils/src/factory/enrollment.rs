//! Enrollment factory for creating test enrollment entities.
//!
//! Inserts rows directly, bypassing the service's seat accounting. Use it
//! for repository-level tests; service tests should register through the
//! service so the counter stays consistent.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments with customizable fields.
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    module_id: i32,
    enrolled_at: chrono::DateTime<Utc>,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory.
    ///
    /// Defaults:
    /// - enrolled_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Enrolling user
    /// - `module_id` - Module the seat is held in
    pub fn new(db: &'a DatabaseConnection, user_id: i32, module_id: i32) -> Self {
        Self {
            db,
            user_id,
            module_id,
            enrolled_at: Utc::now(),
        }
    }

    /// Sets the enrollment timestamp.
    pub fn enrolled_at(mut self, enrolled_at: chrono::DateTime<Utc>) -> Self {
        self.enrolled_at = enrolled_at;
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::enrollment::Model)` - Created enrollment entity
    /// - `Err(DbErr)` - Database error during insert (including the unique
    ///   pair index rejecting a duplicate)
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            module_id: ActiveValue::Set(self.module_id),
            enrolled_at: ActiveValue::Set(self.enrolled_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enrollment with default values for the specified user and
/// module.
///
/// Shorthand for `EnrollmentFactory::new(db, user_id, module_id).build().await`.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
    module_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, user_id, module_id).build().await
}
