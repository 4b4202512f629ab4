//! Enrollment data repository.
//!
//! Owns the enrollment table: insertion of new seats and per-user reads.
//! Duplicate pairs are rejected by the unique index on (user_id, module_id);
//! the caller maps that violation onto its own error kind.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::enrollment::Enrollment;

pub struct EnrollmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new enrollment row for the pair.
    ///
    /// # Arguments
    /// - `user_id` - Enrolling user
    /// - `module_id` - Module the seat is held in
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment, timestamp included
    /// - `Err(DbErr)` - Unique-index violation for a duplicate pair, foreign
    ///   key violation for missing references, or other database error
    pub async fn create(&self, user_id: i32, module_id: i32) -> Result<Enrollment, DbErr> {
        let entity = entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            module_id: ActiveValue::Set(module_id),
            enrolled_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(entity))
    }

    /// Gets all enrollments held by a user.
    ///
    /// An unknown user simply has no rows; no existence check is made.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - The user's enrollments, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Enrollment>, DbErr> {
        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }
}
