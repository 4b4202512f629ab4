//! User directory lookups.
//!
//! The user table is owned by the identity infrastructure; this repository
//! is the read-only directory contract the enrollment service consumes — an
//! existence check by identifier.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

/// Repository providing read access to the user directory.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a user with the given ID exists.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to look up
    ///
    /// # Returns
    /// - `Ok(true)` - A user with this ID exists
    /// - `Ok(false)` - No such user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
