//! Instructor catalog reads.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::model::instructor::Instructor;

pub struct InstructorRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstructorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an instructor by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - Instructor found
    /// - `Ok(None)` - No instructor with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, instructor_id: i32) -> Result<Option<Instructor>, DbErr> {
        let entity = entity::prelude::Instructor::find_by_id(instructor_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Instructor::from_entity))
    }
}
