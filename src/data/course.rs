//! Course catalog reads.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::model::course::Course;

pub struct CourseRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a course by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, course_id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Course::from_entity))
    }
}
