//! Module factory for creating test module entities.
//!
//! Capacity and enrolled count are the fields tests most often customize;
//! both have builder setters.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test modules with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::module::ModuleFactory;
///
/// let module = ModuleFactory::new(&db, course.id, instructor.id)
///     .capacity(1)
///     .build()
///     .await?;
/// ```
pub struct ModuleFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    instructor_id: i32,
    code: String,
    title: String,
    description: String,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    capacity: i32,
    enrolled: i32,
    schedule: String,
    location: String,
}

impl<'a> ModuleFactory<'a> {
    /// Creates a new ModuleFactory with default values.
    ///
    /// Defaults:
    /// - code: `"M{id}"` where id is auto-incremented
    /// - title: `"Module {id}"`
    /// - description: `"Test module description"`
    /// - start_date: today, end_date: 90 days out
    /// - capacity: `30`, enrolled: `0`
    /// - schedule: `"Mon 09:00"`, location: `"Room 101"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_id` - Course this module belongs to
    /// - `instructor_id` - Instructor teaching this module
    pub fn new(db: &'a DatabaseConnection, course_id: i32, instructor_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            course_id,
            instructor_id,
            code: format!("M{}", id),
            title: format!("Module {}", id),
            description: "Test module description".to_string(),
            start_date: today,
            end_date: today + Duration::days(90),
            capacity: 30,
            enrolled: 0,
            schedule: "Mon 09:00".to_string(),
            location: "Room 101".to_string(),
        }
    }

    /// Sets the module code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the module title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the seat capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the pre-existing enrolled count.
    pub fn enrolled(mut self, enrolled: i32) -> Self {
        self.enrolled = enrolled;
        self
    }

    /// Builds and inserts the module entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::module::Model)` - Created module entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::module::Model, DbErr> {
        entity::module::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            instructor_id: ActiveValue::Set(self.instructor_id),
            code: ActiveValue::Set(self.code),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            capacity: ActiveValue::Set(self.capacity),
            enrolled: ActiveValue::Set(self.enrolled),
            schedule: ActiveValue::Set(self.schedule),
            location: ActiveValue::Set(self.location),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a module with default values for the specified course and
/// instructor.
///
/// Shorthand for `ModuleFactory::new(db, course_id, instructor_id).build().await`.
pub async fn create_module(
    db: &DatabaseConnection,
    course_id: i32,
    instructor_id: i32,
) -> Result<entity::module::Model, DbErr> {
    ModuleFactory::new(db, course_id, instructor_id)
        .build()
        .await
}
