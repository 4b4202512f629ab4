//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    title: String,
    description: String,
    department: String,
    credits: i32,
    module_count: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - code: `"CS{id}"` where id is auto-incremented (codes are unique)
    /// - title: `"Course {id}"`
    /// - description: `"Test course description"`
    /// - department: `"computer_science"`
    /// - credits: `15`
    /// - module_count: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("CS{}", id),
            title: format!("Course {}", id),
            description: "Test course description".to_string(),
            department: "computer_science".to_string(),
            credits: 15,
            module_count: 1,
        }
    }

    /// Sets the course code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the course title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the credit value.
    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            code: ActiveValue::Set(self.code),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            department: ActiveValue::Set(self.department),
            credits: ActiveValue::Set(self.credits),
            module_count: ActiveValue::Set(self.module_count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
///
/// Shorthand for `CourseFactory::new(db).build().await`.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
