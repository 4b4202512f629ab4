//! Instructor factory for creating test instructor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instructors with customizable fields.
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    about: String,
    department: String,
}

impl<'a> InstructorFactory<'a> {
    /// Creates a new InstructorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Test"`
    /// - last_name: `"Instructor {id}"` where id is auto-incremented
    /// - about: `"Test instructor bio"`
    /// - department: `"computer_science"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Test".to_string(),
            last_name: format!("Instructor {}", id),
            about: "Test instructor bio".to_string(),
            department: "computer_science".to_string(),
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the department.
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Builds and inserts the instructor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::instructor::Model)` - Created instructor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            about: ActiveValue::Set(self.about),
            department: ActiveValue::Set(self.department),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor with default values.
///
/// Shorthand for `InstructorFactory::new(db).build().await`.
pub async fn create_instructor(
    db: &DatabaseConnection,
) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db).build().await
}
