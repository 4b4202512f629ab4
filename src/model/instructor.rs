//! Instructor domain model.

use serde::Serialize;

/// Instructor teaching a module, carried for display alongside enrollments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instructor {
    /// Unique identifier for the instructor.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Short biography shown on instructor pages.
    pub about: String,
    /// Department the instructor belongs to.
    pub department: String,
}

impl Instructor {
    /// Converts an entity model to an instructor domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::instructor::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            about: entity.about,
            department: entity.department,
        }
    }
}
