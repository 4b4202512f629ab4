//! Course domain model.

use serde::Serialize;

/// Course a module belongs to, carried for display alongside enrollments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: i32,
    /// Unique course code, e.g. "CS101".
    pub code: String,
    /// Display title of the course.
    pub title: String,
    /// Free-form course description.
    pub description: String,
    /// Department offering the course.
    pub department: String,
    /// Credit value of the course.
    pub credits: i32,
    /// Number of modules the course is split into.
    pub module_count: i32,
}

impl Course {
    /// Converts an entity model to a course domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            title: entity.title,
            description: entity.description,
            department: entity.department,
            credits: entity.credits,
            module_count: entity.module_count,
        }
    }
}
