//! Module domain model.
//!
//! A module is the capacity-bounded offering users enroll into. The seat
//! counters carried here are a read snapshot; the authoritative
//! capacity check happens inside the conditional seat-claim write.

use chrono::NaiveDate;
use serde::Serialize;

/// Capacity-bounded course offering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique identifier for the module.
    pub id: i32,
    /// ID of the course this module belongs to.
    pub course_id: i32,
    /// ID of the instructor teaching this module.
    pub instructor_id: i32,
    /// Short module code shown in listings.
    pub code: String,
    /// Display title of the module.
    pub title: String,
    /// Free-form module description.
    pub description: String,
    /// First day of teaching.
    pub start_date: NaiveDate,
    /// Last day of teaching.
    pub end_date: NaiveDate,
    /// Maximum number of enrollments the module accepts. Positive, immutable.
    pub capacity: i32,
    /// Materialized count of enrollments, always equal to the number of
    /// enrollment rows referencing this module.
    pub enrolled: i32,
    /// Human-readable schedule, e.g. "Mon/Wed 10:00-12:00".
    pub schedule: String,
    /// Room or building the module is taught in.
    pub location: String,
}

impl Module {
    /// Converts an entity model to a module domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::module::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            instructor_id: entity.instructor_id,
            code: entity.code,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            capacity: entity.capacity,
            enrolled: entity.enrolled,
            schedule: entity.schedule,
            location: entity.location,
        }
    }

    /// Whether the snapshot shows no remaining seats.
    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }
}
