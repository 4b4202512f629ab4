//! Enrollment domain models.
//!
//! `Enrollment` is the record owned by this crate: one user's seat in one
//! module, unique per pair. `EnrollmentDetail` is the enriched,
//! presentation-facing shape returned by the listing operation, joining the
//! module with its course and instructor display fields.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{course::Course, instructor::Instructor, module::Module};

/// One user's seat in one module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Unique identifier for the enrollment.
    pub id: i32,
    /// ID of the enrolled user.
    pub user_id: i32,
    /// ID of the module the seat is held in.
    pub module_id: i32,
    /// When the enrollment was created.
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Converts an entity model to an enrollment domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            module_id: entity.module_id,
            enrolled_at: entity.enrolled_at,
        }
    }
}

/// Enrollment enriched with module, course, and instructor display fields.
///
/// This is the record a presentation layer renders for "my modules" style
/// views; the nested structures keep the original API's key conventions
/// when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDetail {
    pub enrollment: Enrollment,
    pub module: Module,
    pub course: Course,
    pub instructor: Instructor,
}
