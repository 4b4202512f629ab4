//! Enrollment registration and listing.
//!
//! This is the owner of the two enrollment invariants: a module's enrolled
//! count never exceeds its capacity, and no (user, module) pair holds more
//! than one enrollment. Registration runs as a single transaction around a
//! conditional seat-claim update and the enrollment insert, so the counter
//! and the row set cannot drift apart: both commit or both roll back.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::DEFAULT_REGISTER_MAX_ATTEMPTS,
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository,
        instructor::InstructorRepository, module::ModuleRepository, user::UserRepository,
    },
    error::{is_transient, is_unique_violation, AppError},
    model::enrollment::{Enrollment, EnrollmentDetail},
};

/// Service providing the capacity-bounded registration workflow.
pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
    max_attempts: u32,
}

impl<'a> EnrollmentService<'a> {
    /// Creates a new EnrollmentService with the default retry budget.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            max_attempts: DEFAULT_REGISTER_MAX_ATTEMPTS,
        }
    }

    /// Creates an EnrollmentService with an explicit retry budget for
    /// transient storage conflicts. Clamped to at least one attempt.
    pub fn with_max_attempts(db: &'a DatabaseConnection, max_attempts: u32) -> Self {
        Self {
            db,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Registers a user into a module.
    ///
    /// Preconditions are evaluated in order before any mutation: the module
    /// must exist, the user must exist, the module must have a free seat,
    /// and the pair must not already be enrolled. On success the seat-count
    /// increment and the enrollment insert are applied atomically.
    ///
    /// Transient storage conflicts (lock contention, serialization failure)
    /// are retried from scratch up to the configured budget; they are never
    /// surfaced directly.
    ///
    /// # Arguments
    /// - `user_id` - Enrolling user
    /// - `module_id` - Module to register into
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment, timestamp included
    /// - `Err(AppError::NotFound)` - Module or user does not exist
    /// - `Err(AppError::CapacityExceeded)` - No remaining seats
    /// - `Err(AppError::AlreadyEnrolled)` - Duplicate (user, module) pair
    /// - `Err(AppError::Contention)` - Transient conflicts exhausted the
    ///   retry budget
    /// - `Err(AppError::DbErr)` - Non-transient database error
    pub async fn register(&self, user_id: i32, module_id: i32) -> Result<Enrollment, AppError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_register(user_id, module_id).await {
                Err(AppError::DbErr(err)) if is_transient(&err) => {
                    if attempt >= self.max_attempts {
                        tracing::error!(
                            user_id,
                            module_id,
                            attempt,
                            error = %err,
                            "register failed, retry budget exhausted"
                        );
                        return Err(AppError::Contention(attempt));
                    }
                    tracing::warn!(
                        user_id,
                        module_id,
                        attempt,
                        error = %err,
                        "transient storage conflict during register, retrying"
                    );
                }
                other => return other,
            }
        }
    }

    /// One full check-and-act pass inside its own transaction.
    ///
    /// Any early return drops the uncommitted transaction, which rolls back
    /// the seat claim. In particular a duplicate pair is detected by the
    /// unique index only after the seat was claimed, and the rollback is
    /// what keeps the counter consistent with the row set.
    async fn try_register(&self, user_id: i32, module_id: i32) -> Result<Enrollment, AppError> {
        let txn = self.db.begin().await?;

        let module = ModuleRepository::new(&txn)
            .get_by_id(module_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Module {} not found", module_id)))?;

        if !UserRepository::new(&txn).exists(user_id).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        // Snapshot check for the common full-module case; the claim below
        // re-checks capacity inside the UPDATE itself.
        if module.is_full() {
            return Err(AppError::CapacityExceeded(module_id));
        }

        if !ModuleRepository::new(&txn).claim_seat(module_id).await? {
            return Err(AppError::CapacityExceeded(module_id));
        }

        let enrollment = match EnrollmentRepository::new(&txn).create(user_id, module_id).await {
            Ok(enrollment) => enrollment,
            Err(err) if is_unique_violation(&err) => {
                return Err(AppError::AlreadyEnrolled { user_id, module_id });
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        Ok(enrollment)
    }

    /// Lists a user's enrollments, each enriched with the referenced
    /// module's fields and the course's and instructor's display fields.
    ///
    /// The user ID is not validated against the directory: an unknown user
    /// holds no enrollments and yields an empty list rather than an error.
    ///
    /// # Arguments
    /// - `user_id` - User whose enrollments to list
    ///
    /// # Returns
    /// - `Ok(Vec<EnrollmentDetail>)` - Enriched records, oldest first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<EnrollmentDetail>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        let mut details = Vec::new();

        for enrollment in enrollments {
            let module = ModuleRepository::new(self.db)
                .get_by_id(enrollment.module_id)
                .await?;

            let Some(module) = module else {
                continue;
            };

            let course = CourseRepository::new(self.db)
                .get_by_id(module.course_id)
                .await?;
            let instructor = InstructorRepository::new(self.db)
                .get_by_id(module.instructor_id)
                .await?;

            if let (Some(course), Some(instructor)) = (course, instructor) {
                details.push(EnrollmentDetail {
                    enrollment,
                    module,
                    course,
                    instructor,
                });
            }
        }

        Ok(details)
    }
}
