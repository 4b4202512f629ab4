//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course and an instructor, the two records a module references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((course, instructor))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_catalog(
    db: &DatabaseConnection,
) -> Result<(entity::course::Model, entity::instructor::Model), DbErr> {
    let course = crate::factory::course::create_course(db).await?;
    let instructor = crate::factory::instructor::create_instructor(db).await?;

    Ok((course, instructor))
}

/// Creates a complete module hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Course
/// 2. Instructor
/// 3. Module (default capacity, zero enrolled)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((course, instructor, module))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_module_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::course::Model,
        entity::instructor::Model,
        entity::module::Model,
    ),
    DbErr,
> {
    let (course, instructor) = create_catalog(db).await?;
    let module = crate::factory::module::create_module(db, course.id, instructor.id).await?;

    Ok((course, instructor, module))
}
