use super::*;

/// Tests fetching a module by ID.
///
/// Verifies that the repository returns the module as a domain model with
/// catalog fields and seat counters mapped from the entity.
///
/// Expected: Ok(Some(Module)) with matching fields
#[tokio::test]
async fn returns_module_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, instructor, module) = factory::helpers::create_module_with_dependencies(db).await?;

    let repo = ModuleRepository::new(db);
    let found = repo.get_by_id(module.id).await?.unwrap();

    assert_eq!(found.id, module.id);
    assert_eq!(found.course_id, course.id);
    assert_eq!(found.instructor_id, instructor.id);
    assert_eq!(found.code, module.code);
    assert_eq!(found.capacity, module.capacity);
    assert_eq!(found.enrolled, 0);
    assert!(!found.is_full());

    Ok(())
}

/// Tests fetching a nonexistent module.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModuleRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
