use super::*;

/// Tests listing after registering into two modules of different courses.
///
/// Verifies that each record carries the joined module, course, and
/// instructor display fields for its own module.
///
/// Expected: Ok with two details, each enriched correctly
#[tokio::test]
async fn lists_enrollments_with_joined_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (course1, instructor1, module1) =
        factory::helpers::create_module_with_dependencies(db).await?;
    let (course2, instructor2, module2) =
        factory::helpers::create_module_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    service.register(user.id, module1.id).await.unwrap();
    service.register(user.id, module2.id).await.unwrap();

    let details = service.list_by_user(user.id).await.unwrap();

    assert_eq!(details.len(), 2);

    let first = details
        .iter()
        .find(|d| d.module.id == module1.id)
        .expect("module1 enrollment missing from listing");
    assert_eq!(first.enrollment.user_id, user.id);
    assert_eq!(first.module.code, module1.code);
    assert_eq!(first.module.enrolled, 1);
    assert_eq!(first.course.id, course1.id);
    assert_eq!(first.course.code, course1.code);
    assert_eq!(first.instructor.id, instructor1.id);
    assert_eq!(first.instructor.last_name, instructor1.last_name);

    let second = details
        .iter()
        .find(|d| d.module.id == module2.id)
        .expect("module2 enrollment missing from listing");
    assert_eq!(second.course.id, course2.id);
    assert_eq!(second.instructor.id, instructor2.id);

    Ok(())
}

/// Tests listing for a user ID that is not in the directory.
///
/// The user is not validated; an unknown ID simply holds no enrollments.
///
/// Expected: Ok(empty vector), not an error
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EnrollmentService::new(db);
    let details = service.list_by_user(424242).await.unwrap();

    assert!(details.is_empty());

    Ok(())
}

/// Tests listing for an existing user with no enrollments.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_for_user_without_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = EnrollmentService::new(db);
    let details = service.list_by_user(user.id).await.unwrap();

    assert!(details.is_empty());

    Ok(())
}
