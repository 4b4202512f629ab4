use super::*;

/// Tests that only the requested user's enrollments are returned.
///
/// Expected: Ok with exactly this user's rows, oldest first
#[tokio::test]
async fn returns_only_this_users_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let (course, instructor) = factory::helpers::create_catalog(db).await?;
    let module1 = factory::module::create_module(db, course.id, instructor.id).await?;
    let module2 = factory::module::create_module(db, course.id, instructor.id).await?;

    factory::enrollment::create_enrollment(db, user.id, module1.id).await?;
    factory::enrollment::create_enrollment(db, user.id, module2.id).await?;
    factory::enrollment::create_enrollment(db, other.id, module1.id).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollments = repo.get_by_user(user.id).await?;

    assert_eq!(enrollments.len(), 2);
    assert!(enrollments.iter().all(|e| e.user_id == user.id));
    assert_eq!(enrollments[0].module_id, module1.id);
    assert_eq!(enrollments[1].module_id, module2.id);

    Ok(())
}

/// Tests listing enrollments for a user ID with no rows.
///
/// An unknown user is not an error at this layer; there are simply no rows.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EnrollmentRepository::new(db);
    let enrollments = repo.get_by_user(424242).await?;

    assert!(enrollments.is_empty());

    Ok(())
}
