use super::*;
use test_utils::factory::module::ModuleFactory;

/// Tests a successful registration.
///
/// Verifies that the enrollment row and the counter increment land together:
/// the returned enrollment references the pair, the module's enrolled count
/// is 1, and exactly one row is persisted.
///
/// Expected: Ok with counter and row count both at 1
#[tokio::test]
async fn registers_user_into_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_course, _instructor, module) =
        factory::helpers::create_module_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    let enrollment = service.register(user.id, module.id).await.unwrap();

    assert_eq!(enrollment.user_id, user.id);
    assert_eq!(enrollment.module_id, module.id);

    assert_eq!(enrolled_count(db, module.id).await?, 1);
    assert_eq!(enrollment_rows(db, module.id).await?, 1);

    Ok(())
}

/// Tests registering into a module that does not exist.
///
/// Expected: Err(NotFound) naming the module, no rows created
#[tokio::test]
async fn fails_for_missing_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = EnrollmentService::new(db);
    let result = service.register(user.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains("Module")));
    assert_eq!(enrollment_rows(db, 999).await?, 0);

    Ok(())
}

/// Tests registering a user that does not exist.
///
/// The module precondition passes, the user directory check fails, and
/// nothing is mutated.
///
/// Expected: Err(NotFound) naming the user, counter unchanged, no rows
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course, _instructor, module) =
        factory::helpers::create_module_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    let result = service.register(999, module.id).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains("User")));
    assert_eq!(enrolled_count(db, module.id).await?, 0);
    assert_eq!(enrollment_rows(db, module.id).await?, 0);

    Ok(())
}

/// Tests registering into a full module.
///
/// Expected: Err(CapacityExceeded), counter unchanged, no rows created
#[tokio::test]
async fn fails_when_module_full() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (course, instructor) = factory::helpers::create_catalog(db).await?;
    let module = ModuleFactory::new(db, course.id, instructor.id)
        .capacity(1)
        .enrolled(1)
        .build()
        .await?;

    let service = EnrollmentService::new(db);
    let result = service.register(user.id, module.id).await;

    assert!(matches!(result, Err(AppError::CapacityExceeded(id)) if id == module.id));
    assert_eq!(enrolled_count(db, module.id).await?, 1);
    assert_eq!(enrollment_rows(db, module.id).await?, 0);

    Ok(())
}

/// Tests a duplicate registration for the same pair.
///
/// The second attempt claims a seat, hits the unique pair index on the
/// insert, and rolls the claim back — the counter must come out unchanged.
///
/// Expected: Err(AlreadyEnrolled), counter and row count stay at 1
#[tokio::test]
async fn rejects_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (course, instructor) = factory::helpers::create_catalog(db).await?;
    let module = ModuleFactory::new(db, course.id, instructor.id)
        .capacity(5)
        .build()
        .await?;

    let service = EnrollmentService::new(db);
    service.register(user.id, module.id).await.unwrap();

    let result = service.register(user.id, module.id).await;

    assert!(matches!(
        result,
        Err(AppError::AlreadyEnrolled { user_id, module_id })
            if user_id == user.id && module_id == module.id
    ));
    assert_eq!(enrolled_count(db, module.id).await?, 1);
    assert_eq!(enrollment_rows(db, module.id).await?, 1);

    Ok(())
}

/// Tests filling a module to capacity exactly.
///
/// With capacity 3 and four distinct users, exactly three registrations
/// succeed, the fourth observes CapacityExceeded, and the counter equals the
/// row count.
///
/// Expected: three Ok, one Err(CapacityExceeded), counter == rows == 3
#[tokio::test]
async fn fills_module_to_capacity_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, instructor) = factory::helpers::create_catalog(db).await?;
    let module = ModuleFactory::new(db, course.id, instructor.id)
        .capacity(3)
        .build()
        .await?;

    let service = EnrollmentService::new(db);

    for _ in 0..3 {
        let user = factory::user::create_user(db).await?;
        service.register(user.id, module.id).await.unwrap();
    }

    let late_user = factory::user::create_user(db).await?;
    let result = service.register(late_user.id, module.id).await;

    assert!(matches!(result, Err(AppError::CapacityExceeded(_))));
    assert_eq!(enrolled_count(db, module.id).await?, 3);
    assert_eq!(enrollment_rows(db, module.id).await?, 3);

    Ok(())
}

/// Tests the last-seat race between two different users.
///
/// Two concurrent registrations against a module with capacity 1: exactly
/// one succeeds, the other observes CapacityExceeded, and the module ends
/// with one seat taken and one row persisted.
///
/// Expected: one Ok, one Err(CapacityExceeded), counter == rows == 1
#[tokio::test]
async fn concurrent_registers_for_last_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let (course, instructor) = factory::helpers::create_catalog(db).await?;
    let module = ModuleFactory::new(db, course.id, instructor.id)
        .capacity(1)
        .build()
        .await?;

    let service = EnrollmentService::new(db);
    let (first, second) = tokio::join!(
        service.register(alice.id, module.id),
        service.register(bob.id, module.id)
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    let capacity_failures = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AppError::CapacityExceeded(_))))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(capacity_failures, 1);
    assert_eq!(enrolled_count(db, module.id).await?, 1);
    assert_eq!(enrollment_rows(db, module.id).await?, 1);

    Ok(())
}

/// Tests the duplicate-pair race.
///
/// Two concurrent registrations for the same (user, module) pair with seats
/// to spare: exactly one succeeds, the other observes AlreadyEnrolled, and
/// the losing attempt's seat claim is rolled back.
///
/// Expected: one Ok, one Err(AlreadyEnrolled), counter == rows == 1
#[tokio::test]
async fn concurrent_registers_for_same_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (course, instructor) = factory::helpers::create_catalog(db).await?;
    let module = ModuleFactory::new(db, course.id, instructor.id)
        .capacity(2)
        .build()
        .await?;

    let service = EnrollmentService::new(db);
    let (first, second) = tokio::join!(
        service.register(user.id, module.id),
        service.register(user.id, module.id)
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    let duplicate_failures = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AppError::AlreadyEnrolled { .. })))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(duplicate_failures, 1);
    assert_eq!(enrolled_count(db, module.id).await?, 1);
    assert_eq!(enrollment_rows(db, module.id).await?, 1);

    Ok(())
}
