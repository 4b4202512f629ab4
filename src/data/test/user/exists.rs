use super::*;

/// Tests the directory existence check for a present user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.exists(user.id).await?);

    Ok(())
}

/// Tests the directory existence check for an absent user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.exists(999).await?);

    Ok(())
}
