use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(User)) with the stored name and admin flag
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("Farmer")
        .admin(true)
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_discord_id(123456789)
        .await?
        .unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "Farmer");
    assert!(user.admin);

    Ok(())
}

/// Tests looking up an unknown Discord ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_by_discord_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
