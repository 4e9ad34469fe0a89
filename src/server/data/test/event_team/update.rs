use super::*;

/// Tests renaming a team and rotating its join code.
///
/// Expected: Ok(EventTeam) with the new values persisted
#[tokio::test]
async fn updates_name_and_join_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, team) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = EventTeamRepository::new(db);
    repo.update_name(team.id, "Pumpkin Patch".to_string())
        .await?;
    repo.update_join_code(team.id, "NEWC0DE2".to_string())
        .await?;

    let updated = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(updated.name, "Pumpkin Patch");
    assert_eq!(updated.join_code, "NEWC0DE2");
    assert!(!repo.join_code_exists(&team.join_code).await?);

    Ok(())
}

/// Tests updating a nonexistent team.
///
/// Expected: Err(AppError::DbErr(DbErr::RecordNotFound))
#[tokio::test]
async fn fails_for_nonexistent_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventTeamRepository::new(db)
        .update_name(99999, "Ghost".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(sea_orm::DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
