use super::*;

/// Tests removing a subject from every leaderboard it appears on.
///
/// Expected: Ok(ids of affected leaderboards), subject unranked everywhere
#[tokio::test]
async fn removes_subject_everywhere() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = test_registry();
    let store = LeaderboardStore::new(&registry, 100);
    let service = LeaderboardService::new(db, &registry, &store);

    service.submit_score("farming-weight", "member-1", 500.0).await?;
    service.submit_score("skyblock-xp", "member-1", 20.0).await?;
    service.submit_score("skyblock-xp", "member-2", 10.0).await?;

    let removed = service.remove_subject("member-1").await?;

    assert_eq!(
        removed,
        vec!["farming-weight".to_string(), "skyblock-xp".to_string()]
    );
    assert!(service.get_positions("", "member-1").await.0.is_empty());
    assert_eq!(store.rank_of("skyblock-xp", "member-2").await, Some(1));

    Ok(())
}

/// Tests removing a subject with no entries.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn ignores_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = test_registry();
    let store = LeaderboardStore::new(&registry, 100);
    let service = LeaderboardService::new(db, &registry, &store);

    assert!(service.remove_subject("nobody").await?.is_empty());

    Ok(())
}
