use super::*;

/// Tests deleting subjects only touches the given leaderboard.
///
/// Expected: Ok(2) and the other leaderboard's row is kept
#[tokio::test]
async fn deletes_only_listed_subjects_on_leaderboard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_score(db, "farming-weight", "player-a", 100.0).await?;
    factory::create_score(db, "farming-weight", "player-b", 200.0).await?;
    factory::create_score(db, "farming-weight", "player-c", 300.0).await?;
    factory::create_score(db, "skyblock-xp", "player-a", 50.0).await?;

    let repo = LeaderboardScoreRepository::new(db);
    let deleted = repo
        .delete_subjects(
            "farming-weight",
            &["player-a".to_string(), "player-b".to_string()],
        )
        .await?;

    assert_eq!(deleted, 2);

    let remaining = repo.get_by_leaderboard("farming-weight").await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].subject_id, "player-c");
    assert_eq!(repo.get_by_leaderboard("skyblock-xp").await?.len(), 1);

    Ok(())
}

/// Tests an empty subject list is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_empty_subject_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_score(db, "farming-weight", "player-a", 100.0).await?;

    let deleted = LeaderboardScoreRepository::new(db)
        .delete_subjects("farming-weight", &[])
        .await?;

    assert_eq!(deleted, 0);

    Ok(())
}
