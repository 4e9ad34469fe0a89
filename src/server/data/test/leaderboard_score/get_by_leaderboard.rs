use super::*;

/// Tests scores come back in first-insertion order, not score order.
///
/// Expected: Ok(Vec) ordered by insertion, filtered to the leaderboard
#[tokio::test]
async fn returns_scores_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_score(db, "farming-weight", "player-a", 100.0).await?;
    factory::create_score(db, "farming-weight", "player-b", 250.0).await?;
    factory::create_score(db, "skyblock-xp", "player-x", 999.0).await?;
    factory::create_score(db, "farming-weight", "player-c", 250.0).await?;

    let scores = LeaderboardScoreRepository::new(db)
        .get_by_leaderboard("farming-weight")
        .await?;

    let subjects: Vec<&str> = scores.iter().map(|s| s.subject_id.as_str()).collect();
    assert_eq!(subjects, vec!["player-a", "player-b", "player-c"]);

    Ok(())
}

/// Tests an empty leaderboard.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unknown_leaderboard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scores = LeaderboardScoreRepository::new(db)
        .get_by_leaderboard("nothing-here")
        .await?;

    assert!(scores.is_empty());

    Ok(())
}
