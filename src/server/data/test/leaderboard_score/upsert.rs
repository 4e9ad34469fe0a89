use super::*;

/// Tests inserting a score for a new subject.
///
/// Expected: Ok(LeaderboardScore) and one stored row
#[tokio::test]
async fn inserts_new_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaderboardScoreRepository::new(db);
    let stored = repo.upsert("farming-weight", "player-a", 1500.5).await?;

    assert_eq!(stored.leaderboard_id, "farming-weight");
    assert_eq!(stored.subject_id, "player-a");
    assert_eq!(stored.score, 1500.5);

    let count = entity::prelude::LeaderboardScore::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests updating an existing subject keeps its row and therefore its insertion order.
///
/// Expected: Ok(LeaderboardScore) with the new score, row id unchanged
#[tokio::test]
async fn updates_existing_score_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_score(db, "farming-weight", "player-a", 100.0).await?;

    let repo = LeaderboardScoreRepository::new(db);
    repo.upsert("farming-weight", "player-a", 300.0).await?;

    let rows = entity::prelude::LeaderboardScore::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, original.id);
    assert_eq!(rows[0].score, 300.0);

    Ok(())
}

/// Tests the same subject is stored independently per leaderboard.
///
/// Expected: two rows, one per leaderboard
#[tokio::test]
async fn keeps_scores_separate_per_leaderboard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaderboardScoreRepository::new(db);
    repo.upsert("farming-weight", "player-a", 100.0).await?;
    repo.upsert("skyblock-xp", "player-a", 200.0).await?;

    let count = entity::prelude::LeaderboardScore::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
