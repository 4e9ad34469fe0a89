use super::*;

/// Tests a ranked subject with upcoming entries.
///
/// Expected: rank 3 with the two entries above it, best first
#[tokio::test]
async fn returns_rank_and_upcoming() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = test_registry();
    let store = LeaderboardStore::new(&registry, 100);
    let service = LeaderboardService::new(db, &registry, &store);

    for (subject, score) in [("A", 400.0), ("B", 300.0), ("C", 200.0), ("D", 100.0)] {
        service.submit_score("skyblock-xp", subject, score).await?;
    }

    let rank = service.get_rank("skyblock-xp", "C", 5).await?;

    assert_eq!(rank.rank, Some(3));
    assert_eq!(rank.score, Some(200.0));
    let upcoming: Vec<&str> = rank.upcoming.iter().map(|e| e.subject_id.as_str()).collect();
    assert_eq!(upcoming, vec!["A", "B"]);

    Ok(())
}

/// Tests a subject with no entry.
///
/// Expected: rank and score None
#[tokio::test]
async fn returns_none_for_unranked_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = test_registry();
    let store = LeaderboardStore::new(&registry, 100);
    let service = LeaderboardService::new(db, &registry, &store);

    service.submit_score("skyblock-xp", "A", 10.0).await?;

    let rank = service.get_rank("skyblock-xp", "nobody", 0).await?;

    assert_eq!(rank.rank, None);
    assert_eq!(rank.score, None);
    assert!(rank.upcoming.is_empty());

    Ok(())
}

/// Tests the upcoming count is capped.
///
/// Expected: at most 25 upcoming entries
#[tokio::test]
async fn caps_upcoming_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leaderboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = test_registry();
    let store = LeaderboardStore::new(&registry, 100);
    let service = LeaderboardService::new(db, &registry, &store);

    for i in 0..40 {
        service
            .submit_score("skyblock-xp", &format!("p{}", i), (100 - i) as f64)
            .await?;
    }

    let rank = service.get_rank("skyblock-xp", "p39", 1000).await?;

    assert_eq!(rank.rank, Some(40));
    assert_eq!(rank.upcoming.len(), 25);
    assert_eq!(rank.upcoming[24].subject_id, "p38");

    Ok(())
}
