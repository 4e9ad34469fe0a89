use super::*;

/// Tests creating an event stores every field.
///
/// Expected: Ok(Event) retrievable by ID
#[tokio::test]
async fn creates_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now();
    let end_time = start_time + Duration::days(3);

    let repo = EventRepository::new(db);
    let event = repo
        .create(CreateEventParam {
            guild_id: 1234567890123,
            name: "Jacob's Contest Week".to_string(),
            description: Some("Most medals wins".to_string()),
            start_time,
            end_time,
            max_team_size: 3,
        })
        .await?;

    assert_eq!(event.guild_id, 1234567890123);
    assert_eq!(event.max_team_size, 3);

    let found = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(found.name, "Jacob's Contest Week");
    assert_eq!(found.description.as_deref(), Some("Most medals wins"));
    assert!(found.is_active_at(Utc::now()));

    Ok(())
}

/// Tests looking up a nonexistent event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db).find_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
