use super::*;

fn param(guild_id: u64, name: &str) -> CreateEventParam {
    let now = Utc::now();
    CreateEventParam {
        guild_id,
        name: name.to_string(),
        description: None,
        start_time: now,
        end_time: now + Duration::days(3),
        max_team_size: 4,
    }
}

/// Tests creating an event and reading it back.
///
/// Expected: Ok(Event) that is active
#[tokio::test]
async fn creates_and_gets_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);
    let created = service.create_event(param(10, "Harvest")).await?;
    let found = service.get_event(created.id).await?;

    assert_eq!(found.name, "Harvest");
    assert_eq!(found.guild_id, 10);
    assert!(service.is_event_active(created.id).await?);

    Ok(())
}

/// Tests event creation rejects an end time before the start time.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = param(10, "Backwards");
    param.end_time = param.start_time - Duration::hours(1);
    let result = EventService::new(db).create_event(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests event creation rejects a zero team size.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_zero_team_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = param(10, "Solo");
    param.max_team_size = 0;
    let result = EventService::new(db).create_event(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests looking up an event that does not exist.
///
/// Expected: Err(TeamError::EventNotFound)
#[tokio::test]
async fn unknown_event_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventService::new(db).get_event(999).await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::EventNotFound(999)))
    ));

    Ok(())
}

/// Tests an event past its end time reports inactive.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ended_event_inactive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db).ended().build().await?;

    assert!(!EventService::new(db).is_event_active(event.id).await?);

    Ok(())
}

/// Tests pagination metadata for a guild's events.
///
/// Expected: Ok(PaginatedEvents) with 2 of 5 events on the first page and 3 pages total
#[tokio::test]
async fn lists_events_paginated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::event::EventFactory::new(db)
            .guild_id("77")
            .build()
            .await?;
    }
    factory::event::EventFactory::new(db)
        .guild_id("78")
        .build()
        .await?;

    let page = EventService::new(db).list_events(77, 0, 2).await?;

    assert_eq!(page.events.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);

    Ok(())
}
