use super::*;

/// Tests paging through a guild's events, latest start first.
///
/// Expected: Ok((page, total)) with only the guild's events
#[tokio::test]
async fn pages_guild_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for days in 0..3 {
        factory::event::EventFactory::new(db)
            .guild_id("100")
            .name(format!("Event {}", days))
            .start_time(now + Duration::days(days))
            .build()
            .await?;
    }
    factory::event::EventFactory::new(db)
        .guild_id("200")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (first_page, total) = repo.get_by_guild_paginated(100, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Event 2");
    assert_eq!(first_page[1].name, "Event 1");

    let (second_page, _) = repo.get_by_guild_paginated(100, 1, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Event 0");

    Ok(())
}
