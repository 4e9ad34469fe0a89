use super::*;

/// Tests creating a team row.
///
/// Expected: Ok(EventTeam) listed under its event
#[tokio::test]
async fn creates_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1001")
        .build()
        .await?;
    let event = factory::create_event(db).await?;

    let repo = EventTeamRepository::new(db);
    let team = repo
        .create(CreateEventTeamParam {
            event_id: event.id,
            owner_id: 1001,
            name: "Melon Squad".to_string(),
            join_code: "ABCD2345".to_string(),
        })
        .await?;

    assert_eq!(team.owner_id, 1001);
    assert_eq!(team.join_code, "ABCD2345");

    let teams = repo.get_by_event(event.id).await?;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, team.id);
    assert_eq!(teams[0].name, "Melon Squad");

    Ok(())
}

/// Tests join code lookups see codes of existing teams only.
///
/// Expected: true for a used code, false otherwise
#[tokio::test]
async fn detects_existing_join_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    factory::event_team::EventTeamFactory::new(db, event.id, &owner.discord_id)
        .join_code("TAKEN234")
        .build()
        .await?;

    let repo = EventTeamRepository::new(db);

    assert!(repo.join_code_exists("TAKEN234").await?);
    assert!(!repo.join_code_exists("FREE2345").await?);

    Ok(())
}
