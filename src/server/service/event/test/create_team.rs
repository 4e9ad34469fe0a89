use super::*;

/// Tests creating a team makes the creator its owner and only member.
///
/// Expected: Ok(EventTeamWithMembers) with one member and an 8 character join code
#[tokio::test]
async fn creates_team_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;

    let team = EventTeamService::new(db, &locks)
        .create_team(event.id, id(&owner.discord_id), "  Growers  ")
        .await?;

    assert_eq!(team.team.name, "Growers");
    assert_eq!(team.team.owner_id, id(&owner.discord_id));
    assert_eq!(team.team.join_code.len(), 8);
    assert_eq!(team.members.len(), 1);
    assert!(team.is_member(id(&owner.discord_id)));

    Ok(())
}

/// Tests a user already on a team cannot create another in the same event.
///
/// Expected: Err(TeamError::UserAlreadyOnTeam)
#[tokio::test]
async fn rejects_user_on_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (owner, event, _) = factory::helpers::create_team_with_dependencies(db).await?;

    let result = EventTeamService::new(db, &locks)
        .create_team(event.id, id(&owner.discord_id), "Second")
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::UserAlreadyOnTeam { .. }))
    ));

    Ok(())
}

/// Tests creating a team for an ended event.
///
/// Expected: Err(TeamError::EventNotActive)
#[tokio::test]
async fn rejects_ended_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let owner = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db).ended().build().await?;

    let result = EventTeamService::new(db, &locks)
        .create_team(event.id, id(&owner.discord_id), "Late")
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::EventNotActive(_)))
    ));

    Ok(())
}

/// Tests creating a team for a missing event.
///
/// Expected: Err(TeamError::EventNotFound)
#[tokio::test]
async fn rejects_missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let owner = factory::create_user(db).await?;

    let result = EventTeamService::new(db, &locks)
        .create_team(404, id(&owner.discord_id), "Nowhere")
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::EventNotFound(404)))
    ));

    Ok(())
}

/// Tests a blank team name is rejected before touching storage.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;

    let result = EventTeamService::new(db, &locks)
        .create_team(event.id, id(&owner.discord_id), "   ")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
