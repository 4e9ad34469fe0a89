use super::*;

/// Tests a regular member leaving keeps the team.
///
/// Expected: Ok(false) and the member is gone
#[tokio::test]
async fn member_leaves() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, &team, &member.discord_id).await?;

    let service = EventTeamService::new(db, &locks);
    let disbanded = service
        .leave_team(event.id, team.id, id(&member.discord_id))
        .await?;

    assert!(!disbanded);
    let team = service.get_team(event.id, team.id).await?;
    assert_eq!(team.members.len(), 1);
    assert!(!team.is_member(id(&member.discord_id)));

    Ok(())
}

/// Tests the owner leaving disbands the team and frees every member.
///
/// Expected: Ok(true), the team is gone and the former member can create a team
#[tokio::test]
async fn owner_leaving_disbands() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (owner, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, &team, &member.discord_id).await?;

    let service = EventTeamService::new(db, &locks);
    let disbanded = service
        .leave_team(event.id, team.id, id(&owner.discord_id))
        .await?;

    assert!(disbanded);
    assert!(matches!(
        service.get_team(event.id, team.id).await,
        Err(AppError::TeamErr(TeamError::TeamNotFound(_)))
    ));
    assert!(service
        .get_user_team(event.id, id(&member.discord_id))
        .await?
        .is_none());
    service
        .create_team(event.id, id(&member.discord_id), "Fresh start")
        .await?;

    Ok(())
}

/// Tests leaving is still allowed after the event has ended.
///
/// Expected: Ok(false)
#[tokio::test]
async fn leaves_ended_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let owner = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db).ended().build().await?;
    let team = factory::create_team(db, event.id, &owner.discord_id).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, &team, &member.discord_id).await?;

    let disbanded = EventTeamService::new(db, &locks)
        .leave_team(event.id, team.id, id(&member.discord_id))
        .await?;

    assert!(!disbanded);

    Ok(())
}

/// Tests a user who is not on the team cannot leave it.
///
/// Expected: Err(TeamError::NotTeamMember)
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = EventTeamService::new(db, &locks)
        .leave_team(event.id, team.id, id(&outsider.discord_id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::NotTeamMember { .. }))
    ));

    Ok(())
}
