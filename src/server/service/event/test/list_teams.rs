use super::*;

/// Tests listing groups members under their teams in creation order.
///
/// Expected: Ok(Vec) of two teams with one and two members
#[tokio::test]
async fn lists_teams_with_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let event = factory::create_event(db).await?;
    let owner_a = factory::create_user(db).await?;
    let owner_b = factory::create_user(db).await?;
    let team_a = factory::create_team(db, event.id, &owner_a.discord_id).await?;
    let team_b = factory::create_team(db, event.id, &owner_b.discord_id).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, &team_b, &member.discord_id).await?;

    let teams = EventTeamService::new(db, &locks)
        .list_teams(event.id)
        .await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team.id, team_a.id);
    assert_eq!(teams[0].members.len(), 1);
    assert_eq!(teams[1].team.id, team_b.id);
    assert_eq!(teams[1].members.len(), 2);

    Ok(())
}

/// Tests listing teams of a missing event.
///
/// Expected: Err(TeamError::EventNotFound)
#[tokio::test]
async fn missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let result = EventTeamService::new(db, &locks).list_teams(12).await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::EventNotFound(12)))
    ));

    Ok(())
}

/// Tests finding the team a user belongs to.
///
/// Expected: Ok(Some) for a member and Ok(None) for an outsider
#[tokio::test]
async fn finds_user_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (owner, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let outsider = factory::create_user(db).await?;

    let service = EventTeamService::new(db, &locks);
    let found = service
        .get_user_team(event.id, id(&owner.discord_id))
        .await?
        .unwrap();

    assert_eq!(found.team.id, team.id);
    assert!(service
        .get_user_team(event.id, id(&outsider.discord_id))
        .await?
        .is_none());

    Ok(())
}
