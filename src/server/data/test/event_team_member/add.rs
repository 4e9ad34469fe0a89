use super::*;

/// Tests adding a member and finding their membership.
///
/// Expected: Ok(Some(EventTeamMember)) with the user's name
#[tokio::test]
async fn adds_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
    factory::user::UserFactory::new(db)
        .discord_id("2002")
        .name("Joiner")
        .build()
        .await?;

    let repo = EventTeamMemberRepository::new(db);
    repo.add(event.id, team.id, 2002).await?;

    let membership = repo.find_by_event_and_user(event.id, 2002).await?.unwrap();
    assert_eq!(membership.team_id, team.id);
    assert_eq!(membership.name, "Joiner");
    assert_eq!(repo.count_by_team(team.id).await?, 2);

    Ok(())
}

/// Tests a second membership in the same event violates the membership key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_second_membership_in_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other_owner = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .discord_id("3003")
        .build()
        .await?;
    let event = factory::create_event(db).await?;
    let team_a = factory::create_team(db, event.id, &owner.discord_id).await?;
    let team_b = factory::create_team(db, event.id, &other_owner.discord_id).await?;

    let repo = EventTeamMemberRepository::new(db);
    repo.add(event.id, team_a.id, 3003).await?;
    let result = repo.add(event.id, team_b.id, 3003).await;

    assert!(result.is_err());
    assert_eq!(repo.count_by_team(team_b.id).await?, 1);

    Ok(())
}
