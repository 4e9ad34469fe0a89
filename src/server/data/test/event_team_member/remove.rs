use super::*;

/// Tests removing a single membership.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn removes_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, &team, &member.discord_id).await?;
    let member_id: u64 = member.discord_id.parse().unwrap();

    let repo = EventTeamMemberRepository::new(db);

    assert!(repo.remove(event.id, member_id).await?);
    assert!(!repo.remove(event.id, member_id).await?);
    assert_eq!(repo.count_by_team(team.id).await?, 1);

    Ok(())
}

/// Tests removing every membership of a team.
///
/// Expected: Ok(2) and no members left
#[tokio::test]
async fn removes_all_team_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, &team, &member.discord_id).await?;

    let repo = EventTeamMemberRepository::new(db);

    assert_eq!(repo.remove_by_team(team.id).await?, 2);
    assert_eq!(repo.count_by_team(team.id).await?, 0);

    Ok(())
}
