use super::*;

/// Tests members are grouped by the requested teams in join order.
///
/// Expected: Ok(Vec) containing only members of the requested teams
#[tokio::test]
async fn gets_members_for_teams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let other_owner = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let team = factory::create_team(db, event.id, &owner.discord_id).await?;
    let other_team = factory::create_team(db, event.id, &other_owner.discord_id).await?;
    factory::create_member(db, &team, &member.discord_id).await?;

    let repo = EventTeamMemberRepository::new(db);

    let members = repo.get_by_team(team.id).await?;
    let ids: Vec<u64> = members.iter().map(|m| m.user_id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&owner.discord_id.parse().unwrap()));
    assert!(ids.contains(&member.discord_id.parse().unwrap()));

    let all = repo.get_by_teams(&[team.id, other_team.id]).await?;
    assert_eq!(all.len(), 3);

    assert!(repo.get_by_teams(&[]).await?.is_empty());

    Ok(())
}
