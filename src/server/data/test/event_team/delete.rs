use super::*;

/// Tests deleting a team after its members are removed.
///
/// Expected: Ok(true), then Ok(false) on a second delete
#[tokio::test]
async fn deletes_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, team) = factory::helpers::create_team_with_dependencies(db).await?;

    crate::server::data::event_team_member::EventTeamMemberRepository::new(db)
        .remove_by_team(team.id)
        .await?;

    let repo = EventTeamRepository::new(db);

    assert!(repo.delete(team.id).await?);
    assert!(!repo.delete(team.id).await?);
    assert!(repo.get_by_event(event.id).await?.is_empty());

    Ok(())
}
