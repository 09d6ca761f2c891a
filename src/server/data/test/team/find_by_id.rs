use super::*;

/// Tests loading a team with its relations.
///
/// Verifies the team carries its training session with the hall and its coach role
/// with the coach.
///
/// Expected: Ok(Some) with both relations populated
#[tokio::test]
async fn loads_team_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, hall, coach, session, role) =
        factory::helpers::create_team_with_dependencies(db).await?;

    let loaded = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();

    assert_eq!(loaded.training_sessions.len(), 1);
    assert_eq!(loaded.training_sessions[0].id, Some(session.id));
    assert_eq!(loaded.training_sessions[0].hall.id, Some(hall.id));
    assert_eq!(loaded.role_coaches.len(), 1);
    assert_eq!(loaded.role_coaches[0].id, Some(role.id));
    assert_eq!(loaded.role_coaches[0].coach.id, Some(coach.id));

    Ok(())
}

/// Tests that relations of other teams are not attached.
///
/// Expected: Ok(Some) with empty relations for the second team
#[tokio::test]
async fn does_not_mix_relations_between_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_team_with_dependencies(db).await?;
    let other = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let loaded = repo.find_by_id(other.id).await?.unwrap();

    assert!(loaded.training_sessions.is_empty());
    assert!(loaded.role_coaches.is_empty());
    assert!(repo.exists_by_id(other.id).await?);
    assert!(!repo.exists_by_id(other.id + 100).await?);

    Ok(())
}
