use super::*;

/// Tests deleting a team removes its sessions and roles but keeps the hall and coach.
///
/// Expected: Ok(1) with dependent rows removed
#[tokio::test]
async fn deletes_team_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, hall, coach, session, role) =
        factory::helpers::create_team_with_dependencies(db).await?;

    let rows = TeamRepository::new(db).delete(team.id).await?;

    assert_eq!(rows, 1);
    assert!(TrainingSession::find_by_id(session.id)
        .one(db)
        .await?
        .is_none());
    assert!(RoleCoach::find_by_id(role.id).one(db).await?.is_none());
    assert!(Hall::find_by_id(hall.id).one(db).await?.is_some());
    assert!(Coach::find_by_id(coach.id).one(db).await?.is_some());

    Ok(())
}

/// Tests updating a team keeps its relations.
///
/// Expected: Ok with new number and the existing session still attached
#[tokio::test]
async fn update_keeps_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, ..) = factory::helpers::create_team_with_dependencies(db).await?;

    let updated = TeamRepository::new(db).update(team.id, params(7)).await?;

    assert_eq!(updated.team_number, 7);
    assert_eq!(updated.gender, Gender::Male);
    assert_eq!(updated.training_sessions.len(), 1);
    assert_eq!(updated.role_coaches.len(), 1);

    Ok(())
}
