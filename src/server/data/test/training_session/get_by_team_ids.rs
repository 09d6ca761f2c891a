use super::*;

/// Tests batch loading the sessions of several teams.
///
/// Expected: Ok with the sessions of the requested teams only, halls attached
#[tokio::test]
async fn loads_sessions_of_requested_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::create_hall(db).await?;
    let first = factory::create_team(db).await?;
    let second = factory::create_team(db).await?;
    let ignored = factory::create_team(db).await?;
    factory::create_training_session(db, first.id, hall.id).await?;
    factory::create_training_session(db, second.id, hall.id).await?;
    factory::create_training_session(db, ignored.id, hall.id).await?;

    let repo = TrainingSessionRepository::new(db);
    let sessions = repo.get_by_team_ids(vec![first.id, second.id]).await?;

    assert_eq!(sessions.len(), 2);
    assert!(sessions.iter().all(|s| s.team_id != ignored.id));
    assert!(sessions.iter().all(|s| s.hall.id == Some(hall.id)));
    assert!(repo.get_by_team_ids(Vec::new()).await?.is_empty());

    Ok(())
}
