use super::*;

/// Tests moving a session to another hall and slot.
///
/// Expected: Ok with the new hall embedded and the team unchanged
#[tokio::test]
async fn moves_session_to_other_hall() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let first = factory::create_hall(db).await?;
    let second = factory::create_hall(db).await?;
    let session = factory::create_training_session(db, team.id, first.id).await?;

    let repo = TrainingSessionRepository::new(db);
    let updated = repo
        .update(
            session.id,
            UpdateTrainingSessionParams {
                hall_id: second.id,
                time_slot: slot(DayOfWeek::Saturday, (10, 0), (12, 0)),
            },
        )
        .await?;

    assert_eq!(updated.hall.id, Some(second.id));
    assert_eq!(updated.hall.name, second.name);
    assert_eq!(updated.team_id, team.id);
    assert_eq!(updated.time_slot.day_of_week, DayOfWeek::Saturday);

    Ok(())
}

/// Tests deleting a session and paging the remainder.
///
/// Expected: Ok(1), then a total of one remaining session
#[tokio::test]
async fn deletes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let hall = factory::create_hall(db).await?;
    let doomed = factory::create_training_session(db, team.id, hall.id).await?;
    factory::create_training_session(db, team.id, hall.id).await?;

    let repo = TrainingSessionRepository::new(db);
    assert_eq!(repo.delete(doomed.id).await?, 1);

    let (sessions, total) = repo.get_paginated(&PageRequest::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(sessions.len(), 1);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
