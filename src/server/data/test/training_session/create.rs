use super::*;

/// Tests creating a training session.
///
/// Expected: Ok with the time slot stored and the hall attached
#[tokio::test]
async fn creates_session_with_hall() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let hall = factory::create_hall(db).await?;

    let repo = TrainingSessionRepository::new(db);
    let session = repo
        .create(CreateTrainingSessionParams {
            team_id: team.id,
            hall_id: hall.id,
            time_slot: slot(DayOfWeek::Wednesday, (17, 30), (19, 0)),
        })
        .await?;

    assert_eq!(session.team_id, team.id);
    assert_eq!(session.hall.id, Some(hall.id));
    assert_eq!(session.time_slot.day_of_week, DayOfWeek::Wednesday);

    let found = repo.find_by_id(session.id.unwrap()).await?.unwrap();
    assert_eq!(found, session);

    Ok(())
}

/// Tests that a session referencing an unknown team is rejected by the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::create_hall(db).await?;

    let result = TrainingSessionRepository::new(db)
        .create(CreateTrainingSessionParams {
            team_id: 404,
            hall_id: hall.id,
            time_slot: slot(DayOfWeek::Monday, (18, 0), (19, 0)),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
