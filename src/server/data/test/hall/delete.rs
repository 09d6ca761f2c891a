use super::*;

/// Tests deleting a hall cascades to its training sessions.
///
/// Expected: Ok(1) with the hall and its sessions removed
#[tokio::test]
async fn deletes_hall_and_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let hall = factory::create_hall(db).await?;
    let session = factory::create_training_session(db, team.id, hall.id).await?;

    let repo = HallRepository::new(db);
    let rows = repo.delete(hall.id).await?;

    assert_eq!(rows, 1);
    assert!(Hall::find_by_id(hall.id).one(db).await?.is_none());
    assert!(TrainingSession::find_by_id(session.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a hall that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_hall() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = HallRepository::new(db).delete(42).await?;

    assert_eq!(rows, 0);

    Ok(())
}
