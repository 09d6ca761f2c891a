use super::*;

/// Tests updating a hall.
///
/// Expected: Ok with name and address replaced
#[tokio::test]
async fn updates_hall() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_hall(db).await?;

    let repo = HallRepository::new(db);
    let updated = repo.update(existing.id, params("Renamed")).await?;

    assert_eq!(updated.id, Some(existing.id));
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address.street, "3 Rue du Stade");

    Ok(())
}

/// Tests updating a hall that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_hall() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HallRepository::new(db);
    let result = repo.update(999, params("Ghost")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
