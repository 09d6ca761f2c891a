use super::*;

/// Tests creating a hall.
///
/// Verifies that the repository inserts the hall with its flattened address and
/// returns it with the generated ID.
///
/// Expected: Ok with hall persisted
#[tokio::test]
async fn creates_hall() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HallRepository::new(db);
    let hall = repo.create(params("Gymnase")).await?;

    assert!(hall.id.is_some());
    assert_eq!(hall.name, "Gymnase");
    assert_eq!(hall.address.postal_code, "67800");

    let stored = Hall::find_by_id(hall.id.unwrap()).one(db).await?.unwrap();
    assert_eq!(stored.city, "Hoenheim");

    Ok(())
}
