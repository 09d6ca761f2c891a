use super::*;

/// Tests the uniqueness probe against the full name and address.
///
/// Expected: Ok(true) for an identical hall, Ok(false) when any address part differs
#[tokio::test]
async fn matches_full_address_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HallRepository::new(db);
    let created = repo.create(params("Gymnase")).await?;

    assert!(repo.exists(&created.name, &created.address).await?);

    let mut elsewhere = created.address.clone();
    elsewhere.city = "Strasbourg".to_string();
    assert!(!repo.exists(&created.name, &elsewhere).await?);
    assert!(!repo.exists("Annexe", &created.address).await?);

    Ok(())
}
