use super::*;

/// Tests batch loading of coaches.
///
/// Expected: Ok with only the requested coaches, and no query for an empty list
#[tokio::test]
async fn loads_requested_coaches_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Coach).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_coach(db).await?;
    factory::create_coach(db).await?;
    let third = factory::create_coach(db).await?;

    let repo = CoachRepository::new(db);
    let mut loaded = repo.get_by_ids(vec![first.id, third.id]).await?;
    loaded.sort_by_key(|c| c.id);

    assert_eq!(loaded, vec![first, third]);
    assert!(repo.get_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
