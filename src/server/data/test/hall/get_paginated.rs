use super::*;

/// Tests paging through halls.
///
/// Expected: Ok with the requested slice and the total count of all halls
#[tokio::test]
async fn returns_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_hall(db).await?;
    }

    let repo = HallRepository::new(db);
    let (halls, total) = repo.get_paginated(&PageRequest::new(1, 2)).await?;

    assert_eq!(total, 5);
    assert_eq!(halls.len(), 2);

    let (last, _) = repo.get_paginated(&PageRequest::new(2, 2)).await?;
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests sorting by a whitelisted field.
///
/// Expected: Ok with halls ordered by name descending
#[tokio::test]
async fn sorts_by_requested_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Beta", "Alpha", "Gamma"] {
        factory::hall::HallFactory::new(db).name(name).build().await?;
    }

    let repo = HallRepository::new(db);
    let (halls, _) = repo
        .get_paginated(&PageRequest::new(0, 10).with_sort("name,desc"))
        .await?;

    let names: Vec<_> = halls.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);

    Ok(())
}

/// Tests that an unknown sort field falls back to ID order.
///
/// Expected: Ok with halls in insertion order
#[tokio::test]
async fn ignores_unknown_sort_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_hall(db).await?;
    let second = factory::create_hall(db).await?;

    let repo = HallRepository::new(db);
    let (halls, _) = repo
        .get_paginated(&PageRequest::new(0, 10).with_sort("password,desc"))
        .await?;

    let ids: Vec<_> = halls.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![Some(first.id), Some(second.id)]);

    Ok(())
}
