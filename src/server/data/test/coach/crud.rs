use super::*;

/// Tests the create, find and update round trip of a coach.
///
/// Expected: Ok with the stored coach reflecting the update
#[tokio::test]
async fn creates_finds_and_updates_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Coach).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoachRepository::new(db);
    let created = repo.create(params("Lea")).await?;
    let id = created.id.unwrap();

    let found = repo.find_by_id(id).await?.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.phone, "");

    let updated = repo.update(id, params("Marie")).await?;
    assert_eq!(updated.name, "Marie");
    assert_eq!(updated.email, "marie@example.com");

    Ok(())
}

/// Tests finding a coach that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Coach).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoachRepository::new(db).find_by_id(1).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that deleting a coach removes their team roles.
///
/// Expected: Ok(1) with the role coach row gone and the team kept
#[tokio::test]
async fn delete_cascades_to_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _, coach, _, role) = factory::helpers::create_team_with_dependencies(db).await?;

    let rows = CoachRepository::new(db).delete(coach.id).await?;

    assert_eq!(rows, 1);
    assert!(RoleCoach::find_by_id(role.id).one(db).await?.is_none());
    assert!(Team::find_by_id(team.id).one(db).await?.is_some());

    Ok(())
}

/// Tests listing all coaches and paging through them.
///
/// Expected: Ok with consistent totals
#[tokio::test]
async fn lists_all_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Coach).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_coach(db).await?;
    }

    let repo = CoachRepository::new(db);
    let all = repo.get_all().await?;
    let (page, total) = repo.get_paginated(&PageRequest::new(0, 2)).await?;

    assert_eq!(all.len(), 3);
    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0], all[0]);

    Ok(())
}
