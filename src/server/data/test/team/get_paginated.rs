use super::*;

/// Tests paging teams with their relations batch-loaded.
///
/// Expected: Ok with total count and relations attached to the right team
#[tokio::test]
async fn pages_teams_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_children, ..) = factory::helpers::create_team_with_dependencies(db).await?;
    factory::create_team(db).await?;
    factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let (teams, total) = repo.get_paginated(&PageRequest::new(0, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, Some(with_children.id));
    assert_eq!(teams[0].training_sessions.len(), 1);
    assert!(teams[1].training_sessions.is_empty());

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
