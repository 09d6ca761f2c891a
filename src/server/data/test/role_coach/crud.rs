use super::*;

/// Tests binding a coach to a team.
///
/// Expected: Ok with the role stored and the coach attached
#[tokio::test]
async fn creates_role_with_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let coach = factory::create_coach(db).await?;

    let repo = RoleCoachRepository::new(db);
    let role = repo
        .create(RoleCoachParams {
            team_id: team.id,
            coach_id: coach.id,
            role: Role::Assistant,
        })
        .await?;

    assert_eq!(role.role, Role::Assistant);
    assert_eq!(role.team_id, team.id);
    assert_eq!(role.coach.id, Some(coach.id));

    let stored = RoleCoach::find_by_id(role.id.unwrap()).one(db).await?.unwrap();
    assert_eq!(stored.role, "ASSISTANT");

    Ok(())
}

/// Tests deleting a role keeps the coach and team.
///
/// Expected: Ok(1) and Ok(None) on lookup afterwards
#[tokio::test]
async fn deletes_role_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _, coach, _, role) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = RoleCoachRepository::new(db);
    assert_eq!(repo.delete(role.id).await?, 1);
    assert!(repo.find_by_id(role.id).await?.is_none());
    assert!(Team::find_by_id(team.id).one(db).await?.is_some());
    assert!(Coach::find_by_id(coach.id).one(db).await?.is_some());

    Ok(())
}

/// Tests listing coach roles with their coaches.
///
/// Expected: Ok with one role per created binding
#[tokio::test]
async fn lists_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let main = factory::create_coach(db).await?;
    let assistant = factory::create_coach(db).await?;
    factory::create_role_coach(db, main.id, team.id).await?;
    factory::role_coach::RoleCoachFactory::new(db, assistant.id, team.id)
        .role("ASSISTANT")
        .build()
        .await?;

    let repo = RoleCoachRepository::new(db);
    let (page, total) = repo.get_paginated(&PageRequest::new(0, 1)).await?;
    let all = repo.get_by_team_ids(vec![team.id]).await?;

    assert_eq!(total, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].role, Role::Main);
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].coach.id, Some(assistant.id));
    assert_eq!(repo.get_all().await?, all);

    Ok(())
}
