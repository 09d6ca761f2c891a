use super::*;

/// Tests creating a team.
///
/// Expected: Ok with enums stored as their wire codes and no relations
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = TeamRepository::new(db).create(params(2)).await?;

    assert!(team.training_sessions.is_empty());
    assert!(team.role_coaches.is_empty());

    let stored = Team::find_by_id(team.id.unwrap()).one(db).await?.unwrap();
    assert_eq!(stored.gender, "M");
    assert_eq!(stored.category, "SENIOR");
    assert_eq!(stored.team_number, 2);

    Ok(())
}

/// Tests the uniqueness probe over gender, category and number.
///
/// Expected: Ok(true) only for the exact combination
#[tokio::test]
async fn exists_matches_exact_combination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    repo.create(params(1)).await?;

    assert!(repo.exists(&params(1)).await?);
    assert!(!repo.exists(&params(2)).await?);
    assert!(
        !repo
            .exists(&TeamParams {
                gender: Gender::Female,
                ..params(1)
            })
            .await?
    );

    Ok(())
}
