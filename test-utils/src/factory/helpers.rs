//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together with
//! their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team with one training session and one coach role.
///
/// This creates, with default values:
/// 1. Team
/// 2. Hall
/// 3. Coach
/// 4. Training session of the team in the hall
/// 5. Role coach binding the coach to the team
///
/// # Returns
/// - `Ok((team, hall, coach, training_session, role_coach))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::team::Model,
        entity::hall::Model,
        entity::coach::Model,
        entity::training_session::Model,
        entity::role_coach::Model,
    ),
    DbErr,
> {
    let team = crate::factory::team::create_team(db).await?;
    let hall = crate::factory::hall::create_hall(db).await?;
    let coach = crate::factory::coach::create_coach(db).await?;
    let session =
        crate::factory::training_session::create_training_session(db, team.id, hall.id).await?;
    let role = crate::factory::role_coach::create_role_coach(db, coach.id, team.id).await?;

    Ok((team, hall, coach, session, role))
}
