pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_coach_table;
mod m20260301_000002_create_hall_table;
mod m20260301_000003_create_team_table;
mod m20260301_000004_create_training_session_table;
mod m20260301_000005_create_role_coach_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_coach_table::Migration),
            Box::new(m20260301_000002_create_hall_table::Migration),
            Box::new(m20260301_000003_create_team_table::Migration),
            Box::new(m20260301_000004_create_training_session_table::Migration),
            Box::new(m20260301_000005_create_role_coach_table::Migration),
        ]
    }
}
