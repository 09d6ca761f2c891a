use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_coach_table::Coach, m20260301_000003_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleCoach::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleCoach::Id))
                    .col(string_len(RoleCoach::Role, 20))
                    .col(integer(RoleCoach::CoachId))
                    .col(integer(RoleCoach::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_coach_coach_id")
                            .from(RoleCoach::Table, RoleCoach::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_coach_team_id")
                            .from(RoleCoach::Table, RoleCoach::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleCoach::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleCoach {
    Table,
    Id,
    Role,
    CoachId,
    TeamId,
}
