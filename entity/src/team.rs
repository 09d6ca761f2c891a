use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gender: String,
    pub category: String,
    pub team_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::training_session::Entity")]
    TrainingSession,
    #[sea_orm(has_many = "super::role_coach::Entity")]
    RoleCoach,
}

impl Related<super::training_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingSession.def()
    }
}

impl Related<super::role_coach::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleCoach.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
