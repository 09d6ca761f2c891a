use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "coach")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_coach::Entity")]
    RoleCoach,
}

impl Related<super::role_coach::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleCoach.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
