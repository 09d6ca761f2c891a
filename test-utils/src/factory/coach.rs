//! Coach factory for creating test coach entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test coaches with customizable fields.
pub struct CoachFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::coach::Model,
}

impl<'a> CoachFactory<'a> {
    /// Creates a new CoachFactory with fixture defaults and a unique email.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::coach::entity_builder()
            .email(format!("coach{}@example.com", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.entity.surname = surname.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.entity.phone = phone.into();
        self
    }

    /// Builds and inserts the coach entity into the database.
    pub async fn build(self) -> Result<entity::coach::Model, DbErr> {
        entity::coach::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            surname: ActiveValue::Set(self.entity.surname),
            email: ActiveValue::Set(self.entity.email),
            phone: ActiveValue::Set(self.entity.phone),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coach with default values.
pub async fn create_coach(db: &DatabaseConnection) -> Result<entity::coach::Model, DbErr> {
    CoachFactory::new(db).build().await
}
