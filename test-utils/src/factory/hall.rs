//! Hall factory for creating test hall entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test halls with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hall = HallFactory::new(&db)
///     .name("Annex")
///     .postal_code("75001")
///     .build()
///     .await?;
/// ```
pub struct HallFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::hall::Model,
}

impl<'a> HallFactory<'a> {
    /// Creates a new HallFactory with fixture defaults and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::hall::entity_builder()
            .name(format!("Hall {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.entity.street = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.entity.postal_code = postal_code.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.entity.country = country.into();
        self
    }

    /// Builds and inserts the hall entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hall::Model)` - Created hall entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hall::Model, DbErr> {
        entity::hall::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            street: ActiveValue::Set(self.entity.street),
            city: ActiveValue::Set(self.entity.city),
            postal_code: ActiveValue::Set(self.entity.postal_code),
            country: ActiveValue::Set(self.entity.country),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hall with default values.
///
/// Shorthand for `HallFactory::new(db).build().await`.
pub async fn create_hall(db: &DatabaseConnection) -> Result<entity::hall::Model, DbErr> {
    HallFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_distinct_halls_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Hall).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_hall(db).await?;
        let second = create_hall(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);
        assert_eq!(first.postal_code, fixture::hall::DEFAULT_POSTAL_CODE);

        Ok(())
    }
}
