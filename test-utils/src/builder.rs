use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()`, then call `build()` to create the configured
/// test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Coach, Hall};
///
/// let test = TestBuilder::new()
///     .with_table(Coach)
///     .with_table(Hall)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created once all tables exist.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every table of the service in dependency order, plus the unique indexes
    /// the migrations declare on halls and teams:
    /// - Coach
    /// - Hall
    /// - Team
    /// - TrainingSession
    /// - RoleCoach
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_training_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_training_tables(self) -> Self {
        self.with_table(Coach)
            .with_table(Hall)
            .with_table(Team)
            .with_table(TrainingSession)
            .with_table(RoleCoach)
            .with_index(
                Index::create()
                    .name("idx_hall_name_address")
                    .table(Hall)
                    .col(entity::hall::Column::Name)
                    .col(entity::hall::Column::Street)
                    .col(entity::hall::Column::City)
                    .col(entity::hall::Column::PostalCode)
                    .col(entity::hall::Column::Country)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_team_gender_category_number")
                    .table(Team)
                    .col(entity::team::Column::Gender)
                    .col(entity::team::Column::Category)
                    .col(entity::team::Column::TeamNumber)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    ///   and indexes
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
