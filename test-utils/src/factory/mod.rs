//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation. Defaults come from the matching `fixture` module, with a
//! unique suffix so several rows can coexist under the unique indexes.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let hall = factory::create_hall(&db).await?;
//!     let team = factory::create_team(&db).await?;
//!     let session = factory::create_training_session(&db, team.id, hall.id).await?;
//!
//!     // Team with one session and one coach role
//!     let (team, hall, coach, session, role) =
//!         factory::helpers::create_team_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let hall = factory::hall::HallFactory::new(&db)
//!     .name("Annex")
//!     .city("Lyon")
//!     .build()
//!     .await?;
//! ```

pub mod coach;
pub mod hall;
pub mod helpers;
pub mod role_coach;
pub mod team;
pub mod training_session;

pub use coach::create_coach;
pub use hall::create_hall;
pub use role_coach::create_role_coach;
pub use team::create_team;
pub use training_session::create_training_session;
