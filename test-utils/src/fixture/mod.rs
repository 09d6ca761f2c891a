//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the defaults that
//! factory builders start from. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let hall = fixture::hall::entity();
//!
//! // Create with custom fields
//! let other = fixture::hall::entity_builder()
//!     .id(2)
//!     .name("Annex")
//!     .build();
//! ```

pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;

pub use coach::{entity as coach_entity, entity_builder as coach_entity_builder};
pub use hall::{entity as hall_entity, entity_builder as hall_entity_builder};
pub use role_coach::{entity as role_coach_entity, entity_builder as role_coach_entity_builder};
pub use team::{entity as team_entity, entity_builder as team_entity_builder};
pub use training_session::{
    entity as training_session_entity, entity_builder as training_session_entity_builder,
};
