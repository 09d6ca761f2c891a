//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Relations are loaded in batches with one `IN` query per relation, never per row.

pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod sort;
pub mod team;
pub mod training_session;

#[cfg(test)]
mod test;
