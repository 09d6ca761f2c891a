//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and translated to DTOs by the assemblers. Parameter
//! types are validated against the field descriptors that affordances publish, so a form
//! rendered from an affordance and the server agree on every constraint.

pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;
pub mod validation;
