//! Wire DTOs shared by request extraction and response content.
//!
//! Field names are camelCase on the wire; they are part of the API contract.

pub mod api;
pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;
