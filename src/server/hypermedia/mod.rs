//! Hypermedia building blocks shared by every resource assembler.
//!
//! - `resource` - Resource types, their routes and link relation names
//! - `capability` - Caller capabilities and the authorization oracle
//! - `link` - Links and the deterministic link builder
//! - `affordance` - Static operation tables and capability-gated selection
//! - `representation` - Entity, collection and paged models with HAL-FORMS output
//! - `page` - Page values and in-memory slicing
//!
//! Nothing in this module performs I/O; assembling a representation is a pure function
//! of the domain instance, the link builder and the caller's capabilities.

pub mod affordance;
pub mod capability;
pub mod link;
pub mod page;
pub mod representation;
pub mod resource;
