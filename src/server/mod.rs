//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control and DTO validation
//! - **Service Layer** (`service/`) - Existence and uniqueness rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters and field constraints
//! - **Assembler Layer** (`assembler/`) - Domain models to HAL-FORMS representations
//! - **Hypermedia** (`hypermedia/`) - Links, affordances, pages and representation types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller resolution and authorization guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, link builder, admin token)
//! - **Startup** (`startup`) - Logging and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the caller from the bearer token
//! 3. **Controller** checks access, validates DTOs into params, calls service
//! 4. **Service** applies business rules, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Assembler** turns the returned domain model into a representation whose
//!    affordances depend on the caller's capabilities

pub mod assembler;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod hypermedia;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
