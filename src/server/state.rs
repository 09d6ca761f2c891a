//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is a
//! pool handle and the rest are small strings.

use sea_orm::DatabaseConnection;

use crate::server::hypermedia::link::LinkBuilder;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Builds every link href from the configured application URL.
    pub links: LinkBuilder,

    /// Bearer token granting the `ADMIN` capability.
    pub admin_token: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, app_url: &str, admin_token: String) -> Self {
        Self {
            db,
            links: LinkBuilder::new(app_url),
            admin_token,
        }
    }
}
