//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by the application. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply, the connection is a
/// pool handle) for each incoming request via Axum's state extraction. Handlers pass
/// the connection down to services and repositories by reference, so no global
/// database handle exists anywhere in the application.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
