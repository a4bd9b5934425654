//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - Checkout provider client for hosted payment sessions
//! - Media signer for direct-upload signatures
//! - Application URL for generating links

use sea_orm::DatabaseConnection;

use crate::server::service::{checkout::CheckoutClient, media::MediaSigner};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `CheckoutClient` wraps the same client plus credential strings
/// - `MediaSigner` carries only credential strings
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities.
    pub http_client: reqwest::Client,

    /// Client for the hosted-checkout provider's sessions API.
    ///
    /// Used by company purchases and the reconciliation sweep.
    pub checkout: CheckoutClient,

    /// Signer for media CDN direct-upload parameters.
    pub media_signer: MediaSigner,

    /// Application base URL for generating links.
    ///
    /// Used to construct checkout success/cancel redirect URLs and other
    /// resources that need to reference the application.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        checkout: CheckoutClient,
        media_signer: MediaSigner,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            checkout,
            media_signer,
            app_url,
        }
    }
}
