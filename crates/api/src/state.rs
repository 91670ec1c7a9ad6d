use std::sync::Arc;

use chronicle_store::StorePool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory post and user collections.
    pub store: StorePool,
    /// Server configuration (session secret, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}
