//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::session::Session;

/// Shared application state.
///
/// The catalog is read-only after startup. Session mutations go through
/// the lock one request at a time.
#[derive(Clone)]
pub struct AppState {
    /// Routes and locations
    pub catalog: Arc<Catalog>,

    /// The single user session
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, session: Session) -> Self {
        Self {
            catalog: Arc::new(catalog),
            session: Arc::new(RwLock::new(session)),
        }
    }
}
