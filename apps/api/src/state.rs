use std::sync::Arc;

use crate::catalog::Catalog;
use crate::chat::proxy::ChatProxy;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; everything in it is read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    /// Chat relay. Provider and credential source are swappable trait objects.
    pub chat: ChatProxy,
}
