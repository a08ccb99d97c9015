use std::sync::Arc;

use crate::config::Config;
use crate::matching::MatchService;
use crate::pages::branding::Branding;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; there is no per-user state here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote matcher. `MatchClient` in production, a stub in tests.
    pub matcher: Arc<dyn MatchService>,
    /// Header branding, resolved once from the logo file at startup.
    pub branding: Arc<Branding>,
}
