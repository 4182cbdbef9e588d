//! Shared application state injected into handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::LinkService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Directory holding `index.html`.
    pub views_dir: PathBuf,
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self {
            link_service,
            views_dir: PathBuf::from("views"),
            public_dir: PathBuf::from("public"),
        }
    }

    pub fn with_asset_dirs(
        mut self,
        views_dir: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        self.views_dir = views_dir.into();
        self.public_dir = public_dir.into();
        self
    }
}
