use std::path::PathBuf;

use crate::chart_store::ChartStore;
use crate::config::{chart_cache_ttl_secs, charts_dir, static_dir};

#[derive(Clone)]
pub struct AppState {
    pub charts: ChartStore,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_env() -> Self {
        Self::new(
            ChartStore::new(charts_dir(), chart_cache_ttl_secs()),
            static_dir(),
        )
    }

    pub fn new(charts: ChartStore, static_dir: PathBuf) -> Self {
        Self { charts, static_dir }
    }
}
