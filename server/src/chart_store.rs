use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashboard_shared::ChartConfig;
use dashmap::DashMap;

/// Chart JSON already validated and re-serialized, ready to be served as-is.
#[derive(Debug, Clone)]
pub struct CachedChart {
    pub json: Bytes,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum ChartLoadError {
    NotFound,
    Invalid(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ChartLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("chart not found"),
            Self::Invalid(e) => write!(f, "invalid chart document: {e}"),
            Self::Io(e) => write!(f, "failed to read chart document: {e}"),
        }
    }
}

/// Chart documents stored as `{id}.json` files under one directory.
///
/// Callers must validate `id` before lookup; the store joins it onto its
/// directory verbatim.
#[derive(Clone)]
pub struct ChartStore {
    dir: Arc<PathBuf>,
    ttl_secs: i64,
    cache: Arc<DashMap<String, CachedChart>>,
}

impl ChartStore {
    pub fn new(dir: impl Into<PathBuf>, ttl_secs: i64) -> Self {
        Self {
            dir: Arc::new(dir.into()),
            ttl_secs,
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub async fn get(&self, id: &str) -> Result<Bytes, ChartLoadError> {
        if let Some(cached) = self.cache.get(id) {
            let age = Utc::now()
                .signed_duration_since(cached.fetched_at)
                .num_seconds();
            if age < self.ttl_secs {
                return Ok(cached.json.clone());
            }
        }

        let path = self.dir.join(format!("{id}.json"));
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.cache.remove(id);
                return Err(ChartLoadError::NotFound);
            }
            Err(e) => return Err(ChartLoadError::Io(e)),
        };

        let chart: ChartConfig = serde_json::from_slice(&raw).map_err(ChartLoadError::Invalid)?;
        let json = Bytes::from(serde_json::to_vec(&chart).map_err(ChartLoadError::Invalid)?);

        self.cache.insert(
            id.to_owned(),
            CachedChart {
                json: json.clone(),
                fetched_at: Utc::now(),
            },
        );
        Ok(json)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::scratch_dir;
    use super::*;

    #[tokio::test]
    async fn loads_and_normalizes_stored_chart() {
        let dir = scratch_dir("store-load");
        std::fs::write(dir.join("sales.json"), r#"{"data": [{"type": "bar"}]}"#)
            .expect("write chart");
        let store = ChartStore::new(&dir, 30);

        let json = store.get("sales").await.expect("chart loads");
        let value: serde_json::Value = serde_json::from_slice(&json).expect("json body");
        assert_eq!(
            value,
            serde_json::json!({"data": [{"type": "bar"}], "layout": {}})
        );
        assert_eq!(store.cached_len(), 1);
    }

    #[tokio::test]
    async fn missing_chart_is_not_found() {
        let store = ChartStore::new(scratch_dir("store-missing"), 30);
        assert!(matches!(
            store.get("nope").await,
            Err(ChartLoadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn malformed_chart_is_invalid() {
        let dir = scratch_dir("store-invalid");
        std::fs::write(dir.join("broken.json"), "{\"data\": ").expect("write chart");
        let store = ChartStore::new(&dir, 30);
        assert!(matches!(
            store.get("broken").await,
            Err(ChartLoadError::Invalid(_))
        ));
        assert_eq!(store.cached_len(), 0);
    }

    #[tokio::test]
    async fn cached_copy_is_served_within_ttl() {
        let dir = scratch_dir("store-cache");
        let path = dir.join("fleet.json");
        std::fs::write(&path, r#"{"layout": {"title": "v1"}}"#).expect("write chart");
        let store = ChartStore::new(&dir, 3600);

        let first = store.get("fleet").await.expect("first load");
        std::fs::write(&path, r#"{"layout": {"title": "v2"}}"#).expect("rewrite chart");
        let second = store.get("fleet").await.expect("cached load");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn expired_entries_are_reloaded() {
        let dir = scratch_dir("store-expired");
        let path = dir.join("fleet.json");
        std::fs::write(&path, r#"{"layout": {"title": "v1"}}"#).expect("write chart");
        let store = ChartStore::new(&dir, 0);

        store.get("fleet").await.expect("first load");
        std::fs::write(&path, r#"{"layout": {"title": "v2"}}"#).expect("rewrite chart");
        let reloaded = store.get("fleet").await.expect("reload");
        assert!(
            std::str::from_utf8(&reloaded)
                .expect("utf8")
                .contains("v2")
        );
    }
}
