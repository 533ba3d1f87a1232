use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::ColorGeneration;

/// Short-lived store of rendered previews, keyed by a random share id.
///
/// Each entry can be taken at most once: `take_once` removes it under the
/// write lock, so two concurrent readers can never both receive it.
pub struct GenerationCache {
    entries: Arc<RwLock<HashMap<String, ColorGeneration>>>,
    ttl: chrono::Duration,
}

impl GenerationCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: i64::try_from(ttl_secs)
                .ok()
                .and_then(chrono::Duration::try_seconds)
                .unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Store a generation and return its share id.
    ///
    /// Expired entries are dropped on the way in.
    pub async fn store(&self, generation: ColorGeneration) -> String {
        let id = new_share_id();
        let now = chrono::Utc::now();

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, g| !g.is_expired(self.ttl, now));
        let evicted = before - entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted expired generations");
        }

        entries.insert(id.clone(), generation);
        id
    }

    /// Remove and return the generation for `id`, unless it has expired.
    pub async fn take_once(&self, id: &str) -> Option<ColorGeneration> {
        let generation = self.entries.write().await.remove(id)?;
        if generation.is_expired(self.ttl, chrono::Utc::now()) {
            tracing::debug!(id, "Generation expired before it was shared");
            return None;
        }
        Some(generation)
    }

    /// Number of stored entries, including ones not yet evicted
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for GenerationCache {
    fn default() -> Self {
        Self::new(crate::models::AppConfig::default().share_ttl_secs)
    }
}

/// 32 lowercase hex characters from 16 random bytes
fn new_share_id() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    hex::encode(bytes)
}
