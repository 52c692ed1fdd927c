//! In-memory favorites store.
//!
//! Holds favorited tool ids for the lifetime of the process. Starts empty and
//! is never persisted. All access goes through one async lock.

use tokio::sync::RwLock;

/// Process-wide list of favorited tool ids, in insertion order.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    ids: RwLock<Vec<i64>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all ids in insertion order.
    pub async fn ids(&self) -> Vec<i64> {
        self.ids.read().await.clone()
    }

    /// Append `id` unless already present. Returns `false` on duplicate.
    pub async fn insert(&self, id: i64) -> bool {
        let mut ids = self.ids.write().await;
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    /// Remove the first entry equal to `id`. Returns `false` if absent.
    pub async fn remove(&self, id: i64) -> bool {
        let mut ids = self.ids.write().await;
        match ids.iter().position(|&existing| existing == id) {
            Some(position) => {
                ids.remove(position);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.ids.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ids.read().await.is_empty()
    }
}
