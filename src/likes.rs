//! # Likes Module
//!
//! The persisted favorites collection. Membership is keyed by recipe id;
//! every mutation synchronously rewrites the whole collection to storage.
//! Storage trouble in either direction is logged and swallowed: favorites
//! degrade to session-local rather than failing an operation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::storage::KeyValueStore;

/// Storage key the collection persists under
const STORAGE_KEY: &str = "likes";

/// One favorited recipe, enough to re-render its list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// Favorites collection backed by a [`KeyValueStore`]
pub struct Likes {
    likes: Vec<Like>,
    store: Box<dyn KeyValueStore>,
}

impl Likes {
    /// Create an empty collection over the given store; nothing is read yet
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            likes: Vec::new(),
            store,
        }
    }

    /// Add a like and persist; `None` (and no write) when already liked
    pub fn add_like(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        image_url: &str,
    ) -> Option<Like> {
        if self.is_liked(id) {
            return None;
        }
        let like = Like {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image_url: image_url.to_string(),
        };
        self.likes.push(like.clone());
        info!(recipe_id = %id, "Recipe liked");
        self.persist();
        Some(like)
    }

    /// Remove a like and persist; `false` (and no write) when absent
    pub fn delete_like(&mut self, id: &str) -> bool {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() == before {
            return false;
        }
        info!(recipe_id = %id, "Recipe unliked");
        self.persist();
        true
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    /// Likes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Like> {
        self.likes.iter()
    }

    /// Load the persisted collection.
    ///
    /// An absent key or malformed blob leaves the collection empty; neither
    /// is an error.
    pub fn read_storage(&mut self) {
        let blob = match self.store.read(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, "Failed to read persisted likes");
                return;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(likes) => {
                self.likes = likes;
                info!(count = self.likes.len(), "Loaded persisted likes");
            }
            Err(err) => {
                warn!(error = %err, "Persisted likes are malformed, starting empty");
                self.likes = Vec::new();
            }
        }
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.likes) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(error = %err, "Failed to serialize likes");
                return;
            }
        };
        if let Err(err) = self.store.write(STORAGE_KEY, &blob) {
            warn!(error = %err, "Failed to persist likes");
        }
    }
}
