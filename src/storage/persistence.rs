//! Maps the profile collection to a single key-value slot as a JSON array.

use super::KeyValueStore;
use crate::errors::AppError;
use crate::models::Profile;

/// Persistence adapter for the profile collection.
pub struct ProfilePersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProfilePersistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serialize the whole collection and overwrite the slot.
    pub async fn save(&self, profiles: &[Profile]) -> Result<(), AppError> {
        let payload = serde_json::to_string(profiles)?;
        self.store.set(&self.key, &payload).await?;
        tracing::debug!(key = %self.key, count = profiles.len(), "Saved profiles");
        Ok(())
    }

    /// Read the slot; an absent slot is an empty collection.
    pub async fn load(&self) -> Result<Vec<Profile>, AppError> {
        match self.store.get(&self.key).await? {
            Some(payload) => {
                let profiles: Vec<Profile> = serde_json::from_str(&payload)?;
                tracing::debug!(key = %self.key, count = profiles.len(), "Loaded profiles");
                Ok(profiles)
            }
            None => Ok(Vec::new()),
        }
    }
}
