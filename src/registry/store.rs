//! Profile store: the single owner of the profile collection.
//!
//! Every mutation builds the next collection, persists it, and only then
//! swaps it in, so memory and storage never disagree after a failed save.

use super::IdGenerator;
use crate::errors::{AppError, AppResult};
use crate::models::{Profile, ProfileFields};
use crate::storage::{KeyValueStore, ProfilePersistence};

pub struct ProfileStore<S> {
    profiles: Vec<Profile>,
    persistence: ProfilePersistence<S>,
    ids: IdGenerator,
    placeholder_photo_url: String,
    editing: Option<String>,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Load the persisted collection and take ownership of it.
    pub async fn open(
        persistence: ProfilePersistence<S>,
        placeholder_photo_url: impl Into<String>,
    ) -> AppResult<Self> {
        let profiles = persistence.load().await?;
        tracing::info!("Loaded {} student profiles", profiles.len());

        Ok(Self {
            ids: IdGenerator::seeded_from(&profiles),
            profiles,
            persistence,
            placeholder_photo_url: placeholder_photo_url.into(),
            editing: None,
        })
    }

    /// Profiles in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Id of the profile currently being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub async fn create(&mut self, fields: &ProfileFields) -> AppResult<Profile> {
        let profile = Profile::from_fields(self.ids.next_id()?, fields, &self.placeholder_photo_url);

        let mut next = self.profiles.clone();
        next.push(profile.clone());
        self.commit(next).await?;

        tracing::info!(id = %profile.id, "Created profile for {}", profile.full_name());
        Ok(profile)
    }

    /// Replace every field except `id`; leaves edit mode on success.
    pub async fn update(&mut self, id: &str, fields: &ProfileFields) -> AppResult<Profile> {
        let index = self
            .position(id)
            .ok_or_else(|| AppError::profile_not_found(id))?;

        let profile = Profile::from_fields(id.to_string(), fields, &self.placeholder_photo_url);

        let mut next = self.profiles.clone();
        next[index] = profile.clone();
        self.commit(next).await?;

        self.editing = None;
        tracing::info!(id = %profile.id, "Updated profile for {}", profile.full_name());
        Ok(profile)
    }

    /// Delete by id, keeping the order of the survivors.
    pub async fn remove(&mut self, id: &str) -> AppResult<Profile> {
        let index = self
            .position(id)
            .ok_or_else(|| AppError::profile_not_found(id))?;

        let mut next = self.profiles.clone();
        let removed = next.remove(index);
        self.commit(next).await?;

        tracing::info!(id = %removed.id, "Removed profile for {}", removed.full_name());
        Ok(removed)
    }

    /// Enter edit mode for `id` and return the record to prefill the form.
    pub fn begin_edit(&mut self, id: &str) -> AppResult<Profile> {
        let profile = self
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::profile_not_found(id))?;
        self.editing = Some(profile.id.clone());
        Ok(profile)
    }

    /// Leave edit mode without touching the collection.
    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    async fn commit(&mut self, next: Vec<Profile>) -> AppResult<()> {
        self.persistence.save(&next).await?;
        self.profiles = next;
        Ok(())
    }
}
