//! Form controller: turns user interactions into store mutations and keeps
//! the rendered views and status announcements in step with the collection.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use super::{check_field, is_valid_email, Announcer, FieldError};
use crate::errors::AppResult;
use crate::models::{FieldName, FormOptions, Profile, ProfileFields};
use crate::registry::ProfileStore;
use crate::storage::KeyValueStore;
use crate::view::ViewRenderer;

pub const REGISTER_LABEL: &str = "Register Student";
pub const UPDATE_LABEL: &str = "Update Profile";

/// Which action a valid submit performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => REGISTER_LABEL,
            FormMode::Edit { .. } => UPDATE_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "profile", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Validation failed; errors are on the form.
    Invalid,
    Created(Profile),
    Updated(Profile),
}

/// Form state as the UI binding needs it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    #[serde(flatten)]
    pub mode: FormMode,
    pub submit_label: &'static str,
    pub values: ProfileFields,
    pub errors: Vec<FieldError>,
    /// Fields marked invalid for assistive technology.
    pub invalid_fields: Vec<FieldName>,
    pub focus: Option<FieldName>,
}

/// Everything the UI binding renders after an interaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    pub form: FormSnapshot,
    pub views: ViewRenderer,
    pub announcement: Option<String>,
    pub options: FormOptions,
}

pub struct FormController<S> {
    store: ProfileStore<S>,
    views: ViewRenderer,
    values: ProfileFields,
    errors: BTreeMap<FieldName, FieldError>,
    focus: Option<FieldName>,
    announcer: Announcer,
    options: FormOptions,
}

impl<S: KeyValueStore> FormController<S> {
    pub fn new(store: ProfileStore<S>, options: FormOptions, announcement_ttl: Duration) -> Self {
        let mut controller = Self {
            store,
            views: ViewRenderer::new(),
            values: ProfileFields::default(),
            errors: BTreeMap::new(),
            focus: None,
            announcer: Announcer::new(announcement_ttl),
            options,
        };
        controller.render();
        controller
    }

    pub fn store(&self) -> &ProfileStore<S> {
        &self.store
    }

    pub fn views(&self) -> &ViewRenderer {
        &self.views
    }

    pub fn mode(&self) -> FormMode {
        match self.store.editing_id() {
            Some(id) => FormMode::Edit { id: id.to_string() },
            None => FormMode::Create,
        }
    }

    pub fn values(&self) -> &ProfileFields {
        &self.values
    }

    #[cfg(test)]
    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Whether the field is currently marked invalid.
    #[cfg(test)]
    pub fn is_invalid(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcer.current()
    }

    /// Input event on one field.
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    /// Replace every form value at once.
    pub fn fill(&mut self, values: ProfileFields) {
        self.values = values;
    }

    /// Blur event on one field: re-check it and update its error marker.
    pub fn validate_field(&mut self, field: FieldName) -> Option<FieldError> {
        self.errors.remove(&field);
        let error = check_field(field, self.values.get(field))?;
        self.errors.insert(field, error.clone());
        Some(error)
    }

    /// Check every required field, surfacing all errors at once.
    pub fn validate_form(&mut self) -> bool {
        let mut valid = true;
        for field in FieldName::REQUIRED {
            if self.validate_field(field).is_some() {
                valid = false;
            }
        }

        let email = self.values.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            self.errors
                .insert(FieldName::Email, FieldError::invalid_email());
            valid = false;
        }

        valid
    }

    pub async fn submit(&mut self) -> AppResult<SubmitOutcome> {
        if !self.validate_form() {
            tracing::debug!("Submit rejected: {} field errors", self.errors.len());
            return Ok(SubmitOutcome::Invalid);
        }

        let Some(id) = self.store.editing_id().map(str::to_string) else {
            let profile = self.store.create(&self.values).await?;
            self.reset_form();
            self.render();
            self.announcer.announce(format!(
                "Student {} has been registered successfully",
                profile.full_name()
            ));
            return Ok(SubmitOutcome::Created(profile));
        };

        match self.store.update(&id, &self.values).await {
            Ok(profile) => {
                self.reset_form();
                self.render();
                self.announcer.announce(format!(
                    "Profile for {} updated successfully",
                    profile.full_name()
                ));
                Ok(SubmitOutcome::Updated(profile))
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(id = %id, "Profile under edit no longer exists");
                self.store.end_edit();
                self.reset_form();
                self.render();
                self.announcer
                    .announce("Student profile no longer exists; nothing was updated");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Edit button: load the record into the form and switch to edit mode.
    pub fn edit(&mut self, id: &str) -> AppResult<Profile> {
        let profile = self.store.begin_edit(id)?;
        self.values = profile.to_fields();
        self.errors.clear();
        self.focus = Some(FieldName::FirstName);
        self.announcer
            .announce(format!("Editing profile for {}", profile.full_name()));
        Ok(profile)
    }

    /// Remove button. A record that is already gone still re-renders and
    /// announces, naming a generic subject. Removing the profile under edit
    /// also returns the form to Create mode.
    pub async fn remove(&mut self, id: &str) -> AppResult<Option<Profile>> {
        let removed = match self.store.remove(id).await {
            Ok(profile) => Some(profile),
            Err(err) if err.is_not_found() => {
                tracing::debug!(id = %id, "Remove of unknown profile ignored");
                None
            }
            Err(err) => return Err(err),
        };

        if self.store.editing_id() == Some(id) {
            tracing::debug!(id = %id, "Profile under edit removed; leaving edit mode");
            self.store.end_edit();
            self.reset_form();
        }

        self.render();
        let subject = removed
            .as_ref()
            .map(Profile::full_name)
            .unwrap_or_else(|| "Student".to_string());
        self.announcer
            .announce(format!("{} has been removed from the system", subject));
        Ok(removed)
    }

    /// Search keystroke.
    pub fn search(&mut self, term: &str) {
        self.views.apply_filter(term, self.store.profiles());
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let mode = self.mode();
        RegistrySnapshot {
            form: FormSnapshot {
                submit_label: mode.submit_label(),
                mode,
                values: self.values.clone(),
                errors: self.errors.values().cloned().collect(),
                invalid_fields: self.errors.keys().copied().collect(),
                focus: self.focus,
            },
            views: self.views.clone(),
            announcement: self.announcement().map(str::to_string),
            options: self.options.clone(),
        }
    }

    fn reset_form(&mut self) {
        self.values = ProfileFields::default();
        self.errors.clear();
        self.focus = None;
    }

    fn render(&mut self) {
        self.views.render_all(self.store.profiles());
        tracing::debug!(
            cards = self.views.cards().len(),
            rows = self.views.rows().len(),
            empty = self.views.is_empty(),
            "Rendered profile views"
        );
    }
}
