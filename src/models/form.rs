//! Form input model: field identities, raw values and option sets.

use serde::{Deserialize, Serialize};

/// One input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Programme,
    Year,
    Interests,
    PhotoUrl,
}

impl FieldName {
    /// Fields that must be non-blank for the form to submit.
    pub const REQUIRED: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Programme,
        FieldName::Year,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Human label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::Email => "Email",
            FieldName::Programme => "Programme",
            FieldName::Year => "Year",
            FieldName::Interests => "Interests",
            FieldName::PhotoUrl => "Photo URL",
        }
    }
}

/// Raw values of every form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub programme: String,
    pub year: String,
    pub interests: String,
    pub photo_url: String,
}

impl ProfileFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Programme => &self.programme,
            FieldName::Year => &self.year,
            FieldName::Interests => &self.interests,
            FieldName::PhotoUrl => &self.photo_url,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Programme => &mut self.programme,
            FieldName::Year => &mut self.year,
            FieldName::Interests => &mut self.interests,
            FieldName::PhotoUrl => &mut self.photo_url,
        };
        *slot = value;
    }
}

/// Choices offered by the enumerated inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub programmes: Vec<String>,
    pub years: Vec<String>,
}
