//! Student profile model, persisted exactly as serialized here.

use serde::{Deserialize, Serialize};

use super::ProfileFields;

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub programme: String,
    pub year: String,
    pub interests: String,
    pub photo_url: String,
}

impl Profile {
    /// Build a record from form input, trimming every value and
    /// substituting the placeholder for a blank photo URL.
    pub fn from_fields(id: String, fields: &ProfileFields, placeholder_photo_url: &str) -> Self {
        let photo_url = fields.photo_url.trim();
        Self {
            id,
            first_name: fields.first_name.trim().to_string(),
            last_name: fields.last_name.trim().to_string(),
            email: fields.email.trim().to_string(),
            programme: fields.programme.trim().to_string(),
            year: fields.year.trim().to_string(),
            interests: fields.interests.trim().to_string(),
            photo_url: if photo_url.is_empty() {
                placeholder_photo_url.to_string()
            } else {
                photo_url.to_string()
            },
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Form values that reproduce this record when submitted.
    pub fn to_fields(&self) -> ProfileFields {
        ProfileFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            programme: self.programme.clone(),
            year: self.year.clone(),
            interests: self.interests.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "https://via.placeholder.com/100";

    #[test]
    fn test_from_fields_trims_and_defaults_photo() {
        let fields = ProfileFields {
            first_name: "  Alice ".into(),
            last_name: "Lee".into(),
            email: " alice@example.com".into(),
            programme: "CS".into(),
            year: "2".into(),
            interests: "   ".into(),
            photo_url: "  ".into(),
        };

        let profile = Profile::from_fields("1".into(), &fields, PLACEHOLDER);

        assert_eq!(profile.first_name, "Alice");
        assert_eq!(profile.email, "alice@example.com");
        assert_eq!(profile.interests, "");
        assert_eq!(profile.photo_url, PLACEHOLDER);
        assert_eq!(profile.full_name(), "Alice Lee");
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = Profile::from_fields(
            "7".into(),
            &ProfileFields {
                first_name: "Bo".into(),
                photo_url: "https://img/bo.png".into(),
                ..Default::default()
            },
            PLACEHOLDER,
        );
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["firstName"], "Bo");
        assert_eq!(json["photoUrl"], "https://img/bo.png");
        assert!(json.get("first_name").is_none());
    }
}
