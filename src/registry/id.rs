//! Timestamp-based profile identifiers.

use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::Profile;

/// Issues millisecond-timestamp ids, strictly increasing within the process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Seed past every numeric id already in use so none is ever reissued.
    pub fn seeded_from(profiles: &[Profile]) -> Self {
        let last = profiles
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> AppResult<String> {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> AppResult<String> {
        let after_last = self.last.checked_add(1).ok_or_else(|| {
            tracing::error!(last = self.last, "Profile id space exhausted");
            AppError::Internal("No profile id left above the largest stored id".into())
        })?;
        self.last = now_millis.max(after_last);
        Ok(self.last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_still_distinct() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_000).unwrap();
        let b = ids.next_at(1_000).unwrap();
        let c = ids.next_at(999).unwrap();

        assert_eq!(a, "1000");
        assert_eq!(b, "1001");
        assert_eq!(c, "1002");
    }

    #[test]
    fn test_uses_clock_when_ahead() {
        let mut ids = IdGenerator::default();
        ids.next_at(1_000).unwrap();
        assert_eq!(ids.next_at(5_000).unwrap(), "5000");
    }

    fn profile_with_id(id: &str) -> Profile {
        Profile {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            programme: String::new(),
            year: String::new(),
            interests: String::new(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn test_seeded_past_existing_ids() {
        let mut ids = IdGenerator::seeded_from(&[profile_with_id("9999999999999999")]);

        assert_eq!(ids.next_id().unwrap(), "10000000000000000");
    }

    #[test]
    fn test_largest_possible_id_is_an_error() {
        let mut ids = IdGenerator::seeded_from(&[profile_with_id(&i64::MAX.to_string())]);

        let err = ids.next_id().unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        // Still exhausted; nothing was handed out.
        assert!(ids.next_at(0).is_err());
    }
}
