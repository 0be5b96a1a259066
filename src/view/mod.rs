//! Presentational views of the profile collection.
//!
//! Cards and table rows carry display-ready text plus the profile id they were
//! rendered from. Filtering only flips visibility; it never re-renders.

use serde::Serialize;

use crate::models::Profile;

const NO_INTERESTS: &str = "Not specified";

/// One profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub photo_alt: String,
    pub programme_line: String,
    pub email: String,
    pub interests: String,
    pub visible: bool,
}

impl ProfileCard {
    fn render(profile: &Profile) -> Self {
        let name = profile.full_name();
        Self {
            id: profile.id.clone(),
            photo_alt: format!("Profile photo of {}", name),
            photo_url: profile.photo_url.clone(),
            programme_line: format!("{} - Year {}", profile.programme, profile.year),
            email: profile.email.clone(),
            interests: if profile.interests.is_empty() {
                NO_INTERESTS.to_string()
            } else {
                profile.interests.clone()
            },
            name,
            visible: true,
        }
    }
}

/// One row of the profile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub programme: String,
    pub year: String,
    pub visible: bool,
}

impl TableRow {
    fn render(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.full_name(),
            email: profile.email.clone(),
            programme: profile.programme.clone(),
            year: format!("Year {}", profile.year),
            visible: true,
        }
    }
}

/// Both views plus the empty-state indicator and the active search term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRenderer {
    cards: Vec<ProfileCard>,
    rows: Vec<TableRow>,
    empty: bool,
    filter: String,
}

impl ViewRenderer {
    pub fn new() -> Self {
        Self {
            empty: true,
            ..Default::default()
        }
    }

    pub fn cards(&self) -> &[ProfileCard] {
        &self.cards
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Whether the "no profiles" indicator is shown.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Rebuild both views from scratch in collection order.
    ///
    /// A non-empty search term stays in effect across re-renders.
    pub fn render_all(&mut self, profiles: &[Profile]) {
        self.cards = profiles.iter().map(ProfileCard::render).collect();
        self.rows = profiles.iter().map(TableRow::render).collect();
        self.empty = profiles.is_empty();

        if !self.filter.is_empty() {
            let term = self.filter.clone();
            self.apply_filter(&term, profiles);
        }
    }

    /// Show only items whose profile matches `term`, case-insensitively, in
    /// first name, last name, programme or interests.
    pub fn apply_filter(&mut self, term: &str, profiles: &[Profile]) {
        self.filter = term.to_string();
        let needle = term.to_lowercase();
        let visible = |id: &str| {
            profiles
                .iter()
                .find(|p| p.id == id)
                .is_some_and(|p| matches_term(p, &needle))
        };

        for card in &mut self.cards {
            card.visible = visible(&card.id);
        }
        for row in &mut self.rows {
            row.visible = visible(&row.id);
        }
    }
}

fn matches_term(profile: &Profile, needle: &str) -> bool {
    [
        &profile.first_name,
        &profile.last_name,
        &profile.programme,
        &profile.interests,
    ]
    .iter()
    .any(|value| value.to_lowercase().contains(needle))
}
