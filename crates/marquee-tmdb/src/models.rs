//! TMDb response models and the extraction rules applied to them.
//!
//! Every field the game does not strictly need is optional or defaulted, so a
//! sparse response still deserializes.

use serde::{Deserialize, Serialize};

/// `known_for_department` values accepted for a composer candidate.
pub const MUSIC_DEPARTMENTS: [&str; 3] = ["Sound", "Music", "Music Department"];

/// Crew job labels that count as composing the score.
pub const COMPOSING_JOBS: [&str; 3] = ["Original Music Composer", "Music", "Composer"];

/// Director fallback when a movie's crew lists none.
pub const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Title fallback when the details payload has none.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Response of `GET /search/person`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PersonSearchResponse {
    /// Matching people, in API ranking order
    #[serde(default)]
    pub results: Vec<PersonCandidate>,
}

/// A person returned by the search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonCandidate {
    /// TMDb person id
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Department the person is best known for
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// TMDb popularity score
    #[serde(default)]
    pub popularity: f64,
}

impl PersonCandidate {
    /// Whether this person is known for a music-related department.
    #[must_use]
    pub fn is_music_department(&self) -> bool {
        self.known_for_department
            .as_deref()
            .is_some_and(|dept| MUSIC_DEPARTMENTS.contains(&dept))
    }
}

/// Pick the most popular music-department candidate.
///
/// Ties keep the candidate listed first. Returns `None` when no candidate
/// belongs to a music department.
#[must_use]
pub fn select_composer(candidates: &[PersonCandidate]) -> Option<&PersonCandidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_music_department())
        .reduce(|best, candidate| {
            if candidate.popularity > best.popularity {
                candidate
            } else {
                best
            }
        })
}

/// Response of `GET /person/{id}/movie_credits`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PersonCredits {
    /// Crew credits, in API order
    #[serde(default)]
    pub crew: Vec<CrewCredit>,
}

impl PersonCredits {
    /// Crew credits whose job is a composing role, in API order.
    pub fn composing_credits(&self) -> impl Iterator<Item = &CrewCredit> {
        self.crew.iter().filter(|credit| credit.is_composing_role())
    }
}

/// A movie the person worked on as crew.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrewCredit {
    /// TMDb movie id
    pub id: u64,
    /// Job label (e.g. "Original Music Composer")
    #[serde(default)]
    pub job: Option<String>,
    /// Movie title as listed in the credit
    #[serde(default)]
    pub title: Option<String>,
}

impl CrewCredit {
    /// Whether the job label is one of [`COMPOSING_JOBS`].
    #[must_use]
    pub fn is_composing_role(&self) -> bool {
        self.job
            .as_deref()
            .is_some_and(|job| COMPOSING_JOBS.contains(&job))
    }
}

/// Response of `GET /movie/{id}?append_to_response=credits`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MovieDetails {
    /// TMDb movie id
    #[serde(default)]
    pub id: u64,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Release date, `YYYY-MM-DD` (may be empty)
    #[serde(default)]
    pub release_date: Option<String>,
    /// Embedded cast and crew
    #[serde(default)]
    pub credits: MovieCredits,
}

impl MovieDetails {
    /// Title, or `"Unknown"` when missing.
    #[must_use]
    pub fn title_or_unknown(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// First crew member credited as "Director", or `"Unknown"`.
    #[must_use]
    pub fn director(&self) -> &str {
        self.credits
            .crew
            .iter()
            .find(|member| member.job.as_deref() == Some("Director"))
            .map_or(UNKNOWN_DIRECTOR, |member| member.name.as_str())
    }

    /// Names of the first `limit` cast members, in billing order.
    #[must_use]
    pub fn main_cast(&self, limit: usize) -> Vec<String> {
        self.credits
            .cast
            .iter()
            .take(limit)
            .map(|member| member.name.clone())
            .collect()
    }

    /// Year taken from the first four characters of the release date.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok())
    }
}

/// Cast and crew embedded in movie details.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MovieCredits {
    /// Cast, in billing order
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// A cast entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CastMember {
    /// Performer name
    pub name: String,
}

/// A crew entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrewMember {
    /// Job label
    #[serde(default)]
    pub job: Option<String>,
    /// Person name
    pub name: String,
}
