use async_trait::async_trait;
use marquee_catalog::{ApiFetcher, CatalogError, FetchOptions, MovieSource};
use marquee_tmdb::{
    CrewCredit, MetadataApi, MovieDetails, PersonCandidate, PersonCredits, PersonSearchResponse,
    TmdbError,
};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory stand-in for TMDb.
#[derive(Default)]
struct FakeApi {
    people: HashMap<String, Vec<PersonCandidate>>,
    failing_searches: HashSet<String>,
    failing_credits: HashSet<u64>,
    credits: HashMap<u64, Vec<CrewCredit>>,
    details: HashMap<u64, MovieDetails>,
    detail_calls: Mutex<Vec<u64>>,
}

impl FakeApi {
    fn person(mut self, name: &str, id: u64, department: &str) -> Self {
        self.people.entry(name.to_string()).or_default().push(PersonCandidate {
            id,
            name: name.to_string(),
            known_for_department: Some(department.to_string()),
            popularity: 10.0,
        });
        self
    }

    fn failing_search(mut self, name: &str) -> Self {
        self.failing_searches.insert(name.to_string());
        self
    }

    fn failing_credits(mut self, person_id: u64) -> Self {
        self.failing_credits.insert(person_id);
        self
    }

    fn credits(mut self, person_id: u64, entries: &[(u64, &str)]) -> Self {
        self.credits.insert(
            person_id,
            entries
                .iter()
                .map(|(id, job)| CrewCredit {
                    id: *id,
                    job: Some((*job).to_string()),
                    title: None,
                })
                .collect(),
        );
        self
    }

    fn movie(mut self, id: u64, title: &str, director: &str, release_date: &str) -> Self {
        let details = serde_json::from_value(json!({
            "id": id,
            "title": title,
            "release_date": release_date,
            "credits": {
                "cast": [{"name": "Lead"}, {"name": "Support"}, {"name": "Cameo"}, {"name": "Extra"}],
                "crew": [{"job": "Director", "name": director}]
            }
        }))
        .expect("valid details");
        self.details.insert(id, details);
        self
    }

    fn detail_calls(&self) -> Vec<u64> {
        self.detail_calls.lock().expect("lock call log").clone()
    }
}

#[async_trait]
impl MetadataApi for FakeApi {
    async fn search_person(&self, name: &str) -> marquee_tmdb::Result<PersonSearchResponse> {
        if self.failing_searches.contains(name) {
            return Err(TmdbError::from_status(500, "Internal Server Error".to_string()));
        }
        Ok(PersonSearchResponse {
            results: self.people.get(name).cloned().unwrap_or_default(),
        })
    }

    async fn person_credits(&self, person_id: u64) -> marquee_tmdb::Result<PersonCredits> {
        if self.failing_credits.contains(&person_id) {
            return Err(TmdbError::from_status(503, "Service Unavailable".to_string()));
        }
        Ok(PersonCredits {
            crew: self.credits.get(&person_id).cloned().unwrap_or_default(),
        })
    }

    async fn movie_details(&self, movie_id: u64) -> marquee_tmdb::Result<MovieDetails> {
        self.detail_calls.lock().expect("lock call log").push(movie_id);
        self.details
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| TmdbError::from_status(404, "not found".to_string()))
    }
}

fn options(cap: usize) -> FetchOptions {
    FetchOptions::default()
        .with_max_movies_per_composer(cap)
        .with_request_delay(Duration::ZERO)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn test_fetch_populates_movies() {
    let api = FakeApi::default()
        .person("Fake Composer", 777, "Music")
        .credits(
            777,
            &[(10, "Original Music Composer"), (15, "Orchestrator"), (20, "Composer")],
        )
        .movie(10, "Fake Movie 1", "Director 1", "2005-01-01")
        .movie(20, "Fake Movie 2", "Director 2", "2007-02-02");

    let catalog = ApiFetcher::new(&api, options(2))
        .fetch(&names(&["Fake Composer"]))
        .await
        .expect("fetch");

    assert_eq!(catalog.len(), 2);
    let first = &catalog.movies()[0];
    assert_eq!(first.title(), "Fake Movie 1");
    assert_eq!(first.composer(), "Fake Composer");
    assert_eq!(first.director(), "Director 1");
    assert_eq!(first.cast(), ["Lead", "Support", "Cameo"]);
    assert_eq!(first.year(), Some(2005));
    assert_eq!(catalog.movies()[1].title(), "Fake Movie 2");
    assert_eq!(api.detail_calls(), vec![10, 20]);
}

#[tokio::test]
async fn test_cap_limits_credits_in_api_order() {
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .credits(1, &[(10, "Music"), (11, "Music"), (12, "Music")])
        .movie(10, "Ten", "D", "2000-01-01")
        .movie(11, "Eleven", "D", "2001-01-01")
        .movie(12, "Twelve", "D", "2002-01-01");

    let catalog = ApiFetcher::new(&api, options(2))
        .fetch(&names(&["A"]))
        .await
        .expect("fetch");

    let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["Ten", "Eleven"]);
}

#[tokio::test]
async fn test_shared_movie_counts_for_first_composer_only() {
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .person("B", 2, "Sound")
        .credits(1, &[(10, "Composer")])
        .credits(2, &[(10, "Composer"), (30, "Composer")])
        .movie(10, "Shared", "D", "1990-01-01")
        .movie(30, "Solo", "D", "1991-01-01");

    let catalog = ApiFetcher::new(&api, options(5))
        .fetch(&names(&["A", "B"]))
        .await
        .expect("fetch");

    let pairs: Vec<(&str, &str)> = catalog
        .movies()
        .iter()
        .map(|m| (m.title(), m.composer()))
        .collect();
    assert_eq!(pairs, vec![("Shared", "A"), ("Solo", "B")]);
    assert_eq!(api.detail_calls(), vec![10, 30]);
}

#[tokio::test]
async fn test_unresolved_composer_skipped_but_listed() {
    let api = FakeApi::default()
        .person("Actor Person", 5, "Acting")
        .person("B", 2, "Music")
        .credits(2, &[(30, "Composer")])
        .movie(30, "Solo", "D", "1991-01-01");

    let catalog = ApiFetcher::new(&api, options(5))
        .fetch(&names(&["Actor Person", "Nobody", "B"]))
        .await
        .expect("fetch");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.composers(), ["Actor Person", "Nobody", "B"]);
}

#[tokio::test]
async fn test_failed_movie_skipped_and_loading_continues() {
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .credits(1, &[(10, "Composer"), (404, "Composer"), (12, "Composer")])
        .movie(10, "Ten", "D", "2000-01-01")
        .movie(12, "Twelve", "D", "");

    let catalog = ApiFetcher::new(&api, options(5))
        .fetch(&names(&["A"]))
        .await
        .expect("fetch");

    let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["Ten", "Twelve"]);
    assert_eq!(catalog.movies()[1].year(), None);
    assert_eq!(api.detail_calls(), vec![10, 404, 12]);
}

#[tokio::test]
async fn test_failed_movie_not_marked_seen() {
    // 404 is missing for A; B is credited with it too and gets a second attempt
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .person("B", 2, "Music")
        .credits(1, &[(404, "Composer")])
        .credits(2, &[(404, "Composer")]);

    let catalog = ApiFetcher::new(&api, options(5))
        .fetch(&names(&["A", "B"]))
        .await
        .expect("fetch");

    assert!(catalog.is_empty());
    assert_eq!(api.detail_calls(), vec![404, 404]);
}

#[tokio::test]
async fn test_search_error_skips_only_that_composer() {
    let api = FakeApi::default()
        .failing_search("A")
        .person("B", 2, "Music")
        .credits(2, &[(30, "Composer")])
        .movie(30, "Solo", "D", "1991-01-01");

    let catalog = ApiFetcher::new(&api, options(5))
        .fetch(&names(&["A", "B"]))
        .await
        .expect("fetch");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.movies()[0].composer(), "B");
}

#[tokio::test]
async fn test_credits_error_skips_only_that_composer() {
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .person("B", 2, "Music")
        .failing_credits(1)
        .credits(1, &[(10, "Composer")])
        .credits(2, &[(30, "Composer")])
        .movie(10, "Ten", "D", "2000-01-01")
        .movie(30, "Solo", "D", "1991-01-01");

    let catalog = ApiFetcher::new(&api, options(5))
        .fetch(&names(&["A", "B"]))
        .await
        .expect("fetch");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.movies()[0].title(), "Solo");
    assert_eq!(catalog.movies()[0].composer(), "B");
    assert_eq!(catalog.composers(), ["A", "B"]);
    assert_eq!(api.detail_calls(), vec![30]);
}

#[tokio::test]
async fn test_empty_composer_list_rejected() {
    let api = FakeApi::default();
    let result = ApiFetcher::new(&api, options(5)).fetch(&[]).await;
    assert!(matches!(result, Err(CatalogError::Config(_))));

    let result = ApiFetcher::new(&api, options(0)).fetch(&names(&["A"])).await;
    assert!(matches!(result, Err(CatalogError::Config(_))));
}

#[tokio::test(start_paused = true)]
async fn test_pacing_delay_between_detail_fetches() {
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .credits(1, &[(10, "Composer"), (11, "Composer")])
        .movie(10, "Ten", "D", "2000-01-01")
        .movie(11, "Eleven", "D", "2001-01-01");

    let start = tokio::time::Instant::now();
    let fetch_options = options(5).with_request_delay(Duration::from_millis(250));
    ApiFetcher::new(&api, fetch_options)
        .fetch(&names(&["A"]))
        .await
        .expect("fetch");

    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn test_source_from_api_uses_literal_composer_list() {
    let api = FakeApi::default()
        .person("A", 1, "Music")
        .credits(1, &[(10, "Composer")])
        .movie(10, "Ten", "D", "2000-01-01");

    let source = MovieSource::from_api(&api, &names(&["A", "Z"]), options(3))
        .await
        .expect("fetch source");

    assert_eq!(source.records().len(), 1);
    assert_eq!(source.composer_names(), ["A", "Z"]);
    assert_eq!(source.describe(), "TMDb API");
}
