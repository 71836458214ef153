use std::fs;
use std::sync::Arc;

use cinedex::catalog::Catalog;
use cinedex::config::{CatalogConfig, CinedexConfig};
use cinedex::error::ApiError;
use cinedex::query::QueryEngine;
use cinedex::review::{InMemoryReviews, Review};
use cinedex::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

use crate::integration::support::{movie, movies_json};

fn sample_context() -> CliContext {
    let catalog = Catalog::from_movies(vec![
        movie(1, "The Prison Escape", "Drama"),
        movie(2, "The Family Boss", "Action/Crime"),
    ]);
    let reviews = InMemoryReviews::from_reviews(vec![Review {
        movie_id: 2,
        reviewer: "Marco".to_string(),
        rating: 5.0,
        comment: "Unforgettable.".to_string(),
    }]);
    CliContext::from_parts(QueryEngine::new(catalog), Arc::new(reviews))
}

fn search(name: Option<&str>, id: Option<i64>, genre: Option<&str>, format: &str) -> Commands {
    Commands::Search {
        name: name.map(str::to_string),
        id,
        genre: genre.map(str::to_string),
        format: format.to_string(),
    }
}

#[test]
fn search_json_contract_has_required_fields() {
    let cli = sample_context();
    let output = cli
        .execute(&search(Some("family"), None, None, "json"))
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["totalResults"], 1);
    assert_eq!(parsed["message"], "Found 1 movie.");
    let movies = parsed["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], 2);
    assert_eq!(movies[0]["movieName"], "The Family Boss");
    assert_eq!(parsed["searchParameters"]["name"], "family");
    assert!(parsed["searchParameters"]["id"].is_null());
}

#[test]
fn search_without_matches_is_not_an_error() {
    let cli = sample_context();
    let output = cli.execute(&search(None, Some(999), None, "json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["totalResults"], 0);

    let text = cli.execute(&search(None, Some(999), None, "text")).unwrap();
    assert!(text.starts_with("No movies found"));
}

#[test]
fn search_rejects_empty_request() {
    let cli = sample_context();
    let err = cli
        .execute(&search(Some("   "), None, Some(""), "text"))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

#[test]
fn search_rejects_non_positive_id() {
    let cli = sample_context();
    for id in [0, -1] {
        let err = cli.execute(&search(None, Some(id), None, "json")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}

#[test]
fn unknown_format_is_rejected() {
    let cli = sample_context();
    let err = cli
        .execute(&Commands::Genres {
            format: "yaml".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

#[test]
fn show_includes_reviews() {
    let cli = sample_context();
    let output = cli
        .execute(&Commands::Show {
            id: 2,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["movie"]["movieName"], "The Family Boss");
    let reviews = parsed["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["reviewer"], "Marco");

    let text = cli
        .execute(&Commands::Show {
            id: 1,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(text.contains("No reviews yet."));
}

#[test]
fn show_unknown_movie_is_not_found() {
    let cli = sample_context();
    for id in [999, 0, -4] {
        let err = cli
            .execute(&Commands::Show {
                id,
                format: "text".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::MovieNotFound(found) if found == id));
    }
}

#[test]
fn list_json_contract_has_movies_and_genres() {
    let cli = sample_context();
    let output = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["totalResults"], 2);
    let ids: Vec<_> = parsed["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        parsed["availableGenres"],
        serde_json::json!(["Action/Crime", "Drama"])
    );
}

#[test]
fn genres_text_lists_each_genre() {
    let cli = sample_context();
    let output = cli
        .execute(&Commands::Genres {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("  Action/Crime\n"));
    assert!(output.contains("  Drama\n"));
    assert!(output.contains("Total: 2 genre(s)"));
}

#[test]
fn context_loads_configured_files() {
    let temp_dir = TempDir::new().unwrap();
    let movies_path = temp_dir.path().join("movies.json");
    let reviews_path = temp_dir.path().join("reviews.json");
    fs::write(
        &movies_path,
        movies_json(&[movie(42, "Configured Feature", "Documentary")]),
    )
    .unwrap();
    fs::write(
        &reviews_path,
        r#"[{"movieId": 42, "reviewer": "Ana", "rating": 4.0, "comment": "Insightful."}]"#,
    )
    .unwrap();

    let config = CinedexConfig {
        catalog: CatalogConfig {
            data_file: Some(movies_path),
            reviews_file: Some(reviews_path),
        },
        ..CinedexConfig::default()
    };
    let cli = CliContext::new(&config);
    assert_eq!(cli.engine().get_all().len(), 1);

    let output = cli
        .execute(&Commands::Show {
            id: 42,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["reviews"][0]["reviewer"], "Ana");
}

#[test]
fn context_with_broken_data_serves_empty_results() {
    let temp_dir = TempDir::new().unwrap();
    let movies_path = temp_dir.path().join("movies.json");
    fs::write(&movies_path, "not json at all").unwrap();

    let config = CinedexConfig {
        catalog: CatalogConfig {
            data_file: Some(movies_path),
            reviews_file: None,
        },
        ..CinedexConfig::default()
    };
    let cli = CliContext::new(&config);
    let output = cli
        .execute(&search(Some("anything"), None, None, "json"))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["totalResults"], 0);
}
