//! CLI Tooling
//!
//! Command-line front end over the query engine. It owns request validation
//! and rendering; the engine itself never rejects a query.

use crate::catalog::{Catalog, Movie};
use crate::config::{CinedexConfig, ConfigLoader};
use crate::error::ApiError;
use crate::query::{QueryEngine, SearchQuery};
use crate::review::{InMemoryReviews, ReviewLookup};
use crate::tooling::format::{
    format_genre_list, format_movie_detail, format_movie_table, format_section_heading,
};
use crate::types::{is_valid_id, MovieId};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Cinedex CLI - browse a read-only movie catalog
#[derive(Parser, Debug)]
#[command(name = "cinedex")]
#[command(about = "Browse a read-only movie catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for cinedex.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Movie JSON file (overrides the bundled catalog)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Review JSON file (overrides the bundled reviews)
    #[arg(long)]
    pub reviews: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every movie and the available genres
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Search movies by name, id and genre (at least one is required)
    Search {
        /// Case-insensitive part of the movie name
        #[arg(long)]
        name: Option<String>,
        /// Exact movie id
        #[arg(long, allow_negative_numbers = true)]
        id: Option<MovieId>,
        /// Case-insensitive part of the genre
        #[arg(long)]
        genre: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one movie with its reviews
    Show {
        /// Movie id
        #[arg(allow_negative_numbers = true)]
        id: MovieId,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List distinct genres
    Genres {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    /// Load configuration and fold the command-line overrides into it.
    pub fn load_config(&self) -> Result<CinedexConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&self.workspace)?,
        };
        if let Some(data) = &self.data {
            config.catalog.data_file = Some(data.clone());
        }
        if let Some(reviews) = &self.reviews {
            config.catalog.reviews_file = Some(reviews.clone());
        }
        config.logging = config.logging.with_overrides(
            self.log_level.clone(),
            self.log_format.clone(),
            self.log_output.clone(),
            self.log_file.clone(),
        );
        Ok(config)
    }
}

/// Loaded catalog and review lookup shared by every command.
pub struct CliContext {
    engine: QueryEngine,
    reviews: Arc<dyn ReviewLookup>,
}

impl CliContext {
    /// Load the catalog and reviews named by `config`.
    pub fn new(config: &CinedexConfig) -> Self {
        let catalog = Catalog::load(&config.catalog.movies_source());
        if catalog.is_empty() {
            warn!("Catalog is empty; every query will return no movies");
        }
        let reviews = InMemoryReviews::load(&config.catalog.reviews_source());
        Self::from_parts(QueryEngine::new(catalog), Arc::new(reviews))
    }

    pub fn from_parts(engine: QueryEngine, reviews: Arc<dyn ReviewLookup>) -> Self {
        Self { engine, reviews }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Execute a CLI command and return its rendered output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { format } => self.list(format),
            Commands::Search {
                name,
                id,
                genre,
                format,
            } => {
                let query = SearchQuery {
                    name: name.clone(),
                    id: *id,
                    genre: genre.clone(),
                };
                self.search(&query, format)
            }
            Commands::Show { id, format } => self.show(*id, format),
            Commands::Genres { format } => self.genres(format),
        }
    }

    fn list(&self, format: &str) -> Result<String, ApiError> {
        let movies: Vec<&Movie> = self.engine.get_all().iter().collect();
        let genres = self.engine.list_genres();
        if is_json(format)? {
            let out = json!({
                "movies": movies,
                "totalResults": movies.len(),
                "availableGenres": genres,
            });
            return Ok(to_pretty_json(&out));
        }
        let mut out = format!("{}\n\n", format_section_heading("Movies"));
        out.push_str(&format_movie_table(&movies));
        out.push_str(&format!("\nTotal: {} movie(s)\n", movies.len()));
        out.push_str(&format!("Genres: {}\n", genres.join(", ")));
        Ok(out)
    }

    fn search(&self, query: &SearchQuery, format: &str) -> Result<String, ApiError> {
        let json_output = is_json(format)?;
        validate_search(query)?;

        let results = self.engine.search(query);
        info!(matches = results.len(), "Search request served");
        let message = search_message(results.len());

        if json_output {
            let out = json!({
                "success": true,
                "message": message,
                "movies": results,
                "totalResults": results.len(),
                "searchParameters": {
                    "name": query.name,
                    "id": query.id,
                    "genre": query.genre,
                },
            });
            return Ok(to_pretty_json(&out));
        }
        if results.is_empty() {
            return Ok(format!("{}\n", message));
        }
        let mut out = format!("{}\n\n", message);
        out.push_str(&format_movie_table(&results));
        Ok(out)
    }

    fn show(&self, id: MovieId, format: &str) -> Result<String, ApiError> {
        let json_output = is_json(format)?;
        let movie = self.engine.get_by_id(Some(id)).ok_or_else(|| {
            warn!(id, "Movie not found");
            ApiError::MovieNotFound(id)
        })?;
        let reviews = self.reviews.reviews_for_movie(movie.id);
        if json_output {
            let out = json!({ "movie": movie, "reviews": reviews });
            return Ok(to_pretty_json(&out));
        }
        Ok(format_movie_detail(movie, &reviews))
    }

    fn genres(&self, format: &str) -> Result<String, ApiError> {
        let genres = self.engine.list_genres();
        if is_json(format)? {
            let out = json!({ "genres": genres, "total": genres.len() });
            return Ok(to_pretty_json(&out));
        }
        let mut out = format!("{}\n\n", format_section_heading("Genres"));
        out.push_str(&format_genre_list(&genres));
        Ok(out)
    }
}

/// Reject requests the engine would accept but a user almost certainly did
/// not mean: nothing to search for, or an id that cannot exist.
fn validate_search(query: &SearchQuery) -> Result<(), ApiError> {
    if query.is_unconstrained() {
        return Err(ApiError::InvalidRequest(
            "Provide at least one search parameter (name, id, or genre)".to_string(),
        ));
    }
    if let Some(id) = query.id {
        if !is_valid_id(id) {
            return Err(ApiError::InvalidRequest(
                "Movie ID must be a positive number".to_string(),
            ));
        }
    }
    Ok(())
}

fn search_message(count: usize) -> String {
    match count {
        0 => "No movies found matching the search criteria.".to_string(),
        1 => "Found 1 movie.".to_string(),
        n => format!("Found {} movies.", n),
    }
}

fn is_json(format: &str) -> Result<bool, ApiError> {
    match format {
        "json" => Ok(true),
        "text" => Ok(false),
        other => Err(ApiError::InvalidRequest(format!(
            "Unsupported format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
