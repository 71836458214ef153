//! Format movies, reviews and genres as text.

use crate::catalog::Movie;
use crate::review::Review;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a list of movies as a table.
pub fn format_movie_table(movies: &[&Movie]) -> String {
    if movies.is_empty() {
        return "No movies.\n".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "ID", "Title", "Year", "Director", "Genre", "Duration", "Rating",
    ]);
    for movie in movies {
        table.add_row(vec![
            movie.id.to_string(),
            movie.name.clone(),
            movie.year.to_string(),
            movie.director.clone(),
            movie.genre.clone(),
            format!("{} min", movie.duration),
            format!("{:.1}", movie.rating),
        ]);
    }
    format!("{}\n", table)
}

/// Format one movie and its reviews.
pub fn format_movie_detail(movie: &Movie, reviews: &[Review]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&movie.name)));
    out.push_str(&format!("  ID: {}\n", movie.id));
    out.push_str(&format!("  Director: {}\n", movie.director));
    out.push_str(&format!("  Year: {}\n", movie.year));
    out.push_str(&format!("  Genre: {}\n", movie.genre));
    out.push_str(&format!("  Duration: {} min\n", movie.duration));
    out.push_str(&format!("  Rating: {:.1}\n\n", movie.rating));
    out.push_str(&format!("  {}\n\n", movie.description));

    out.push_str(&format!("{}\n\n", format_section_heading("Reviews")));
    if reviews.is_empty() {
        out.push_str("No reviews yet.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Reviewer", "Rating", "Comment"]);
    for review in reviews {
        table.add_row(vec![
            review.reviewer.clone(),
            format!("{:.1}", review.rating),
            review.comment.clone(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format genres one per line.
pub fn format_genre_list(genres: &[String]) -> String {
    if genres.is_empty() {
        return "No genres.\n".to_string();
    }
    let mut out = String::new();
    for genre in genres {
        out.push_str(&format!("  {}\n", genre));
    }
    out.push_str(&format!("\nTotal: {} genre(s)\n", genres.len()));
    out
}
