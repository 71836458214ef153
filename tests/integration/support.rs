use cinedex::catalog::Movie;
use cinedex::types::MovieId;

pub fn movie(id: MovieId, name: &str, genre: &str) -> Movie {
    Movie {
        id,
        name: name.to_string(),
        director: "Test Director".to_string(),
        year: 2000,
        genre: genre.to_string(),
        description: format!("Synopsis of {}", name),
        duration: 100,
        rating: 3.5,
    }
}

pub fn movies_json(movies: &[Movie]) -> String {
    serde_json::to_string(movies).unwrap()
}
