use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Movie row in the `movies` table.
///
/// `genres` is stored as a native `text[]` column; order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub created_at: OffsetDateTime,
    pub title: String,
    pub year: i32,
    pub runtime: i32, // minutes
    pub genres: Vec<String>,
    pub version: i32,
}

impl Movie {
    /// Build a movie ready for insertion. Identity fields (`id`,
    /// `created_at`, `version`) are assigned by the database on insert.
    pub fn new(title: &str, year: i32, runtime: i32, genres: Vec<String>) -> Self {
        Self {
            id: 0,
            created_at: OffsetDateTime::now_utc(),
            title: title.to_string(),
            year,
            runtime,
            genres,
            version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movie_defaults() {
        let movie = Movie::new("Test Movie 1", 2021, 120, vec!["Action".into()]);
        assert_eq!(movie.id, 0);
        assert_eq!(movie.version, 0);
        assert_eq!(movie.runtime, 120);
    }

    #[test]
    fn genres_serialize_in_order() {
        let movie = Movie::new(
            "Test Movie 1",
            2021,
            120,
            vec!["Action".into(), "Adventure".into()],
        );
        let json = serde_json::to_string(&movie).expect("serialize movie");
        assert!(json.contains(r#""genres":["Action","Adventure"]"#));
    }
}
