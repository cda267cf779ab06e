//! Wire types for the `/movie/popular` endpoint.

use serde::{Deserialize, Serialize};

/// One page of popular movies as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// A movie summary. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Free-form date text, not validated.
    #[serde(default)]
    pub release_date: String,
    /// Relative path fragment such as `/abc123.jpg`.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
}

impl Movie {
    /// The identifier as it appears in `details/{id}` routes.
    pub fn route_id(&self) -> String {
        self.id.to_string()
    }
}
