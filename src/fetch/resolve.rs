//! Turning a fetched page into what a particular screen shows.

use std::fmt;

use thiserror::Error;

use crate::tmdb::{FetchError, Movie, MoviePage};

/// Why a screen could not load its data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page arrived but holds no movie with the requested id.
    #[error("movie not found")]
    MovieNotFound { id: String },
}

/// Maps a page to a screen's data, keyed by the screen's mount key.
pub trait Resolve: Send + Sync + 'static {
    type Key: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;
    type Output: Clone + PartialEq + Send + Sync + 'static;

    fn resolve(key: &Self::Key, page: MoviePage) -> Result<Self::Output, LoadError>;
}

/// The list screen: every result, in server order.
pub struct PopularList;

impl Resolve for PopularList {
    type Key = ();
    type Output = Vec<Movie>;

    fn resolve(_key: &(), page: MoviePage) -> Result<Vec<Movie>, LoadError> {
        Ok(page.results)
    }
}

/// The detail screen: the movie whose id stringifies to the key.
pub struct MovieById;

impl Resolve for MovieById {
    type Key = String;
    type Output = Movie;

    fn resolve(key: &String, page: MoviePage) -> Result<Movie, LoadError> {
        page.results
            .into_iter()
            .find(|movie| movie.route_id() == *key)
            .ok_or_else(|| LoadError::MovieNotFound { id: key.clone() })
    }
}
