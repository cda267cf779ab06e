//! Client for The Movie Database popular-movies endpoint.
//!
//! ```text
//! GET {base_url}/movie/popular?api_key={key}  →  MoviePage | FetchError
//! ```
//!
//! Image references are built by plain concatenation of the CDN base and a
//! movie's poster path, see [`image_url`].

mod client;
mod error;
mod types;

pub use client::{MovieSource, RetryPolicy, TmdbClient};
pub use error::FetchError;
pub use types::{Movie, MoviePage};

/// Joins the image CDN base with a relative path. An absent path yields the
/// bare base, which the renderer treats as "no image".
pub fn image_url(image_base_url: &str, path: Option<&str>) -> String {
    format!("{}{}", image_base_url, path.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::image_url;

    #[test]
    fn poster_url_is_plain_concatenation() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500", Some("/abc123.jpg")),
            "https://image.tmdb.org/t/p/w500/abc123.jpg"
        );
    }

    #[test]
    fn missing_poster_yields_base_only() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500", None),
            "https://image.tmdb.org/t/p/w500"
        );
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500", Some("")),
            "https://image.tmdb.org/t/p/w500"
        );
    }
}
