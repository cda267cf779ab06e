//! Data binding between fetch state and what the screens draw.
//!
//! Nothing here touches the terminal; the renderer only consumes
//! [`ListView`] and [`DetailView`].

use crate::config::ListLayout;
use crate::fetch::{DetailState, FetchState, ListState};
use crate::tmdb::{image_url, Movie};
use crate::ui::nav::Route;

/// Shown next to the cards when fewer than a screen's minimum arrived.
pub const NOT_ENOUGH_MOVIES: &str = "not enough movies to display";

/// Constants that differ between the grid and column list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenProfile {
    pub columns: usize,
    /// Cards shown at most; the rest of the page is dropped.
    pub display_bound: usize,
    /// Fewer cards than this adds [`NOT_ENOUGH_MOVIES`].
    pub min_items: usize,
}

impl ScreenProfile {
    pub fn grid() -> Self {
        Self {
            columns: 3,
            display_bound: 20,
            min_items: 1,
        }
    }

    pub fn column() -> Self {
        Self {
            columns: 1,
            display_bound: 10,
            min_items: 10,
        }
    }

    pub fn for_layout(layout: ListLayout) -> Self {
        match layout {
            ListLayout::Grid => Self::grid(),
            ListLayout::Column => Self::column(),
        }
    }
}

/// Summary row / card for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub release_date: String,
    pub vote_average: f64,
    pub poster_url: String,
}

impl MovieCard {
    fn from_movie(movie: &Movie, image_base_url: &str) -> Self {
        Self {
            id: movie.route_id(),
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
            poster_url: image_url(image_base_url, movie.poster_path.as_deref()),
        }
    }

    /// Where selecting this card leads.
    pub fn route(&self) -> Route {
        Route::Details(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Busy,
    Failed(String),
    Cards {
        cards: Vec<MovieCard>,
        notice: Option<&'static str>,
    },
}

impl ListView {
    pub fn cards(&self) -> &[MovieCard] {
        match self {
            ListView::Cards { cards, .. } => cards,
            _ => &[],
        }
    }
}

/// Every field of a single movie, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub poster_url: String,
    pub backdrop_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Busy,
    Failed(String),
    Movie(MovieDetail),
}

pub fn present_list(state: &ListState, profile: &ScreenProfile, image_base_url: &str) -> ListView {
    match state {
        FetchState::Loading => ListView::Busy,
        FetchState::Error(message) => ListView::Failed(message.clone()),
        FetchState::Loaded(movies) => {
            let cards: Vec<MovieCard> = movies
                .iter()
                .take(profile.display_bound)
                .map(|movie| MovieCard::from_movie(movie, image_base_url))
                .collect();
            let notice = (cards.len() < profile.min_items).then_some(NOT_ENOUGH_MOVIES);
            ListView::Cards { cards, notice }
        }
    }
}

pub fn present_detail(state: &DetailState, image_base_url: &str) -> DetailView {
    match state {
        FetchState::Loading => DetailView::Busy,
        FetchState::Error(message) => DetailView::Failed(message.clone()),
        FetchState::Loaded(movie) => DetailView::Movie(MovieDetail {
            id: movie.route_id(),
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.clone(),
            popularity: movie.popularity,
            vote_average: movie.vote_average,
            poster_url: image_url(image_base_url, movie.poster_path.as_deref()),
            backdrop_url: image_url(image_base_url, movie.backdrop_path.as_deref()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN: &str = "https://image.tmdb.org/t/p/w500";

    fn movies(n: u64) -> Vec<Movie> {
        (1..=n)
            .map(|id| Movie {
                id,
                title: format!("Movie {id}"),
                overview: String::new(),
                release_date: "2024-01-01".to_string(),
                poster_path: Some(format!("/p{id}.jpg")),
                backdrop_path: None,
                vote_average: 6.0,
                popularity: 10.0,
            })
            .collect()
    }

    #[test]
    fn loading_and_error_are_exclusive_branches() {
        let profile = ScreenProfile::grid();
        assert_eq!(present_list(&FetchState::Loading, &profile, CDN), ListView::Busy);
        assert_eq!(
            present_list(&FetchState::Error("down".to_string()), &profile, CDN),
            ListView::Failed("down".to_string())
        );
    }

    #[test]
    fn grid_truncates_to_twenty_in_order() {
        let view = present_list(&FetchState::Loaded(movies(25)), &ScreenProfile::grid(), CDN);
        let ids: Vec<&str> = view.cards().iter().map(|c| c.id.as_str()).collect();
        let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn column_caps_at_ten() {
        let view = present_list(&FetchState::Loaded(movies(20)), &ScreenProfile::column(), CDN);
        assert_eq!(view.cards().len(), 10);
        assert!(matches!(view, ListView::Cards { notice: None, .. }));
    }

    #[test]
    fn card_links_to_detail_route() {
        let view = present_list(&FetchState::Loaded(movies(1)), &ScreenProfile::grid(), CDN);
        assert_eq!(view.cards()[0].route(), Route::Details("1".to_string()));
        assert_eq!(view.cards()[0].poster_url, format!("{CDN}/p1.jpg"));
    }

    #[test]
    fn detail_exposes_all_fields() {
        let mut movie = movies(1).remove(0);
        movie.backdrop_path = Some("/b.jpg".to_string());
        let view = present_detail(&FetchState::Loaded(movie), CDN);
        let DetailView::Movie(detail) = view else {
            panic!("expected movie detail");
        };
        assert_eq!(detail.title, "Movie 1");
        assert_eq!(detail.backdrop_url, format!("{CDN}/b.jpg"));
        assert_eq!(detail.release_date, "2024-01-01");
    }
}
