//! Non-interactive rendering of the list and detail screens.
//!
//! Runs the same coordinator and presenter as the TUI, then prints text.

use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::Config;
use crate::fetch::{DetailCoordinator, FetchState, ListCoordinator};
use crate::tmdb::MovieSource;
use crate::ui::presenter::{
    present_detail, present_list, DetailView, ListView, MovieCard, MovieDetail, ScreenProfile,
};

#[derive(Debug, Error)]
pub enum ReportError {
    /// The screen settled into its error state.
    #[error("{0}")]
    Load(String),

    #[error("Fetch task ended before the screen settled")]
    Abandoned,
}

/// Text form of the list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListReport {
    pub cards: Vec<MovieCard>,
    pub notice: Option<&'static str>,
}

impl ListReport {
    /// One `id<TAB>title<TAB>release_date<TAB>poster_url` line per card.
    pub fn lines(&self) -> Vec<String> {
        self.cards
            .iter()
            .map(|card| {
                format!(
                    "{}\t{}\t{}\t{}",
                    card.id, card.title, card.release_date, card.poster_url
                )
            })
            .collect()
    }
}

pub async fn list_report<S: MovieSource>(
    config: &Config,
    source: Arc<S>,
    api_key: &str,
    limit: Option<usize>,
) -> Result<ListReport, ReportError> {
    let mut coordinator = ListCoordinator::new(source, api_key, Handle::current());
    coordinator.mount(());
    let state = settled(coordinator.subscribe()).await?;

    let mut profile = ScreenProfile::for_layout(config.ui.layout);
    if let Some(limit) = limit {
        profile.display_bound = profile.display_bound.min(limit);
        profile.min_items = profile.min_items.min(profile.display_bound);
    }

    match present_list(&state, &profile, &config.api.image_base_url) {
        ListView::Cards { cards, notice } => Ok(ListReport { cards, notice }),
        ListView::Failed(message) => Err(ReportError::Load(message)),
        ListView::Busy => Err(ReportError::Abandoned),
    }
}

pub async fn detail_report<S: MovieSource>(
    config: &Config,
    source: Arc<S>,
    api_key: &str,
    movie_id: &str,
) -> Result<MovieDetail, ReportError> {
    let mut coordinator = DetailCoordinator::new(source, api_key, Handle::current());
    coordinator.mount(movie_id.to_string());
    let state = settled(coordinator.subscribe()).await?;

    match present_detail(&state, &config.api.image_base_url) {
        DetailView::Movie(detail) => Ok(detail),
        DetailView::Failed(message) => Err(ReportError::Load(message)),
        DetailView::Busy => Err(ReportError::Abandoned),
    }
}

pub fn detail_lines(detail: &MovieDetail) -> Vec<String> {
    vec![
        format!("Id:           {}", detail.id),
        format!("Title:        {}", detail.title),
        format!("Overview:     {}", detail.overview),
        format!("Rating:       {:.1}/10", detail.vote_average),
        format!("Popularity:   {}", detail.popularity),
        format!("Release date: {}", detail.release_date),
        format!("Poster:       {}", detail.poster_url),
        format!("Backdrop:     {}", detail.backdrop_url),
    ]
}

async fn settled<T: Clone>(
    mut updates: watch::Receiver<FetchState<T>>,
) -> Result<FetchState<T>, ReportError> {
    let state = updates
        .wait_for(FetchState::is_settled)
        .await
        .map(|state| state.clone())
        .map_err(|_| ReportError::Abandoned);
    state
}
