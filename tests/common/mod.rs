//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_tmdb;

use marquee::config::{Config, ListLayout};
use marquee::tmdb::{FetchError, Movie, MoviePage, MovieSource};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("About {title}"),
        release_date: "2024-05-01".to_string(),
        poster_path: Some(format!("/poster{id}.jpg")),
        backdrop_path: Some(format!("/backdrop{id}.jpg")),
        vote_average: 7.5,
        popularity: 100.0,
    }
}

pub fn page(movies: Vec<Movie>) -> MoviePage {
    MoviePage {
        page: 1,
        total_pages: 1,
        total_results: movies.len() as u32,
        results: movies,
    }
}

/// `count` movies with ids `1..=count`.
pub fn numbered_page(count: u64) -> MoviePage {
    page((1..=count).map(|id| movie(id, &format!("Movie {id}"))).collect())
}

pub fn test_config(layout: ListLayout) -> Config {
    let mut config = Config::default();
    config.ui.layout = layout;
    config
}

// -- Movie sources ------------------------------------------------------------

/// What a [`FakeSource`] call resolves to.
#[derive(Debug, Clone)]
pub enum Canned {
    Page(MoviePage),
    Server(u16),
}

impl Canned {
    fn into_result(self) -> Result<MoviePage, FetchError> {
        match self {
            Canned::Page(page) => Ok(page),
            Canned::Server(status) => Err(FetchError::Server {
                status,
                message: "Internal Server Error".to_string(),
            }),
        }
    }
}

/// In-memory source. Each call takes the next queued gate if one exists
/// and waits until the test releases it; otherwise it answers with the
/// fallback right away.
pub struct FakeSource {
    fallback: Canned,
    gates: Mutex<VecDeque<oneshot::Receiver<Canned>>>,
    calls: AtomicUsize,
    keys: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new(fallback: Canned) -> Arc<Self> {
        Arc::new(Self {
            fallback,
            gates: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            keys: Mutex::new(Vec::new()),
        })
    }

    pub fn serving(page: MoviePage) -> Arc<Self> {
        Self::new(Canned::Page(page))
    }

    /// Queue a gate for the next call; send on the returned handle to
    /// complete that call.
    pub fn gate(&self) -> oneshot::Sender<Canned> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().clone()
    }

    /// Poll until at least `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while self.calls() < n {
            assert!(
                tokio::time::Instant::now() < deadline,
                "expected {n} calls, saw {}",
                self.calls()
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

impl MovieSource for FakeSource {
    fn popular_movies(
        &self,
        api_key: &str,
    ) -> impl Future<Output = Result<MoviePage, FetchError>> + Send {
        self.keys.lock().push(api_key.to_string());
        let gate = self.gates.lock().pop_front();
        let fallback = self.fallback.clone();
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            let canned = match gate {
                Some(rx) => rx.await.unwrap_or(Canned::Server(503)),
                None => fallback,
            };
            canned.into_result()
        }
    }
}

/// Wait until the watched state settles, or panic after two seconds.
pub async fn settled<T: Clone>(
    mut rx: watch::Receiver<marquee::fetch::FetchState<T>>,
) -> marquee::fetch::FetchState<T> {
    let state = tokio::time::timeout(Duration::from_secs(2), rx.wait_for(|s| s.is_settled()))
        .await
        .expect("state did not settle in time")
        .expect("state channel closed")
        .clone();
    state
}
