use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::fetch::resolve::{LoadError, Resolve};
use crate::fetch::state::FetchState;
use crate::tmdb::MovieSource;

/// Callback fired after a fetch for the current mount has been published.
pub type SettledHook = Arc<dyn Fn() + Send + Sync>;

struct Shared<T> {
    /// Incremented on every mount and unmount. A completion only lands if
    /// it still carries the current value.
    generation: AtomicU64,
    state: watch::Sender<FetchState<T>>,
}

impl<T> Shared<T> {
    /// Publishes `next` if `generation` is still current.
    ///
    /// The generation check runs under the watch channel's write lock, so a
    /// concurrent mount either lands first (and this is discarded) or
    /// overwrites the result with `Loading` afterwards.
    fn publish(&self, generation: u64, next: FetchState<T>) -> bool {
        self.state.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = next;
            true
        })
    }
}

/// Runs one fetch per mount key and owns the resulting [`FetchState`].
///
/// Each screen owns its own coordinator. Mounting the key that is already
/// mounted is a no-op; mounting a different key, or mounting again after
/// [`unmount`](Self::unmount), starts a fresh fetch and makes any in-flight
/// completion stale.
pub struct FetchCoordinator<S, R: Resolve> {
    source: Arc<S>,
    api_key: Arc<str>,
    runtime: Handle,
    shared: Arc<Shared<R::Output>>,
    mounted: Option<R::Key>,
    on_settled: Option<SettledHook>,
    _resolver: PhantomData<fn() -> R>,
}

impl<S: MovieSource, R: Resolve> FetchCoordinator<S, R> {
    pub fn new(source: Arc<S>, api_key: impl Into<Arc<str>>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(FetchState::Loading);
        Self {
            source,
            api_key: api_key.into(),
            runtime,
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                state,
            }),
            mounted: None,
            on_settled: None,
            _resolver: PhantomData,
        }
    }

    pub fn with_settled_hook(mut self, hook: SettledHook) -> Self {
        self.on_settled = Some(hook);
        self
    }

    /// Mounts `key`, issuing a fetch unless `key` is already mounted.
    ///
    /// Returns `true` when a fetch was issued.
    pub fn mount(&mut self, key: R::Key) -> bool {
        if self.mounted.as_ref() == Some(&key) {
            return false;
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.state.send_replace(FetchState::Loading);
        self.mounted = Some(key.clone());
        tracing::debug!(?key, generation, "Mounting fetch");

        let source = Arc::clone(&self.source);
        let api_key = Arc::clone(&self.api_key);
        let shared = Arc::clone(&self.shared);
        let on_settled = self.on_settled.clone();

        self.runtime.spawn(async move {
            let outcome = source
                .popular_movies(&api_key)
                .await
                .map_err(LoadError::from)
                .and_then(|page| R::resolve(&key, page));

            let next = match outcome {
                Ok(value) => FetchState::Loaded(value),
                Err(err) => {
                    tracing::warn!(?key, error = %err, "Screen load failed");
                    FetchState::Error(err.to_string())
                }
            };

            if shared.publish(generation, next) {
                if let Some(hook) = on_settled {
                    hook();
                }
            } else {
                tracing::debug!(?key, generation, "Discarding stale completion");
            }
        });

        true
    }

    /// Forgets the mounted key. Whatever is still in flight will be dropped
    /// on arrival and the next [`mount`](Self::mount) re-fetches.
    pub fn unmount(&mut self) {
        if let Some(key) = self.mounted.take() {
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(?key, "Unmounted fetch");
        }
    }

    pub fn mounted_key(&self) -> Option<&R::Key> {
        self.mounted.as_ref()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<R::Output> {
        self.shared.state.borrow().clone()
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<R::Output>> {
        self.shared.state.subscribe()
    }
}
