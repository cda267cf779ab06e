use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::Config;
use crate::fetch::{DetailCoordinator, DetailState, ListCoordinator, ListState, SettledHook};
use crate::tmdb::MovieSource;
use crate::ui::grid::{Direction, GridIntent, GridReducer, GridState};
use crate::ui::menu::{MenuEntry, MenuIntent, MenuReducer, MenuState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Route};
use crate::ui::presenter::{present_detail, present_list, DetailView, ListView, ScreenProfile};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App<S: MovieSource> {
    should_quit: bool,
    ticks: u64,
    nav: NavState,
    menu: MenuState,
    grid: GridState,
    profile: ScreenProfile,
    image_base_url: String,
    api_key_env: String,
    list: ListCoordinator<S>,
    detail: DetailCoordinator<S>,
}

impl<S: MovieSource> App<S> {
    pub fn new(
        config: &Config,
        source: Arc<S>,
        api_key: &str,
        runtime: Handle,
        on_settled: Option<SettledHook>,
    ) -> Self {
        let api_key: Arc<str> = Arc::from(api_key);
        let mut list =
            ListCoordinator::new(Arc::clone(&source), Arc::clone(&api_key), runtime.clone());
        let mut detail = DetailCoordinator::new(source, api_key, runtime);
        if let Some(hook) = on_settled {
            list = list.with_settled_hook(Arc::clone(&hook));
            detail = detail.with_settled_hook(hook);
        }

        Self {
            should_quit: false,
            ticks: 0,
            nav: NavState::default(),
            menu: MenuState::default(),
            grid: GridState::default(),
            profile: ScreenProfile::for_layout(config.ui.layout),
            image_base_url: config.api.image_base_url.clone(),
            api_key_env: config.api.api_key_env.clone(),
            list,
            detail,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn profile(&self) -> &ScreenProfile {
        &self.profile
    }

    /// Environment variable consulted for the API key.
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    pub fn list_view(&self) -> ListView {
        present_list(&self.list.state(), &self.profile, &self.image_base_url)
    }

    pub fn detail_view(&self) -> DetailView {
        present_detail(&self.detail.state(), &self.image_base_url)
    }

    pub fn list_updates(&self) -> watch::Receiver<ListState> {
        self.list.subscribe()
    }

    pub fn detail_updates(&self) -> watch::Receiver<DetailState> {
        self.detail.subscribe()
    }

    /// Navigate to `route`, mounting its screen.
    pub fn navigate(&mut self, route: Route) {
        let previous = self.nav.current().clone();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Navigate(route));
        self.sync_screens(previous);
    }

    /// Go back one screen. Returns `false` at the root.
    pub fn navigate_up(&mut self) -> bool {
        if self.nav.is_root() {
            return false;
        }
        let previous = self.nav.current().clone();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::NavigateUp);
        self.sync_screens(previous);
        true
    }

    pub fn move_focus(&mut self, direction: Direction) {
        match self.nav.current() {
            Route::Menu => match direction {
                Direction::Up | Direction::Left => {
                    dispatch_mvi!(self, menu, MenuReducer, MenuIntent::MoveUp);
                }
                Direction::Down | Direction::Right => {
                    dispatch_mvi!(self, menu, MenuReducer, MenuIntent::MoveDown);
                }
            },
            Route::Movies => {
                let intent = GridIntent::Move {
                    direction,
                    len: self.list_view().cards().len(),
                    columns: self.profile.columns,
                };
                dispatch_mvi!(self, grid, GridReducer, intent);
            }
            Route::Details(_) | Route::About => {}
        }
    }

    /// Focus a menu entry by position.
    pub fn focus_menu_entry(&mut self, index: usize) {
        if self.nav.current() == &Route::Menu {
            dispatch_mvi!(self, menu, MenuReducer, MenuIntent::Focus(index));
        }
    }

    /// Enter / OK on the focused element.
    pub fn activate(&mut self) {
        match self.nav.current() {
            Route::Menu => match self.menu.focused_entry() {
                MenuEntry::Movies => self.navigate(Route::Movies),
                MenuEntry::About => self.navigate(Route::About),
                MenuEntry::Exit => self.request_quit(),
            },
            Route::Movies => {
                let target = self
                    .list_view()
                    .cards()
                    .get(self.grid.focused)
                    .map(|card| card.route());
                if let Some(route) = target {
                    self.navigate(route);
                }
            }
            Route::Details(_) | Route::About => {}
        }
    }

    /// Leaving a screen drops its fetch; entering one starts a new fetch.
    fn sync_screens(&mut self, previous: Route) {
        let current = self.nav.current().clone();
        if previous == current {
            return;
        }
        tracing::info!(from = %previous, to = %current, "Navigate");

        match previous {
            Route::Movies => self.list.unmount(),
            Route::Details(_) => self.detail.unmount(),
            Route::Menu | Route::About => {}
        }

        match current {
            Route::Movies => {
                dispatch_mvi!(self, grid, GridReducer, GridIntent::Reset);
                self.list.mount(());
            }
            Route::Details(id) => {
                self.detail.mount(id);
            }
            Route::Menu | Route::About => {}
        }
    }
}
