use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use marquee_core::CatalogService;
use marquee_model::{GenreCatalog, GenreId, Movie, MovieId};
use tracing::{debug, info, warn};

use super::messages::HomeMessage;
use super::view::{HomeMode, HomeView, ShelfView};
use crate::common::{RequestSlot, TaskHandle, ViewScope};
use crate::domains::filter::{
    GenreFilter, GenrePicker, SelectedGenres, SelectionObserver,
};
use crate::domains::library::{Shelf, ShelfKey, ShelfSet};
use crate::domains::search::{SearchDebouncer, SearchState};
use crate::domains::ui::ScrollDirection;
use crate::settings::BrowseSettings;

/// State and behaviour of the home view.
///
/// All catalog work runs on the controller's [`ViewScope`]. Completions come
/// back as [`HomeMessage`]s and are applied by [`update`](Self::update); a
/// completion whose slot has been superseded since it was issued is dropped.
/// After [`shutdown`](Self::shutdown) nothing is applied any more.
pub struct HomeController {
    catalog: Arc<dyn CatalogService>,
    settings: BrowseSettings,
    scope: ViewScope<HomeMessage>,

    genres: GenreCatalog,
    genres_slot: RequestSlot,
    shelves: ShelfSet,

    search: SearchState,
    debouncer: SearchDebouncer,
    search_task: Option<TaskHandle>,

    picker: GenrePicker,
    filter: GenreFilter,
}

impl fmt::Debug for HomeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HomeController")
            .field("settings", &self.settings)
            .field("genres", &self.genres.len())
            .field("shelves", &self.shelves)
            .field("search", &self.search)
            .field("picker", &self.picker)
            .finish_non_exhaustive()
    }
}

impl HomeController {
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        settings: BrowseSettings,
    ) -> Self {
        Self {
            catalog,
            debouncer: SearchDebouncer::new(settings.search_debounce),
            shelves: ShelfSet::new(settings.scroll_step),
            settings,
            scope: ViewScope::new(),
            genres: GenreCatalog::default(),
            genres_slot: RequestSlot::new(),
            search: SearchState::default(),
            search_task: None,
            picker: GenrePicker::default(),
            filter: GenreFilter::default(),
        }
    }

    /// Routes every selection change to `observer` as well.
    pub fn with_selection_observer(
        mut self,
        observer: Box<dyn SelectionObserver>,
    ) -> Self {
        self.picker.set_observer(observer);
        self
    }

    /// Initial loads: the genre reference set and the popular shelf.
    /// Recommendations follow once popular titles arrive.
    pub fn start(&mut self) {
        self.load_genres();
        self.load_shelf(ShelfKey::Popular);
    }

    pub fn load_genres(&mut self) {
        if !self.scope.is_active() {
            return;
        }
        let generation = self.genres_slot.begin();
        let catalog = Arc::clone(&self.catalog);
        self.scope.perform(
            async move { catalog.genres().await },
            move |result| HomeMessage::GenresLoaded { generation, result },
        );
    }

    /// Loads page one of a listing shelf. The recommended shelf depends on
    /// a seed title and is loaded through
    /// [`load_recommendations`](Self::load_recommendations) instead.
    pub fn load_shelf(&mut self, key: ShelfKey) {
        if !self.scope.is_active() {
            return;
        }
        let catalog = Arc::clone(&self.catalog);
        match key {
            ShelfKey::Popular => {
                let generation = self.begin_shelf(key);
                self.scope.perform(
                    async move { catalog.popular_movies(1).await },
                    move |result| HomeMessage::ShelfLoaded {
                        key,
                        generation,
                        result,
                    },
                );
            }
            ShelfKey::TopRated => {
                let generation = self.begin_shelf(key);
                self.scope.perform(
                    async move { catalog.top_rated_movies(1).await },
                    move |result| HomeMessage::ShelfLoaded {
                        key,
                        generation,
                        result,
                    },
                );
            }
            ShelfKey::Recommended => {
                let seed = self
                    .shelves
                    .movies(ShelfKey::Popular)
                    .first()
                    .map(|movie| movie.id);
                match seed {
                    Some(seed) => self.load_recommendations(seed),
                    None => debug!("no popular title to seed recommendations"),
                }
            }
        }
    }

    pub fn load_recommendations(&mut self, seed: MovieId) {
        if !self.scope.is_active() {
            return;
        }
        let key = ShelfKey::Recommended;
        let generation = self.begin_shelf(key);
        let catalog = Arc::clone(&self.catalog);
        debug!(seed = %seed, "loading recommendations");
        self.scope.perform(
            async move { catalog.recommendations(seed).await },
            move |result| HomeMessage::ShelfLoaded {
                key,
                generation,
                result,
            },
        );
    }

    fn begin_shelf(&mut self, key: ShelfKey) -> u64 {
        self.shelves
            .get_mut(key)
            .map(|shelf| shelf.slot.begin())
            .unwrap_or_default()
    }

    /// Feeds one edit of the search box. A blank query clears the results
    /// right away and issues no lookup.
    pub fn set_query(&mut self, text: impl Into<String>) {
        if !self.scope.is_active() {
            return;
        }
        self.search.query = text.into();
        let pushed = self.debouncer.push(
            &self.search.query,
            &self.scope,
            |generation, query| HomeMessage::SearchSettled {
                generation,
                query,
            },
        );
        match pushed {
            Ok(generation) => {
                debug!(generation, "search rescheduled");
            }
            Err(err) if err.is_empty_query() => {
                self.cancel_search_task();
                self.search.clear_results();
            }
            Err(err) => warn!(error = %err, "search could not be scheduled"),
        }
    }

    /// Closes the search overlay: query and results go together and any
    /// pending or in-flight lookup is abandoned.
    pub fn dismiss_search(&mut self) {
        self.debouncer.cancel();
        self.cancel_search_task();
        self.search.clear();
    }

    fn cancel_search_task(&mut self) {
        if let Some(task) = self.search_task.take() {
            task.cancel();
        }
    }

    pub fn toggle_genre(&mut self, id: GenreId) -> bool {
        let selected = self.picker.toggle(id);
        self.refilter();
        selected
    }

    pub fn reset_genres(&mut self) {
        self.picker.reset();
        self.refilter();
    }

    fn refilter(&mut self) {
        let pool = self.shelves.pool();
        self.filter.recompute(&pool, self.picker.selection());
    }

    /// Applies one completion from the scope.
    pub fn update(&mut self, message: HomeMessage) {
        if !self.scope.is_active() {
            return;
        }
        let name = message.name();
        match message {
            HomeMessage::GenresLoaded { generation, result } => {
                if !self.genres_slot.accept(name, generation) {
                    return;
                }
                match result {
                    Ok(genres) => {
                        debug!(count = genres.len(), "genres loaded");
                        self.genres = GenreCatalog::new(genres);
                    }
                    Err(err) => warn!(error = %err, "failed to load genres"),
                }
            }
            HomeMessage::ShelfLoaded {
                key,
                generation,
                result,
            } => self.apply_shelf(name, key, generation, result),
            HomeMessage::SearchSettled { generation, query } => {
                if !self.debouncer.settle(generation) {
                    debug!(message = name, generation, "dropping stale timer");
                    return;
                }
                self.issue_search(query);
            }
            HomeMessage::SearchResults {
                generation,
                query,
                result,
            } => {
                if !self.search.slot.accept(name, generation) {
                    return;
                }
                self.search.in_flight_query = None;
                self.search_task = None;
                match result {
                    Ok(results) => {
                        debug!(
                            query = %query,
                            count = results.len(),
                            "search results"
                        );
                        self.search.results = results;
                        self.search.last_error = None;
                    }
                    Err(err) => {
                        warn!(query = %query, error = %err, "search failed");
                        self.search.last_error = Some(err.to_string());
                    }
                }
            }
        }
    }

    fn issue_search(&mut self, query: String) {
        if self.search.is_looking_up(&query) {
            debug!(query = %query, "lookup already in flight");
            return;
        }
        let generation = self.search.begin_lookup(&query);
        let catalog = Arc::clone(&self.catalog);
        let lookup = query.clone();
        info!(query = %query, generation, "searching catalog");
        // The previous lookup, if any, keeps running; its generation is
        // stale now so its result is dropped on arrival.
        self.search_task = Some(self.scope.perform(
            async move { catalog.search_movies(&lookup, 1).await },
            move |result| HomeMessage::SearchResults {
                generation,
                query,
                result,
            },
        ));
    }

    fn apply_shelf(
        &mut self,
        name: &'static str,
        key: ShelfKey,
        generation: u64,
        result: Result<Vec<Movie>, marquee_core::CatalogError>,
    ) {
        let Some(shelf) = self.shelves.get_mut(key) else {
            return;
        };
        if !shelf.slot.accept(name, generation) {
            return;
        }
        let movies = match result {
            Ok(movies) => movies,
            Err(err) => {
                warn!(shelf = %key, error = %err, "failed to load shelf");
                return;
            }
        };
        debug!(shelf = %key, count = movies.len(), "shelf loaded");
        let seed = movies.first().map(|movie| movie.id);
        shelf.populate(movies);
        self.refilter();

        if key == ShelfKey::Popular
            && let Some(seed) = seed
        {
            self.load_recommendations(seed);
        }
    }

    /// Next completion, or `None` once the controller is shut down.
    pub async fn next_message(&mut self) -> Option<HomeMessage> {
        self.scope.next().await
    }

    /// Waits for one completion and applies it. Returns `false` when no
    /// work is outstanding.
    pub async fn process_next(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        match self.scope.next().await {
            Some(message) => {
                self.update(message);
                true
            }
            None => false,
        }
    }

    pub async fn run_until_idle(&mut self) {
        while self.process_next().await {}
    }

    /// No lookup in flight and no debounce timer pending.
    pub fn is_idle(&self) -> bool {
        !self.genres_slot.is_loading()
            && !self.shelves.is_loading()
            && !self.search.is_searching()
            && !self.debouncer.has_pending()
    }

    pub fn mode(&self) -> HomeMode {
        if self.search.has_results() {
            HomeMode::Search
        } else if !self.picker.selection().is_empty() {
            HomeMode::Filtered
        } else {
            HomeMode::Sections
        }
    }

    pub fn view(&self) -> HomeView<'_> {
        match self.mode() {
            HomeMode::Search => HomeView::Search {
                query: &self.search.query,
                results: &self.search.results,
            },
            HomeMode::Filtered => HomeView::Filtered {
                selection: self.picker.selection(),
                movies: self.filter.movies(),
            },
            HomeMode::Sections => HomeView::Sections(
                self.shelves
                    .iter()
                    .filter(|(key, shelf)| {
                        *key != ShelfKey::TopRated
                            || shelf.is_loading()
                            || !shelf.movies.is_empty()
                    })
                    .map(|(key, shelf)| ShelfView {
                        key,
                        movies: &shelf.movies,
                        can_scroll_left: shelf.scroll.can_scroll_left(),
                        can_scroll_right: shelf.scroll.can_scroll_right(),
                        loading: shelf.is_loading(),
                    })
                    .collect(),
            ),
        }
    }

    /// Reports the visible width of a shelf after layout.
    pub fn set_shelf_viewport(&mut self, key: ShelfKey, width: f32) {
        if let Some(shelf) = self.shelves.get_mut(key) {
            shelf.scroll.set_viewport_width(width);
        }
    }

    /// Scroll event from the shelf's container.
    pub fn on_shelf_scroll(&mut self, key: ShelfKey, offset: f32) {
        if let Some(shelf) = self.shelves.get_mut(key) {
            shelf.scroll.on_scroll(offset);
        }
    }

    /// Arrow press on a shelf. No-op when that direction is disabled.
    pub fn scroll_shelf(
        &mut self,
        key: ShelfKey,
        direction: ScrollDirection,
        now: Instant,
    ) -> bool {
        self.shelves
            .get_mut(key)
            .is_some_and(|shelf| shelf.scroll.scroll(direction, now))
    }

    /// Advances shelf animations. Returns whether any is still running.
    pub fn tick_scroll(&mut self, now: Instant) -> bool {
        let mut running = false;
        for (_, shelf) in self.shelves.iter_mut() {
            running |= shelf.scroll.tick(now);
        }
        running
    }

    pub fn settle_scroll(&mut self) {
        for (_, shelf) in self.shelves.iter_mut() {
            shelf.scroll.settle();
        }
    }

    /// Tears the view down: timers and lookups are cancelled and late
    /// completions are ignored.
    pub fn shutdown(&mut self) {
        self.scope.cancel();
        self.debouncer.cancel();
        self.cancel_search_task();
        self.genres_slot.invalidate();
        self.search.slot.invalidate();
        for (_, shelf) in self.shelves.iter_mut() {
            shelf.slot.invalidate();
        }
        debug!("home view shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        !self.scope.is_active()
    }

    pub fn settings(&self) -> &BrowseSettings {
        &self.settings
    }

    pub fn genres(&self) -> &GenreCatalog {
        &self.genres
    }

    pub fn shelf(&self, key: ShelfKey) -> Option<&Shelf> {
        self.shelves.get(key)
    }

    pub fn shelves(&self) -> &ShelfSet {
        &self.shelves
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    pub fn search_results(&self) -> &[Movie] {
        &self.search.results
    }

    pub fn selected_genres(&self) -> &SelectedGenres {
        self.picker.selection()
    }

    pub fn filtered_movies(&self) -> &[Movie] {
        self.filter.movies()
    }

    /// Candidate pool the genre filter runs over.
    pub fn pool(&self) -> Vec<Movie> {
        self.shelves.pool()
    }
}
