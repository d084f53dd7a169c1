use std::fmt;
use std::sync::Arc;

use marquee_core::CatalogService;
use marquee_model::{
    ImageSize, MovieId, OverviewText, age_rating, format_runtime, image_url,
    imdb_url, select_trailer, stars,
};
use tracing::{debug, warn};

use super::messages::DetailsMessage;
use super::types::{DetailsState, top_cast};
use crate::common::ViewScope;
use crate::settings::BrowseSettings;

/// Owns the detail page of one title at a time.
///
/// Lookups run on the controller's [`ViewScope`]; their completions are
/// applied by [`update`](Self::update), one at a time, from whatever loop
/// drives the controller.
pub struct DetailsController {
    catalog: Arc<dyn CatalogService>,
    settings: BrowseSettings,
    scope: ViewScope<DetailsMessage>,
    state: DetailsState,
}

impl fmt::Debug for DetailsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailsController")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl DetailsController {
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        settings: BrowseSettings,
    ) -> Self {
        Self {
            catalog,
            settings,
            scope: ViewScope::new(),
            state: DetailsState::default(),
        }
    }

    pub fn state(&self) -> &DetailsState {
        &self.state
    }

    pub fn settings(&self) -> &BrowseSettings {
        &self.settings
    }

    /// Starts loading `id`. Work still in flight for a previous title is
    /// superseded and its results will be dropped.
    pub fn open(&mut self, id: MovieId) {
        if !self.scope.is_active() {
            return;
        }
        if self.state.movie_id != Some(id) {
            self.state.reset_content();
        }
        self.state.movie_id = Some(id);
        debug!(movie = %id, "opening detail page");

        let generation = self.state.details_slot.begin();
        let catalog = Arc::clone(&self.catalog);
        self.scope.perform(
            async move { catalog.movie_details(id).await },
            move |result| DetailsMessage::DetailsLoaded { generation, result },
        );

        let generation = self.state.cast_slot.begin();
        let catalog = Arc::clone(&self.catalog);
        self.scope.perform(
            async move { catalog.movie_cast(id).await },
            move |result| DetailsMessage::CastLoaded { generation, result },
        );

        let generation = self.state.videos_slot.begin();
        let catalog = Arc::clone(&self.catalog);
        self.scope.perform(
            async move { catalog.movie_videos(id).await },
            move |result| DetailsMessage::VideosLoaded { generation, result },
        );
    }

    /// Applies one lookup completion. Stale completions and failures leave
    /// the state untouched.
    pub fn update(&mut self, message: DetailsMessage) {
        if !self.scope.is_active() {
            return;
        }
        let name = message.name();
        match message {
            DetailsMessage::DetailsLoaded { generation, result } => {
                if !self.state.details_slot.accept(name, generation) {
                    return;
                }
                match result {
                    Ok(details) => {
                        self.state.overview = Some(OverviewText::new(
                            details.movie.overview.clone(),
                            self.settings.overview_preview_chars,
                        ));
                        self.state.details = Some(details);
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to load movie details");
                    }
                }
            }
            DetailsMessage::CastLoaded { generation, result } => {
                if !self.state.cast_slot.accept(name, generation) {
                    return;
                }
                match result {
                    Ok(cast) => {
                        self.state.cast = top_cast(
                            cast,
                            &self.settings.cast_department,
                            self.settings.cast_limit,
                        );
                    }
                    Err(err) => warn!(error = %err, "failed to load cast"),
                }
            }
            DetailsMessage::VideosLoaded { generation, result } => {
                if !self.state.videos_slot.accept(name, generation) {
                    return;
                }
                match result {
                    Ok(videos) => {
                        self.state.trailer = select_trailer(&videos);
                        self.state.videos_loaded = true;
                    }
                    Err(err) => warn!(error = %err, "failed to load videos"),
                }
            }
        }
    }

    /// Next completion, or `None` once the controller is shut down.
    pub async fn next_message(&mut self) -> Option<DetailsMessage> {
        self.scope.next().await
    }

    /// Waits for one completion and applies it. Returns `false` when there
    /// is nothing left to wait for.
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

    pub fn is_idle(&self) -> bool {
        !self.state.is_loading()
    }

    pub fn toggle_overview(&mut self) {
        if let Some(overview) = self.state.overview.as_mut() {
            overview.toggle();
        }
    }

    pub fn overview_text(&self) -> Option<String> {
        self.state.overview.as_ref().map(OverviewText::visible)
    }

    pub fn runtime_label(&self) -> Option<String> {
        self.state
            .details
            .as_ref()
            .and_then(|details| details.runtime_minutes)
            .map(format_runtime)
    }

    pub fn stars_label(&self) -> Option<String> {
        self.state
            .details
            .as_ref()
            .map(|details| stars(details.movie.vote_average))
    }

    pub fn age_rating_label(&self) -> Option<&'static str> {
        self.state
            .details
            .as_ref()
            .map(|details| age_rating(details.movie.adult))
    }

    pub fn imdb_link(&self) -> Option<String> {
        self.state
            .details
            .as_ref()
            .and_then(|details| details.imdb_id.as_deref())
            .and_then(imdb_url)
    }

    pub fn trailer_url(&self) -> Option<String> {
        self.state.trailer.as_ref().map(|trailer| trailer.watch_url())
    }

    /// Header poster, at full resolution.
    pub fn poster_url(&self) -> Option<String> {
        let details = self.state.details.as_ref()?;
        image_url(
            &self.settings.image_base_url,
            ImageSize::Original,
            details.movie.poster_path.as_deref(),
        )
    }

    /// Profile image per shown cast member, `None` where there is none.
    pub fn cast_profile_urls(&self) -> Vec<Option<String>> {
        self.state
            .cast
            .iter()
            .map(|actor| {
                image_url(
                    &self.settings.image_base_url,
                    ImageSize::profile(),
                    actor.profile_path.as_deref(),
                )
            })
            .collect()
    }

    /// Tears the page down. In-flight lookups are cancelled and anything
    /// that still arrives is ignored.
    pub fn shutdown(&mut self) {
        self.scope.cancel();
        self.state.invalidate();
    }

    pub fn is_shut_down(&self) -> bool {
        !self.scope.is_active()
    }
}
