use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use crate::{
    filter::{FilterController, IListView},
    http::{Canvas, CanvasConfig, ICourseClient},
    index::IndexCache,
    BuildError, CourseId,
};

pub enum ReadyOutcome<TView>
where
    TView: IListView,
{
    Filtering(FilterController<TView>),

    // The view comes back untouched so the roster stays usable
    Unfiltered { view: TView, error: BuildError },
}

impl<TView> ReadyOutcome<TView>
where
    TView: IListView,
{
    pub fn controller(&self) -> Option<&FilterController<TView>> {
        match self {
            Self::Filtering(controller) => Some(controller),
            Self::Unfiltered { .. } => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut FilterController<TView>> {
        match self {
            Self::Filtering(controller) => Some(controller),
            Self::Unfiltered { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&BuildError> {
        match self {
            Self::Filtering(_) => None,
            Self::Unfiltered { error, .. } => Some(error),
        }
    }

    pub fn into_view(self) -> TView {
        match self {
            Self::Filtering(controller) => controller.into_view(),
            Self::Unfiltered { view, .. } => view,
        }
    }
}

/// Receives "roster list ready" signals for one page.
pub struct RosterSession<TClient>
where
    TClient: ICourseClient + Sync + Send + 'static,
{
    cache: IndexCache<TClient>,

    current_course: Mutex<Option<CourseId>>,
}

impl<TClient> RosterSession<TClient>
where
    TClient: ICourseClient + Sync + Send + 'static,
{
    pub fn new(client: TClient) -> Self {
        Self {
            cache: IndexCache::new(client),
            current_course: Mutex::new(None),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cache = self.cache.with_timeout(timeout);
        self
    }

    pub fn cache(&self) -> &IndexCache<TClient> {
        &self.cache
    }

    pub fn current_course(&self) -> Option<CourseId> {
        self.current_course
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolves the course's index (building it at most once) and attaches a
    /// controller to the freshly rendered view.
    pub async fn on_ready<TView>(&self, course_id: &CourseId, view: TView) -> ReadyOutcome<TView>
    where
        TView: IListView,
    {
        self.enter_course(course_id);

        match self.cache.get(course_id).await {
            Ok(index) => ReadyOutcome::Filtering(FilterController::attach(index, view)),
            Err(error) => {
                log::warn!(
                    "roster filtering unavailable for course {}: {}",
                    course_id,
                    error
                );
                ReadyOutcome::Unfiltered { view, error }
            }
        }
    }

    // A different course discards whatever was cached for the previous one
    fn enter_course(&self, course_id: &CourseId) {
        let mut current_course = self
            .current_course
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if current_course.as_ref() == Some(course_id) {
            return;
        }

        if let Some(previous) = current_course.replace(course_id.clone()) {
            log::debug!("course context changed from {} to {}", previous, course_id);
        }
        self.cache.retain_course(course_id);
    }
}

impl RosterSession<Canvas> {
    /// Canvas client and fetch timeout both come from `config`.
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(Canvas::from_config(config)).with_timeout(config.timeout)
    }
}
