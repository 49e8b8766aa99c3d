use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use futures::{
    future::{BoxFuture, Shared},
    FutureExt,
};

use super::{build_index, MembershipIndex};
use crate::{http::ICourseClient, BuildError, CourseId};

type SharedBuild = Shared<BoxFuture<'static, Result<Arc<MembershipIndex>, BuildError>>>;

/// Course id -> in-flight or finished index build.
///
/// Callers asking for the same course while a build is running await that
/// build instead of starting their own. Failed builds stay cached until the
/// course is invalidated.
pub struct IndexCache<TClient>
where
    TClient: ICourseClient + Sync + Send + 'static,
{
    client: Arc<TClient>,

    timeout: Option<Duration>,

    builds: Mutex<HashMap<CourseId, SharedBuild>>,
}

impl<TClient> IndexCache<TClient>
where
    TClient: ICourseClient + Sync + Send + 'static,
{
    pub fn new(client: TClient) -> Self {
        Self {
            client: Arc::new(client),
            timeout: None,
            builds: Mutex::new(HashMap::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn client(&self) -> &TClient {
        &self.client
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub async fn get(&self, course_id: &CourseId) -> Result<Arc<MembershipIndex>, BuildError> {
        // The lock is released before awaiting
        let build = self.build_for(course_id);
        build.await
    }

    pub fn contains(&self, course_id: &CourseId) -> bool {
        self.lock().contains_key(course_id)
    }

    /// Forgets the course's build so the next request fetches again.
    pub fn invalidate(&self, course_id: &CourseId) -> bool {
        self.lock().remove(course_id).is_some()
    }

    /// Drops every course except `course_id`.
    pub fn retain_course(&self, course_id: &CourseId) {
        self.lock().retain(|key, _| key == course_id);
    }

    fn build_for(&self, course_id: &CourseId) -> SharedBuild {
        let mut builds = self.lock();
        if let Some(build) = builds.get(course_id) {
            log::debug!("reusing membership index build for course {}", course_id);
            return build.clone();
        }

        let build = self.start_build(course_id);
        builds.insert(course_id.clone(), build.clone());
        build
    }

    fn start_build(&self, course_id: &CourseId) -> SharedBuild {
        log::debug!("starting membership index build for course {}", course_id);

        let client = Arc::clone(&self.client);
        let course_id = course_id.clone();
        let timeout = self.timeout;
        async move {
            let build = build_index(client.as_ref(), &course_id);
            let index = match timeout {
                Some(timeout) => tokio::time::timeout(timeout, build)
                    .await
                    .map_err(|_| BuildError::Timeout(timeout))??,
                None => build.await?,
            };
            Ok::<_, BuildError>(Arc::new(index))
        }
        .boxed()
        .shared()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CourseId, SharedBuild>> {
        self.builds.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
