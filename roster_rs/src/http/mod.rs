mod canvas;
mod config;
mod rest_type;

use std::future::Future;

pub use canvas::{Canvas, USERS_PER_PAGE};
pub use config::CanvasConfig;
pub use rest_type::{EnrollmentType, GroupType, SectionType, UserType};

use crate::{CourseId, FetchError};

/// Source of the three course collections a membership index is built from.
pub trait ICourseClient {
    /// Students of the course with their enrollments and group ids.
    fn fetch_users(
        &self,
        course_id: &CourseId,
    ) -> impl Future<Output = Result<Vec<UserType>, FetchError>> + Send;

    fn fetch_groups(
        &self,
        course_id: &CourseId,
    ) -> impl Future<Output = Result<Vec<GroupType>, FetchError>> + Send;

    fn fetch_sections(
        &self,
        course_id: &CourseId,
    ) -> impl Future<Output = Result<Vec<SectionType>, FetchError>> + Send;
}
