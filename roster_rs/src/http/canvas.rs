use serde::de::DeserializeOwned;
use url::Url;

use super::{CanvasConfig, GroupType, ICourseClient, SectionType, UserType};
use crate::{Collection, CourseId, FetchError};

/// Only the first page of this size is requested.
pub const USERS_PER_PAGE: u32 = 100;

pub struct Canvas {
    base_url: Url,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl Canvas {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            access_token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn collection_url(
        &self,
        course_id: &CourseId,
        collection: Collection,
        query: &[(&str, String)],
    ) -> Result<Url, FetchError> {
        let mut rest_url = self.base_url.clone();
        rest_url
            .path_segments_mut()
            .map_err(|_| FetchError::Network {
                collection,
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend([
                "api",
                "v1",
                "courses",
                course_id.as_str(),
                collection.path_segment(),
            ]);

        rest_url.set_query(None);
        if !query.is_empty() {
            let mut pairs = rest_url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(rest_url)
    }

    async fn fetch_collection<T>(
        &self,
        course_id: &CourseId,
        collection: Collection,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let rest_url = self.collection_url(course_id, collection, query)?;
        log::debug!("GET {}", rest_url);

        let mut request = self.client.get(rest_url);
        if let Some(access_token) = &self.access_token {
            request = request.bearer_auth(access_token);
        }

        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| FetchError::from_reqwest(collection, error))?
            .text()
            .await
            .map_err(|error| FetchError::from_reqwest(collection, error))?;

        serde_json::from_str::<Vec<T>>(&response).map_err(|error| FetchError::MalformedResponse {
            collection,
            message: error.to_string(),
        })
    }
}

pub(crate) fn users_query() -> Vec<(&'static str, String)> {
    vec![
        ("per_page", USERS_PER_PAGE.to_string()),
        ("enrollment_type", "student".to_string()),
        ("include_inactive", "false".to_string()),
        ("include[]", "enrollments".to_string()),
        ("include[]", "group_ids".to_string()),
    ]
}

impl ICourseClient for Canvas {
    async fn fetch_users(&self, course_id: &CourseId) -> Result<Vec<UserType>, FetchError> {
        self.fetch_collection(course_id, Collection::Users, &users_query())
            .await
    }

    async fn fetch_groups(&self, course_id: &CourseId) -> Result<Vec<GroupType>, FetchError> {
        self.fetch_collection(course_id, Collection::Groups, &[])
            .await
    }

    async fn fetch_sections(&self, course_id: &CourseId) -> Result<Vec<SectionType>, FetchError> {
        self.fetch_collection(course_id, Collection::Sections, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;

    use super::{users_query, Canvas};
    use crate::{Collection, CourseId, FetchError};

    fn canvas(base_url: &str) -> Canvas {
        Canvas::new(Url::parse(base_url).unwrap())
    }

    #[test]
    fn users_url() {
        let course_id = CourseId::new("77").unwrap();
        let url = canvas("https://canvas.example.edu")
            .collection_url(&course_id, Collection::Users, &users_query())
            .unwrap();

        assert_eq!(url.path(), "/api/v1/courses/77/users");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("per_page".to_string(), "100".to_string()),
                ("enrollment_type".to_string(), "student".to_string()),
                ("include_inactive".to_string(), "false".to_string()),
                ("include[]".to_string(), "enrollments".to_string()),
                ("include[]".to_string(), "group_ids".to_string()),
            ]
        );
    }

    #[test]
    fn groups_and_sections_are_unfiltered() {
        let course_id = CourseId::new("77").unwrap();
        let canvas = canvas("https://canvas.example.edu/lms/?session=1");

        let groups = canvas
            .collection_url(&course_id, Collection::Groups, &[])
            .unwrap();
        assert_eq!(groups.path(), "/lms/api/v1/courses/77/groups");
        assert_eq!(groups.query(), None);

        let sections = canvas
            .collection_url(&course_id, Collection::Sections, &[])
            .unwrap();
        assert_eq!(sections.path(), "/lms/api/v1/courses/77/sections");
    }

    #[test]
    fn course_id_is_a_single_segment() {
        let course_id = CourseId::new("sis_course_id:A/B").unwrap();
        let url = canvas("https://canvas.example.edu")
            .collection_url(&course_id, Collection::Groups, &[])
            .unwrap();
        assert_eq!(
            url.path(),
            "/api/v1/courses/sis_course_id:A%2FB/groups"
        );
    }

    #[test]
    fn opaque_base_url_is_rejected() {
        let course_id = CourseId::new("77").unwrap();
        let result = canvas("mailto:someone@example.edu").collection_url(
            &course_id,
            Collection::Users,
            &[],
        );
        assert!(matches!(
            result,
            Err(FetchError::Network {
                collection: Collection::Users,
                ..
            })
        ));
    }
}
