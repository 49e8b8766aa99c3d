#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use roster_rs::{
    http::{EnrollmentType, GroupType, ICourseClient, SectionType, UserType},
    Collection, CourseId, FetchError, GroupId, SectionId, UserId,
};

// Serves fixed collections and counts requests
#[derive(Default)]
pub struct FakeClient {
    pub users: Vec<UserType>,
    pub groups: Vec<GroupType>,
    pub sections: Vec<SectionType>,

    // Every request sleeps this long before answering
    pub delay: Duration,

    pub failure: Option<FetchError>,

    user_requests: AtomicUsize,
    group_requests: AtomicUsize,
    section_requests: AtomicUsize,
    courses: Mutex<Vec<String>>,
}

impl FakeClient {
    /// user_1: group 10, section 100 / user_2: section 101
    pub fn example() -> Self {
        Self {
            users: vec![user(1, &[10], &[100]), user(2, &[], &[101])],
            groups: vec![group(10, "A")],
            sections: vec![section(100, "S1"), section(101, "S2")],
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_failure(mut self, failure: FetchError) -> Self {
        self.failure = Some(failure);
        self
    }

    /// (users, groups, sections) request counts.
    pub fn requests(&self) -> (usize, usize, usize) {
        (
            self.user_requests.load(Ordering::SeqCst),
            self.group_requests.load(Ordering::SeqCst),
            self.section_requests.load(Ordering::SeqCst),
        )
    }

    pub fn requested_courses(&self) -> Vec<String> {
        self.courses.lock().unwrap().clone()
    }

    async fn respond<T: Clone>(
        &self,
        course_id: &CourseId,
        collection: Collection,
        counter: &AtomicUsize,
        data: &[T],
    ) -> Result<Vec<T>, FetchError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if collection == Collection::Users {
            self.courses
                .lock()
                .unwrap()
                .push(course_id.as_str().to_string());
        }

        tokio::time::sleep(self.delay).await;

        match &self.failure {
            Some(failure) if failure.collection() == collection => Err(failure.clone()),
            _ => Ok(data.to_vec()),
        }
    }
}

impl ICourseClient for FakeClient {
    async fn fetch_users(&self, course_id: &CourseId) -> Result<Vec<UserType>, FetchError> {
        self.respond(course_id, Collection::Users, &self.user_requests, &self.users)
            .await
    }

    async fn fetch_groups(&self, course_id: &CourseId) -> Result<Vec<GroupType>, FetchError> {
        self.respond(course_id, Collection::Groups, &self.group_requests, &self.groups)
            .await
    }

    async fn fetch_sections(&self, course_id: &CourseId) -> Result<Vec<SectionType>, FetchError> {
        self.respond(
            course_id,
            Collection::Sections,
            &self.section_requests,
            &self.sections,
        )
        .await
    }
}

pub fn user(id: u64, group_ids: &[u64], section_ids: &[u64]) -> UserType {
    UserType {
        id: UserId::new(id),
        group_ids: group_ids.iter().map(|x| GroupId::new(*x)).collect(),
        enrollments: section_ids
            .iter()
            .map(|x| EnrollmentType {
                course_section_id: SectionId::new(*x),
            })
            .collect(),
    }
}

pub fn group(id: u64, name: &str) -> GroupType {
    GroupType {
        id: GroupId::new(id),
        name: name.to_string(),
    }
}

pub fn section(id: u64, name: &str) -> SectionType {
    SectionType {
        id: SectionId::new(id),
        name: name.to_string(),
    }
}

pub fn course(id: &str) -> CourseId {
    CourseId::new(id).unwrap()
}
