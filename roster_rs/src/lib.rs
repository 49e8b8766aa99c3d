use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

mod error;
pub mod filter;
pub mod http;
pub mod index;
mod session;

pub use error::{BuildError, Collection, FetchError};
pub use session::{ReadyOutcome, RosterSession};

/// Opaque course identifier as it appears in the course URL.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CourseId {
    value: String,
}

impl CourseId {
    pub fn new<T>(value: T) -> Result<Self, BuildError>
    where
        T: AsRef<str>,
    {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(BuildError::InvalidCourseId);
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for CourseId {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId {
    id: u64,
}

impl UserId {
    const ELEMENT_PREFIX: &'static str = "user_";

    pub fn new(id: u64) -> Self {
        Self { id }
    }

    /// Identifier of the roster checkbox for this user, e.g. `user_42`.
    pub fn element_id(&self) -> String {
        format!("{}{}", Self::ELEMENT_PREFIX, self.id)
    }

    /// Inverse of [`UserId::element_id`]. Anything but `user_<digits>` yields `None`.
    pub fn from_element_id(element_id: &str) -> Option<Self> {
        let digits = element_id.strip_prefix(Self::ELEMENT_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|x| x.is_ascii_digit()) {
            return None;
        }

        digits.parse().ok().map(Self::new)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId {
    id: u64,
}

impl GroupId {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn value(&self) -> u64 {
        self.id
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId {
    id: u64,
}

impl SectionId {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn value(&self) -> u64 {
        self.id
    }
}
