use std::{fmt, time::Duration};

/// The three course collections an index is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Groups,
    Sections,
}

impl Collection {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Groups => "groups",
            Self::Sections => "sections",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Failure of a single collection request.
///
/// Messages are kept as strings so a failed build can be handed to every
/// waiter of a shared build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request for {collection} failed: {message}")]
    Network {
        collection: Collection,
        message: String,
    },

    #[error("request for {collection} returned HTTP {status}")]
    Status { collection: Collection, status: u16 },

    #[error("malformed {collection} payload: {message}")]
    MalformedResponse {
        collection: Collection,
        message: String,
    },
}

impl FetchError {
    pub fn collection(&self) -> Collection {
        match self {
            Self::Network { collection, .. }
            | Self::Status { collection, .. }
            | Self::MalformedResponse { collection, .. } => *collection,
        }
    }

    pub(crate) fn from_reqwest(collection: Collection, error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::Status {
                collection,
                status: status.as_u16(),
            },
            None => Self::Network {
                collection,
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("course identifier must not be empty")]
    InvalidCourseId,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("course data did not arrive within {0:?}")]
    Timeout(Duration),
}
