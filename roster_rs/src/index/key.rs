use std::{fmt, str::FromStr};

use crate::{GroupId, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipKind {
    Group,
    Section,
}

impl MembershipKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Section => "section",
        }
    }
}

/// Index key and selector option value at once: `group_<id>` or `section_<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipKey {
    Group(GroupId),
    Section(SectionId),
}

impl MembershipKey {
    pub fn kind(&self) -> MembershipKind {
        match self {
            Self::Group(_) => MembershipKind::Group,
            Self::Section(_) => MembershipKind::Section,
        }
    }

    pub fn raw_id(&self) -> u64 {
        match self {
            Self::Group(id) => id.value(),
            Self::Section(id) => id.value(),
        }
    }
}

impl fmt::Display for MembershipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind().prefix(), self.raw_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a group_<id> or section_<id> value")]
pub struct ParseKeyError {
    value: String,
}

impl FromStr for MembershipKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseKeyError {
            value: s.to_string(),
        };

        let (kind, digits) = s.split_once('_').ok_or_else(error)?;
        if digits.is_empty() || !digits.bytes().all(|x| x.is_ascii_digit()) {
            return Err(error());
        }
        // Option values are rendered from ids, so `group_010` never names `group_10`
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(error());
        }
        let id: u64 = digits.parse().map_err(|_| error())?;

        match kind {
            "group" => Ok(Self::Group(GroupId::new(id))),
            "section" => Ok(Self::Section(SectionId::new(id))),
            _ => Err(error()),
        }
    }
}
