use serde::{Deserialize, Serialize};

use crate::{GroupId, SectionId, UserId};

// Fields not listed here are ignored. The listed ones are required; a payload
// lacking them is malformed.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserType {
    pub id: UserId,
    pub group_ids: Vec<GroupId>,
    pub enrollments: Vec<EnrollmentType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentType {
    pub course_section_id: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupType {
    pub id: GroupId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionType {
    pub id: SectionId,
    pub name: String,
}
