mod cache;
mod key;

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

pub use cache::IndexCache;
pub use key::{MembershipKey, MembershipKind, ParseKeyError};

use crate::{
    http::{GroupType, ICourseClient, SectionType, UserType},
    CourseId, FetchError, UserId,
};

#[derive(Debug, Clone)]
pub struct IndexEntry {
    name: String,
    members: Vec<UserId>,
    member_set: HashSet<UserId>,
}

impl IndexEntry {
    fn new<T>(name: &str, members: T) -> Self
    where
        T: IntoIterator<Item = UserId>,
    {
        let members: Vec<UserId> = members.into_iter().collect();
        let member_set = members.iter().copied().collect();
        Self {
            name: name.to_string(),
            members,
            member_set,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in user fetch order.
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.member_set.contains(&user_id)
    }
}

/// Group and section memberships of one course. Read-only once built.
#[derive(Debug)]
pub struct MembershipIndex {
    user_ids: Vec<UserId>,
    keys: Vec<MembershipKey>,
    entry_table: HashMap<MembershipKey, IndexEntry>,
}

impl MembershipIndex {
    /// Every fetched user, in fetch order.
    pub fn user_ids(&self) -> &[UserId] {
        &self.user_ids
    }

    pub fn get(&self, key: &MembershipKey) -> Option<&IndexEntry> {
        self.entry_table.get(key)
    }

    /// Groups in fetch order, then sections in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = (MembershipKey, &IndexEntry)> + '_ {
        self.keys
            .iter()
            .filter_map(|key| self.entry_table.get(key).map(|entry| (*key, entry)))
    }

    pub fn iter_kind(
        &self,
        kind: MembershipKind,
    ) -> impl Iterator<Item = (MembershipKey, &IndexEntry)> + '_ {
        self.iter().filter(move |(key, _)| key.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub fn create_membership_index(
    users: &[UserType],
    groups: &[GroupType],
    sections: &[SectionType],
) -> MembershipIndex {
    // A user listed twice is still one roster entry
    let users: Vec<&UserType> = users.iter().unique_by(|user| user.id).collect();
    let user_ids: Vec<UserId> = users.iter().map(|user| user.id).collect();

    let group_entries = groups.iter().unique_by(|group| group.id).map(|group| {
        let members = users
            .iter()
            .filter(|user| user.group_ids.contains(&group.id))
            .map(|user| user.id);
        (MembershipKey::Group(group.id), IndexEntry::new(&group.name, members))
    });

    let section_entries = sections.iter().unique_by(|section| section.id).map(|section| {
        let members = users
            .iter()
            .filter(|user| {
                user.enrollments
                    .iter()
                    .any(|enrollment| enrollment.course_section_id == section.id)
            })
            .map(|user| user.id);
        (
            MembershipKey::Section(section.id),
            IndexEntry::new(&section.name, members),
        )
    });

    let mut keys = Vec::default();
    let mut entry_table = HashMap::default();
    for (key, entry) in group_entries.chain(section_entries) {
        keys.push(key);
        entry_table.insert(key, entry);
    }

    MembershipIndex {
        user_ids,
        keys,
        entry_table,
    }
}

/// Fetches the three collections concurrently and derives the index.
/// Fails as a whole if any request fails.
pub async fn build_index<TClient>(
    client: &TClient,
    course_id: &CourseId,
) -> Result<MembershipIndex, FetchError>
where
    TClient: ICourseClient,
{
    let (users, groups, sections) = futures::try_join!(
        client.fetch_users(course_id),
        client.fetch_groups(course_id),
        client.fetch_sections(course_id)
    )?;

    let index = create_membership_index(&users, &groups, &sections);
    log::info!(
        "membership index for course {} built: {} users, {} groups, {} sections",
        course_id,
        index.user_ids().len(),
        index.iter_kind(MembershipKind::Group).count(),
        index.iter_kind(MembershipKind::Section).count()
    );
    Ok(index)
}
