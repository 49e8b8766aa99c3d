use std::sync::Arc;

use super::{populate_selector, IListView, SelectorEntry};
use crate::index::{MembershipIndex, MembershipKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,

    // The key may be absent from the index, in which case nothing is visible
    Filtered(MembershipKey),
}

/// Filtering and bulk selection over one rendered roster list.
///
/// A re-rendered list gets a new controller via [`FilterController::attach`];
/// the index is shared, the view is owned.
pub struct FilterController<TView>
where
    TView: IListView,
{
    index: Arc<MembershipIndex>,
    view: TView,
    state: FilterState,
}

impl<TView> FilterController<TView>
where
    TView: IListView,
{
    /// The view is left as rendered until the first filter is applied.
    pub fn attach(index: Arc<MembershipIndex>, view: TView) -> Self {
        Self {
            index,
            view,
            state: FilterState::Unfiltered,
        }
    }

    pub fn selector_entries(&self) -> Vec<SelectorEntry> {
        populate_selector(&self.index)
    }

    /// Recomputes every item's hidden flag for the selector value.
    ///
    /// Values that are not `group_<id>`/`section_<id>` show everything. A
    /// well-formed value without an index entry hides everything.
    pub fn apply_filter(&mut self, selected_value: &str) -> FilterState {
        let Ok(key) = selected_value.parse::<MembershipKey>() else {
            log::debug!("roster filter cleared by {:?}", selected_value);
            for index in 0..self.view.len() {
                self.view.set_hidden(index, false);
            }
            self.state = FilterState::Unfiltered;
            return self.state;
        };

        let entry = self.index.get(&key);
        if entry.is_none() {
            log::debug!("no membership entry for {}, hiding every roster item", key);
        }

        let mut visible = 0;
        for index in 0..self.view.len() {
            let is_member = match (entry, self.view.user_id(index)) {
                (Some(entry), Some(user_id)) => entry.contains(user_id),
                _ => false,
            };
            self.view.set_hidden(index, !is_member);
            visible += usize::from(is_member);
        }
        log::debug!("roster filtered by {}: {} visible", key, visible);

        self.state = FilterState::Filtered(key);
        self.state
    }

    /// Selects every visible item and returns how many were newly selected.
    pub fn select_all_visible(&mut self) -> usize {
        let mut count = 0;
        for index in 0..self.view.len() {
            if self.view.is_hidden(index) || self.view.is_selected(index) {
                continue;
            }

            self.view.select(index);
            count += 1;
        }
        count
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn index(&self) -> &Arc<MembershipIndex> {
        &self.index
    }

    pub fn view(&self) -> &TView {
        &self.view
    }

    pub fn into_view(self) -> TView {
        self.view
    }
}
