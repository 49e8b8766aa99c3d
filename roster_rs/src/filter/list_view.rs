use crate::UserId;

/// A rendered roster list. Items are addressed by position.
pub trait IListView {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `None` when the item is not a user checkbox.
    fn user_id(&self, index: usize) -> Option<UserId>;

    fn is_hidden(&self, index: usize) -> bool;

    fn set_hidden(&mut self, index: usize, hidden: bool);

    fn is_selected(&self, index: usize) -> bool;

    // Selections are only ever added
    fn select(&mut self, index: usize);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub element_id: String,
    pub hidden: bool,
    pub selected: bool,
}

impl ListItem {
    pub fn new<T>(element_id: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            element_id: element_id.into(),
            hidden: false,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// List view held in memory, keyed by checkbox element ids such as `user_42`.
#[derive(Debug, Clone, Default)]
pub struct MemoryListView {
    items: Vec<ListItem>,
}

impl MemoryListView {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }

    pub fn from_user_ids<T>(user_ids: T) -> Self
    where
        T: IntoIterator<Item = UserId>,
    {
        Self {
            items: user_ids
                .into_iter()
                .map(|id| ListItem::new(id.element_id()))
                .collect(),
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|x| !x.hidden)
            .map(|x| x.element_id.as_str())
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|x| x.selected)
            .map(|x| x.element_id.as_str())
            .collect()
    }
}

impl IListView for MemoryListView {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn user_id(&self, index: usize) -> Option<UserId> {
        self.items
            .get(index)
            .and_then(|x| UserId::from_element_id(&x.element_id))
    }

    fn is_hidden(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|x| x.hidden)
    }

    fn set_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.hidden = hidden;
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|x| x.selected)
    }

    fn select(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.selected = true;
        }
    }
}
