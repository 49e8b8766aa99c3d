mod controller;
mod list_view;
mod selector;

pub use controller::{FilterController, FilterState};
pub use list_view::{IListView, ListItem, MemoryListView};
pub use selector::{
    populate_selector, SelectorEntry, SelectorOption, GROUP_HEADING, NO_FILTER_LABEL,
    NO_FILTER_VALUE, SECTION_HEADING,
};
