use crate::index::{MembershipIndex, MembershipKind};

pub const NO_FILTER_LABEL: &str = "No group filter selected";
pub const NO_FILTER_VALUE: &str = "";
pub const GROUP_HEADING: &str = "Group";
pub const SECTION_HEADING: &str = "Course section";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEntry {
    Option(SelectorOption),
    OptionGroup {
        label: &'static str,
        options: Vec<SelectorOption>,
    },
}

/// Entries of the filter selector: the no-filter option, then groups, then sections.
pub fn populate_selector(index: &MembershipIndex) -> Vec<SelectorEntry> {
    let options = |kind: MembershipKind| -> Vec<SelectorOption> {
        index
            .iter_kind(kind)
            .map(|(key, entry)| SelectorOption {
                value: key.to_string(),
                label: entry.name().to_string(),
            })
            .collect()
    };

    vec![
        SelectorEntry::Option(SelectorOption {
            value: NO_FILTER_VALUE.to_string(),
            label: NO_FILTER_LABEL.to_string(),
        }),
        SelectorEntry::OptionGroup {
            label: GROUP_HEADING,
            options: options(MembershipKind::Group),
        },
        SelectorEntry::OptionGroup {
            label: SECTION_HEADING,
            options: options(MembershipKind::Section),
        },
    ]
}
