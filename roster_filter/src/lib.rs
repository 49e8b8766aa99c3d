use roster_rs::{
    filter::{ListItem, MemoryListView, SelectorEntry},
    UserId,
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid item `{0}`, expected user_<id> or user_<id>/checked")]
pub struct ItemParseError(String);

/// ex. ["user_1", "user_2/checked"]
pub fn parse_items<T, U>(iterator: T) -> Result<Vec<ListItem>, ItemParseError>
where
    T: IntoIterator<Item = U>,
    U: AsRef<str>,
{
    iterator
        .into_iter()
        .map(|x| {
            let str: &str = x.as_ref();
            let error = || ItemParseError(str.to_string());

            let mut inputs = str.split('/');
            let element_id = inputs.next().unwrap_or_default();
            let selected = match inputs.next() {
                None => false,
                Some("checked") => true,
                Some(_) => return Err(error()),
            };
            if inputs.next().is_some() || UserId::from_element_id(element_id).is_none() {
                return Err(error());
            }

            Ok(ListItem::new(element_id).selected(selected))
        })
        .collect()
}

pub fn render_selector(entries: &[SelectorEntry]) -> String {
    let mut string = String::new();
    for entry in entries {
        match entry {
            SelectorEntry::Option(option) => {
                let value = format!("{:?}", option.value);
                string.push_str(&format!("{:<16}{}\n", value, option.label));
            }
            SelectorEntry::OptionGroup { label, options } => {
                string.push_str(&format!("{}\n", label));
                for option in options {
                    string.push_str(&format!("  {:<14}{}\n", option.value, option.label));
                }
            }
        }
    }
    string
}

pub fn render_items(view: &MemoryListView) -> String {
    view.items()
        .iter()
        .map(|item| {
            let mark = if item.selected { "[x]" } else { "[ ]" };
            let suffix = if item.hidden { " (hidden)" } else { "" };
            format!("{} {}{}\n", mark, item.element_id, suffix)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roster_rs::filter::{IListView, ListItem, MemoryListView, SelectorEntry, SelectorOption};

    use crate::{parse_items, render_items, render_selector, ItemParseError};

    #[test]
    fn simple_parse_items() {
        let expected = vec![
            ListItem::new("user_1"),
            ListItem::new("user_2").selected(true),
            ListItem::new("user_30"),
        ];

        let actual = parse_items(["user_1", "user_2/checked", "user_30"]).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn parse_items_rejects_garbage() {
        for value in ["", "user_", "observer", "user_1/maybe", "user_1/checked/x"] {
            assert_eq!(
                parse_items([value]),
                Err(ItemParseError(value.to_string()))
            );
        }
    }

    #[test]
    fn simple_render() {
        let entries = vec![
            SelectorEntry::Option(SelectorOption {
                value: String::new(),
                label: "No group filter selected".to_string(),
            }),
            SelectorEntry::OptionGroup {
                label: "Group",
                options: vec![SelectorOption {
                    value: "group_10".to_string(),
                    label: "A".to_string(),
                }],
            },
        ];
        assert_eq!(
            render_selector(&entries),
            "\"\"              No group filter selected\nGroup\n  group_10      A\n"
        );

        let mut view = MemoryListView::new(vec![
            ListItem::new("user_1").selected(true),
            ListItem::new("user_2"),
        ]);
        view.set_hidden(1, true);
        assert_eq!(render_items(&view), "[x] user_1\n[ ] user_2 (hidden)\n");
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_selector(&[]), "");
        assert_eq!(render_items(&MemoryListView::default()), "");

        let entries = vec![SelectorEntry::OptionGroup {
            label: "Course section",
            options: vec![
                SelectorOption {
                    value: "section_100".to_string(),
                    label: "Lecture".to_string(),
                },
                SelectorOption {
                    value: "section_101".to_string(),
                    label: "Lab".to_string(),
                },
            ],
        }];
        assert_eq!(
            render_selector(&entries),
            "Course section\n  section_100   Lecture\n  section_101   Lab\n"
        );
    }
}
