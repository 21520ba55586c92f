//! Alternate presentations of the same filtered board data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use taskboard_core::TaskboardError;

use crate::{priority_rank, BoardFilters, Card, List};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Kanban,
    List,
}

impl FromStr for ViewMode {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kanban" => Ok(ViewMode::Kanban),
            "list" => Ok(ViewMode::List),
            other => Err(TaskboardError::Validation(format!(
                "unknown view mode '{}'",
                other
            ))),
        }
    }
}

/// A card flattened out of its list, for the list presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub list_id: String,
    pub list_title: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "data", rename_all = "lowercase")]
pub enum ComposedView {
    Kanban(Vec<List>),
    List(Vec<ListRow>),
}

impl ComposedView {
    pub fn mode(&self) -> ViewMode {
        match self {
            ComposedView::Kanban(_) => ViewMode::Kanban,
            ComposedView::List(_) => ViewMode::List,
        }
    }

    /// Stable-sorts cards by priority rank, unset last. Kanban lists keep
    /// their own order and only their cards move.
    pub fn sort_by_priority(&mut self) {
        match self {
            ComposedView::Kanban(lists) => {
                for list in lists {
                    list.cards.sort_by_key(|c| priority_rank(c.priority));
                }
            }
            ComposedView::List(rows) => {
                rows.sort_by_key(|r| priority_rank(r.card.priority));
            }
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            ComposedView::Kanban(lists) => lists.iter().map(|l| l.cards.len()).sum(),
            ComposedView::List(rows) => rows.len(),
        }
    }
}

/// Switches between presentations. Holds nothing but the mode; every call to
/// `compose` re-derives from the current filters and snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewComposer {
    mode: ViewMode,
}

impl ViewComposer {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn compose(&self, filters: &BoardFilters, lists: &[List]) -> ComposedView {
        let filtered = filters.filtered_lists(lists);
        match self.mode {
            ViewMode::Kanban => ComposedView::Kanban(filtered),
            ViewMode::List => ComposedView::List(
                filtered
                    .into_iter()
                    .flat_map(|list| {
                        let List { id, title, cards, .. } = list;
                        cards.into_iter().map(move |card| ListRow {
                            list_id: id.clone(),
                            list_title: title.clone(),
                            card,
                        })
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> Vec<List> {
        vec![
            List::new("a", "b1", "Todo", 0)
                .with_card(Card::new("c1", "a", "Fix bug", 0))
                .with_card(Card::new("c2", "a", "Write docs", 1)),
            List::new("b", "b1", "Done", 1).with_card(Card::new("c3", "b", "Ship it", 0)),
        ]
    }

    #[test]
    fn test_default_mode_is_kanban() {
        let composer = ViewComposer::default();
        assert_eq!(composer.mode(), ViewMode::Kanban);
        let view = composer.compose(&BoardFilters::new(), &lists());
        assert_eq!(view, ComposedView::Kanban(lists()));
    }

    #[test]
    fn test_list_mode_flattens_in_board_order() {
        let mut composer = ViewComposer::default();
        composer.set_mode(ViewMode::List);

        let view = composer.compose(&BoardFilters::new(), &lists());
        let ComposedView::List(rows) = &view else {
            panic!("expected list view");
        };
        let flat: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.list_title.as_str(), r.card.title.as_str()))
            .collect();
        assert_eq!(
            flat,
            vec![("Todo", "Fix bug"), ("Todo", "Write docs"), ("Done", "Ship it")]
        );
    }

    #[test]
    fn test_compose_follows_filter_changes() {
        let composer = ViewComposer::new(ViewMode::Kanban);
        let mut filters = BoardFilters::new();
        assert_eq!(composer.compose(&filters, &lists()).card_count(), 3);

        filters.set_search_term("docs");
        assert_eq!(composer.compose(&filters, &lists()).card_count(), 1);
    }

    #[test]
    fn test_sort_by_priority_puts_unset_last() {
        use crate::CardPriority;

        let lists = vec![
            List::new("a", "b1", "Todo", 0)
                .with_card(Card::new("c1", "a", "No priority", 0))
                .with_card(
                    Card::new("c2", "a", "Urgent", 1).with_priority(CardPriority::Critical),
                ),
            List::new("b", "b1", "Done", 1)
                .with_card(Card::new("c3", "b", "Minor", 0).with_priority(CardPriority::Low)),
        ];

        let mut view = ViewComposer::new(ViewMode::List).compose(&BoardFilters::new(), &lists);
        view.sort_by_priority();
        let ComposedView::List(rows) = &view else {
            panic!("expected list view");
        };
        let titles: Vec<&str> = rows.iter().map(|r| r.card.title.as_str()).collect();
        assert_eq!(titles, vec!["Minor", "Urgent", "No priority"]);

        let mut view = ViewComposer::new(ViewMode::Kanban).compose(&BoardFilters::new(), &lists);
        view.sort_by_priority();
        let ComposedView::Kanban(sorted) = &view else {
            panic!("expected kanban view");
        };
        assert_eq!(sorted[0].cards[0].title, "Urgent");
        assert_eq!(sorted[1].cards[0].title, "Minor");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("LIST".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!("kanban".parse::<ViewMode>().unwrap(), ViewMode::Kanban);
        assert!("table".parse::<ViewMode>().is_err());
    }
}
