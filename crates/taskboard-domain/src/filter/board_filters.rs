//! Filter state for a mounted board view.
//!
//! Holds the search term, the selected assignee and the selected tags, and
//! derives the filtered lists from whatever snapshot is currently loaded.
//! Selections that no longer resolve against the snapshot match nothing.

use super::card_filter::{AssigneeFilter, CardFilter, CompositeFilter, SearchFilter, TagFilter};
use crate::{List, Tag, TagId, User, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilters {
    search_term: String,
    selected_user: Option<UserId>,
    /// Selection order, no duplicates.
    selected_tags: Vec<TagId>,
}

impl BoardFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_user(&self) -> Option<&str> {
        self.selected_user.as_deref()
    }

    pub fn selected_tags(&self) -> &[TagId] {
        &self.selected_tags
    }

    pub fn is_tag_selected(&self, tag_id: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag_id)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Selecting the already selected user clears the selection.
    pub fn set_selected_user(&mut self, user_id: Option<UserId>) {
        self.selected_user = match user_id {
            Some(id) if self.selected_user.as_deref() == Some(id.as_str()) => None,
            other => other,
        };
    }

    pub fn toggle_tag(&mut self, tag_id: impl Into<TagId>) {
        let tag_id = tag_id.into();
        match self.selected_tags.iter().position(|t| *t == tag_id) {
            Some(index) => {
                self.selected_tags.remove(index);
            }
            None => self.selected_tags.push(tag_id),
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.selected_user.is_some()
            || !self.selected_tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_user = None;
        self.selected_tags.clear();
    }

    /// AND of every active criterion.
    pub fn card_filter(&self) -> CompositeFilter {
        let mut filter = CompositeFilter::new();
        if !self.search_term.is_empty() {
            filter = filter.with_filter(Box::new(SearchFilter::new(&self.search_term)));
        }
        if let Some(user_id) = &self.selected_user {
            filter = filter.with_filter(Box::new(AssigneeFilter::new(user_id.clone())));
        }
        if !self.selected_tags.is_empty() {
            filter = filter.with_filter(Box::new(TagFilter::any_of(
                self.selected_tags.iter().cloned(),
            )));
        }
        filter
    }

    /// Lists in their original order, each keeping only the matching cards.
    pub fn filtered_lists(&self, lists: &[List]) -> Vec<List> {
        let filter = self.card_filter();
        lists
            .iter()
            .map(|list| List {
                cards: list
                    .cards
                    .iter()
                    .filter(|card| filter.matches(card))
                    .cloned()
                    .collect(),
                ..list.clone()
            })
            .collect()
    }

    /// The selected user, if it resolves in `users`.
    pub fn selected_user_badge<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        let selected = self.selected_user.as_deref()?;
        users.iter().find(|u| u.id == selected)
    }

    /// Selected tags that resolve in `tags`, in selection order.
    pub fn selected_tag_badges<'a>(&self, tags: &'a [Tag]) -> Vec<&'a Tag> {
        self.selected_tags
            .iter()
            .filter_map(|id| tags.iter().find(|t| t.id == *id))
            .collect()
    }
}

/// Tag picker search, case-insensitive on the tag name.
pub fn filter_tags<'a>(tags: &'a [Tag], term: &str) -> Vec<&'a Tag> {
    tags.iter().filter(|t| t.name_matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Card;

    fn t1() -> Tag {
        Tag::new("t1", "backend")
    }

    fn two_list_board() -> Vec<List> {
        vec![
            List::new("a", "b1", "A", 0)
                .with_card(Card::new("c1", "a", "Fix bug", 0).with_tag(t1()))
                .with_card(Card::new("c2", "a", "Write docs", 1)),
            List::new("b", "b1", "B", 1),
        ]
    }

    fn mixed_board() -> Vec<List> {
        vec![
            List::new("a", "b1", "Todo", 0)
                .with_card(
                    Card::new("c1", "a", "Fix login bug", 0)
                        .with_assignee("u1")
                        .with_tag(t1()),
                )
                .with_card(
                    Card::new("c2", "a", "Write docs", 1)
                        .with_description("Cover the login flow")
                        .with_assignee("u2"),
                ),
            List::new("b", "b1", "Done", 1)
                .with_card(Card::new("c3", "b", "Ship release", 0).with_tag(Tag::new("t2", "ops"))),
        ]
    }

    fn titles(lists: &[List]) -> Vec<Vec<&str>> {
        lists
            .iter()
            .map(|l| l.cards.iter().map(|c| c.title.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_no_filters_returns_snapshot_unchanged() {
        let lists = mixed_board();
        let filters = BoardFilters::new();
        assert!(!filters.has_active_filters());
        assert_eq!(filters.filtered_lists(&lists), lists);
    }

    #[test]
    fn test_empty_snapshot_yields_empty() {
        let filters = BoardFilters::new();
        assert!(filters.filtered_lists(&[]).is_empty());
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let mut filters = BoardFilters::new();
        filters.set_search_term("LOGIN");
        assert_eq!(
            titles(&filters.filtered_lists(&mixed_board())),
            vec![vec!["Fix login bug", "Write docs"], vec![]]
        );
    }

    #[test]
    fn test_search_matching_nothing_keeps_lists() {
        let mut filters = BoardFilters::new();
        filters.set_search_term("no such card");
        let filtered = filters.filtered_lists(&mixed_board());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|l| l.cards.is_empty()));
    }

    #[test]
    fn test_tag_selection_scenario() {
        let mut filters = BoardFilters::new();
        filters.toggle_tag("t1");

        let filtered = filters.filtered_lists(&two_list_board());
        assert_eq!(filtered.len(), 2);
        assert_eq!(titles(&filtered), vec![vec!["Fix bug"], vec![]]);
        assert_eq!(filtered[1].id, "b");
    }

    #[test]
    fn test_toggle_tag_twice_restores_selection() {
        let mut filters = BoardFilters::new();
        filters.toggle_tag("t1");
        let before = filters.clone();

        filters.toggle_tag("t2");
        assert_eq!(filters.selected_tags(), ["t1".to_string(), "t2".to_string()]);
        filters.toggle_tag("t2");
        assert_eq!(filters, before);
    }

    #[test]
    fn test_selecting_same_user_clears() {
        let users = [User::new("u1", "Alice"), User::new("u2", "Bob")];
        let mut filters = BoardFilters::new();

        filters.set_selected_user(Some(users[0].id.clone()));
        assert_eq!(filters.selected_user(), Some("u1"));

        filters.set_selected_user(Some(users[1].id.clone()));
        assert_eq!(filters.selected_user(), Some("u2"));

        filters.set_selected_user(Some(users[1].id.clone()));
        assert_eq!(filters.selected_user(), None);

        filters.set_selected_user(Some(users[0].id.clone()));
        filters.set_selected_user(None);
        assert_eq!(filters.selected_user(), None);
    }

    #[test]
    fn test_all_filters_are_anded() {
        let mut filters = BoardFilters::new();
        filters.set_search_term("login");
        filters.set_selected_user(Some("u1".to_string()));
        assert_eq!(
            titles(&filters.filtered_lists(&mixed_board())),
            vec![vec!["Fix login bug"], vec![]]
        );

        filters.toggle_tag("t2");
        assert_eq!(
            titles(&filters.filtered_lists(&mixed_board())),
            vec![Vec::<&str>::new(), vec![]]
        );
    }

    #[test]
    fn test_stale_selections_match_nothing() {
        let mut filters = BoardFilters::new();
        filters.set_selected_user(Some("gone".to_string()));
        let filtered = filters.filtered_lists(&mixed_board());
        assert!(filtered.iter().all(|l| l.cards.is_empty()));

        assert!(filters.selected_user_badge(&[User::new("u1", "Alice")]).is_none());
    }

    #[test]
    fn test_selected_tag_badges_skip_unknown() {
        let tags = [t1(), Tag::new("t2", "ops")];
        let mut filters = BoardFilters::new();
        filters.toggle_tag("t2");
        filters.toggle_tag("deleted");
        filters.toggle_tag("t1");

        let names: Vec<&str> = filters
            .selected_tag_badges(&tags)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["ops", "backend"]);
    }

    #[test]
    fn test_clear() {
        let mut filters = BoardFilters::new();
        filters.set_search_term("x");
        filters.set_selected_user(Some("u1".to_string()));
        filters.toggle_tag("t1");
        assert!(filters.has_active_filters());

        filters.clear();
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_filter_tags_by_name() {
        let tags = [t1(), Tag::new("t2", "Backlog"), Tag::new("t3", "ops")];
        let names: Vec<&str> = filter_tags(&tags, "BACK")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["backend", "Backlog"]);
        assert_eq!(filter_tags(&tags, "").len(), 3);
        assert!(filter_tags(&tags, "zzz").is_empty());
    }
}
