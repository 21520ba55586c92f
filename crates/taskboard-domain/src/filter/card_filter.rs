//! Card filter predicates.

use std::collections::HashSet;

use crate::{Card, TagId, UserId};

/// Trait for filtering cards by various criteria.
pub trait CardFilter {
    /// Returns true if the card matches the filter criteria.
    fn matches(&self, card: &Card) -> bool;
}

/// Case-insensitive substring match on title or description.
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            term: term.as_ref().to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl CardFilter for SearchFilter {
    fn matches(&self, card: &Card) -> bool {
        if self.term.is_empty() {
            return true;
        }
        card.title.to_lowercase().contains(&self.term)
            || card
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&self.term))
    }
}

/// Cards assigned to one user.
pub struct AssigneeFilter {
    user_id: UserId,
}

impl AssigneeFilter {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl CardFilter for AssigneeFilter {
    fn matches(&self, card: &Card) -> bool {
        card.assigned_user_id.as_deref() == Some(self.user_id.as_str())
    }
}

/// Cards carrying at least one of the given tags.
pub struct TagFilter {
    tag_ids: HashSet<TagId>,
}

impl TagFilter {
    pub fn any_of(ids: impl IntoIterator<Item = TagId>) -> Self {
        Self {
            tag_ids: ids.into_iter().collect(),
        }
    }
}

impl CardFilter for TagFilter {
    fn matches(&self, card: &Card) -> bool {
        card.tag_ids().any(|id| self.tag_ids.contains(id))
    }
}

/// Combine multiple filters with AND logic.
pub struct CompositeFilter {
    filters: Vec<Box<dyn CardFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all cards).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn CardFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFilter for CompositeFilter {
    fn matches(&self, card: &Card) -> bool {
        self.filters.iter().all(|f| f.matches(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    fn card(title: &str) -> Card {
        Card::new("c1", "l1", title, 0)
    }

    #[test]
    fn test_search_filter_title_case_insensitive() {
        let card = card("Fix authentication bug");
        assert!(SearchFilter::new("auth").matches(&card));
        assert!(SearchFilter::new("AUTH").matches(&card));
        assert!(!SearchFilter::new("database").matches(&card));
    }

    #[test]
    fn test_search_filter_description() {
        let card = card("Refactor").with_description("Split the Parser module");
        assert!(SearchFilter::new("parser").matches(&card));
        assert!(!SearchFilter::new("lexer").matches(&card));
    }

    #[test]
    fn test_search_filter_empty_term_matches_all() {
        assert!(SearchFilter::new("").matches(&card("Anything")));
    }

    #[test]
    fn test_assignee_filter() {
        let assigned = card("Task").with_assignee("u1");
        assert!(AssigneeFilter::new("u1").matches(&assigned));
        assert!(!AssigneeFilter::new("u2").matches(&assigned));
        assert!(!AssigneeFilter::new("u1").matches(&card("Unassigned")));
    }

    #[test]
    fn test_tag_filter_intersection() {
        let tagged = card("Task")
            .with_tag(Tag::new("t1", "backend"))
            .with_tag(Tag::new("t2", "urgent"));

        assert!(TagFilter::any_of(vec!["t2".to_string()]).matches(&tagged));
        assert!(TagFilter::any_of(vec!["t3".to_string(), "t1".to_string()]).matches(&tagged));
        assert!(!TagFilter::any_of(vec!["t3".to_string()]).matches(&tagged));
        assert!(!TagFilter::any_of(vec!["t1".to_string()]).matches(&card("Untagged")));
    }

    #[test]
    fn test_composite_filter() {
        let target = card("Fix bug").with_assignee("u1");

        assert!(CompositeFilter::new().matches(&target));

        let both = CompositeFilter::new()
            .with_filter(Box::new(SearchFilter::new("bug")))
            .with_filter(Box::new(AssigneeFilter::new("u1")));
        assert!(both.matches(&target));

        let failing = CompositeFilter::new()
            .with_filter(Box::new(SearchFilter::new("bug")))
            .with_filter(Box::new(AssigneeFilter::new("u2")));
        assert!(!failing.matches(&target));
    }
}
