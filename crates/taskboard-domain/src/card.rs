use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{list::ListId, tag::Tag, tag::TagId, user::UserId};

pub type CardId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl CardPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            CardPriority::Low => "LOW",
            CardPriority::Medium => "MEDIUM",
            CardPriority::High => "HIGH",
            CardPriority::Critical => "CRITICAL",
        }
    }
}

/// Sort rank over `LOW, MEDIUM, HIGH, CRITICAL, unset`.
pub fn priority_rank(priority: Option<CardPriority>) -> u8 {
    match priority {
        Some(CardPriority::Low) => 0,
        Some(CardPriority::Medium) => 1,
        Some(CardPriority::High) => 2,
        Some(CardPriority::Critical) => 3,
        None => 4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityIcon {
    SignalLow,
    SignalMedium,
    SignalHigh,
    Alert,
}

impl PriorityIcon {
    /// Unset priority has no icon.
    pub fn for_priority(priority: Option<CardPriority>) -> Option<Self> {
        priority.map(|p| match p {
            CardPriority::Low => PriorityIcon::SignalLow,
            CardPriority::Medium => PriorityIcon::SignalMedium,
            CardPriority::High => PriorityIcon::SignalHigh,
            CardPriority::Critical => PriorityIcon::Alert,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<CardPriority>,
    #[serde(default)]
    pub assigned_user_id: Option<UserId>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub list_id: ListId,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(
        id: impl Into<CardId>,
        list_id: impl Into<ListId>,
        title: impl Into<String>,
        order: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            priority: None,
            assigned_user_id: None,
            tags: Vec::new(),
            list_id: list_id.into(),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: CardPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assignee(mut self, user_id: impl Into<UserId>) -> Self {
        self.assigned_user_id = Some(user_id.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }

    pub fn tag_ids(&self) -> impl Iterator<Item = &TagId> {
        self.tags.iter().map(|t| &t.id)
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn assign(&mut self, user_id: Option<UserId>) {
        self.assigned_user_id = user_id;
        self.updated_at = Utc::now();
    }

    pub fn move_to_list(&mut self, list_id: ListId, order: i32) {
        self.list_id = list_id;
        self.order = order;
        self.updated_at = Utc::now();
    }

    pub fn priority_icon(&self) -> Option<PriorityIcon> {
        PriorityIcon::for_priority(self.priority)
    }
}
