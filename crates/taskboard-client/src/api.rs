//! Boundary to the server: typed actions that mutate, and read queries.
//!
//! Both sides are opaque request/response calls. Implementations report a
//! server-side rejection as `TaskboardError::Gateway` carrying the server's
//! message, and a failed round trip as `TaskboardError::Transport`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use taskboard_core::TaskboardResult;
use taskboard_domain::{BoardId, Card, CardId, Tag, UserId, WorkspaceId};

/// Wire value for "remove the assignee".
pub const UNASSIGNED_SENTINEL: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserInput {
    pub card_id: CardId,
    /// A user id, or [`UNASSIGNED_SENTINEL`].
    pub user_id: String,
}

impl AssignUserInput {
    pub fn assign(card_id: impl Into<CardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            card_id: card_id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn unassign(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
            user_id: UNASSIGNED_SENTINEL.to_string(),
        }
    }

    pub fn is_unassign(&self) -> bool {
        self.user_id == UNASSIGNED_SENTINEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardInput {
    pub id: CardId,
    pub title: String,
    pub board_id: BoardId,
    pub workspace_id: WorkspaceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagInput {
    pub name: String,
    pub board_id: BoardId,
    pub workspace_id: WorkspaceId,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardActions: Send + Sync {
    async fn assign_user_to_card(&self, input: AssignUserInput) -> TaskboardResult<Card>;

    async fn update_card(&self, input: UpdateCardInput) -> TaskboardResult<Card>;

    async fn create_tag(&self, input: CreateTagInput) -> TaskboardResult<Tag>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardQueries: Send + Sync {
    /// Every tag defined on the board.
    async fn available_tags(&self, board_id: &str) -> TaskboardResult<Vec<Tag>>;

    async fn comment_count(&self, card_id: &str) -> TaskboardResult<u32>;
}

#[async_trait]
impl<T: BoardActions + ?Sized> BoardActions for Arc<T> {
    async fn assign_user_to_card(&self, input: AssignUserInput) -> TaskboardResult<Card> {
        (**self).assign_user_to_card(input).await
    }

    async fn update_card(&self, input: UpdateCardInput) -> TaskboardResult<Card> {
        (**self).update_card(input).await
    }

    async fn create_tag(&self, input: CreateTagInput) -> TaskboardResult<Tag> {
        (**self).create_tag(input).await
    }
}

#[async_trait]
impl<T: BoardQueries + ?Sized> BoardQueries for Arc<T> {
    async fn available_tags(&self, board_id: &str) -> TaskboardResult<Vec<Tag>> {
        (**self).available_tags(board_id).await
    }

    async fn comment_count(&self, card_id: &str) -> TaskboardResult<u32> {
        (**self).comment_count(card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassign_uses_sentinel_on_the_wire() {
        let input = AssignUserInput::unassign("c1");
        assert!(input.is_unassign());
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"cardId": "c1", "userId": "null"})
        );

        assert!(!AssignUserInput::assign("c1", "u1").is_unassign());
    }

    #[test]
    fn test_update_card_input_shape() {
        let input = UpdateCardInput {
            id: "c1".to_string(),
            title: "Renamed".to_string(),
            board_id: "b1".to_string(),
            workspace_id: "w1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"id": "c1", "title": "Renamed", "boardId": "b1", "workspaceId": "w1"})
        );
    }
}
