//! Validated server mutations with their cache side effects.
//!
//! Every mutation goes through the same steps: validate locally, dispatch,
//! and on success invalidate the queries that depend on the touched entity
//! before handing the confirmed entity back. Failures are reported as a
//! notification and leave every piece of local state as it was.

use std::sync::Arc;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{BoardId, Card, FieldUpdate, Tag, UserId, WorkspaceId};

use crate::api::{AssignUserInput, BoardActions, CreateTagInput, UpdateCardInput};
use crate::cache::{QueryCache, QueryKey};
use crate::notification::NotificationCenter;

/// Identifiers resolved from where the user currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    pub workspace_id: Option<WorkspaceId>,
    pub board_id: Option<BoardId>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace(mut self, workspace_id: impl Into<WorkspaceId>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    pub fn require_workspace(&self) -> TaskboardResult<&str> {
        self.workspace_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TaskboardError::Validation("Workspace ID is required.".to_string()))
    }

    pub fn require_board(&self) -> TaskboardResult<&str> {
        self.board_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TaskboardError::Validation("Board ID is required.".to_string()))
    }
}

pub struct MutationGateway<A> {
    actions: A,
    cache: Arc<QueryCache>,
    notifications: Arc<NotificationCenter>,
    navigation: NavigationContext,
}

impl<A: BoardActions> MutationGateway<A> {
    pub fn new(
        actions: A,
        cache: Arc<QueryCache>,
        notifications: Arc<NotificationCenter>,
        navigation: NavigationContext,
    ) -> Self {
        Self {
            actions,
            cache,
            notifications,
            navigation,
        }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }

    pub fn navigation(&self) -> &NavigationContext {
        &self.navigation
    }

    pub fn set_navigation(&mut self, navigation: NavigationContext) {
        self.navigation = navigation;
    }

    /// `Set` assigns, `Clear` unassigns, `NoChange` dispatches nothing and
    /// returns `Ok(None)`.
    pub async fn assign_user(
        &self,
        card_id: &str,
        assignment: FieldUpdate<UserId>,
    ) -> TaskboardResult<Option<Card>> {
        let input = match assignment {
            FieldUpdate::NoChange => return Ok(None),
            FieldUpdate::Set(user_id) => AssignUserInput::assign(card_id, user_id),
            FieldUpdate::Clear => AssignUserInput::unassign(card_id),
        };
        let unassign = input.is_unassign();

        tracing::debug!(card_id, user_id = %input.user_id, "Dispatching assignment");
        let card = self
            .actions
            .assign_user_to_card(input)
            .await
            .map_err(|e| self.reject(e))?;

        self.invalidate_card(&card.id);
        self.notifications.success(if unassign {
            "User unassigned from card"
        } else {
            "User assigned to card"
        });
        Ok(Some(card))
    }

    /// Returns `Ok(None)` without dispatching when the title is unchanged.
    pub async fn rename_card(&self, card: &Card, title: &str) -> TaskboardResult<Option<Card>> {
        let workspace_id = self.navigation.require_workspace().map_err(|e| self.reject(e))?;
        let title = title.trim();
        if title == card.title {
            return Ok(None);
        }
        if title.is_empty() {
            return Err(self.reject(TaskboardError::Validation(
                "Title is required".to_string(),
            )));
        }
        let board_id = self.navigation.require_board().map_err(|e| self.reject(e))?;

        let input = UpdateCardInput {
            id: card.id.clone(),
            title: title.to_string(),
            board_id: board_id.to_string(),
            workspace_id: workspace_id.to_string(),
        };

        tracing::debug!(card_id = %card.id, "Dispatching rename");
        let confirmed = self
            .actions
            .update_card(input)
            .await
            .map_err(|e| self.reject(e))?;

        self.invalidate_card(&confirmed.id);
        self.notifications
            .success(format!("Renamed to \"{}\"", confirmed.title));
        Ok(Some(confirmed))
    }

    pub async fn create_tag(&self, board_id: &str, name: &str) -> TaskboardResult<Tag> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject(TaskboardError::Validation(
                "Tag name is required".to_string(),
            )));
        }
        let workspace_id = self.navigation.require_workspace().map_err(|e| self.reject(e))?;

        let input = CreateTagInput {
            name: name.to_string(),
            board_id: board_id.to_string(),
            workspace_id: workspace_id.to_string(),
        };

        tracing::debug!(board_id, "Dispatching tag creation");
        let tag = self
            .actions
            .create_tag(input)
            .await
            .map_err(|e| self.reject(e))?;

        self.cache.invalidate(&QueryKey::available_tags(board_id));
        self.notifications
            .success(format!("Tag \"{}\" created", tag.name));
        Ok(tag)
    }

    fn invalidate_card(&self, card_id: &str) {
        self.cache.invalidate_all(&QueryKey::card_queries(card_id));
    }

    fn reject(&self, err: TaskboardError) -> TaskboardError {
        if err.is_validation() {
            tracing::debug!("Mutation rejected locally: {}", err);
        } else {
            tracing::warn!("Mutation failed: {}", err);
        }
        self.notifications.error(err.user_message());
        err
    }
}
