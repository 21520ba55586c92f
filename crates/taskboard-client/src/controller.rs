//! Local state of a single card on the board.
//!
//! Assignment only changes once the gateway confirms it. The title editor is
//! the exception: leaving the field shows the submitted title right away and
//! falls back to the last confirmed one if the rename is rejected.

use serde::Serialize;
use taskboard_core::TaskboardResult;
use taskboard_domain::{
    color_for_id, Card, FieldUpdate, PaletteColor, PriorityIcon, Tag, TagId, User, UserId,
};

use crate::api::{BoardActions, BoardQueries};
use crate::cache::{QueryCache, QueryKey};
use crate::gateway::MutationGateway;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentState {
    Unassigned,
    Assigned(UserId),
}

impl AssignmentState {
    pub fn from_card(card: &Card) -> Self {
        match &card.assigned_user_id {
            Some(user_id) => AssignmentState::Assigned(user_id.clone()),
            None => AssignmentState::Unassigned,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            AssignmentState::Assigned(id) => Some(id.as_str()),
            AssignmentState::Unassigned => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    User {
        image: Option<String>,
        initial: Option<char>,
    },
    Unassigned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBadge {
    pub id: TagId,
    pub name: String,
    pub color: PaletteColor,
    pub css_class: String,
}

impl TagBadge {
    pub fn from_tag(tag: &Tag) -> Self {
        let color = color_for_id(&tag.id);
        Self {
            id: tag.id.clone(),
            name: tag.name.clone(),
            color,
            css_class: color.css_class(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleEditor {
    confirmed: String,
    pending: Option<String>,
    editing: bool,
}

impl TitleEditor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            confirmed: title.into(),
            pending: None,
            editing: false,
        }
    }

    /// The title to display: the submitted one while a rename is in flight.
    pub fn title(&self) -> &str {
        self.pending.as_deref().unwrap_or(&self.confirmed)
    }

    pub fn confirmed_title(&self) -> &str {
        &self.confirmed
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    /// Leaves edit mode. Returns the title to submit, or `None` when it did
    /// not change once surrounding whitespace is ignored.
    pub fn blur(&mut self, submitted: impl Into<String>) -> Option<String> {
        self.editing = false;
        let submitted = submitted.into();
        if submitted.trim() == self.confirmed {
            return None;
        }
        self.pending = Some(submitted.clone());
        Some(submitted)
    }

    pub fn confirm(&mut self, title: impl Into<String>) {
        self.confirmed = title.into();
        self.pending = None;
    }

    pub fn revert(&mut self) {
        self.pending = None;
    }
}

#[derive(Debug, Clone)]
pub struct CardController {
    card: Card,
    assignment: AssignmentState,
    title: TitleEditor,
    comment_count: Option<u32>,
}

impl CardController {
    pub fn new(card: Card) -> Self {
        Self {
            assignment: AssignmentState::from_card(&card),
            title: TitleEditor::new(card.title.clone()),
            comment_count: None,
            card,
        }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn assignment(&self) -> &AssignmentState {
        &self.assignment
    }

    pub fn title_editor(&self) -> &TitleEditor {
        &self.title
    }

    pub fn start_editing_title(&mut self) {
        self.title.start_editing();
    }

    /// Re-derives local state from a newer server snapshot of the card.
    pub fn sync_from(&mut self, card: Card) {
        self.assignment = AssignmentState::from_card(&card);
        if !self.title.is_pending() {
            self.title = TitleEditor::new(card.title.clone());
        }
        self.card = card;
    }

    /// The assigned user if it resolves in `users`; a miss reads as unassigned.
    pub fn assigned_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        let user_id = self.assignment.user_id()?;
        users.iter().find(|u| u.id == user_id)
    }

    pub fn avatar(&self, users: &[User]) -> Avatar {
        match self.assigned_user(users) {
            Some(user) => Avatar::User {
                image: user.image.clone(),
                initial: user.initial(),
            },
            None => Avatar::Unassigned,
        }
    }

    /// Whether the picker should tick `user_id`. `None` asks about "Not assigned".
    pub fn is_selected_in_picker(&self, user_id: Option<&str>, users: &[User]) -> bool {
        let current = self.assigned_user(users).map(|u| u.id.as_str());
        current == user_id
    }

    /// Assigns `user_id`, or unassigns on `None`, once the gateway confirms.
    ///
    /// Only the assignee is taken from the confirmed card; fields the
    /// response leaves out keep their local values.
    pub async fn assign<A: BoardActions>(
        &mut self,
        gateway: &MutationGateway<A>,
        user_id: Option<UserId>,
    ) -> TaskboardResult<()> {
        let confirmed = gateway
            .assign_user(&self.card.id, FieldUpdate::from(user_id))
            .await?;
        if let Some(confirmed) = confirmed {
            self.card.assigned_user_id = confirmed.assigned_user_id;
            self.card.updated_at = confirmed.updated_at;
            self.assignment = AssignmentState::from_card(&self.card);
        }
        Ok(())
    }

    /// Submits the edited title on blur.
    pub async fn commit_title<A: BoardActions>(
        &mut self,
        gateway: &MutationGateway<A>,
        submitted: impl Into<String>,
    ) -> TaskboardResult<()> {
        let Some(submitted) = self.title.blur(submitted) else {
            return Ok(());
        };

        match gateway.rename_card(&self.card, &submitted).await {
            Ok(Some(confirmed)) => {
                self.title.confirm(confirmed.title.clone());
                self.card.title = confirmed.title;
                self.card.updated_at = confirmed.updated_at;
                Ok(())
            }
            Ok(None) => {
                self.title.revert();
                Ok(())
            }
            Err(err) => {
                self.title.revert();
                Err(err)
            }
        }
    }

    pub fn tag_badges(&self) -> Vec<TagBadge> {
        self.card.tags.iter().map(TagBadge::from_tag).collect()
    }

    /// Zero until the count has been loaded.
    pub fn comment_count(&self) -> u32 {
        self.comment_count.unwrap_or(0)
    }

    pub async fn refresh_comment_count<Q: BoardQueries + ?Sized>(
        &mut self,
        queries: &Q,
        cache: &QueryCache,
    ) -> TaskboardResult<u32> {
        let card_id = self.card.id.clone();
        let count = cache
            .fetch(QueryKey::card_comments(&card_id), || {
                queries.comment_count(&card_id)
            })
            .await?;
        self.comment_count = Some(count);
        Ok(count)
    }

    pub fn priority_icon(&self) -> Option<PriorityIcon> {
        self.card.priority_icon()
    }
}
