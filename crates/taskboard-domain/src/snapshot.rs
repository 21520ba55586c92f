use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use taskboard_core::{TaskboardError, TaskboardResult};

use crate::{Board, Card, List, Tag, User};

/// Client-side mirror of one board view: the board with its lists and cards,
/// the board members, and the board's tag set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub board: Board,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl BoardSnapshot {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            users: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn from_json(data: &str) -> TaskboardResult<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn lists(&self) -> &[List] {
        &self.board.lists
    }

    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn find_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id)
    }

    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.board.find_card(card_id)
    }

    /// Replaces a card with its server-confirmed version. Returns false when
    /// the card is not part of this snapshot.
    pub fn apply_card(&mut self, card: Card) -> bool {
        match self.board.find_card_mut(&card.id) {
            Some(existing) => {
                *existing = card;
                true
            }
            None => false,
        }
    }

    /// Adds or replaces a tag in the board's tag set.
    pub fn apply_tag(&mut self, tag: Tag) {
        match self.tags.iter_mut().find(|t| t.id == tag.id) {
            Some(existing) => *existing = tag,
            None => self.tags.push(tag),
        }
    }

    /// Checks that every card sits in exactly one list, under that list's id,
    /// and only references tags from the board's tag set.
    pub fn validate(&self) -> TaskboardResult<()> {
        let known_tags: HashSet<&str> = self.tags.iter().map(|t| t.id.as_str()).collect();
        let mut seen = HashSet::new();

        for list in &self.board.lists {
            for card in &list.cards {
                if !seen.insert(card.id.as_str()) {
                    return Err(TaskboardError::Validation(format!(
                        "card {} appears in more than one list",
                        card.id
                    )));
                }
                if card.list_id != list.id {
                    return Err(TaskboardError::Validation(format!(
                        "card {} is stored under list {} but references list {}",
                        card.id, list.id, card.list_id
                    )));
                }
                if let Some(tag) = card.tags.iter().find(|t| !known_tags.contains(t.id.as_str())) {
                    return Err(TaskboardError::Validation(format!(
                        "card {} references unknown tag {}",
                        card.id, tag.id
                    )));
                }
            }
        }
        Ok(())
    }
}
