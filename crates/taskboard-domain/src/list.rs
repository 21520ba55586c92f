use serde::{Deserialize, Serialize};

use crate::{board::BoardId, card::Card};

pub type ListId = String;

/// Ordered column of cards within a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub board_id: BoardId,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(
        id: impl Into<ListId>,
        board_id: impl Into<BoardId>,
        title: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            board_id: board_id.into(),
            order,
            cards: Vec::new(),
        }
    }

    pub fn with_card(mut self, mut card: Card) -> Self {
        card.list_id = self.id.clone();
        self.cards.push(card);
        self
    }

    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub(crate) fn renumber(&mut self) {
        for (position, card) in self.cards.iter_mut().enumerate() {
            card.order = position as i32;
        }
    }
}
