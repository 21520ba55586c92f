use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};

use crate::{card::Card, list::List};

pub type BoardId = String;
pub type WorkspaceId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(
        id: impl Into<BoardId>,
        workspace_id: impl Into<WorkspaceId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            workspace_id: workspace_id.into(),
            lists: Vec::new(),
        }
    }

    pub fn with_list(mut self, mut list: List) -> Self {
        list.board_id = self.id.clone();
        self.lists.push(list);
        self
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.lists.iter().flat_map(|l| l.cards.iter())
    }

    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.lists.iter().find_map(|l| l.find_card(card_id))
    }

    pub fn find_card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.lists
            .iter_mut()
            .flat_map(|l| l.cards.iter_mut())
            .find(|c| c.id == card_id)
    }

    /// Moves a card to `index` within `destination_list_id`, as a drop would.
    ///
    /// The index is clamped to the destination length. Orders in the source and
    /// destination lists are renumbered densely from zero.
    pub fn move_card(
        &mut self,
        card_id: &str,
        destination_list_id: &str,
        index: usize,
    ) -> TaskboardResult<()> {
        let destination = self
            .lists
            .iter()
            .position(|l| l.id == destination_list_id)
            .ok_or_else(|| TaskboardError::NotFound(format!("list {}", destination_list_id)))?;

        let (source, position) = self
            .lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| {
                list.cards
                    .iter()
                    .position(|c| c.id == card_id)
                    .map(|ci| (li, ci))
            })
            .ok_or_else(|| TaskboardError::NotFound(format!("card {}", card_id)))?;

        let mut card = self.lists[source].cards.remove(position);
        let target = &mut self.lists[destination];
        let index = index.min(target.cards.len());
        card.move_to_list(target.id.clone(), index as i32);
        target.cards.insert(index, card);

        self.lists[source].renumber();
        if source != destination {
            self.lists[destination].renumber();
        }
        Ok(())
    }
}
