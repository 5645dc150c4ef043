//! Implementation of board-core traits for TrelloClient

use board_core::{
    BoardError, BoardList, Card, CheckItem, Checklist, CreateCard, CreateLabel, Label, Result,
    TaskBoard,
};

use crate::client::TrelloClient;
use crate::models::CreateTrelloCard;

impl TaskBoard for TrelloClient {
    fn list_lists(&self) -> Result<Vec<BoardList>> {
        self.list_lists()
            .map(|lists| lists.into_iter().map(Into::into).collect())
            .map_err(BoardError::from)
    }

    fn list_labels(&self) -> Result<Vec<Label>> {
        self.list_labels()
            .map(|labels| labels.into_iter().map(Into::into).collect())
            .map_err(BoardError::from)
    }

    fn create_label(&self, label: &CreateLabel) -> Result<Label> {
        self.create_label(&label.name, label.color.as_deref())
            .map(Into::into)
            .map_err(BoardError::from)
    }

    fn create_card(&self, card: &CreateCard) -> Result<Card> {
        let create = CreateTrelloCard {
            list_id: card.list_id.clone(),
            name: card.name.clone(),
            desc: card.description.clone(),
            label_ids: card.label_ids.clone(),
            due: card.due.clone(),
        };

        self.create_card(&create)
            .map(Into::into)
            .map_err(BoardError::from)
    }

    fn create_checklist(&self, card_id: &str, name: &str) -> Result<Checklist> {
        self.create_checklist(card_id, name)
            .map(Into::into)
            .map_err(BoardError::from)
    }

    fn add_check_item(&self, checklist_id: &str, name: &str) -> Result<CheckItem> {
        self.add_check_item(checklist_id, name)
            .map(Into::into)
            .map_err(BoardError::from)
    }
}
