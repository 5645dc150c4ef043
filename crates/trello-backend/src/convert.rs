//! Model conversions from Trello types to board-core types

use board_core::{BoardList, Card, CheckItem, Checklist, Label};

use crate::models::*;

impl From<TrelloList> for BoardList {
    fn from(list: TrelloList) -> Self {
        Self {
            id: list.id,
            name: list.name,
        }
    }
}

impl From<TrelloLabel> for Label {
    fn from(label: TrelloLabel) -> Self {
        Self {
            id: label.id,
            name: label.name,
            color: label.color,
        }
    }
}

impl From<TrelloCard> for Card {
    fn from(card: TrelloCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            description: card.desc.filter(|d| !d.is_empty()),
            due: card.due,
            url: card.short_url,
        }
    }
}

impl From<TrelloChecklist> for Checklist {
    fn from(checklist: TrelloChecklist) -> Self {
        Self {
            id: checklist.id,
            name: checklist.name,
        }
    }
}

impl From<TrelloCheckItem> for CheckItem {
    fn from(item: TrelloCheckItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}
