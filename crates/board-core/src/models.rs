use serde::{Deserialize, Serialize};

/// A named column on a board into which cards are placed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

/// A named tag, identified by a board-scoped id, attachable to cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

/// Data for creating a new label
#[derive(Debug, Clone)]
pub struct CreateLabel {
    pub name: String,
    /// Optional color name; the board picks a default when absent
    pub color: Option<String>,
}

/// A card on a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Due timestamp in the service's ISO-8601 format
    pub due: Option<String>,
    /// Link to the card in the service's web UI
    pub url: Option<String>,
}

/// Data for creating a new card
#[derive(Debug, Clone, Default)]
pub struct CreateCard {
    /// Target list the card is placed into
    pub list_id: String,
    pub name: String,
    pub description: String,
    /// Resolved label ids to attach, in attachment order
    pub label_ids: Vec<String>,
    /// Due timestamp in the service's ISO-8601 format
    pub due: Option<String>,
}

/// A named ordered collection of checkable items attached to a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub name: String,
}

/// A single item on a checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: String,
    pub name: String,
}
