use serde::{Deserialize, Serialize};

/// Trello checklist attached to a card
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloChecklist {
    pub id: String,
    pub name: String,
    pub id_card: Option<String>,
}

/// A single check item on a checklist
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrelloCheckItem {
    pub id: String,
    pub name: String,
    /// "complete" or "incomplete"
    pub state: Option<String>,
}
