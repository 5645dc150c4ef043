use serde::{Deserialize, Serialize};

/// Trello label
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrelloLabel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
}
