use serde::{Deserialize, Serialize};

/// Trello list (a column on a board)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrelloList {
    pub id: String,
    pub name: String,
    /// Archived lists come back with `closed: true`
    #[serde(default)]
    pub closed: bool,
}
