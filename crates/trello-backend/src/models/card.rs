use serde::{Deserialize, Serialize};

/// Trello card
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloCard {
    pub id: String,
    pub name: String,
    pub desc: Option<String>,
    pub due: Option<String>,
    pub short_url: Option<String>,
    pub id_list: Option<String>,
}

/// Parameters for creating a new card.
///
/// The Trello create-card endpoint takes everything as query parameters,
/// so this is a parameter bag rather than a JSON body.
#[derive(Debug, Clone, Default)]
pub struct CreateTrelloCard {
    pub list_id: String,
    pub name: String,
    pub desc: String,
    /// Label ids, sent comma-joined as `idLabels`
    pub label_ids: Vec<String>,
    /// Due timestamp, ISO-8601 UTC
    pub due: Option<String>,
}
