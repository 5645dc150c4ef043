use std::time::Duration;
use ureq::Agent;

use crate::error::{Result, TrelloError};
use crate::models::*;

/// Trello REST API client, scoped to one board
pub struct TrelloClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    api_token: String,
    board_id: String,
}

impl TrelloClient {
    /// Create a new Trello client.
    ///
    /// `base_url` should include the API version path, e.g.
    /// `https://api.trello.com/1`. Authentication is the `key`/`token`
    /// query-parameter pair the Trello API expects on every request.
    pub fn new(base_url: &str, api_key: &str, api_token: &str, board_id: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_token: api_token.to_string(),
            board_id: board_id.to_string(),
        }
    }

    /// Build a request URL with credentials and extra query parameters appended
    fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}{}?key={}&token={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.api_token)
        );
        for (name, value) in params {
            url.push_str(&format!("&{}={}", name, urlencoding::encode(value)));
        }
        url
    }

    /// Check response status and return an error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Trello error payloads are {"message": "..."} or {"error": "..."},
        // and occasionally plain text ("invalid key").
        let message = if let Ok(error_value) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = error_value.get("message").and_then(|m| m.as_str()) {
                msg.to_string()
            } else if let Some(msg) = error_value.get("error").and_then(|e| e.as_str()) {
                msg.to_string()
            } else if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            }
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(TrelloError::Unauthorized)
        } else {
            Err(TrelloError::Api { status, message })
        }
    }

    /// Handle transport-level errors
    fn handle_error(&self, err: ureq::Error) -> TrelloError {
        TrelloError::Http(err)
    }

    // ==================== Board read operations ====================

    /// List the lists (columns) on the board
    pub fn list_lists(&self) -> Result<Vec<TrelloList>> {
        let url = self.url(&format!("/boards/{}/lists", self.board_id), &[]);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let lists: Vec<TrelloList> = response.body_mut().read_json()?;
        Ok(lists)
    }

    /// List all labels on the board
    pub fn list_labels(&self) -> Result<Vec<TrelloLabel>> {
        let url = self.url(&format!("/boards/{}/labels", self.board_id), &[]);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let labels: Vec<TrelloLabel> = response.body_mut().read_json()?;
        Ok(labels)
    }

    // ==================== Write operations ====================

    /// Create a label on the board
    pub fn create_label(&self, name: &str, color: Option<&str>) -> Result<TrelloLabel> {
        let mut params = vec![("name", name)];
        if let Some(color) = color {
            params.push(("color", color));
        }
        let url = self.url(&format!("/boards/{}/labels", self.board_id), &params);

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_empty()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let label: TrelloLabel = response.body_mut().read_json()?;
        Ok(label)
    }

    /// Create a card in a list
    pub fn create_card(&self, create: &CreateTrelloCard) -> Result<TrelloCard> {
        let id_labels = create.label_ids.join(",");
        let mut params = vec![
            ("idList", create.list_id.as_str()),
            ("name", create.name.as_str()),
            ("desc", create.desc.as_str()),
        ];
        if !id_labels.is_empty() {
            params.push(("idLabels", id_labels.as_str()));
        }
        if let Some(due) = &create.due {
            params.push(("due", due.as_str()));
        }
        let url = self.url("/cards", &params);

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_empty()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let card: TrelloCard = response.body_mut().read_json()?;
        Ok(card)
    }

    /// Create a checklist on a card, placed at the bottom
    pub fn create_checklist(&self, card_id: &str, name: &str) -> Result<TrelloChecklist> {
        let url = self.url(
            "/checklists",
            &[("idCard", card_id), ("name", name), ("pos", "bottom")],
        );

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_empty()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let checklist: TrelloChecklist = response.body_mut().read_json()?;
        Ok(checklist)
    }

    /// Append an item to the bottom of a checklist
    pub fn add_check_item(&self, checklist_id: &str, name: &str) -> Result<TrelloCheckItem> {
        let url = self.url(
            &format!("/checklists/{}/checkItems", checklist_id),
            &[("name", name), ("pos", "bottom")],
        );

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_empty()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let item: TrelloCheckItem = response.body_mut().read_json()?;
        Ok(item)
    }
}
