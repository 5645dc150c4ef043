//! Unit tests for TrelloClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::TrelloClient;
    use crate::error::TrelloError;
    use crate::models::CreateTrelloCard;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(uri: &str) -> TrelloClient {
        TrelloClient::new(uri, "test-key", "test-token", "board1")
    }

    /// Helper to create a mock Trello label response
    fn mock_trello_label(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "idBoard": "board1",
            "name": name,
            "color": "green"
        })
    }

    #[tokio::test]
    async fn test_list_lists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/boards/board1/lists"))
            .and(query_param("key", "test-key"))
            .and(query_param("token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "list1", "name": "Backlog", "closed": false},
                {"id": "list2", "name": "Doing", "closed": false}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let lists = client.list_lists().unwrap();

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, "list1");
        assert_eq!(lists[0].name, "Backlog");
        assert_eq!(lists[1].name, "Doing");
    }

    #[tokio::test]
    async fn test_list_labels() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/boards/board1/labels"))
            .and(query_param("key", "test-key"))
            .and(query_param("token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_trello_label("label1", "bug"),
                mock_trello_label("label2", "Team: Platform")
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let labels = client.list_labels().unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].name, "bug");
        assert_eq!(labels[1].id, "label2");
    }

    #[tokio::test]
    async fn test_create_label() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/boards/board1/labels"))
            .and(query_param("key", "test-key"))
            .and(query_param("token", "test-token"))
            .and(query_param("name", "Team: Backend"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_trello_label("label9", "Team: Backend")),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let label = client.create_label("Team: Backend", None).unwrap();

        assert_eq!(label.id, "label9");
        assert_eq!(label.name, "Team: Backend");
    }

    #[tokio::test]
    async fn test_create_card_sends_all_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/cards"))
            .and(query_param("key", "test-key"))
            .and(query_param("token", "test-token"))
            .and(query_param("idList", "list1"))
            .and(query_param("name", "Ship the importer"))
            .and(query_param("desc", "Body\n\n**User Story:** As a user"))
            .and(query_param("idLabels", "label1,label2"))
            .and(query_param("due", "2024-05-01T00:00:00.000000Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "card1",
                "name": "Ship the importer",
                "desc": "Body\n\n**User Story:** As a user",
                "due": "2024-05-01T00:00:00.000Z",
                "shortUrl": "https://trello.com/c/abc123",
                "idList": "list1"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let create = CreateTrelloCard {
            list_id: "list1".to_string(),
            name: "Ship the importer".to_string(),
            desc: "Body\n\n**User Story:** As a user".to_string(),
            label_ids: vec!["label1".to_string(), "label2".to_string()],
            due: Some("2024-05-01T00:00:00.000000Z".to_string()),
        };

        let card = client.create_card(&create).unwrap();
        assert_eq!(card.id, "card1");
        assert_eq!(card.short_url.as_deref(), Some("https://trello.com/c/abc123"));
    }

    #[tokio::test]
    async fn test_create_card_without_labels_omits_id_labels() {
        let mock_server = MockServer::start().await;

        // No idLabels matcher: the request must still be served, and the
        // recorded request is checked below for the parameter's absence.
        Mock::given(method("POST"))
            .and(path("/cards"))
            .and(query_param("idList", "list1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "card2",
                "name": "No labels",
                "desc": "",
                "due": null,
                "shortUrl": null,
                "idList": "list1"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let create = CreateTrelloCard {
            list_id: "list1".to_string(),
            name: "No labels".to_string(),
            desc: String::new(),
            label_ids: Vec::new(),
            due: None,
        };

        let card = client.create_card(&create).unwrap();
        assert_eq!(card.id, "card2");

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let query = requests[0].url.query().unwrap_or("");
        assert!(!query.contains("idLabels"));
        assert!(!query.contains("due"));
    }

    #[tokio::test]
    async fn test_create_checklist() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/checklists"))
            .and(query_param("idCard", "card1"))
            .and(query_param("name", "TODO"))
            .and(query_param("pos", "bottom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "checklist1",
                "name": "TODO",
                "idCard": "card1"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let checklist = client.create_checklist("card1", "TODO").unwrap();

        assert_eq!(checklist.id, "checklist1");
        assert_eq!(checklist.name, "TODO");
    }

    #[tokio::test]
    async fn test_add_check_item() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/checklists/checklist1/checkItems"))
            .and(query_param("name", "write the tests"))
            .and(query_param("pos", "bottom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "item1",
                "name": "write the tests",
                "state": "incomplete"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let item = client.add_check_item("checklist1", "write the tests").unwrap();

        assert_eq!(item.id, "item1");
        assert_eq!(item.name, "write the tests");
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/boards/board1/lists"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.list_lists().unwrap_err();

        assert!(matches!(err, TrelloError::Unauthorized));
    }

    #[tokio::test]
    async fn test_api_error_uses_message_from_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/boards/board1/labels"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "board is closed"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.create_label("bug", None).unwrap_err();

        match err {
            TrelloError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "board is closed");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_api_error_plain_text_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/boards/board1/labels"))
            .respond_with(ResponseTemplate::new(404).set_body_string("board not found"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.list_labels().unwrap_err();

        match err {
            TrelloError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "board not found");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_values_are_percent_encoded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/boards/board1/labels"))
            .and(query_param("name", "Team: Núcleo & Co"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_trello_label("label3", "Team: Núcleo & Co")),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let label = client.create_label("Team: Núcleo & Co", None).unwrap();

        assert_eq!(label.name, "Team: Núcleo & Co");
    }
}
