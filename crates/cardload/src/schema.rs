//! Structural validation of the ticket input document.
//!
//! The input must be a non-empty JSON array of ticket records. Each record
//! is checked against a declarative field schema before any typed
//! deserialization happens, so one malformed record rejects the whole
//! batch with a stable message and nothing is imported.

use crate::ticket::TicketRecord;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;

/// Expected shape of a JSON value, checked recursively
pub enum Shape {
    Str,
    List,
    Object(&'static [(&'static str, Shape)]),
}

/// Field schema for one ticket record
pub const TICKET_SCHEMA: Shape = Shape::Object(&[
    ("task_name", Shape::Str),
    ("description", Shape::Str),
    (
        "details",
        Shape::Object(&[
            ("user_story", Shape::Str),
            ("impact_value", Shape::Str),
            ("estimated_effort", Shape::Str),
            ("dependencies", Shape::Str),
            ("additional_notes", Shape::Str),
        ]),
    ),
    ("checklist", Shape::List),
    ("assignee", Shape::Str),
    ("labels", Shape::List),
    ("due_date", Shape::Str),
    ("comments", Shape::Str),
]);

/// Validate the whole document: a non-empty array where every element
/// conforms to [`TICKET_SCHEMA`]. The first non-conforming record aborts
/// validation; shape only, no semantic checks.
pub fn validate(document: &Value) -> Result<()> {
    let records = match document.as_array() {
        Some(records) if !records.is_empty() => records,
        _ => {
            return Err(anyhow!(
                "the ticket file must contain a non-empty list of tickets"
            ))
        }
    };

    for (index, record) in records.iter().enumerate() {
        if !conforms(record, &TICKET_SCHEMA) {
            return Err(anyhow!(
                "invalid structure in ticket at position {}",
                index + 1
            ));
        }
    }

    Ok(())
}

fn conforms(value: &Value, shape: &Shape) -> bool {
    match shape {
        Shape::Str => value.is_string(),
        Shape::List => value.is_array(),
        Shape::Object(fields) => match value.as_object() {
            Some(map) => fields
                .iter()
                .all(|(name, field_shape)| map.get(*name).is_some_and(|v| conforms(v, field_shape))),
            None => false,
        },
    }
}

/// Read, parse, validate, and decode a ticket file
pub fn load_tickets(path: &Path) -> Result<Vec<TicketRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ticket file '{}'", path.display()))?;

    let document: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Ticket file '{}' is not valid JSON", path.display()))?;

    validate(&document)?;

    let tickets: Vec<TicketRecord> =
        serde_json::from_value(document).context("Failed to decode ticket records")?;
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_ticket() -> Value {
        json!({
            "task_name": "Ship the importer",
            "description": "Wire the batch importer end to end.",
            "details": {
                "user_story": "As a PM I want tickets created in bulk",
                "impact_value": "High",
                "estimated_effort": "3 days",
                "dependencies": "Board credentials",
                "additional_notes": "None"
            },
            "checklist": [{"step": "write the tests"}],
            "assignee": "Platform",
            "labels": ["backend"],
            "due_date": "2024-05-01",
            "comments": ""
        })
    }

    #[test]
    fn accepts_a_valid_batch() {
        let document = json!([valid_ticket(), valid_ticket()]);
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn rejects_a_non_array_document() {
        let err = validate(&valid_ticket()).unwrap_err();
        assert!(err.to_string().contains("must contain a non-empty list"));
    }

    #[test]
    fn rejects_an_empty_array() {
        let err = validate(&json!([])).unwrap_err();
        assert!(err.to_string().contains("must contain a non-empty list"));
    }

    #[test]
    fn rejects_a_record_missing_a_top_level_field() {
        let mut ticket = valid_ticket();
        ticket.as_object_mut().unwrap().remove("assignee");

        let err = validate(&json!([ticket])).unwrap_err();
        assert!(err.to_string().contains("invalid structure"));
    }

    #[test]
    fn rejects_a_record_missing_a_nested_detail_field() {
        let mut ticket = valid_ticket();
        ticket["details"]
            .as_object_mut()
            .unwrap()
            .remove("impact_value");

        let err = validate(&json!([ticket])).unwrap_err();
        assert!(err.to_string().contains("invalid structure"));
    }

    #[test]
    fn rejects_a_record_with_a_wrongly_typed_field() {
        let mut ticket = valid_ticket();
        ticket["labels"] = json!("backend");

        let err = validate(&json!([ticket])).unwrap_err();
        assert!(err.to_string().contains("invalid structure"));
    }

    #[test]
    fn one_bad_record_rejects_the_whole_batch() {
        let mut bad = valid_ticket();
        bad.as_object_mut().unwrap().remove("due_date");

        let err = validate(&json!([valid_ticket(), bad])).unwrap_err();
        assert!(err.to_string().contains("invalid structure"));
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn non_string_assignee_is_rejected() {
        let mut ticket = valid_ticket();
        ticket["assignee"] = json!(42);

        assert!(validate(&json!([ticket])).is_err());
    }
}
