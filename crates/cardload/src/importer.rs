//! The record-to-API-call engine: resolves labels, creates cards, and
//! populates checklists, one ticket at a time in input order.

use crate::output::output_warning;
use crate::ticket::TicketRecord;
use anyhow::Result;
use board_core::{CreateCard, CreateLabel, TaskBoard};
use serde::Serialize;

/// Checklist name attached to every imported card
const CHECKLIST_NAME: &str = "TODO";

/// Terminal state of a single ticket
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TicketStatus {
    /// Card created and checklist populated (item failures are counted,
    /// not fatal)
    Created {
        card_id: String,
        items_added: usize,
        items_failed: usize,
    },
    /// Card creation failed; nothing else was attempted for this ticket
    CardFailed { reason: String },
    /// Card created but the checklist could not be; items not attempted
    ChecklistFailed { card_id: String, reason: String },
}

/// Outcome of one ticket, in input order
#[derive(Debug, Clone, Serialize)]
pub struct TicketOutcome {
    pub task_name: String,
    #[serde(flatten)]
    pub status: TicketStatus,
}

/// Result of a whole import run
#[derive(Debug, Clone, Serialize, Default)]
pub struct ImportReport {
    pub outcomes: Vec<TicketOutcome>,
}

impl ImportReport {
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, TicketStatus::Created { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.created()
    }
}

pub struct Importer<'a> {
    board: &'a dyn TaskBoard,
    list_id: String,
}

impl<'a> Importer<'a> {
    pub fn new(board: &'a dyn TaskBoard, list_id: &str) -> Self {
        Self {
            board,
            list_id: list_id.to_string(),
        }
    }

    /// Import every ticket, in input order. Label, card, checklist, and
    /// item failures are reported and recorded without stopping the run;
    /// only a malformed due date aborts it.
    pub fn run(&self, tickets: &[TicketRecord]) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        for ticket in tickets {
            let status = self.import_ticket(ticket)?;
            report.outcomes.push(TicketOutcome {
                task_name: ticket.task_name.clone(),
                status,
            });
        }

        Ok(report)
    }

    fn import_ticket(&self, ticket: &TicketRecord) -> Result<TicketStatus> {
        let description = ticket.card_description();

        // The team label is resolved first but attached after the listed
        // labels.
        let team_label = self.resolve_label(&ticket.team_label());

        let mut label_ids = Vec::new();
        for name in &ticket.labels {
            if let Some(id) = self.resolve_label(name) {
                label_ids.push(id);
            }
        }
        label_ids.extend(team_label);

        let due = ticket.due_timestamp()?;

        let create = CreateCard {
            list_id: self.list_id.clone(),
            name: ticket.task_name.clone(),
            description,
            label_ids,
            due: Some(due),
        };

        let card = match self.board.create_card(&create) {
            Ok(card) => card,
            Err(e) => {
                output_warning(&format!(
                    "Failed to create card '{}': {}",
                    ticket.task_name, e
                ));
                return Ok(TicketStatus::CardFailed {
                    reason: e.to_string(),
                });
            }
        };

        let checklist = match self.board.create_checklist(&card.id, CHECKLIST_NAME) {
            Ok(checklist) => checklist,
            Err(e) => {
                output_warning(&format!(
                    "Failed to create checklist on '{}': {}",
                    ticket.task_name, e
                ));
                return Ok(TicketStatus::ChecklistFailed {
                    card_id: card.id,
                    reason: e.to_string(),
                });
            }
        };

        let mut items_added = 0;
        let mut items_failed = 0;
        for step in &ticket.checklist {
            match self.board.add_check_item(&checklist.id, &step.step) {
                Ok(_) => items_added += 1,
                Err(e) => {
                    output_warning(&format!("Failed to add checklist item '{}': {}", step.step, e));
                    items_failed += 1;
                }
            }
        }

        Ok(TicketStatus::Created {
            card_id: card.id,
            items_added,
            items_failed,
        })
    }

    /// Find a label by exact name, creating it if absent. Every call
    /// re-queries the board; a failure leaves the label off the card and
    /// the run continues.
    fn resolve_label(&self, name: &str) -> Option<String> {
        match self.board.list_labels() {
            Ok(labels) => {
                if let Some(label) = labels.into_iter().find(|l| l.name == name) {
                    return Some(label.id);
                }
            }
            Err(e) => {
                // Lookup failure still falls through to creation
                output_warning(&format!("Failed to list labels for '{}': {}", name, e));
            }
        }

        let create = CreateLabel {
            name: name.to_string(),
            color: None,
        };
        match self.board.create_label(&create) {
            Ok(label) => Some(label.id),
            Err(e) => {
                output_warning(&format!("Failed to create label '{}': {}", name, e));
                None
            }
        }
    }
}
