use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single work item from the input document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketRecord {
    pub task_name: String,
    pub description: String,
    pub details: TicketDetails,
    pub checklist: Vec<ChecklistStep>,
    pub assignee: String,
    pub labels: Vec<String>,
    /// `YYYY-MM-DD`
    pub due_date: String,
    /// Accepted for schema compatibility; not sent to the board
    pub comments: String,
}

/// The labeled sections appended to the card description
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketDetails {
    pub user_story: String,
    pub impact_value: String,
    pub estimated_effort: String,
    pub dependencies: String,
    pub additional_notes: String,
}

/// One checklist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChecklistStep {
    pub step: String,
}

impl TicketRecord {
    /// Build the card description: the free text followed by the five
    /// labeled sections, blank-line separated. Section order and headings
    /// are fixed for output compatibility.
    pub fn card_description(&self) -> String {
        format!(
            "{}\n\n\
             **User Story:** {}\n\n\
             **Impact Value:** {}\n\n\
             **Estimated Effort:** {}\n\n\
             **Dependencies:** {}\n\n\
             **Additional Notes:** {}",
            self.description,
            self.details.user_story,
            self.details.impact_value,
            self.details.estimated_effort,
            self.details.dependencies,
            self.details.additional_notes
        )
    }

    /// Synthetic label name for the ticket's assignee
    pub fn team_label(&self) -> String {
        format!("Team: {}", self.assignee)
    }

    /// Convert the `YYYY-MM-DD` due date to the board's timestamp format:
    /// midnight UTC with microsecond precision.
    pub fn due_timestamp(&self) -> Result<String> {
        let date = NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").with_context(|| {
            format!(
                "Invalid due date '{}' on ticket '{}': expected YYYY-MM-DD",
                self.due_date, self.task_name
            )
        })?;
        Ok(format!("{}T00:00:00.000000Z", date.format("%Y-%m-%d")))
    }
}
