use crate::cli::OutputFormat;
use crate::importer::{Importer, TicketStatus};
use crate::schema;
use anyhow::Result;
use board_core::TaskBoard;
use colored::Colorize;
use std::path::Path;

/// Validate the ticket file, then import every ticket onto the target list
pub fn handle_import(
    board: &dyn TaskBoard,
    list_id: &str,
    file: &Path,
    format: OutputFormat,
) -> Result<()> {
    let tickets = schema::load_tickets(file)?;

    let importer = Importer::new(board, list_id);
    let report = importer.run(&tickets)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for outcome in &report.outcomes {
                match &outcome.status {
                    TicketStatus::Created {
                        card_id,
                        items_added,
                        items_failed,
                    } => {
                        let mut line = format!(
                            "{} {} ({}, {} checklist item(s))",
                            "Imported:".green().bold(),
                            outcome.task_name,
                            card_id,
                            items_added
                        );
                        if *items_failed > 0 {
                            line.push_str(&format!(", {} item(s) failed", items_failed));
                        }
                        println!("{}", line);
                    }
                    TicketStatus::CardFailed { reason } => {
                        println!(
                            "{} {} ({})",
                            "Failed:".red().bold(),
                            outcome.task_name,
                            reason
                        );
                    }
                    TicketStatus::ChecklistFailed { card_id, reason } => {
                        println!(
                            "{} {} (card {} created, checklist failed: {})",
                            "Partial:".yellow().bold(),
                            outcome.task_name,
                            card_id,
                            reason
                        );
                    }
                }
            }
            println!();
            println!("{} created, {} failed", report.created(), report.failed());
        }
    }

    Ok(())
}
