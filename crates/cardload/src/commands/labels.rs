use crate::cli::OutputFormat;
use crate::output::output_list;
use anyhow::{Context, Result};
use board_core::TaskBoard;

/// Show the board's labels with their ids
pub fn handle_labels(board: &dyn TaskBoard, format: OutputFormat) -> Result<()> {
    let labels = board.list_labels().context("Failed to fetch board labels")?;

    output_list(&labels, format);
    Ok(())
}
