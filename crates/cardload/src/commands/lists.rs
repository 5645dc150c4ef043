use crate::cli::OutputFormat;
use crate::output::output_list;
use anyhow::{Context, Result};
use board_core::TaskBoard;

/// Show the board's lists so the user can pick an import target
pub fn handle_lists(board: &dyn TaskBoard, format: OutputFormat) -> Result<()> {
    let lists = board.list_lists().context("Failed to fetch board lists")?;

    output_list(&lists, format);
    Ok(())
}
