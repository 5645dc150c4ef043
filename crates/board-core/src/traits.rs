use crate::error::Result;
use crate::models::*;

/// Common trait for task-board backends
///
/// This trait defines the operations the importer needs from a board
/// service. Each backend (Trello, etc.) provides its own implementation
/// scoped to one configured board.
pub trait TaskBoard: Send + Sync {
    /// List the lists (columns) on the board
    fn list_lists(&self) -> Result<Vec<BoardList>>;

    /// List all labels on the board
    fn list_labels(&self) -> Result<Vec<Label>>;

    /// Create a new label on the board
    fn create_label(&self, label: &CreateLabel) -> Result<Label>;

    /// Create a card in a list
    fn create_card(&self, card: &CreateCard) -> Result<Card>;

    /// Create a checklist on a card
    fn create_checklist(&self, card_id: &str, name: &str) -> Result<Checklist>;

    /// Append an item to the bottom of a checklist
    fn add_check_item(&self, checklist_id: &str, name: &str) -> Result<CheckItem>;
}
