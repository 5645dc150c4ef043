pub mod error;
pub mod models;
pub mod traits;

pub use error::{BoardError, Result};
pub use models::*;
pub use traits::TaskBoard;
