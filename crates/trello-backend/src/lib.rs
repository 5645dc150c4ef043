pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::TrelloClient;
pub use error::{Result, TrelloError};
pub use models::*;

// Re-export board-core types for convenience
pub use board_core::{BoardError, TaskBoard};
