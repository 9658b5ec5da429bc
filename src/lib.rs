// decksheet - tournament decklist PDFs to a shared Google Sheet
// Reads registration sheets, extracts player/deck/cards, and uploads one column per player

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod sheet;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Decklist, RejectReason, Rejection, Settings};
pub use services::{Batch, DocumentOutcome, UploadOutcome};
