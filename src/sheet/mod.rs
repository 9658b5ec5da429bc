//! Destination spreadsheet: the sink abstraction, tab naming, and the
//! Google Sheets implementation

pub mod google;
pub mod namer;

pub use google::{column_letters, spreadsheet_id, GoogleSheetsClient};
pub use namer::{date_label, unique_worksheet_name};

use std::ops::RangeInclusive;

/// Rows allocated for a new decklist tab
pub const WORKSHEET_ROWS: usize = 1000;
/// Columns allocated for a new decklist tab (one column per player)
pub const WORKSHEET_COLS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Not a Google Sheet URL: {0}")]
    InvalidUrl(String),

    #[error("No access token. Pass --token or set {}", google::TOKEN_ENV)]
    MissingToken,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google Sheets API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response from Google Sheets: {0}")]
    Response(String),
}

/// A tab in the destination spreadsheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub id: i64,
    pub title: String,
}

/// Operations the upload needs from a spreadsheet service.
///
/// Rows and columns are 1-based, matching what the operator sees.
pub trait SheetSink {
    /// Titles of every existing tab, in tab order
    fn worksheet_titles(&mut self) -> Result<Vec<String>, SinkError>;

    /// Create a tab at position `index` with the given capacity
    fn add_worksheet(
        &mut self,
        title: &str,
        index: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Worksheet, SinkError>;

    fn update_cell(
        &mut self,
        worksheet: &Worksheet,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), SinkError>;

    /// Top-align every cell in `columns`
    fn align_columns_top(
        &mut self,
        worksheet: &Worksheet,
        columns: RangeInclusive<usize>,
    ) -> Result<(), SinkError>;
}
