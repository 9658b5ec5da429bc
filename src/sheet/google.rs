//! Google Sheets v4 REST client.
//!
//! Authentication is out of scope here: the client takes a ready OAuth
//! access token (e.g. from `gcloud auth print-access-token`).

use super::{SheetSink, SinkError, Worksheet};
use regex::Regex;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use tracing::debug;

/// Environment variable read when no `--token` is given
pub const TOKEN_ENV: &str = "DECKSHEET_ACCESS_TOKEN";

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

static SHEET_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://docs\.google\.com/spreadsheets/d/([a-zA-Z0-9_-]+)")
        .expect("spreadsheet URL pattern is valid")
});

/// Spreadsheet ID from a Google Sheets URL, or `None` if it isn't one
pub fn spreadsheet_id(url: &str) -> Option<&str> {
    SHEET_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 1-based column index in A1 notation: 1 -> A, 26 -> Z, 27 -> AA
pub fn column_letters(col: usize) -> String {
    let mut n = col;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// `'Title'!B2`, with quotes in the title doubled
fn cell_range(title: &str, row: usize, col: usize) -> String {
    format!("'{}'!{}{}", title.replace('\'', "''"), column_letters(col), row)
}

#[derive(Debug, Deserialize)]
struct SpreadsheetResponse {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct BatchUpdateResponse {
    #[serde(default)]
    replies: Vec<Value>,
}

pub struct GoogleSheetsClient {
    http: Client,
    spreadsheet_id: String,
    token: String,
}

impl GoogleSheetsClient {
    pub fn new(spreadsheet_id: impl Into<String>, token: impl Into<String>) -> Result<Self, SinkError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SinkError::MissingToken);
        }
        Ok(Self {
            http: Client::builder().build()?,
            spreadsheet_id: spreadsheet_id.into(),
            token,
        })
    }

    /// Client for the spreadsheet at `url`
    pub fn from_url(url: &str, token: impl Into<String>) -> Result<Self, SinkError> {
        let id = spreadsheet_id(url).ok_or_else(|| SinkError::InvalidUrl(url.to_string()))?;
        Self::new(id, token)
    }

    fn spreadsheet_url(&self, tail: &[&str]) -> Result<Url, SinkError> {
        let mut url = Url::parse(API_BASE).map_err(|e| SinkError::Response(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SinkError::Response("API base URL cannot take a path".to_string()))?
            .push(&self.spreadsheet_id)
            .extend(tail);
        Ok(url)
    }

    fn batch_update(&self, requests: Value) -> Result<BatchUpdateResponse, SinkError> {
        // The ":batchUpdate" verb is part of the last segment, not a new one
        let url = format!(
            "{}:batchUpdate",
            self.spreadsheet_url(&[])?.as_str().trim_end_matches('/')
        );
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&json!({ "requests": requests }))
            .send()?;
        Ok(check(response)?.json()?)
    }
}

/// Turn a non-2xx response into [`SinkError::Api`]
fn check(response: Response) -> Result<Response, SinkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(SinkError::Api {
        status: status.as_u16(),
        body,
    })
}

impl SheetSink for GoogleSheetsClient {
    fn worksheet_titles(&mut self) -> Result<Vec<String>, SinkError> {
        let url = self.spreadsheet_url(&[])?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("fields", "sheets.properties")])
            .send()?;
        let spreadsheet: SpreadsheetResponse = check(response)?.json()?;

        Ok(spreadsheet
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    fn add_worksheet(
        &mut self,
        title: &str,
        index: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Worksheet, SinkError> {
        debug!(title, index, rows, cols, "adding worksheet");
        let reply = self.batch_update(json!([{
            "addSheet": {
                "properties": {
                    "title": title,
                    "index": index,
                    "gridProperties": { "rowCount": rows, "columnCount": cols }
                }
            }
        }]))?;

        let properties = reply
            .replies
            .into_iter()
            .next()
            .and_then(|r| r.get("addSheet").and_then(|a| a.get("properties")).cloned())
            .ok_or_else(|| SinkError::Response("addSheet reply missing".to_string()))?;
        let properties: SheetProperties = serde_json::from_value(properties)
            .map_err(|e| SinkError::Response(e.to_string()))?;

        Ok(Worksheet {
            id: properties.sheet_id,
            title: properties.title,
        })
    }

    fn update_cell(
        &mut self,
        worksheet: &Worksheet,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), SinkError> {
        let range = cell_range(&worksheet.title, row, col);
        let url = self.spreadsheet_url(&["values", range.as_str()])?;
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "range": range, "values": [[value]] }))
            .send()?;
        check(response)?;
        Ok(())
    }

    fn align_columns_top(
        &mut self,
        worksheet: &Worksheet,
        columns: RangeInclusive<usize>,
    ) -> Result<(), SinkError> {
        self.batch_update(json!([{
            "repeatCell": {
                "range": {
                    "sheetId": worksheet.id,
                    "startColumnIndex": columns.start().saturating_sub(1),
                    "endColumnIndex": *columns.end()
                },
                "cell": { "userEnteredFormat": { "verticalAlignment": "TOP" } },
                "fields": "userEnteredFormat.verticalAlignment"
            }
        }]))?;
        Ok(())
    }
}
