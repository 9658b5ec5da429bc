use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator line placed between main deck and sideboard in [`Decklist::cards`]
pub const SIDEBOARD_SEPARATOR: &str = "SIDEBOARD";

/// One player's registered deck, built from a single registration sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decklist {
    /// Player name as "First Last"
    pub player: String,

    /// Deck title as written by the player
    pub deck: String,

    /// Cleaned main deck lines, the separator line, then cleaned sideboard lines
    pub cards: String,
}

impl Decklist {
    pub fn new(
        player: impl Into<String>,
        deck: impl Into<String>,
        cards: impl Into<String>,
    ) -> Self {
        Self {
            player: player.into(),
            deck: deck.into(),
            cards: cards.into(),
        }
    }

    /// Assemble the `cards` column from the two cleaned sections
    pub fn join_sections(main_deck: &str, sideboard: &str) -> String {
        format!("{}\n{}\n{}", main_deck, SIDEBOARD_SEPARATOR, sideboard)
    }
}

/// Why a document was left out of the upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RejectReason {
    /// The document has no pages
    Empty,
    /// First page is blank or does not carry the registration sheet header
    IncorrectFormat,
    /// A required field could not be found between its markers
    MissingField(String),
    /// The file could not be opened as a PDF at all
    Unreadable(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Empty => write!(f, "The file is empty."),
            RejectReason::IncorrectFormat => write!(f, "The file is in an incorrect format."),
            RejectReason::MissingField(field) => write!(
                f,
                "The file is in an incorrect format (missing {}).",
                field
            ),
            RejectReason::Unreadable(err) => write!(f, "The file could not be read: {}", err),
        }
    }
}

/// A skipped document paired with the reason it was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub document: String,
    pub reason: RejectReason,
}

impl Rejection {
    pub fn new(document: impl Into<String>, reason: RejectReason) -> Self {
        Self {
            document: document.into(),
            reason,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.document, self.reason)
    }
}
