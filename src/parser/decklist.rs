//! Registration sheet -> [`Decklist`]

use super::cards::clean_card_list;
use super::extract::{extract_between, Span};
use super::normalize::normalize;
use super::validate::validate_decklist;
use crate::models::{Decklist, RejectReason};
use tracing::debug;

/// A labelled field on the registration sheet
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub span: Span,
}

impl Field {
    /// Pull this field out of normalized page text
    pub fn extract<'a>(&self, text: &'a str) -> Result<&'a str, RejectReason> {
        extract_between(text, self.start, self.end, self.span).ok_or_else(|| {
            debug!(field = self.name, "field not found");
            RejectReason::MissingField(self.name.to_string())
        })
    }
}

pub const LAST_NAME: Field = Field {
    name: "last name",
    start: "Last Name:",
    end: "First Name:",
    span: Span::SingleLine,
};

pub const FIRST_NAME: Field = Field {
    name: "first name",
    start: "First Name:",
    end: "DCI #",
    span: Span::SingleLine,
};

pub const DECK_NAME: Field = Field {
    name: "deck name",
    start: "Deck Name:",
    end: "\n",
    span: Span::SingleLine,
};

pub const MAIN_DECK: Field = Field {
    name: "main deck",
    start: "Main Deck:",
    end: "Sideboard:",
    span: Span::MultiLine,
};

pub const SIDEBOARD: Field = Field {
    name: "sideboard",
    start: "Sideboard:",
    end: "Total Number of Cards in Main Deck:",
    span: Span::MultiLine,
};

/// Build a decklist from normalized text that already passed validation.
///
/// Any field missing its markers rejects the whole document; no partial
/// record is ever produced.
pub fn build_decklist(text: &str) -> Result<Decklist, RejectReason> {
    let last_name = LAST_NAME.extract(text)?;
    let first_name = FIRST_NAME.extract(text)?;
    let deck = DECK_NAME.extract(text)?;
    let main_deck = clean_card_list(MAIN_DECK.extract(text)?);
    let sideboard = clean_card_list(SIDEBOARD.extract(text)?);

    Ok(Decklist::new(
        format!("{} {}", first_name, last_name),
        deck,
        Decklist::join_sections(&main_deck, &sideboard),
    ))
}

/// Full per-document pipeline: normalize, validate, then build.
///
/// `first_page` is the raw extracted text of page one, if any.
pub fn parse_decklist(page_count: usize, first_page: Option<&str>) -> Result<Decklist, RejectReason> {
    let text = first_page.map(normalize);
    validate_decklist(page_count, text.as_deref())?;
    build_decklist(text.as_deref().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DECKLIST_SIGNATURE;

    const SAMPLE: &str = "Last Name:Smith First Name:Jo DCI #123 Event: PPTQ Deck Name:Mono Red\n\
                          Deck Designer: Jo\nMain Deck:\n4 Lightning Bolt (M10)\nSideboard:\n\
                          2 Island (LEA)\nTotal Number of Cards in Main Deck: 60";

    fn sheet(body: &str) -> String {
        format!("{}\n{}", DECKLIST_SIGNATURE, body)
    }

    #[test]
    fn test_build_sample() {
        let decklist = build_decklist(SAMPLE).unwrap();
        assert_eq!(decklist.player, "Jo Smith");
        assert_eq!(decklist.deck, "Mono Red");
        assert_eq!(decklist.cards, "4 Lightning Bolt\nSIDEBOARD\n2 Island");
    }

    #[test]
    fn test_build_multi_card_sections() {
        let text = "Last Name: Nakamura First Name: Aiko DCI # 99\nDeck Name: Izzet Phoenix\n\
                    Main Deck:\n4Arclight Phoenix (GRN)\n4Thing in the Ice (SOI)\n18Island\n\
                    Sideboard:\n3Surgical Extraction (NPH)\n2Aether Gust\n\
                    Total Number of Cards in Main Deck: 60";
        let decklist = build_decklist(text).unwrap();
        assert_eq!(decklist.player, "Aiko Nakamura");
        assert_eq!(decklist.deck, "Izzet Phoenix");
        assert_eq!(
            decklist.cards,
            "4 Arclight Phoenix\n4 Thing in the Ice\n18 Island\nSIDEBOARD\n3 Surgical Extraction\n2 Aether Gust"
        );
    }

    #[test]
    fn test_missing_deck_name_rejects() {
        let text = SAMPLE.replace("Deck Name:", "Deck:");
        assert_eq!(
            build_decklist(&text),
            Err(RejectReason::MissingField("deck name".to_string()))
        );
    }

    #[test]
    fn test_missing_sideboard_terminator_rejects() {
        let text = SAMPLE.replace("Total Number of Cards in Main Deck:", "Total:");
        assert_eq!(
            build_decklist(&text),
            Err(RejectReason::MissingField("sideboard".to_string()))
        );
    }

    #[test]
    fn test_name_across_lines_rejects() {
        let text = SAMPLE.replace("First Name:Jo DCI #", "First Name:Jo\nDCI #");
        assert_eq!(
            build_decklist(&text),
            Err(RejectReason::MissingField("first name".to_string()))
        );
    }

    #[test]
    fn test_parse_normalizes_before_extracting() {
        let raw = sheet(
            "Last Name:O&#39;Brien First Name:Sam DCI #1 Deck Name:Jeskai\n\
             Main Deck:\n# in deck: Card Name:\n4Ancestral Vision (TSP)\nMain Deck Continued:\n\
             1Teferi&#39;s Protection\nSideboard:\n2Rest in Peace\n\
             Total Number of Cards in Main Deck: 60",
        );
        let decklist = parse_decklist(1, Some(&raw)).unwrap();
        assert_eq!(decklist.player, "Sam O'Brien");
        assert_eq!(
            decklist.cards,
            "4 Ancestral Vision\n1 Teferi's Protection\nSIDEBOARD\n2 Rest in Peace"
        );
    }

    #[test]
    fn test_parse_rejects_before_extracting() {
        assert_eq!(parse_decklist(0, None), Err(RejectReason::Empty));
        // Valid fields but no signature
        assert_eq!(
            parse_decklist(1, Some(SAMPLE)),
            Err(RejectReason::IncorrectFormat)
        );
        // Signature but nothing else
        assert_eq!(
            parse_decklist(1, Some(DECKLIST_SIGNATURE)),
            Err(RejectReason::MissingField("last name".to_string()))
        );
    }
}
