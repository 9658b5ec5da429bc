use crate::models::RejectReason;

/// Header every well-formed registration sheet starts with
pub const DECKLIST_SIGNATURE: &str = "DECK REGISTRATION SHEETTable";

/// Decide whether a document looks like a registration sheet.
///
/// Must run before any field is extracted: a page that isn't a registration
/// sheet may not contain any of the markers at all.
pub fn validate_decklist(page_count: usize, first_page: Option<&str>) -> Result<(), RejectReason> {
    if page_count == 0 {
        return Err(RejectReason::Empty);
    }

    match first_page {
        Some(text) if text.starts_with(DECKLIST_SIGNATURE) => Ok(()),
        _ => Err(RejectReason::IncorrectFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pages_is_empty() {
        assert_eq!(validate_decklist(0, None), Err(RejectReason::Empty));
        // Page count wins even if some text came through
        assert_eq!(
            validate_decklist(0, Some(DECKLIST_SIGNATURE)),
            Err(RejectReason::Empty)
        );
    }

    #[test]
    fn test_missing_text_is_incorrect_format() {
        assert_eq!(validate_decklist(1, None), Err(RejectReason::IncorrectFormat));
        assert_eq!(validate_decklist(1, Some("")), Err(RejectReason::IncorrectFormat));
    }

    #[test]
    fn test_wrong_header_is_incorrect_format() {
        assert_eq!(
            validate_decklist(1, Some("Invoice #1234")),
            Err(RejectReason::IncorrectFormat)
        );
        // Signature must be at the very start
        assert_eq!(
            validate_decklist(2, Some(" DECK REGISTRATION SHEETTable")),
            Err(RejectReason::IncorrectFormat)
        );
    }

    #[test]
    fn test_valid_sheet() {
        let text = format!("{}\nLast Name:Smith", DECKLIST_SIGNATURE);
        assert_eq!(validate_decklist(1, Some(&text)), Ok(()));
    }
}
