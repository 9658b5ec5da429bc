//! Decklist extraction pipeline: normalize, validate, extract, clean

pub mod cards;
pub mod decklist;
pub mod extract;
pub mod normalize;
pub mod validate;

pub use cards::clean_card_list;
pub use decklist::{build_decklist, parse_decklist, Field};
pub use extract::{extract_between, Span};
pub use normalize::normalize;
pub use validate::{validate_decklist, DECKLIST_SIGNATURE};
