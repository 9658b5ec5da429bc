//! Cleanup applied to raw page text before anything else looks at it

/// HTML entity the PDF text layer emits for an apostrophe
pub const APOSTROPHE_ENTITY: &str = "&#39;";

/// Column header fragments that bleed into the extracted text
pub const NOISE: [&str; 2] = ["Main Deck Continued:", "# in deck: Card Name:"];

/// Replace the apostrophe entity, then delete every noise fragment.
///
/// Both passes repeat until the text stops changing, so a deletion that
/// splices a new entity or fragment together is cleaned up as well.
/// Every change shortens the text, which bounds the loop.
pub fn normalize(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = remove_noise(&replace_entities(&current));
        if next == current {
            return current;
        }
        current = next;
    }
}

fn replace_entities(text: &str) -> String {
    text.replace(APOSTROPHE_ENTITY, "'")
}

fn remove_noise(text: &str) -> String {
    NOISE
        .iter()
        .fold(text.to_string(), |acc, noise| acc.replace(noise, ""))
}
