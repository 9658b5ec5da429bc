//! Card list cleanup: every kept line becomes `<count> <card name>`

/// Clean a raw card list, one entry per line.
///
/// Lines that don't start with a quantity are dropped. The quantity is
/// separated from the name by exactly one space, and anything from the first
/// `(` on (set and collector annotations) is cut off.
pub fn clean_card_list(text: &str) -> String {
    text.lines()
        .filter_map(separate_quantity)
        .map(|line| strip_annotation(&line).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"4Lightning Bolt"` -> `"4 Lightning Bolt"`; `None` if there's no leading quantity
fn separate_quantity(line: &str) -> Option<String> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let (count, name) = line.split_at(digits);
    let name = name.trim_start();
    if name.is_empty() {
        return Some(count.to_string());
    }
    Some(format!("{} {}", count, name))
}

fn strip_annotation(line: &str) -> &str {
    line.split('(').next().unwrap_or(line).trim_end()
}
