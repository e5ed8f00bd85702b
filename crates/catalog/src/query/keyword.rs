//! Service keyword derivation for membership filters.

/// Derives the lowercase service keyword for a `has*` filter key.
///
/// `hasCarRental` becomes `"car rental"`, `hasVIPLounge` becomes
/// `"vip lounge"`. Keys without the `has` prefix are split the same way.
pub fn service_keyword(key: &str) -> String {
    let stem = key
        .strip_prefix("has")
        .filter(|rest| rest.starts_with(|c: char| c.is_uppercase()))
        .unwrap_or(key);
    split_camel_case(stem).join(" ")
}

fn split_camel_case(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (index, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
            // Break before a new word, and before the last capital of an acronym.
            if !prev.is_uppercase() || next_is_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
