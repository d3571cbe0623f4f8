//! Small text helpers shared by the rendering rules and the book pipeline.

/// Uppercase the first character of every whitespace-delimited word.
///
/// Words are re-joined with single spaces, so leading, trailing and repeated
/// whitespace disappears. Applying it twice gives the same result as once.
///
/// ```
/// assert_eq!(jafl_common::capitalize("  iron  sword "), "Iron Sword");
/// ```
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Lowercase the words of `input` and join them with dashes.
///
/// Used for anchor ids such as `map-violet-ocean`.
#[must_use]
pub fn linkify(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
