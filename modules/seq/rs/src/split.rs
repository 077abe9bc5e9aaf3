use eyre::{ensure, Result};
use memchr::memmem;

/// Split a sequence on a delimiter element.
///
/// Each maximal nonempty run of elements between delimiters becomes one
/// output sequence. Adjacent delimiters and delimiters at either boundary
/// contribute nothing, so the result never holds an empty sequence.
pub fn split<C, T>(items: &C, delim: &T) -> Vec<C>
where
    C: AsRef<[T]> + FromIterator<T>,
    T: PartialEq + Clone,
{
    items
        .as_ref()
        .split(|item| item == delim)
        .filter(|run| !run.is_empty())
        .map(|run| run.iter().cloned().collect())
        .collect()
}

/// Split a string on a string delimiter, skipping empty tokens.
///
/// Occurrences are located left to right without overlap. A single-codepoint
/// delimiter is handled as an element split; an empty delimiter is rejected.
pub fn split_str(items: &str, delim: &str) -> Result<Vec<String>> {
    ensure!(!delim.is_empty(), "Split delimiter must be non-empty");

    let mut codepoints = delim.chars();
    if let (Some(only), None) = (codepoints.next(), codepoints.next()) {
        let chars: Vec<char> = items.chars().collect();
        return Ok(split(&chars, &only)
            .into_iter()
            .map(|token: Vec<char>| token.into_iter().collect())
            .collect());
    }

    let mut tokens = Vec::new();
    let mut base = 0;
    for position in memmem::find_iter(items.as_bytes(), delim.as_bytes()) {
        if base < position {
            tokens.push(items[base..position].to_owned());
        }
        base = position + delim.len();
    }
    if base < items.len() {
        tokens.push(items[base..].to_owned());
    }
    Ok(tokens)
}
