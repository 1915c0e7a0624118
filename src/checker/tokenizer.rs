//! Token decomposition: whitespace split, hyphen split, punctuation strip.

/// Break a text fragment into candidate words. A token containing a hyphen is
/// split at each hyphen and every segment checked independently, which is how
/// "well-known" becomes the two checks "well" and "known". Segments are
/// punctuation-stripped after the split, so "well-known." yields "known".
pub fn tokenize(fragment: &str) -> Vec<String> {
    let mut words = Vec::new();
    for token in fragment.split_whitespace() {
        if token.contains('-') {
            for segment in token.split('-') {
                words.push(strip_punctuation(segment));
            }
        } else {
            words.push(strip_punctuation(token));
        }
    }
    words
}

/// Trim leading and trailing ASCII punctuation. Interior apostrophes survive,
/// so possessives like "dog's" reach the classifier intact.
pub fn strip_punctuation(token: &str) -> String {
    token
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}
