//! GOOD key canonicalization
//!
//! GOOD identifies characters, weapons, and artifact sets by a key derived
//! from the English display name: `"Kamisato Ayaka"` becomes `"KamisatoAyaka"`,
//! `"The Catch"` becomes `"TheCatch"`.

/// Canonicalize a display name into a GOOD key.
///
/// Drops every character outside `[A-Za-z0-9 ]`, uppercases the first
/// character of each space-separated word, and joins the words. The rest of
/// each word keeps its original case, so `"Wolf's Gravestone"` becomes
/// `"WolfsGravestone"` and `"Hu Tao"` becomes `"HuTao"`.
///
/// `None` and `""` both produce an empty key.
pub fn to_good_key<'a>(name: impl Into<Option<&'a str>>) -> String {
    let Some(name) = name.into() else {
        return String::new();
    };

    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    cleaned.split(' ').map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
