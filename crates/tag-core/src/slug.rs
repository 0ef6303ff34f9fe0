//! Slug derivation for tag names.
//!
//! The transformation has to stay byte-compatible with slugs already stored
//! by the tag service, so every step below is deliberately literal:
//!
//! 1. canonical decomposition (NFD)
//! 2. drop combining diacritical marks (U+0300..=U+036F)
//! 3. lowercase
//! 4. drop everything that is neither an ASCII word char nor whitespace
//! 5. replace each whitespace run with a single `-`
//!
//! There is no trim step: leading or trailing whitespace becomes a leading
//! or trailing hyphen.

use unicode_normalization::UnicodeNormalization;

const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Derive a URL-safe slug from a display name.
///
/// Total and pure: every input, including the empty string, yields a slug
/// made only of `[a-z0-9_-]`.
///
/// ```
/// use tag_core::derive_slug;
///
/// assert_eq!(derive_slug("Hello World"), "hello-world");
/// assert_eq!(derive_slug("  padded  "), "-padded-");
/// ```
pub fn derive_slug(input: &str) -> String {
    let stripped: String = input
        .nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .collect();

    let mut slug = String::with_capacity(stripped.len());
    let mut in_whitespace = false;

    for c in stripped.to_lowercase().chars() {
        if is_whitespace(c) {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else if is_word_char(c) {
            slug.push(c);
            in_whitespace = false;
        }
        // Punctuation is removed before collapsing, so it never splits a run.
    }

    slug
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace as matched by an ECMAScript `\s` class.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
