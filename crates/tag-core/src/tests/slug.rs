use crate::derive_slug;

#[test]
fn test_empty_input_yields_empty_slug() {
    assert_eq!(derive_slug(""), "");
}

#[test]
fn test_simple_words_joined_with_hyphen() {
    assert_eq!(derive_slug("Hello World"), "hello-world");
}

#[test]
fn test_accents_stripped_and_literal_hyphen_removed() {
    // The hyphen in "Déjà-vu" is punctuation and goes before spaces collapse
    assert_eq!(derive_slug("Café  Déjà-vu!"), "cafe-dejavu");
}

#[test]
fn test_surrounding_whitespace_is_not_trimmed() {
    assert_eq!(
        derive_slug("  leading and  trailing  "),
        "-leading-and-trailing-"
    );
}

#[test]
fn test_only_punctuation_yields_empty_slug() {
    assert_eq!(derive_slug("!!!?.,;:"), "");
    assert_eq!(derive_slug("--"), "");
}

#[test]
fn test_whitespace_runs_collapse_to_single_hyphen() {
    assert_eq!(derive_slug("a   b"), "a-b");
    assert_eq!(derive_slug("a\t\n\r b"), "a-b");
}

#[test]
fn test_punctuation_between_spaces_does_not_split_run() {
    assert_eq!(derive_slug("C++ & Rust"), "c-rust");
    assert_eq!(derive_slug("rock - n - roll"), "rock-n-roll");
}

#[test]
fn test_underscore_and_digits_preserved() {
    assert_eq!(derive_slug("snake_case Name 2024"), "snake_case-name-2024");
}

#[test]
fn test_unicode_whitespace_counts_as_whitespace() {
    assert_eq!(derive_slug("a\u{00A0}b"), "a-b");
    assert_eq!(derive_slug("a\u{3000}b"), "a-b");
    assert_eq!(derive_slug("a\u{FEFF}b"), "a-b");
    assert_eq!(derive_slug("a\u{2003}\u{2009}b"), "a-b");
}

#[test]
fn test_next_line_is_not_whitespace() {
    // U+0085 is outside the whitespace set, so it is dropped like punctuation
    assert_eq!(derive_slug("a\u{0085}b"), "ab");
}

#[test]
fn test_decomposable_letters_keep_base_letter() {
    assert_eq!(derive_slug("São Paulo"), "sao-paulo");
    assert_eq!(derive_slug("Ñandú"), "nandu");
    assert_eq!(derive_slug("ÅNGSTRÖM"), "angstrom");
    assert_eq!(derive_slug("İstanbul"), "istanbul");
}

#[test]
fn test_non_ascii_letters_without_decomposition_are_removed() {
    assert_eq!(derive_slug("Straße"), "strae");
    assert_eq!(derive_slug("日本語 tag"), "-tag");
    assert_eq!(derive_slug("Привет"), "");
}

#[test]
fn test_precomposed_and_decomposed_input_agree() {
    assert_eq!(derive_slug("e\u{0301}te\u{0301}"), derive_slug("\u{00E9}t\u{00E9}"));
    assert_eq!(derive_slug("\u{00E9}t\u{00E9}"), "ete");
}
