//! UTF-8 aware Unicode normalization, case folding, and grapheme-cluster
//! boundary detection, modeled on the architecture of a two-stage property
//! table, a packed sequence table, and a starter/combiner composition
//! table described in the Unicode Standard's own reference algorithms.

pub mod codec;
pub mod decompose;
pub mod error;
pub mod grapheme;
pub mod map;
pub mod normalize;
pub mod options;
pub mod tables;

pub use codec::{codepoint_valid, GRAPHEME_BOUNDARY};
pub use error::Error;
pub use grapheme::{grapheme_break, grapheme_break_stateful, GraphemeIter, GraphemeState};
pub use map::{map, map_custom, nfc, nfd, nfkc, nfkc_casefold, nfkd};
pub use options::Options;
pub use tables::property::{BidiClass, BoundClass, Category, DecompType, Property};
pub use tables::get_property;

/// The general category of `cp` as its two-letter abbreviation.
pub fn category(cp: i32) -> Category {
    get_property(cp).category
}

/// The general category of `cp`, e.g. `"Lu"`.
pub fn category_string(cp: i32) -> &'static str {
    category(cp).as_str()
}

/// An approximate terminal display width for `cp`: 0 for combining marks
/// and most format/control characters, 1 for ordinary narrow characters,
/// 2 for wide characters such as Hangul syllables and emoji.
pub fn charwidth(cp: i32) -> u8 {
    get_property(cp).charwidth
}

/// Simple (single-codepoint, context-free) lowercase mapping. Returns `cp`
/// unchanged if it has none.
pub fn tolower(cp: i32) -> i32 {
    let property = get_property(cp);
    if property.lowercase_seqindex == tables::sequence::NO_SEQUENCE {
        cp
    } else {
        tables::sequence::decode_single(tables::property::sequence_words(), property.lowercase_seqindex)
    }
}

/// Simple (single-codepoint, context-free) uppercase mapping. Returns `cp`
/// unchanged if it has none.
pub fn toupper(cp: i32) -> i32 {
    let property = get_property(cp);
    if property.uppercase_seqindex == tables::sequence::NO_SEQUENCE {
        cp
    } else {
        tables::sequence::decode_single(tables::property::sequence_words(), property.uppercase_seqindex)
    }
}

/// Simple (single-codepoint, context-free) titlecase mapping. Returns `cp`
/// unchanged if it has none.
pub fn totitle(cp: i32) -> i32 {
    let property = get_property(cp);
    if property.titlecase_seqindex == tables::sequence::NO_SEQUENCE {
        cp
    } else {
        tables::sequence::decode_single(tables::property::sequence_words(), property.titlecase_seqindex)
    }
}

/// This crate's own version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The version of the Unicode Standard this crate's curated tables target.
pub fn unicode_version() -> &'static str {
    "13.0.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accessors() {
        assert_eq!(category('A' as i32), Category::Lu);
        assert_eq!(category_string('a' as i32), "Ll");
    }

    #[test]
    fn test_simple_case_mappings() {
        assert_eq!(tolower('A' as i32), 'a' as i32);
        assert_eq!(toupper('a' as i32), 'A' as i32);
        assert_eq!(totitle('a' as i32), 'A' as i32);
        assert_eq!(tolower(0x00DF), 0x00DF); // sharp s has no simple uppercase/lowercase change
    }

    #[test]
    fn test_charwidth() {
        assert_eq!(charwidth('A' as i32), 1);
        assert_eq!(charwidth(0xAC01), 2); // Hangul syllable
    }

    #[test]
    fn test_version_strings() {
        assert!(!version().is_empty());
        assert_eq!(unicode_version(), "13.0.0");
    }
}
