//! High-level Map: the single-call entry point gluing decompose, normalize,
//! and re-encode together, plus the five named normal-form wrappers.

use crate::codec;
use crate::decompose;
use crate::error::Error;
use crate::normalize;
use crate::options::Options;

/// Decompose, normalize, and re-encode `bytes` under `options`.
///
/// `decompose` fills the intermediate codepoint buffer in one pass,
/// `reencode` does the same for the output byte buffer; `Vec` owns its own
/// growth, so there is no separate sizing pass.
pub fn map(bytes: &[u8], options: Options) -> Result<Vec<u8>, Error> {
    map_custom(bytes, options, |cp| cp)
}

/// Like [`map`], but every input codepoint passes through `hook` before
/// decomposition.
pub fn map_custom(
    bytes: &[u8],
    options: Options,
    hook: impl FnMut(i32) -> i32,
) -> Result<Vec<u8>, Error> {
    options.validate()?;
    let mut buf = decompose::decompose_custom(bytes, options, hook)?;
    normalize::normalize_utf32(&mut buf, options);
    Ok(codec::reencode(&buf, options))
}

/// Canonical decomposition (NFD).
pub fn nfd(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    map(bytes, Options::NFD)
}

/// Canonical composition (NFC).
pub fn nfc(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    map(bytes, Options::NFC)
}

/// Compatibility decomposition (NFKD).
pub fn nfkd(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    map(bytes, Options::NFKD)
}

/// Compatibility composition (NFKC).
pub fn nfkc(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    map(bytes, Options::NFKC)
}

/// Full case folding composed with NFKC, for caseless matching.
pub fn nfkc_casefold(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    map(bytes, Options::NFKC_CASEFOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfd_splits_a_ring() {
        let out = nfd("\u{00C5}".as_bytes()).unwrap();
        assert_eq!(out, "A\u{030A}".as_bytes());
    }

    #[test]
    fn test_nfc_composes_a_ring() {
        let out = nfc("A\u{030A}".as_bytes()).unwrap();
        assert_eq!(out, "\u{00C5}".as_bytes());
    }

    #[test]
    fn test_nfkd_expands_ligature() {
        let out = nfkd("\u{FB01}".as_bytes()).unwrap();
        assert_eq!(out, "fi".as_bytes());
    }

    #[test]
    fn test_nfkc_leaves_canonical_form_unchanged() {
        let out = nfkc("e\u{0301}".as_bytes()).unwrap();
        assert_eq!(out, "\u{00E9}".as_bytes());
    }

    #[test]
    fn test_nfkc_casefold_full_scenario() {
        // A + combining acute + soft hyphen + "fi" ligature -> "áfi"
        let input = "A\u{0301}\u{00AD}\u{FB01}";
        let out = nfkc_casefold(input.as_bytes()).unwrap();
        assert_eq!(out, "\u{00E1}fi".as_bytes());
    }

    #[test]
    fn test_invalid_options_rejected() {
        let result = map("x".as_bytes(), Options::COMPOSE | Options::DECOMPOSE);
        assert_eq!(result, Err(Error::InvalidOpts));
    }

    #[test]
    fn test_map_custom_hook_applies_before_normalization() {
        let out = map_custom("A".as_bytes(), Options::NFC, |cp| cp + 0x20).unwrap();
        assert_eq!(out, "a".as_bytes());
    }
}
