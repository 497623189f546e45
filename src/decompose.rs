//! Decomposer: expands one codepoint into zero or more output codepoints
//! according to the active [`Options`], in a fixed order of effects, and
//! drives that expansion over a whole byte stream.

use crate::codec::{self, GRAPHEME_BOUNDARY};
use crate::error::Error;
use crate::options::Options;
use crate::tables::property::{Category, DecompType};
use crate::tables::{self, sequence, BoundClass};

const HANGUL_S_BASE: i32 = 0xAC00;
const HANGUL_L_BASE: i32 = 0x1100;
const HANGUL_V_BASE: i32 = 0x1161;
const HANGUL_T_BASE: i32 = 0x11A7;
const HANGUL_L_COUNT: i32 = 19;
const HANGUL_V_COUNT: i32 = 21;
const HANGUL_T_COUNT: i32 = 28;
const HANGUL_N_COUNT: i32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
const HANGUL_S_COUNT: i32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

/// Recursion guard: real Unicode decompositions never nest this deep.
const MAX_RECURSION: u32 = 32;

fn is_hangul_syllable(cp: i32) -> bool {
    (HANGUL_S_BASE..HANGUL_S_BASE + HANGUL_S_COUNT).contains(&cp)
}

/// Algorithmic Hangul syllable decomposition into L, V, and (if present) T
/// jamo. Never consults the Sequence Table.
fn hangul_decompose(cp: i32, out: &mut Vec<i32>) {
    let s_index = cp - HANGUL_S_BASE;
    let l = HANGUL_L_BASE + s_index / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (s_index % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t_index = s_index % HANGUL_T_COUNT;
    out.push(l);
    out.push(v);
    if t_index != 0 {
        out.push(HANGUL_T_BASE + t_index);
    }
}

/// Curated category-driven lump rules (`Zs` -> SPACE, `Pc` -> LOW LINE), on
/// top of the explicit codepoint table in `tables::data::LUMP_TARGETS`.
fn lump_substitute(cp: i32) -> Option<i32> {
    if let Some(&(_, target)) = tables::data::LUMP_TARGETS.iter().find(|&&(src, _)| src == cp) {
        return Some(target);
    }
    let category = tables::get_property(cp).category;
    match category {
        Category::Zs => Some(0x0020),
        Category::Pc => Some(0x005F),
        _ => None,
    }
}

/// Expand one codepoint into `out` under `options`, recording the resulting
/// grapheme boundclass in `last_boundclass` (the running state for
/// `charbound` sentinel emission). Returns the number of codepoints pushed.
pub fn decompose_char(
    cp: i32,
    out: &mut Vec<i32>,
    options: Options,
    last_boundclass: &mut BoundClass,
) -> Result<usize, Error> {
    decompose_char_rec(cp, out, options, last_boundclass, 0)
}

fn decompose_char_rec(
    cp: i32,
    out: &mut Vec<i32>,
    options: Options,
    last_boundclass: &mut BoundClass,
    depth: u32,
) -> Result<usize, Error> {
    assert!(depth < MAX_RECURSION, "decomposition recursion bound exceeded");

    if !codec::codepoint_valid(cp) {
        return Err(Error::InvalidUtf8);
    }

    let property = tables::get_property(cp);
    let start_len = out.len();

    if is_hangul_syllable(cp) && (options.compose() || options.decompose()) {
        emit_charbound(out, options, last_boundclass, cp);
        hangul_decompose(cp, out);
        return Ok(out.len() - start_len);
    }

    if options.rejectna() && property.category == Category::Cn {
        return Err(Error::NotAssigned);
    }

    if options.ignore() && property.ignorable {
        return Ok(0);
    }

    if options.stripna() && property.category == Category::Cn {
        return Ok(0);
    }

    if options.lump() {
        if let Some(target) = lump_substitute(cp) {
            let pushed = decompose_char_rec(target, out, options, last_boundclass, depth + 1)?;
            return Ok(pushed);
        }
    }

    if options.stripmark() && property.category.is_mark() {
        return Ok(0);
    }

    if options.casefold() && property.has_casefold() {
        let expansion = sequence::decode_sequence(tables::property::sequence_words(), property.casefold_seqindex);
        let mut pushed = 0;
        for fcp in expansion {
            pushed += decompose_char_rec(fcp, out, options, last_boundclass, depth + 1)?;
        }
        return Ok(pushed);
    }

    let wants_compat = options.compat();
    let has_usable_decomp = property.has_decomposition()
        && (property.decomp_type == DecompType::Canonical || wants_compat);

    if (options.compose() || options.decompose()) && has_usable_decomp {
        let expansion = sequence::decode_sequence(tables::property::sequence_words(), property.decomp_seqindex);
        let mut pushed = 0;
        for dcp in expansion {
            pushed += decompose_char_rec(dcp, out, options, last_boundclass, depth + 1)?;
        }
        return Ok(pushed);
    }

    emit_charbound(out, options, last_boundclass, cp);
    out.push(cp);
    Ok(out.len() - start_len)
}

fn emit_charbound(out: &mut Vec<i32>, options: Options, last_boundclass: &mut BoundClass, cp: i32) {
    if !options.charbound() {
        return;
    }
    let boundclass = tables::get_property(cp).boundclass;
    let mut state = *last_boundclass;
    let broken = crate::grapheme::break_allowed(*last_boundclass, boundclass, &mut state);
    *last_boundclass = state;
    if broken {
        out.push(GRAPHEME_BOUNDARY);
    }
}

/// Decompose a whole UTF-8 byte stream, validating `options` first.
pub fn decompose(bytes: &[u8], options: Options) -> Result<Vec<i32>, Error> {
    decompose_custom(bytes, options, |cp| cp)
}

/// Like [`decompose`], but every input codepoint is passed through `hook`
/// before decomposition — a caller-supplied substitution point.
pub fn decompose_custom(
    bytes: &[u8],
    options: Options,
    mut hook: impl FnMut(i32) -> i32,
) -> Result<Vec<i32>, Error> {
    options.validate()?;
    let mut codepoints = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let (cp, consumed) = codec::iterate(&bytes[pos..])?;
        pos += consumed;
        codepoints.push(cp);
    }
    if options.nlf2ls() || options.nlf2ps() || options.stripcc() {
        crate::normalize::canonicalize_controls(&mut codepoints, options);
    }

    let mut out = Vec::with_capacity(codepoints.len());
    let mut last_boundclass = BoundClass::Start;
    for cp in codepoints {
        decompose_char(hook(cp), &mut out, options, &mut last_boundclass)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_syllable_decomposes_to_jamo() {
        let mut out = Vec::new();
        let mut state = BoundClass::Start;
        decompose_char(0xAC01, &mut out, Options::NFD, &mut state).unwrap();
        assert_eq!(out, vec![0x1100, 0x1161, 0x11A8]);
    }

    #[test]
    fn test_canonical_decomposition_of_a_ring() {
        let mut out = Vec::new();
        let mut state = BoundClass::Start;
        decompose_char(0x00C5, &mut out, Options::NFD, &mut state).unwrap();
        assert_eq!(out, vec![0x0041, 0x030A]);
    }

    #[test]
    fn test_compat_ligature_needs_compat_flag() {
        let mut out = Vec::new();
        let mut state = BoundClass::Start;
        decompose_char(0xFB01, &mut out, Options::NFD, &mut state).unwrap();
        assert_eq!(out, vec![0xFB01]); // no canonical decomposition: passes through

        let mut out = Vec::new();
        decompose_char(0xFB01, &mut out, Options::NFKD, &mut state).unwrap();
        assert_eq!(out, vec![0x0066, 0x0069]);
    }

    #[test]
    fn test_ignore_drops_soft_hyphen() {
        let mut out = Vec::new();
        let mut state = BoundClass::Start;
        let n = decompose_char(0x00AD, &mut out, Options::NFKC_CASEFOLD, &mut state).unwrap();
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_lump_en_dash_to_hyphen() {
        let mut out = Vec::new();
        let mut state = BoundClass::Start;
        decompose_char(0x2013, &mut out, Options::NFC | Options::LUMP, &mut state).unwrap();
        assert_eq!(out, vec![0x002D]);
    }

    #[test]
    fn test_rejectna_errors_on_unassigned() {
        let mut out = Vec::new();
        let mut state = BoundClass::Start;
        let result = decompose_char(0x0590, &mut out, Options::NFC | Options::REJECTNA, &mut state);
        assert_eq!(result, Err(Error::NotAssigned));
    }

    #[test]
    fn test_decompose_custom_applies_hook_before_expansion() {
        let out = decompose_custom("A".as_bytes(), Options::NFD, |cp| cp + 0x20).unwrap();
        assert_eq!(out, vec!['a' as i32]);
    }

    #[test]
    fn test_decompose_whole_string_nfkd_casefold() {
        let out = decompose("SS".as_bytes(), Options::NFKC_CASEFOLD).unwrap();
        assert_eq!(out, vec!['s' as i32, 's' as i32]);
    }
}
