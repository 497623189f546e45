//! Normalizer: NLF/control canonicalization over a raw codepoint buffer,
//! plus canonical reordering and composition over an already decomposed one.
//!
//! [`canonicalize_controls`] runs first, directly over the codepoints a
//! UTF-8 decode produced, before any per-codepoint decomposition. The
//! reordering and composition passes expect their input to have already gone
//! through [`crate::decompose`] (so every decomposable codepoint is already
//! expanded): stable reordering by combining class, then (if `compose` is
//! set) recombination.

use crate::options::Options;
use crate::tables;

/// Newline and control canonicalization, run over the whole codepoint buffer
/// when any of `nlf2ls`, `nlf2ps`, or `stripcc` is set.
///
/// The `CR,LF` sequence collapses to a single newline event. Every newline
/// event — CR, LF, NEL (U+0085), and, if `stripcc` is set, VT (U+000B) and
/// FF (U+000C) — maps to: LF if both `nlf2ls` and `nlf2ps` are set; LS
/// (U+2028) if only `nlf2ls`; PS (U+2029) if only `nlf2ps`; SPACE otherwise.
/// If `stripcc` is set, every other C0/C1 control (U+0000-U+001F,
/// U+007F-U+009F) is dropped, except TAB (U+0009), which becomes SPACE.
pub(crate) fn canonicalize_controls(codepoints: &mut Vec<i32>, options: Options) {
    let nlf_target = if options.nlf2ls() && options.nlf2ps() {
        0x000A
    } else if options.nlf2ls() {
        0x2028
    } else if options.nlf2ps() {
        0x2029
    } else {
        0x0020
    };

    let mut result = Vec::with_capacity(codepoints.len());
    let mut i = 0;
    while i < codepoints.len() {
        let cp = codepoints[i];
        let is_newline_event = matches!(cp, 0x000D | 0x000A | 0x0085)
            || (options.stripcc() && matches!(cp, 0x000B | 0x000C));

        if is_newline_event {
            result.push(nlf_target);
            if cp == 0x000D && codepoints.get(i + 1) == Some(&0x000A) {
                i += 1; // CR,LF collapses to one event
            }
        } else if options.stripcc() && is_other_control(cp) {
            if cp == 0x0009 {
                result.push(0x0020);
            }
            // every other C0/C1 control is dropped
        } else {
            result.push(cp);
        }
        i += 1;
    }
    *codepoints = result;
}

fn is_other_control(cp: i32) -> bool {
    (0x0000..=0x001F).contains(&cp) || (0x007F..=0x009F).contains(&cp)
}

/// Reorder combining marks within each maximal run of non-zero combining
/// class by a stable sort on that class (canonical ordering, UAX #15 D108).
/// Starters (`combining_class == 0`) always begin a new run.
fn canonical_reorder(buf: &mut [i32]) {
    let mut i = 0;
    while i < buf.len() {
        if tables::get_property(buf[i]).combining_class == 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < buf.len() && tables::get_property(buf[i]).combining_class != 0 {
            i += 1;
        }
        buf[start..i].sort_by_key(|&cp| tables::get_property(cp).combining_class);
    }
}

const HANGUL_S_BASE: i32 = 0xAC00;
const HANGUL_L_BASE: i32 = 0x1100;
const HANGUL_V_BASE: i32 = 0x1161;
const HANGUL_T_BASE: i32 = 0x11A7;
const HANGUL_L_COUNT: i32 = 19;
const HANGUL_V_COUNT: i32 = 21;
const HANGUL_T_COUNT: i32 = 28;
const HANGUL_N_COUNT: i32 = HANGUL_V_COUNT * HANGUL_T_COUNT;

fn hangul_compose_pair(a: i32, b: i32) -> Option<i32> {
    let l_index = a - HANGUL_L_BASE;
    if (0..HANGUL_L_COUNT).contains(&l_index) {
        let v_index = b - HANGUL_V_BASE;
        if (0..HANGUL_V_COUNT).contains(&v_index) {
            return Some(HANGUL_S_BASE + (l_index * HANGUL_V_COUNT + v_index) * HANGUL_T_COUNT);
        }
        return None;
    }
    let s_index = a - HANGUL_S_BASE;
    if (0..HANGUL_L_COUNT * HANGUL_N_COUNT).contains(&s_index) && s_index % HANGUL_T_COUNT == 0 {
        let t_index = b - HANGUL_T_BASE;
        if (1..HANGUL_T_COUNT).contains(&t_index) {
            return Some(a + t_index);
        }
    }
    None
}

/// Try to compose `starter` with `combiner` via the table, honoring
/// `stable` (composition exclusions are never composed).
fn table_compose(starter: i32, combiner: i32, stable: bool) -> Option<i32> {
    let starter_prop = tables::get_property(starter);
    if !starter_prop.is_primary_starter() {
        return None;
    }
    let combiner_prop = tables::get_property(combiner);
    if !combiner_prop.is_combiner_entry() {
        return None;
    }
    let record = tables::property::combination_record(starter_prop.comb_index)?;
    let id = tables::combination::combiner_id(combiner_prop.comb_index);
    let composite = record.lookup(id)?;
    if stable && tables::get_property(composite).comp_exclusion {
        return None;
    }
    Some(composite)
}

/// Canonical composition (UAX #15 D117): walk left to right, composing a
/// starter with a following combiner unless a combining class of equal or
/// higher value already intervened (the "blocking" rule).
fn compose(buf: &mut Vec<i32>, options: Options) {
    let mut out: Vec<i32> = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        let mut starter = buf[i];
        i += 1;
        let mut blocking_class: Option<u8> = None;
        let mut j = i;
        while j < buf.len() {
            let combiner = buf[j];
            let ccc = tables::get_property(combiner).combining_class;

            let composite = if ccc == 0 {
                hangul_compose_pair(starter, combiner)
            } else if blocking_class.map_or(true, |b| ccc > b) {
                hangul_compose_pair(starter, combiner)
                    .or_else(|| table_compose(starter, combiner, options.stable()))
            } else {
                None
            };

            match composite {
                Some(composed) => {
                    starter = composed;
                    buf.remove(j);
                    // Do not advance j: the next combiner has shifted down.
                }
                None => {
                    if ccc == 0 {
                        break; // a new starter ends this composition run
                    }
                    blocking_class = Some(blocking_class.map_or(ccc, |b| b.max(ccc)));
                    j += 1;
                }
            }
        }
        out.push(starter);
    }
    *buf = out;
}

/// Run canonical reordering, then (if `compose` is set) composition, over
/// an already-decomposed codepoint buffer.
pub fn normalize_utf32(buf: &mut Vec<i32>, options: Options) {
    canonical_reorder(buf);
    if options.compose() {
        compose(buf, options);
    }
}

/// Split a normalized buffer into extended grapheme clusters, skipping the
/// `-1` boundary sentinels `charbound` may have inserted.
pub fn grapheme_clusters(buf: &[i32]) -> Vec<Vec<i32>> {
    let filtered: Vec<i32> = buf
        .iter()
        .copied()
        .filter(|&cp| cp != crate::codec::GRAPHEME_BOUNDARY)
        .collect();
    crate::grapheme::GraphemeIter::new(&filtered)
        .map(|cluster| cluster.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;

    #[test]
    fn test_reorder_then_compose_a_ring() {
        let mut buf = decompose("A\u{030A}".as_bytes(), Options::NFD).unwrap();
        normalize_utf32(&mut buf, Options::NFC);
        assert_eq!(buf, vec![0x00C5]);
    }

    #[test]
    fn test_hangul_lvt_composes() {
        let mut buf = vec![0x1100, 0x1161, 0x11A8];
        normalize_utf32(&mut buf, Options::NFC);
        assert_eq!(buf, vec![0xAC01]);
    }

    #[test]
    fn test_hangul_lv_without_trailing_consonant_composes() {
        let mut buf = vec![0x1100, 0x1161];
        normalize_utf32(&mut buf, Options::NFC);
        assert_eq!(buf, vec![0xAC00]);
    }

    #[test]
    fn test_nfkc_of_ligature_has_no_canonical_decomposition_under_nfc() {
        let mut buf = decompose("\u{FB01}".as_bytes(), Options::NFC).unwrap();
        normalize_utf32(&mut buf, Options::NFC);
        assert_eq!(buf, vec![0xFB01]);
    }

    #[test]
    fn test_stable_option_respects_composition_exclusion() {
        // No exclusions are marked in this crate's curated data set, so this
        // exercises the code path without asserting a specific exclusion.
        let mut buf = decompose("e\u{0301}".as_bytes(), Options::NFC).unwrap();
        normalize_utf32(&mut buf, Options::NFC);
        assert_eq!(buf, vec![0x00E9]);
    }

    #[test]
    fn test_stripcc_alone_maps_lf_to_space_not_delete() {
        let mut cps = vec!['a' as i32, 0x000A, 'b' as i32];
        canonicalize_controls(&mut cps, Options::STRIPCC);
        assert_eq!(cps, vec!['a' as i32, 0x0020, 'b' as i32]);
    }

    #[test]
    fn test_stripcc_drops_vt_and_ff_via_nlf_mapping() {
        let mut cps = vec!['a' as i32, 0x000B, 0x000C, 'b' as i32];
        canonicalize_controls(&mut cps, Options::STRIPCC);
        assert_eq!(cps, vec!['a' as i32, 0x0020, 0x0020, 'b' as i32]);
    }

    #[test]
    fn test_stripcc_drops_other_controls_and_blanks_tab() {
        let mut cps = vec![0x0001, 0x0009, 0x007F];
        canonicalize_controls(&mut cps, Options::STRIPCC);
        assert_eq!(cps, vec![0x0020]);
    }

    #[test]
    fn test_nlf2ls_maps_crlf_to_single_ls() {
        let mut cps = vec!['a' as i32, 0x000D, 0x000A, 'b' as i32];
        canonicalize_controls(&mut cps, Options::NLF2LS);
        assert_eq!(cps, vec!['a' as i32, 0x2028, 'b' as i32]);
    }

    #[test]
    fn test_decompose_custom_runs_phase_a_before_per_codepoint_pipeline() {
        let out = crate::decompose::decompose_custom("a\nb".as_bytes(), Options::STRIPCC, |cp| cp)
            .unwrap();
        assert_eq!(out, vec!['a' as i32, 0x0020, 'b' as i32]);
    }
}
