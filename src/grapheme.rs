//! Grapheme Break Engine: a pair-plus-state automaton over [`BoundClass`]
//! values implementing extended grapheme cluster boundary rules from
//! UAX #29, including the carried state GB11 and GB12/13 require.

use crate::tables::property::get_property;
use crate::tables::BoundClass;

/// Caller-owned automaton state: either a carried [`BoundClass`] or the
/// initial `START` state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeState(Option<BoundClass>);

impl Default for GraphemeState {
    fn default() -> Self {
        GraphemeState(None)
    }
}

impl GraphemeState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The pure boundclass-pair rule table (GB1, GB3-GB13, GB999), ignoring the
/// carried state needed for GB11/GB12-13 — those are layered on in
/// [`break_allowed`].
fn pair_break(lbc: BoundClass, rbc: BoundClass) -> bool {
    use BoundClass::*;
    if lbc == Start {
        return true; // GB1
    }
    if lbc == Cr && rbc == Lf {
        return false; // GB3
    }
    if matches!(lbc, Cr | Lf | Control) {
        return true; // GB4
    }
    if matches!(rbc, Cr | Lf | Control) {
        return true; // GB5
    }
    if lbc == L && matches!(rbc, L | V | Lv | Lvt) {
        return false; // GB6
    }
    if matches!(lbc, Lv | V) && matches!(rbc, V | T) {
        return false; // GB7
    }
    if matches!(lbc, Lvt | T) && rbc == T {
        return false; // GB8
    }
    if matches!(rbc, Extend | Zwj) {
        return false; // GB9
    }
    if rbc == SpacingMark {
        return false; // GB9a
    }
    if lbc == Prepend {
        return false; // GB9b
    }
    if matches!(lbc, EBase | EBaseGaz) && rbc == EModifier {
        return false; // GB10: emoji-modifier sequences
    }
    if lbc == Zwj && matches!(rbc, GlueAfterZwj | EBaseGaz) {
        return false; // GB11 for the Glue_After_Zwj classes
    }
    if lbc == EZwg && rbc == ExtendedPictographic {
        return false; // GB11: closes ExtendedPictographic x Extend* x ZWJ x ExtendedPictographic
    }
    if lbc == RegionalIndicator && rbc == RegionalIndicator {
        return false; // GB12/GB13 (first half of the pair; carried state finishes it)
    }
    true // GB999
}

/// Advance the automaton by one pair, returning whether a break is permitted
/// between `lbc` and `rbc`. `state` is updated in place.
pub(crate) fn break_allowed(lbc: BoundClass, rbc: BoundClass, state: &mut BoundClass) -> bool {
    use BoundClass::*;

    let effective_lbc = if *state == Start { lbc } else { *state };
    let permitted = pair_break(effective_lbc, rbc);

    // GB12/GB13: after a completed regional-indicator pair, force the next
    // boundary by resetting state to OTHER rather than RI, so a third RI
    // doesn't silently pair with the second.
    *state = if effective_lbc == rbc && rbc == RegionalIndicator {
        Other
    } else if effective_lbc == Prepend && !permitted {
        Other
    } else {
        rbc
    };

    // GB11: Extended_Pictographic x Extend* x ZWJ x Extended_Pictographic.
    if effective_lbc == ExtendedPictographic {
        if rbc == Extend {
            *state = ExtendedPictographic;
        } else if rbc == Zwj {
            *state = EZwg;
        }
    } else if effective_lbc == EZwg && rbc == ExtendedPictographic {
        *state = ExtendedPictographic;
    }

    permitted
}

/// Stateless query: is a grapheme-cluster boundary permitted between `c1`
/// and `c2`, assuming `c1` is the first codepoint seen (state == START)?
pub fn grapheme_break(c1: i32, c2: i32) -> bool {
    let mut state = BoundClass::Start;
    grapheme_break_stateful_raw(c1, c2, &mut state)
}

/// Stateful query threading a caller-owned [`GraphemeState`] across an
/// entire codepoint sequence.
pub fn grapheme_break_stateful(c1: i32, c2: i32, state: &mut GraphemeState) -> bool {
    let mut bc = state.0.unwrap_or(BoundClass::Start);
    let permitted = grapheme_break_stateful_raw(c1, c2, &mut bc);
    state.0 = Some(bc);
    permitted
}

fn grapheme_break_stateful_raw(c1: i32, c2: i32, state: &mut BoundClass) -> bool {
    let lbc = get_property(c1).boundclass;
    let rbc = get_property(c2).boundclass;
    break_allowed(lbc, rbc, state)
}

/// Split `code_points` into extended grapheme clusters.
pub struct GraphemeIter<'a> {
    code_points: &'a [i32],
    state: GraphemeState,
    pos: usize,
}

impl<'a> GraphemeIter<'a> {
    pub fn new(code_points: &'a [i32]) -> Self {
        GraphemeIter {
            code_points,
            state: GraphemeState::new(),
            pos: 0,
        }
    }
}

impl<'a> Iterator for GraphemeIter<'a> {
    type Item = &'a [i32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.code_points.len() {
            return None;
        }
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.code_points.len() {
            let broken = grapheme_break_stateful(
                self.code_points[self.pos - 1],
                self.code_points[self.pos],
                &mut self.state,
            );
            if broken {
                break;
            }
            self.pos += 1;
        }
        Some(&self.code_points[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cr_lf_no_break() {
        assert!(!grapheme_break(0x0D, 0x0A));
    }

    #[test]
    fn test_control_forces_break() {
        assert!(grapheme_break(0x0041, 0x000A)); // letter, then LF
    }

    #[test]
    fn test_extend_suppresses_break() {
        // "e" + combining acute accent stay in one cluster.
        assert!(!grapheme_break(0x0065, 0x0301));
    }

    #[test]
    fn test_regional_indicator_pairing() {
        // RI RI RI breaks only before the third RI.
        let mut state = GraphemeState::new();
        let ri = 0x1F1FA; // 🇺
        let ri2 = 0x1F1F8; // 🇸
        assert!(!grapheme_break_stateful(ri, ri2, &mut state)); // first pair, no break
        assert!(grapheme_break_stateful(ri2, ri, &mut state)); // break before third RI
    }

    #[test]
    fn test_grapheme_iter_splits_ri_pairs_and_simple_clusters() {
        let cps = vec![0x1F1FA, 0x1F1F8, 0x1F1FA, 0x0041];
        let clusters: Vec<&[i32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters, vec![&cps[0..2], &cps[2..3], &cps[3..4]]);
    }

    #[test]
    fn test_zwj_joined_extended_pictographic_no_break() {
        // Heart, ZWJ, heart: GB11 keeps the whole sequence as one cluster.
        let cps = vec![0x2764, 0x200D, 0x2764];
        let clusters: Vec<&[i32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters, vec![&cps[..]]);
    }

    #[test]
    fn test_hangul_lv_t_no_break() {
        // L V T syllable stays one cluster: 각 decomposed.
        let cps = vec![0x1100, 0x1161, 0x11A8];
        let clusters: Vec<&[i32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters, vec![&cps[..]]);
    }
}
