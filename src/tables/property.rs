//! Property Table: a static two-stage lookup mapping any codepoint in
//! `[0, 0x110000)` to a [`Property`] record.
//!
//! `stage1` is indexed by `codepoint >> 8` and yields a base offset;
//! `stage2[base + (codepoint & 0xFF)]` yields the index into the
//! deduplicated `PROPERTIES` array. This exploits the large contiguous runs
//! of identical properties in Unicode: every unpopulated block shares the
//! single all-`Cn` stage2 segment.

use super::combination::{self, CombinationRecord};
use super::data;
use super::sequence::{self, NO_SEQUENCE};
use lazy_static::lazy_static;
use std::collections::HashMap;

const BLOCK_SIZE: i32 = 256;
const BLOCK_COUNT: usize = 0x110000 / BLOCK_SIZE as usize;

/// One of the 30 Unicode general categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lu, Ll, Lt, Lm, Lo,
    Mn, Mc, Me,
    Nd, Nl, No,
    Pc, Pd, Ps, Pe, Pi, Pf, Po,
    Sm, Sc, Sk, So,
    Zs, Zl, Zp,
    Cc, Cf, Cs, Co, Cn,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        use Category::*;
        match self {
            Lu => "Lu", Ll => "Ll", Lt => "Lt", Lm => "Lm", Lo => "Lo",
            Mn => "Mn", Mc => "Mc", Me => "Me",
            Nd => "Nd", Nl => "Nl", No => "No",
            Pc => "Pc", Pd => "Pd", Ps => "Ps", Pe => "Pe", Pi => "Pi", Pf => "Pf", Po => "Po",
            Sm => "Sm", Sc => "Sc", Sk => "Sk", So => "So",
            Zs => "Zs", Zl => "Zl", Zp => "Zp",
            Cc => "Cc", Cf => "Cf", Cs => "Cs", Co => "Co", Cn => "Cn",
        }
    }

    /// Categories Mn, Mc, Me — the `stripmark` target set.
    pub fn is_mark(self) -> bool {
        matches!(self, Category::Mn | Category::Mc | Category::Me)
    }
}

/// One of the 23 Unicode bidirectional classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidiClass {
    L, R, Al, En, Es, Et, An, Cs, Nsm, Bn, B, S, Ws, On,
    Lre, Lro, Rle, Rlo, Pdf, Lri, Rli, Fsi, Pdi,
}

/// The decomposition kind a mapping represents: canonical, or one of the 16
/// compatibility subtypes from `UnicodeData.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompType {
    Canonical,
    Font, NoBreak, Initial, Medial, Final, Isolated, Circle, Super, Sub,
    Vertical, Wide, Narrow, Small, Square, Fraction, Compat,
}

/// UAX #29 grapheme boundary classes, including the synthetic `EZwg` state
/// used to implement GB11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundClass {
    Start,
    Other,
    Cr,
    Lf,
    Control,
    Extend,
    L,
    V,
    T,
    Lv,
    Lvt,
    RegionalIndicator,
    SpacingMark,
    Prepend,
    Zwj,
    EBase,
    EModifier,
    GlueAfterZwj,
    EBaseGaz,
    ExtendedPictographic,
    EZwg,
}

/// One per-codepoint property record.
#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub category: Category,
    pub combining_class: u8,
    pub bidi_class: BidiClass,
    pub decomp_type: DecompType,
    pub decomp_seqindex: u16,
    pub casefold_seqindex: u16,
    pub uppercase_seqindex: u16,
    pub lowercase_seqindex: u16,
    pub titlecase_seqindex: u16,
    pub comb_index: u16,
    pub bidi_mirrored: bool,
    pub comp_exclusion: bool,
    pub ignorable: bool,
    pub control_boundary: bool,
    pub charwidth: u8,
    pub boundclass: BoundClass,
}

impl Property {
    const DEFAULT: Property = Property {
        category: Category::Cn,
        combining_class: 0,
        bidi_class: BidiClass::L,
        decomp_type: DecompType::Canonical,
        decomp_seqindex: NO_SEQUENCE,
        casefold_seqindex: NO_SEQUENCE,
        uppercase_seqindex: NO_SEQUENCE,
        lowercase_seqindex: NO_SEQUENCE,
        titlecase_seqindex: NO_SEQUENCE,
        comb_index: 0,
        bidi_mirrored: false,
        comp_exclusion: false,
        ignorable: false,
        control_boundary: false,
        charwidth: 1,
        boundclass: BoundClass::Other,
    };

    pub fn has_decomposition(&self) -> bool {
        self.decomp_seqindex != NO_SEQUENCE
    }
    pub fn has_casefold(&self) -> bool {
        self.casefold_seqindex != NO_SEQUENCE
    }
    pub fn is_primary_starter(&self) -> bool {
        self.comb_index != 0 && !combination::is_combiner(self.comb_index)
    }
    pub fn is_combiner_entry(&self) -> bool {
        combination::is_combiner(self.comb_index)
    }
}

struct Tables {
    stage1: Vec<u32>,
    stage2: Vec<u16>,
    properties: Vec<Property>,
    sequence_words: Vec<u16>,
    combination_records: Vec<CombinationRecord>,
}

fn build_tables() -> Tables {
    let mut sequence_words = Vec::new();
    let mut properties = vec![Property::DEFAULT];
    let mut by_cp: HashMap<i32, usize> = HashMap::new();

    // Base category/bidi/width/boundclass ranges, lowest priority.
    for range in data::RANGES {
        let mut prop = Property::DEFAULT;
        prop.category = range.category;
        prop.combining_class = range.combining_class;
        prop.bidi_class = range.bidi_class;
        prop.charwidth = range.charwidth;
        prop.boundclass = range.boundclass;
        prop.ignorable = range.ignorable;
        prop.bidi_mirrored = range.bidi_mirrored;
        let idx = properties.len();
        properties.push(prop);
        for cp in range.start..=range.end {
            by_cp.insert(cp, idx);
        }
    }

    // Per-codepoint mapping overrides: decompositions, casefold, simple case.
    let mut combination_builder = combination::CombinationTableBuilder::new();
    for pair in data::COMPOSITIONS {
        combination_builder.add(pair.starter, pair.combiner, pair.composite);
    }

    for m in data::MAPPINGS {
        let idx = *by_cp.get(&m.cp).unwrap_or(&0);
        let mut prop = properties[idx];

        if let Some(cps) = m.decomp_canonical {
            prop.decomp_type = DecompType::Canonical;
            prop.decomp_seqindex = sequence::push_sequence(&mut sequence_words, cps);
        } else if let Some((tag, cps)) = m.decomp_compat {
            prop.decomp_type = tag;
            prop.decomp_seqindex = sequence::push_sequence(&mut sequence_words, cps);
        }
        if let Some(cps) = m.casefold {
            prop.casefold_seqindex = sequence::push_sequence(&mut sequence_words, cps);
        }
        if let Some(cp) = m.uppercase {
            prop.uppercase_seqindex = sequence::push_single(&mut sequence_words, cp);
        }
        if let Some(cp) = m.lowercase {
            prop.lowercase_seqindex = sequence::push_single(&mut sequence_words, cp);
        }
        if let Some(cp) = m.titlecase {
            prop.titlecase_seqindex = sequence::push_single(&mut sequence_words, cp);
        }
        prop.comp_exclusion = m.comp_exclusion;

        let new_idx = properties.len();
        properties.push(prop);
        by_cp.insert(m.cp, new_idx);
    }

    // Precomposed Hangul syllables: algorithmic, not data-driven. Every
    // syllable is LV (no trailing consonant) or LVT
    // depending on its index into the 28-wide T cycle; populate all 11,172
    // here rather than hand-authoring them in `data`.
    const S_BASE: i32 = 0xAC00;
    const T_COUNT: i32 = 28;
    const S_COUNT: i32 = 11172;
    for i in 0..S_COUNT {
        let cp = S_BASE + i;
        let mut prop = Property::DEFAULT;
        prop.category = Category::Lo;
        prop.bidi_class = BidiClass::L;
        prop.charwidth = 2;
        prop.boundclass = if i % T_COUNT == 0 {
            BoundClass::Lv
        } else {
            BoundClass::Lvt
        };
        let idx = properties.len();
        properties.push(prop);
        by_cp.insert(cp, idx);
    }

    let (combination_records, combination_index, combiner_ids) = combination_builder.build();
    for (&starter, &record_idx) in &combination_index {
        if let Some(&idx) = by_cp.get(&starter) {
            // +1: comb_index == 0 means "not a starter" (Property::DEFAULT),
            // so record 0 cannot be addressed directly.
            properties[idx].comb_index = (record_idx + 1) as u16;
        }
    }
    // Combiner codepoints also need their comb_index set to the
    // combiner-flagged id, even if they have no other special property.
    for (&combiner, &id) in &combiner_ids {
        let idx = *by_cp.get(&combiner).unwrap_or(&0);
        let mut prop = properties[idx];
        prop.comb_index = combination::COMBINER_FLAG | id;
        let new_idx = properties.len();
        properties.push(prop);
        by_cp.insert(combiner, new_idx);
    }

    // Two-stage table: one stage2 block of BLOCK_SIZE entries per stage1 slot.
    let mut stage1 = Vec::with_capacity(BLOCK_COUNT);
    let mut stage2 = Vec::new();
    let empty_block_base: u32 = {
        let base = stage2.len() as u32;
        stage2.extend(std::iter::repeat(0u16).take(BLOCK_SIZE as usize));
        base
    };
    for block in 0..BLOCK_COUNT as i32 {
        let block_start = block * BLOCK_SIZE;
        let has_content = (0..BLOCK_SIZE).any(|off| by_cp.contains_key(&(block_start + off)));
        if !has_content {
            stage1.push(empty_block_base);
            continue;
        }
        let base = stage2.len() as u32;
        for off in 0..BLOCK_SIZE {
            let cp = block_start + off;
            let idx = by_cp.get(&cp).copied().unwrap_or(0);
            stage2.push(idx as u16);
        }
        stage1.push(base);
    }

    Tables {
        stage1,
        stage2,
        properties,
        sequence_words,
        combination_records,
    }
}

lazy_static! {
    static ref TABLES: Tables = build_tables();
}

/// Fetch the property record for `cp`. Out-of-range codepoints (including
/// the grapheme-boundary sentinel `-1`) map to the default `Cn` record.
pub fn get_property(cp: i32) -> &'static Property {
    if !(0..0x110000).contains(&cp) {
        return &Property::DEFAULT;
    }
    let block = (cp / BLOCK_SIZE) as usize;
    let offset = (cp % BLOCK_SIZE) as usize;
    let base = TABLES.stage1[block] as usize;
    let idx = TABLES.stage2[base + offset] as usize;
    &TABLES.properties[idx]
}

pub fn sequence_words() -> &'static [u16] {
    &TABLES.sequence_words
}

pub fn combination_record(comb_index: u16) -> Option<&'static CombinationRecord> {
    if comb_index == 0 {
        return None;
    }
    TABLES.combination_records.get(comb_index as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_unassigned() {
        let p = get_property(0x0590); // unassigned in our curated subset
        assert_eq!(p.category, Category::Cn);
    }

    #[test]
    fn test_default_for_out_of_range() {
        let p = get_property(0x110000);
        assert_eq!(p.category, Category::Cn);
        let p = get_property(-1);
        assert_eq!(p.category, Category::Cn);
    }

    #[test]
    fn test_ascii_letter_category() {
        let p = get_property('A' as i32);
        assert_eq!(p.category, Category::Lu);
        let p = get_property('a' as i32);
        assert_eq!(p.category, Category::Ll);
    }

    #[test]
    fn test_combining_ring_above_has_nonzero_ccc() {
        let p = get_property(0x030A);
        assert!(p.combining_class > 0);
    }

    #[test]
    fn test_a_ring_composition_record_present() {
        let p = get_property(0x0041);
        assert!(p.is_primary_starter());
        let record = combination_record(p.comb_index).unwrap();
        let ring = get_property(0x030A);
        assert!(ring.is_combiner_entry());
        let id = combination::combiner_id(ring.comb_index);
        assert_eq!(record.lookup(id), Some(0x00C5));
    }
}
