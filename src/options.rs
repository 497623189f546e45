//! The option bitset gating every stage of the pipeline, plus the named
//! convenience masks for the four normal forms.

use bitflags::bitflags;

bitflags! {
    /// Independent option flags. Not every combination is meaningful — see
    /// [`Options::validate`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Options: u32 {
        /// Input is NUL-terminated.
        const NULLTERM   = 1 << 0;
        /// Respect Unicode Versioning Stability: exclude composition
        /// exclusions from composition results.
        const STABLE     = 1 << 1;
        /// Use compatibility decomposition as well as canonical.
        const COMPAT     = 1 << 2;
        /// Perform the composition pass. Mutually exclusive with `DECOMPOSE`.
        const COMPOSE    = 1 << 3;
        /// Perform the decomposition pass only. Mutually exclusive with `COMPOSE`.
        const DECOMPOSE  = 1 << 4;
        /// Drop default-ignorable codepoints.
        const IGNORE     = 1 << 5;
        /// Fail with `NotAssigned` on unassigned codepoints.
        const REJECTNA   = 1 << 6;
        /// Map newline sequences to U+2028 LINE SEPARATOR.
        const NLF2LS     = 1 << 7;
        /// Map newline sequences to U+2029 PARAGRAPH SEPARATOR.
        const NLF2PS     = 1 << 8;
        /// Strip (or, for TAB, blank) control characters.
        const STRIPCC    = 1 << 9;
        /// Apply full Unicode case folding.
        const CASEFOLD   = 1 << 10;
        /// Insert a grapheme-cluster boundary sentinel (`-1`) before each cluster.
        const CHARBOUND  = 1 << 11;
        /// Map a curated set of punctuation/symbols to plain ASCII equivalents.
        const LUMP       = 1 << 12;
        /// Drop all combining marks (Mn, Mc, Me). Requires `COMPOSE` or `DECOMPOSE`.
        const STRIPMARK  = 1 << 13;
        /// Drop unassigned codepoints.
        const STRIPNA    = 1 << 14;
    }
}

impl Options {
    /// `NFD  = nullterm | stable | decompose`
    pub const NFD: Options = Options::NULLTERM
        .union(Options::STABLE)
        .union(Options::DECOMPOSE);
    /// `NFC  = nullterm | stable | compose`
    pub const NFC: Options = Options::NULLTERM
        .union(Options::STABLE)
        .union(Options::COMPOSE);
    /// `NFKD = nullterm | stable | decompose | compat`
    pub const NFKD: Options = Options::NFD.union(Options::COMPAT);
    /// `NFKC = nullterm | stable | compose | compat`
    pub const NFKC: Options = Options::NFC.union(Options::COMPAT);
    /// `NFKC_Casefold = nullterm | stable | compose | compat | casefold | ignore`
    pub const NFKC_CASEFOLD: Options = Options::NFKC
        .union(Options::CASEFOLD)
        .union(Options::IGNORE);

    /// Reject option combinations the pipeline cannot honor.
    ///
    /// `compose` and `decompose` are mutually exclusive, and `stripmark`
    /// requires one of them to be set.
    pub fn validate(self) -> Result<(), crate::error::Error> {
        let both_passes = self.contains(Options::COMPOSE) && self.contains(Options::DECOMPOSE);
        let unanchored_stripmark = self.contains(Options::STRIPMARK)
            && !(self.contains(Options::COMPOSE) || self.contains(Options::DECOMPOSE));
        if both_passes || unanchored_stripmark {
            Err(crate::error::Error::InvalidOpts)
        } else {
            Ok(())
        }
    }

    pub fn nullterm(self) -> bool {
        self.contains(Options::NULLTERM)
    }
    pub fn stable(self) -> bool {
        self.contains(Options::STABLE)
    }
    pub fn compat(self) -> bool {
        self.contains(Options::COMPAT)
    }
    pub fn compose(self) -> bool {
        self.contains(Options::COMPOSE)
    }
    pub fn decompose(self) -> bool {
        self.contains(Options::DECOMPOSE)
    }
    pub fn ignore(self) -> bool {
        self.contains(Options::IGNORE)
    }
    pub fn rejectna(self) -> bool {
        self.contains(Options::REJECTNA)
    }
    pub fn nlf2ls(self) -> bool {
        self.contains(Options::NLF2LS)
    }
    pub fn nlf2ps(self) -> bool {
        self.contains(Options::NLF2PS)
    }
    pub fn stripcc(self) -> bool {
        self.contains(Options::STRIPCC)
    }
    pub fn casefold(self) -> bool {
        self.contains(Options::CASEFOLD)
    }
    pub fn charbound(self) -> bool {
        self.contains(Options::CHARBOUND)
    }
    pub fn lump(self) -> bool {
        self.contains(Options::LUMP)
    }
    pub fn stripmark(self) -> bool {
        self.contains(Options::STRIPMARK)
    }
    pub fn stripna(self) -> bool {
        self.contains(Options::STRIPNA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_compose_and_decompose() {
        let opts = Options::COMPOSE | Options::DECOMPOSE;
        assert_eq!(opts.validate(), Err(crate::error::Error::InvalidOpts));
    }

    #[test]
    fn test_validate_rejects_unanchored_stripmark() {
        assert_eq!(
            Options::STRIPMARK.validate(),
            Err(crate::error::Error::InvalidOpts)
        );
        assert!((Options::STRIPMARK | Options::COMPOSE).validate().is_ok());
        assert!((Options::STRIPMARK | Options::DECOMPOSE).validate().is_ok());
    }

    #[test]
    fn test_named_masks() {
        assert!(Options::NFC.compose());
        assert!(!Options::NFC.decompose());
        assert!(Options::NFKC_CASEFOLD.casefold());
        assert!(Options::NFKC_CASEFOLD.ignore());
    }
}
