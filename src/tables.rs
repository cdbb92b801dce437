//! Low-level nucleotide lookup tables.
//!
//! Every per-symbol operation in the crate goes through one of two 256-entry
//! tables indexed by the raw input byte:
//!
//! - `NUC_VALUE_TAB` — the fixed ordinal code A=0, C=1, G=2, T=3. This
//!   ordering is part of the digest's identity: changing it changes every
//!   digest ever produced.
//! - `COMPLEMENT_TAB` — the base pairing A↔T, C↔G.
//!
//! Both tables mark every other byte (ambiguity codes, lowercase, gaps,
//! arbitrary garbage) with the `INVALID` sentinel, so a single lookup
//! doubles as validation.

/// Sentinel stored in both tables for bytes outside `{A, C, G, T}`.
pub(crate) const INVALID: u8 = 0xFF;

const fn value_table() -> [u8; 256] {
    let mut tab = [INVALID; 256];
    tab[b'A' as usize] = 0;
    tab[b'C' as usize] = 1;
    tab[b'G' as usize] = 2;
    tab[b'T' as usize] = 3;
    tab
}

const fn complement_table() -> [u8; 256] {
    let mut tab = [INVALID; 256];
    tab[b'A' as usize] = b'T';
    tab[b'C' as usize] = b'G';
    tab[b'G' as usize] = b'C';
    tab[b'T' as usize] = b'A';
    tab
}

/// Ordinal code per input byte, `INVALID` for anything outside the alphabet.
pub(crate) const NUC_VALUE_TAB: [u8; 256] = value_table();

/// Complementary base per input byte, `INVALID` outside the alphabet.
pub(crate) const COMPLEMENT_TAB: [u8; 256] = complement_table();

/// Ordinal value (A=0, C=1, G=2, T=3) of a nucleotide byte, or `None` if the
/// byte is not one of the four uppercase bases.
#[inline(always)]
pub fn nucleotide_value(base: u8) -> Option<u8> {
    match NUC_VALUE_TAB[base as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Complementary base (A↔T, C↔G), or `None` for a byte outside the alphabet.
#[inline(always)]
pub fn complement(base: u8) -> Option<u8> {
    match COMPLEMENT_TAB[base as usize] {
        INVALID => None,
        base => Some(base),
    }
}
