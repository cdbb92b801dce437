//! Numeric encoding of canonicalized sequences, and the XOR fold.
//!
//! [`encode`] turns a sequence into one unsigned integer: the sequence is
//! canonicalized first, then each base contributes its 2-bit ordinal, first
//! base most significant. A sequence of length L therefore encodes to a
//! 2L-bit value, which is why the arithmetic runs on [`BigUint`] — a full
//! digest window at the default width is 128 bases, i.e. a 256-bit integer.
//!
//! [`xor_fold`] halves a value's bit budget by XOR-combining the portion
//! above `bits` with the portion below. Canonicalization skews windows
//! toward one end of the value range, and the fold is what strips that skew
//! back out of the accumulated digest.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    orient::canonical_orientation,
    tables::NUC_VALUE_TAB,
    BidiHashError, Result,
};

/// Encode a sequence as an unsigned integer of `2 * seq.len()` bits.
///
/// The canonical orientation is taken first, so a sequence and its reverse
/// complement encode identically. The empty sequence encodes to zero (with a
/// zero bit width — callers must not rely on the width).
///
/// ```
/// use bidihash_rs::encode;
/// use num_bigint::BigUint;
///
/// // GTCG canonicalizes to CGAC = 1,2,0,1 → 0b01_10_00_01
/// assert_eq!(encode(b"GTCG").unwrap(), BigUint::from(97u32));
/// ```
///
/// # Errors
///
/// `InvalidNucleotide` for any byte outside `{A, C, G, T}`.
pub fn encode(seq: &[u8]) -> Result<BigUint> {
    let canonical = canonical_orientation(seq)?;
    let mut num = BigUint::zero();
    for &base in canonical.iter() {
        // bytes were validated during canonicalization
        num = (num << 2usize) | BigUint::from(NUC_VALUE_TAB[base as usize]);
    }
    Ok(num)
}

/// XOR the portion of `num` above `bits` with the portion below.
///
/// The shift amount is the full `bits`, not `bits / 2`: a value that already
/// fits in `bits` bits passes through unchanged, and only wider values
/// genuinely fold. Digest compatibility depends on this exact behavior.
/// For any `num < 2^(2*bits)` the result is below `2^bits`.
///
/// # Errors
///
/// `InvalidFoldWidth` unless `bits` is a positive even number.
pub fn xor_fold(num: &BigUint, bits: usize) -> Result<BigUint> {
    if bits == 0 || bits % 2 != 0 {
        return Err(BidiHashError::InvalidFoldWidth { bits });
    }
    let mask = (BigUint::one() << bits) - BigUint::one();
    Ok((num >> bits) ^ (num & &mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn worked_example() {
        assert_eq!(encode(b"GTCG").unwrap(), big(97));
    }

    #[test]
    fn encoding_matches_reverse_complement() {
        assert_eq!(encode(b"GTCG").unwrap(), encode(b"CGAC").unwrap());
        // palindrome: ACGT = 0,1,2,3 → 0b00_01_10_11
        assert_eq!(encode(b"ACGT").unwrap(), big(0b00_01_10_11));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(encode(b"").unwrap(), BigUint::zero());
        // single A is its own canonical form and codes to 0
        assert_eq!(encode(b"A").unwrap(), BigUint::zero());
    }

    #[test]
    fn encoded_width_is_twice_the_length() {
        let num = encode(b"TTTTGGGGCCCCAAAA").unwrap();
        assert_eq!(num, big(4_289_352_960));
        assert_eq!(num.bits(), 32);
    }

    #[test]
    fn invalid_symbol_propagates() {
        assert!(matches!(
            encode(b"ACGX"),
            Err(BidiHashError::InvalidNucleotide { symbol: 'X', pos: 3 })
        ));
    }

    #[test]
    fn fold_rejects_zero_and_odd_widths() {
        for bits in [0usize, 1, 7, 63] {
            assert!(matches!(
                xor_fold(&big(1), bits),
                Err(BidiHashError::InvalidFoldWidth { bits: b }) if b == bits
            ));
        }
    }

    #[test]
    fn fold_is_identity_below_the_width() {
        // high portion shifts to zero, low portion XORs with it unchanged
        for x in [0u128, 1, 97, 0xFFFF, 0xDEAD_BEEF] {
            assert_eq!(xor_fold(&big(x), 64).unwrap(), big(x));
        }
    }

    #[test]
    fn fold_combines_both_halves_of_wide_input() {
        // 0xB6 over 4 bits: 0xB ^ 0x6 = 0xD
        assert_eq!(xor_fold(&big(0xB6), 4).unwrap(), big(0xD));
        // three nibbles over 4 bits: only the low portion is masked, the
        // shifted portion keeps its full width
        assert_eq!(xor_fold(&big(0xAB6), 4).unwrap(), big(0xAB ^ 0x6));
    }

    #[test]
    fn fold_halves_the_bit_budget() {
        // anything below 2^(2*bits) folds to below 2^bits
        let wide = big(0x9af2_6467);
        for bits in [2usize, 8, 16] {
            let num = &wide & &((BigUint::one() << (2 * bits)) - BigUint::one());
            assert!(xor_fold(&num, bits).unwrap() < (BigUint::one() << bits));
        }
        assert_eq!(xor_fold(&wide, 16).unwrap(), big(0x9af2 ^ 0x6467));
    }
}
