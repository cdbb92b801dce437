//! Windowed, dual-phase digest over a full sequence.
//!
//! One pass ([`hash_single_phase`]) slides fixed windows of `2 * bitlen`
//! bases across the sequence, encodes and folds each window, and XORs the
//! results into an all-ones accumulator. XOR accumulation makes the digest
//! insensitive to window *order* while each window's encoding stays
//! sensitive to the order of bases inside it.
//!
//! A single pass is still an artifact of where the window boundaries fall,
//! so [`hash`] runs two passes — one starting at the first base, one offset
//! by `total_length mod (2 * bitlen)` so its last window closes exactly on
//! the final base — and XORs them. With that offset the two partitions of a
//! sequence are, window for window, the reverse complements of the two
//! partitions of its reverse complement, which is what makes the combined
//! digest strand-invariant for every length.
//!
//! Two degenerate cases follow directly from the construction and are kept:
//! when the offset is zero (empty input, or a length divisible by the
//! window) the phases coincide and the digest is 0, and a sequence shorter
//! than one window collapses the same way.

use num_bigint::BigUint;
use num_traits::One;

use crate::{
    encode::{encode, xor_fold},
    BidiHashError, Result,
};

/// Digest width used when none is configured.
pub const DEFAULT_BITLEN: usize = 64;

pub(crate) fn check_bitlen(bitlen: usize) -> Result<()> {
    if bitlen == 0 || bitlen % 2 != 0 {
        return Err(BidiHashError::InvalidBitLen { bitlen });
    }
    Ok(())
}

/// One windowing pass at a fixed `offset`, nominally `bitlen` bits wide.
///
/// The accumulator starts as all-ones of `bitlen` bits. If `offset > 0` the
/// leading `offset` bases form a partial window of their own; the rest of
/// the sequence is cut into consecutive windows of `2 * bitlen` bases (the
/// last may be short). Each window is encoded, folded at `2 * bitlen` bits,
/// and XORed in. An `offset` past the end of the sequence treats the whole
/// sequence as the leading window.
///
/// # Errors
///
/// `InvalidBitLen` unless `bitlen` is a positive even number;
/// `InvalidNucleotide` for any byte outside the alphabet.
pub fn hash_single_phase(seq: &[u8], offset: usize, bitlen: usize) -> Result<BigUint> {
    check_bitlen(bitlen)?;
    // window length in bases and fold width in bits share the same value
    let window = 2 * bitlen;
    let mut accum = (BigUint::one() << bitlen) - BigUint::one();
    let lead = offset.min(seq.len());
    if offset > 0 {
        accum ^= xor_fold(&encode(&seq[..lead])?, window)?;
    }
    for block in seq[lead..].chunks(window) {
        accum ^= xor_fold(&encode(block)?, window)?;
    }
    Ok(accum)
}

/// Strand-invariant digest of `seq`, nominally `bitlen` bits wide.
///
/// Computes the phase-0 pass and the pass offset by
/// `total_length mod (2 * bitlen)`, and XORs the two. `total_length` is
/// trusted: it is the caller's responsibility that it equals `seq.len()`,
/// and a mismatched value silently shifts the second phase (use
/// [`BidiHashBuilder::strict_length`] to reject mismatches instead).
///
/// For every valid sequence the digest equals the digest of its reverse
/// complement at the same length and width.
///
/// # Errors
///
/// `InvalidBitLen` unless `bitlen` is a positive even number;
/// `InvalidNucleotide` for any byte outside the alphabet.
pub fn hash(seq: &[u8], total_length: usize, bitlen: usize) -> Result<BigUint> {
    check_bitlen(bitlen)?;
    let phase0 = hash_single_phase(seq, 0, bitlen)?;
    let shifted = hash_single_phase(seq, total_length % (2 * bitlen), bitlen)?;
    Ok(phase0 ^ shifted)
}

// ──────────────────────────────────────────────────────────────
// Configured facade
// --------------------------------------------------------------------------

/// A digest configuration: a validated width plus strictness flags.
///
/// The free functions above are the whole algorithm; this type just carries
/// a checked `bitlen` around so call sites hashing many sequences don't
/// repeat it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiHash {
    bitlen: usize,
    strict_length: bool,
}

impl BidiHash {
    /// A configuration with the given digest width.
    ///
    /// # Errors
    ///
    /// `InvalidBitLen` unless `bitlen` is a positive even number.
    pub fn new(bitlen: usize) -> Result<Self> {
        check_bitlen(bitlen)?;
        Ok(Self {
            bitlen,
            strict_length: false,
        })
    }

    /// The default 64-bit configuration.
    pub fn with_defaults() -> Self {
        Self {
            bitlen: DEFAULT_BITLEN,
            strict_length: false,
        }
    }

    /// Configured digest width in bits.
    #[inline(always)]
    pub fn bitlen(&self) -> usize {
        self.bitlen
    }

    /// Digest of `seq`, using its actual length for the phase offset.
    pub fn digest(&self, seq: &[u8]) -> Result<BigUint> {
        hash(seq, seq.len(), self.bitlen)
    }

    /// Digest of `seq` with a caller-declared `total_length`.
    ///
    /// # Errors
    ///
    /// In strict mode, `LengthMismatch` when `total_length != seq.len()`;
    /// otherwise the declared value is used as-is.
    pub fn digest_with_length(&self, seq: &[u8], total_length: usize) -> Result<BigUint> {
        if self.strict_length && total_length != seq.len() {
            return Err(BidiHashError::LengthMismatch {
                declared: total_length,
                actual: seq.len(),
            });
        }
        hash(seq, total_length, self.bitlen)
    }

    /// A single windowing pass at `offset`, without the dual-phase
    /// combination. Order-insensitive across windows, order-sensitive
    /// within one.
    pub fn phase_digest(&self, seq: &[u8], offset: usize) -> Result<BigUint> {
        hash_single_phase(seq, offset, self.bitlen)
    }
}

impl Default for BidiHash {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fluent configuration for [`BidiHash`].
pub struct BidiHashBuilder {
    bitlen: usize,
    strict_length: bool,
}

impl BidiHashBuilder {
    pub fn new() -> Self {
        Self {
            bitlen: DEFAULT_BITLEN,
            strict_length: false,
        }
    }

    /// Set the digest width in bits (positive and even).
    pub fn bitlen(mut self, bitlen: usize) -> Self {
        self.bitlen = bitlen;
        self
    }

    /// Reject, rather than trust, a declared length that does not match the
    /// sequence passed to [`BidiHash::digest_with_length`].
    pub fn strict_length(mut self, strict: bool) -> Self {
        self.strict_length = strict;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidBitLen` for a zero or odd width.
    pub fn finish(self) -> Result<BidiHash> {
        check_bitlen(self.bitlen)?;
        Ok(BidiHash {
            bitlen: self.bitlen,
            strict_length: self.strict_length,
        })
    }
}

impl Default for BidiHashBuilder {
    fn default() -> Self {
        Self::new()
    }
}
