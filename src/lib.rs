//! # bidihash-rs
//!
//! A strand-invariant ("bidirectional") fingerprint for DNA sequences: the
//! digest of a sequence equals the digest of its reverse complement, so a
//! double-stranded fragment hashes to one value no matter which strand was
//! sequenced or in which direction it was read.
//!
//! The pipeline is four small, purely functional layers:
//!
//! 1. [`orient`] — deterministically pick a sequence or its reverse
//!    complement as the *canonical* reading.
//! 2. [`encode`](encode()) — pack the canonical reading into one unsigned
//!    integer, 2 bits per base.
//! 3. [`xor_fold`] — XOR the upper portion of an encoded value into the
//!    lower, stripping the skew the canonical pick introduces.
//! 4. [`hash`](hash()) — slide fixed windows across the sequence,
//!    encode+fold each, XOR-accumulate, and combine two phase-shifted
//!    passes so window placement cancels out.
//!
//! This is a fast fingerprint for deduplication and indexing, **not** a
//! cryptographic digest. Only the uppercase 4-letter alphabet `{A,C,G,T}`
//! is accepted; ambiguity codes and lowercase input are rejected, never
//! remapped.
//!
//! ## Example
//!
//! ```rust
//! use bidihash_rs::{hash, reverse_complement, Result};
//!
//! fn main() -> Result<()> {
//!     let seq = b"GATTACAGATTACAGATTACAGATTACAGATTACAGATTACA";
//!     let revseq = reverse_complement(seq)?;
//!
//!     // both strands fingerprint identically
//!     let fwd = hash(seq, seq.len(), 16)?;
//!     let rev = hash(&revseq, revseq.len(), 16)?;
//!     assert_eq!(fwd, rev);
//!     Ok(())
//! }
//! ```

/// Nucleotide ordinal and complement lookup tables.
// Not re-exported directly.
mod tables;

pub mod digest;
pub mod encode;
pub mod orient;

// ──────────────────────────────────────────────────────────────
// Re-exports: public API surface
// --------------------------------------------------------------------------

/// Per-base complement lookup (A↔T, C↔G).
pub use tables::complement;
/// Per-base ordinal lookup (A=0, C=1, G=2, T=3).
pub use tables::nucleotide_value;

pub use orient::canonical_orientation;
pub use orient::orientation;
pub use orient::reverse_complement;
pub use orient::Orientation;

pub use encode::encode;
pub use encode::xor_fold;

/// Strand-invariant dual-phase digest.
///
/// See [`digest::hash`] for full documentation.
pub use digest::hash;
pub use digest::hash_single_phase;
pub use digest::BidiHash;
pub use digest::BidiHashBuilder;
pub use digest::DEFAULT_BITLEN;

// ──────────────────────────────────────────────────────────────
// Crate-wide result and error types
// --------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate's operations.
pub type Result<T, E = BidiHashError> = std::result::Result<T, E>;

/// Errors common to all digest operations.
///
/// Every error is terminal for the call that raised it: no partial or
/// degraded digest is ever returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BidiHashError {
    /// Input contained a byte outside `{A, C, G, T}`.
    #[error("invalid nucleotide {symbol:?} at position {pos}")]
    InvalidNucleotide { symbol: char, pos: usize },

    /// Digest width was zero or odd.
    #[error("digest width ({bitlen}) must be a positive even number of bits")]
    InvalidBitLen { bitlen: usize },

    /// Fold width was zero or odd.
    #[error("fold width ({bits}) must be a positive even number of bits")]
    InvalidFoldWidth { bits: usize },

    /// Declared sequence length disagrees with the actual input
    /// (strict mode only).
    #[error("declared length ({declared}) does not match sequence length ({actual})")]
    LengthMismatch { declared: usize, actual: usize },
}
