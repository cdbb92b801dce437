//! Orientation canonicalization for double-stranded sequences.
//!
//! A DNA fragment can be read from either strand, so the same physical
//! molecule shows up as either a sequence or its reverse complement. This
//! module deterministically picks one of the two as *canonical*, which is
//! what makes the digest strand-invariant: both readings canonicalize to the
//! same bytes before any bit of encoding happens.
//!
//! The decision rule is a bounded lexicographic scan over ordinal values
//! (A=0, C=1, G=2, T=3): walk the sequence and its reverse complement in
//! lockstep and stop at the first position where they differ; the
//! orientation holding the smaller ordinal there wins. The scan stops after
//! position `1 + len/2` — by then either a decisive position has been seen
//! or the sequence is a palindrome, and the bound is part of the digest's
//! identity, so it must not be widened to a full-length scan.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::{
    tables::{COMPLEMENT_TAB, INVALID, NUC_VALUE_TAB},
    BidiHashError, Result,
};

/// Outcome of the orientation scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The sequence as given wins.
    Forward,
    /// The reverse complement wins.
    Complement,
    /// No decisive position inside the scan bound: the sequence is its own
    /// reverse complement.
    Palindrome,
}

/// Reverse a sequence and complement every base (A↔T, C↔G).
///
/// # Errors
///
/// `InvalidNucleotide` for the first byte outside `{A, C, G, T}`; nothing is
/// ever substituted or skipped.
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = vec![0u8; seq.len()];
    for (pos, &base) in seq.iter().enumerate() {
        let paired = COMPLEMENT_TAB[base as usize];
        if paired == INVALID {
            return Err(BidiHashError::InvalidNucleotide {
                symbol: base as char,
                pos,
            });
        }
        out[seq.len() - 1 - pos] = paired;
    }
    Ok(out)
}

/// Run the orientation scan and report which strand wins.
pub fn orientation(seq: &[u8]) -> Result<Orientation> {
    let revseq = reverse_complement(seq)?;
    Ok(decide(seq, &revseq))
}

/// Return the canonical reading of `seq`: either `seq` itself (borrowed) or
/// its reverse complement (owned). A sequence and its reverse complement
/// always canonicalize to the same bytes.
pub fn canonical_orientation(seq: &[u8]) -> Result<Cow<'_, [u8]>> {
    let revseq = reverse_complement(seq)?;
    match decide(seq, &revseq) {
        Orientation::Complement => Ok(Cow::Owned(revseq)),
        Orientation::Forward | Orientation::Palindrome => Ok(Cow::Borrowed(seq)),
    }
}

/// The bounded scan itself. Both slices must be validated and of equal
/// length, which `reverse_complement` guarantees.
fn decide(seq: &[u8], revseq: &[u8]) -> Orientation {
    let bound = 1 + seq.len() / 2;
    for (n, (&fwd, &rev)) in seq.iter().zip(revseq).enumerate() {
        if n > bound {
            break;
        }
        match NUC_VALUE_TAB[fwd as usize].cmp(&NUC_VALUE_TAB[rev as usize]) {
            Ordering::Less => return Orientation::Forward,
            Ordering::Greater => return Orientation::Complement,
            Ordering::Equal => {}
        }
    }
    Orientation::Palindrome
}
