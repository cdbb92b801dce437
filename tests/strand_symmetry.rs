//! Randomized end-to-end exercise of the digest's core guarantee.
//!
//! For every random sequence the digest must equal its reverse complement's
//! digest at every tested width. Collisions between distinct forward
//! sequences are counted but only loosely bounded — this is a fingerprint,
//! not a cryptographic hash — with the known degenerate case (lengths
//! divisible by the window, where the two phases cancel) checked separately.

use std::collections::HashMap;

use bidihash_rs::{hash, reverse_complement};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| BASES[rng.random_range(0..4)]).collect()
}

#[test]
fn thousand_random_sequences_hash_like_their_reverse_complements() {
    let mut rng = StdRng::seed_from_u64(0xB1D1_4A54);
    let mut seen: HashMap<BigUint, Vec<u8>> = HashMap::new();
    let mut collisions = 0usize;

    for _ in 0..1000 {
        let len = rng.random_range(150..=2000);
        let seq = random_dna(&mut rng, len);
        let revseq = reverse_complement(&seq).unwrap();

        for bitlen in [16usize, 32, 64] {
            let fwd = hash(&seq, len, bitlen).unwrap();
            let rev = hash(&revseq, len, bitlen).unwrap();
            assert_eq!(
                fwd,
                rev,
                "strand mismatch at bitlen {} for length {}",
                bitlen,
                len
            );

            if bitlen == 64 {
                if len % (2 * bitlen) == 0 {
                    // phase offset 0: both passes coincide
                    assert_eq!(fwd, BigUint::zero(), "aligned length {len}");
                } else if let Some(other) = seen.insert(fwd, seq.clone()) {
                    if other != seq {
                        collisions += 1;
                    }
                }
            }
        }
    }

    // collisions among distinct unaligned sequences are possible in
    // principle, just statistically negligible at 64 bits
    assert!(collisions <= 2, "unexpected collision rate: {collisions}");
}

#[test]
fn digest_ignores_which_strand_was_read_at_odd_window_remainders() {
    // lengths straddling every remainder class of the 32-base window
    let mut rng = StdRng::seed_from_u64(0x0DDB_A5E5);
    for len in 150..182 {
        let seq = random_dna(&mut rng, len);
        let revseq = reverse_complement(&seq).unwrap();
        assert_eq!(
            hash(&seq, len, 16).unwrap(),
            hash(&revseq, len, 16).unwrap(),
            "length {len}"
        );
    }
}
