use bidihash_rs::{reverse_complement, BidiHashBuilder, BidiHashError};

fn main() -> Result<(), BidiHashError> {
    let seq = b"TTTACTGCCTGAGCCATTACCTAAAGCAGACCAGTTAACCCGAGTGCCTTTGATGGATTCGTCTCCTATCCGCGGATTATAACATGTATCACCCGTCCCT";
    let revseq = reverse_complement(seq)?;

    let hasher = BidiHashBuilder::new().bitlen(32).finish()?;

    let fwd = hasher.digest(seq)?;
    let rev = hasher.digest(&revseq)?;

    println!("forward strand digest: {:#x}", fwd);
    println!("reverse strand digest: {:#x}", rev);
    assert_eq!(fwd, rev);

    // the one-phase variant still depends on window placement
    println!("phase-0 digest:        {:#x}", hasher.phase_digest(seq, 0)?);

    Ok(())
}
