//! l-spectra of sequences and seeded random DNA.
//!
//! Used to produce solver inputs for tests, benches and `sbh simulate`.

use rand::Rng;

/// Nucleotide alphabet accepted by the solver's alphabet check.
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

#[inline]
pub fn is_nucleotide(c: char) -> bool {
    NUCLEOTIDES.contains(&c)
}

/// All `len(seq) - l + 1` overlapping l-mers of `seq`, in order.
/// Empty when `l == 0` or `l` exceeds the sequence length.
pub fn spectrum(seq: &str, l: usize) -> Vec<String> {
    let chars: Vec<char> = seq.chars().collect();
    if l == 0 || l > chars.len() {
        return Vec::new();
    }
    chars.windows(l).map(|w| w.iter().collect()).collect()
}

/// Uniform random sequence over `NUCLEOTIDES`.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn spectrum_is_ordered_windows() {
        assert_eq!(spectrum("ATGCC", 3), ["ATG", "TGC", "GCC"]);
        assert_eq!(spectrum("ATG", 3), ["ATG"]);
        assert!(spectrum("AT", 3).is_empty());
        assert!(spectrum("ATG", 0).is_empty());
    }

    #[test]
    fn random_sequence_seeded() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let s = random_sequence(&mut a, 64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(is_nucleotide));
        assert_eq!(s, random_sequence(&mut b, 64));
    }
}
