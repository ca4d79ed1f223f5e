//! Digit-sum checksums and rejection sampling

use crate::types::{is_forbidden_prefix, BLOCK_LEN, CHECKSUM_MODULUS};
use rand::{Rng, RngCore};
use tracing::trace;

/// A checksum block as individual decimal digit values
pub type Block = [u8; BLOCK_LEN];

/// Sum of decimal digit values
pub fn digit_sum(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

/// True when the digits sum to a multiple of the checksum modulus.
pub fn is_checksum_block(digits: &[u8]) -> bool {
    digit_sum(digits) % CHECKSUM_MODULUS == 0
}

/// Convert an ASCII digit string into digit values.
///
/// Returns `None` as soon as a non-digit character is found.
pub fn parse_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Render digit values back to an ASCII string
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Draw blocks with every digit in `0..=max_digit` until one passes
/// the checksum and `accept`.
pub fn sample_block<F>(rng: &mut dyn RngCore, max_digit: u8, accept: F) -> Block
where
    F: Fn(&Block) -> bool,
{
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let mut block = [0u8; BLOCK_LEN];
        for digit in block.iter_mut() {
            *digit = rng.gen_range(0..=max_digit);
        }

        if is_checksum_block(&block) && accept(&block) {
            trace!(attempts, "checksum block accepted");
            return block;
        }
    }
}

/// Draw a retail prefix in `0..=999` that is not a repeated-digit value.
pub fn sample_prefix(rng: &mut dyn RngCore) -> u16 {
    loop {
        let prefix = rng.gen_range(0..=999u16);
        if !is_forbidden_prefix(prefix) {
            return prefix;
        }
        trace!(prefix, "forbidden prefix rejected");
    }
}

/// Draw `len` unconstrained decimal digits.
pub fn random_digits(rng: &mut dyn RngCore, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..=9u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(&[1, 1, 1, 1, 1, 1, 1]), 7);
        assert_eq!(digit_sum(&[]), 0);
        assert!(is_checksum_block(&[1, 1, 1, 1, 1, 1, 1]));
        assert!(is_checksum_block(&[0, 0, 0, 0, 0, 0, 0]));
        assert!(!is_checksum_block(&[1, 1, 1, 1, 1, 1, 0]));
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0123"), Some(vec![0, 1, 2, 3]));
        assert_eq!(parse_digits("12a4"), None);
        assert_eq!(parse_digits("１２"), None);
        assert_eq!(digits_to_string(&[0, 9, 5]), "095");
    }

    #[test]
    fn test_sample_block_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let block = sample_block(&mut rng, 8, |_| true);
            assert!(is_checksum_block(&block));
            assert!(block.iter().all(|&d| d <= 8));
        }
    }

    #[test]
    fn test_sample_block_applies_predicate() {
        let mut rng = StdRng::seed_from_u64(98);
        for _ in 0..500 {
            let block = sample_block(&mut rng, 9, |b| (1..=7).contains(&b[BLOCK_LEN - 1]));
            assert!((1..=7).contains(&block[BLOCK_LEN - 1]));
        }
    }

    #[test]
    fn test_sample_prefix() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2000 {
            let prefix = sample_prefix(&mut rng);
            assert!(prefix <= 999);
            assert!(!is_forbidden_prefix(prefix));
        }
    }

    #[test]
    fn test_random_digits() {
        let mut rng = StdRng::seed_from_u64(5);
        let digits = random_digits(&mut rng, 5);
        assert_eq!(digits.len(), 5);
        assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }
}
