//! Identifier generators with fixed format grammars.

use rand::Rng;

const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const UPPER_ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn digits(rng: &mut impl Rng, count: usize) -> String {
    (0..count).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

/// Account number: `ACCT-` followed by exactly 8 digits.
pub fn account_number() -> String {
    let mut rng = rand::thread_rng();
    format!("ACCT-{}", digits(&mut rng, 8))
}

/// Transaction id: `TXN-` followed by 16 uppercase alphanumerics.
pub fn transaction_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..16)
        .map(|_| char::from(UPPER_ALNUM[rng.gen_range(0..UPPER_ALNUM.len())]))
        .collect();
    format!("TXN-{suffix}")
}

/// Routing number: exactly 9 digits.
pub fn routing_number() -> String {
    let mut rng = rand::thread_rng();
    digits(&mut rng, 9)
}

/// IFSC code: four uppercase letters, a literal `0`, then 7 digits.
pub fn ifsc_code() -> String {
    let mut rng = rand::thread_rng();
    let bank: String = (0..4)
        .map(|_| char::from(UPPER_ALPHA[rng.gen_range(0..UPPER_ALPHA.len())]))
        .collect();
    format!("{bank}0{}", digits(&mut rng, 7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn account_number_grammar() {
        let re = Regex::new(r"^ACCT-[0-9]{8}$").unwrap();
        for _ in 0..200 {
            let n = account_number();
            assert!(re.is_match(&n), "bad account number: {n}");
        }
    }

    #[test]
    fn account_numbers_do_not_collide_in_small_batches() {
        let batch: HashSet<String> = (0..100).map(|_| account_number()).collect();
        assert_eq!(batch.len(), 100);
    }

    #[test]
    fn transaction_id_grammar() {
        let re = Regex::new(r"^TXN-[A-Z0-9]{16}$").unwrap();
        for _ in 0..200 {
            let id = transaction_id();
            assert!(re.is_match(&id), "bad transaction id: {id}");
        }
    }

    #[test]
    fn routing_number_grammar() {
        let re = Regex::new(r"^[0-9]{9}$").unwrap();
        for _ in 0..200 {
            let n = routing_number();
            assert!(re.is_match(&n), "bad routing number: {n}");
        }
    }

    #[test]
    fn ifsc_grammar() {
        let re = Regex::new(r"^[A-Z]{4}0[0-9]{7}$").unwrap();
        for _ in 0..200 {
            let code = ifsc_code();
            assert!(re.is_match(&code), "bad IFSC code: {code}");
        }
    }
}
