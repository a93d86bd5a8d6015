//! Name, email, and compound beneficiary generators.

use demobank_common::NewBeneficiary;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ids::account_number;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Elena", "Frank", "Grace", "Hassan", "Ingrid", "James",
    "Kavya", "Liam", "Maria", "Noah", "Olivia", "Priya", "Quinn", "Rafael", "Sofia", "Tomas",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Chen", "Davis", "Evans", "Fischer", "Garcia", "Hernandez", "Ito",
    "Johnson", "Kim", "Lopez", "Martin", "Nguyen", "Okafor", "Patel", "Quintero", "Rossi",
    "Schmidt", "Tanaka",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

const BANK_NAMES: &[&str] = &[
    "Chase Bank",
    "Wells Fargo",
    "Bank of America",
    "Citibank",
    "Capital One",
    "HDFC Bank",
    "State Bank",
    "First National",
];

fn pick<'a>(pool: &[&'a str]) -> &'a str {
    let mut rng = rand::thread_rng();
    pool.choose(&mut rng).copied().unwrap_or(pool[0])
}

pub fn first_name() -> String {
    pick(FIRST_NAMES).to_string()
}

pub fn last_name() -> String {
    pick(LAST_NAMES).to_string()
}

/// `First Last` from the fixed name pools.
pub fn full_name() -> String {
    format!("{} {}", first_name(), last_name())
}

/// Lowercased `first.last<nn>@domain` address.
pub fn email() -> String {
    let mut rng = rand::thread_rng();
    let n: u32 = rng.gen_range(10..100);
    format!(
        "{}.{}{}@{}",
        first_name().to_lowercase(),
        last_name().to_lowercase(),
        n,
        pick(EMAIL_DOMAINS)
    )
}

pub fn bank_name() -> String {
    pick(BANK_NAMES).to_string()
}

/// Compound beneficiary record aggregating the atomic generators.
pub fn beneficiary() -> NewBeneficiary {
    NewBeneficiary {
        name: full_name(),
        account_number: account_number(),
        bank_name: bank_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn full_name_has_two_parts() {
        for _ in 0..50 {
            let name = full_name();
            assert_eq!(name.split_whitespace().count(), 2, "bad name: {name}");
        }
    }

    #[test]
    fn email_grammar() {
        let re = Regex::new(r"^[a-z]+\.[a-z]+[0-9]{2}@[a-z.]+$").unwrap();
        for _ in 0..100 {
            let addr = email();
            assert!(re.is_match(&addr), "bad email: {addr}");
        }
    }

    #[test]
    fn beneficiary_aggregates_valid_fields() {
        let re = Regex::new(r"^ACCT-[0-9]{8}$").unwrap();
        let b = beneficiary();
        assert!(!b.name.is_empty());
        assert!(re.is_match(&b.account_number));
        assert!(BANK_NAMES.contains(&b.bank_name.as_str()));
    }
}
