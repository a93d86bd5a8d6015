//! Monetary amount generators.

use demobank_common::Money;
use rand::Rng;

/// Random amount in the inclusive `[min, max]` range, rounded to 2 decimals.
pub fn amount_between(min: f64, max: f64) -> Money {
    let mut rng = rand::thread_rng();
    Money::new(rng.gen_range(min..=max))
}

/// Deposit-sized amount: $50.00 to $5,000.00.
pub fn deposit_amount() -> Money {
    amount_between(50.0, 5000.0)
}

/// Debit-sized amount: $10.00 to $1,000.00.
pub fn debit_amount() -> Money {
    amount_between(10.0, 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_stay_in_range() {
        for _ in 0..500 {
            let m = amount_between(1.0, 2.0);
            assert!(m.value() >= 1.0 && m.value() <= 2.0, "out of range: {m}");
        }
    }

    #[test]
    fn amounts_carry_two_decimals() {
        for _ in 0..200 {
            let m = deposit_amount();
            let scaled = m.value() * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "not 2dp: {m}");
        }
    }

    #[test]
    fn convenience_ranges() {
        for _ in 0..200 {
            let d = deposit_amount();
            assert!(d.value() >= 50.0 && d.value() <= 5000.0);
            let w = debit_amount();
            assert!(w.value() >= 10.0 && w.value() <= 1000.0);
        }
    }
}
