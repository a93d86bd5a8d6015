//! Live deposit/debit tests: balance arithmetic and the transaction list.

#[path = "live/mod.rs"]
mod live;

use demobank_common::{Money, TxnStatus};
use demobank_harness::AccountPage;

#[tokio::test]
async fn deposit_then_debit_round_trips_balance() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let start = account.current_balance().await.unwrap();
    let amount = Money::new(750.50);

    let outcome = account.deposit(amount).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Deposited, "{}", outcome.message);
    let after_deposit = account.current_balance().await.unwrap();
    assert!(after_deposit.approx_eq(start + amount));

    let outcome = account.debit(amount).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Debited, "{}", outcome.message);
    let after_debit = account.current_balance().await.unwrap();
    assert!(after_debit.approx_eq(start));

    session.close().await;
}

#[tokio::test]
async fn deposit_prepends_signed_transaction_record() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let count_before = account.transaction_count().await.unwrap();
    let amount = Money::new(500.0);

    let outcome = account.deposit(amount).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Deposited, "{}", outcome.message);

    assert_eq!(
        account.transaction_count().await.unwrap(),
        count_before + 1
    );
    let head = account
        .latest_transaction()
        .await
        .unwrap()
        .expect("transaction list is empty after a deposit");
    assert_eq!(head.description, "Deposit");
    assert_eq!(head.amount_text, amount.signed_display());

    session.close().await;
}

#[tokio::test]
async fn debit_prepends_negative_transaction_record() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let amount = Money::new(120.0);

    let outcome = account.debit(amount).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Debited, "{}", outcome.message);

    let head = account
        .latest_transaction()
        .await
        .unwrap()
        .expect("transaction list is empty after a debit");
    assert_eq!(head.description, "Debit");
    assert_eq!(head.amount_text, (-amount).signed_display());

    session.close().await;
}

#[tokio::test]
async fn debiting_exact_balance_reaches_zero() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let balance = account.current_balance().await.unwrap();

    let outcome = account.debit(balance).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Debited, "{}", outcome.message);
    let after = account.current_balance().await.unwrap();
    assert!(after.approx_eq(Money::zero()), "balance: {}", after);

    // Restore the seeded balance for later tests in this session's run.
    let outcome = account.deposit(balance).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Deposited, "{}", outcome.message);

    session.close().await;
}

#[tokio::test]
async fn check_balance_does_not_mutate() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let before = account.current_balance().await.unwrap();

    let shown = account.check_balance().await.unwrap();
    let refreshed = Money::parse(&shown).unwrap();
    assert!(refreshed.approx_eq(before));

    session.close().await;
}
