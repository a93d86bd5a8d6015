//! Live rejection tests: overdrafts and malformed amounts leave no trace.

#[path = "live/mod.rs"]
mod live;

use demobank_common::{Money, TxnStatus};
use demobank_harness::AccountPage;

#[tokio::test]
async fn overdraft_is_rejected_and_balance_unchanged() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let balance = account.current_balance().await.unwrap();
    let over = balance + Money::new(0.01);

    let outcome = account.debit(over).await.unwrap();
    assert_eq!(
        outcome.status,
        TxnStatus::InsufficientFunds,
        "{}",
        outcome.message
    );

    let after = account.current_balance().await.unwrap();
    assert!(after.approx_eq(balance), "balance moved: {}", after);

    session.close().await;
}

#[tokio::test]
async fn zero_amount_is_rejected() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);

    let outcome = account.deposit(Money::zero()).await.unwrap();
    assert_eq!(
        outcome.status,
        TxnStatus::InvalidAmount,
        "{}",
        outcome.message
    );

    session.close().await;
}

#[tokio::test]
async fn negative_amount_is_rejected_without_record() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let balance = account.current_balance().await.unwrap();
    let count = account.transaction_count().await.unwrap();

    let outcome = account.deposit_raw("-50").await.unwrap();
    assert_eq!(
        outcome.status,
        TxnStatus::InvalidAmount,
        "{}",
        outcome.message
    );

    let after = account.current_balance().await.unwrap();
    assert!(after.approx_eq(balance));
    assert_eq!(account.transaction_count().await.unwrap(), count);

    session.close().await;
}

#[tokio::test]
async fn non_numeric_input_is_rejected_without_record() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let balance = account.current_balance().await.unwrap();
    let count = account.transaction_count().await.unwrap();

    for raw in ["abc", "12.3.4", " "] {
        let outcome = account.debit_raw(raw).await.unwrap();
        assert_eq!(
            outcome.status,
            TxnStatus::InvalidAmount,
            "input {:?}: {}",
            raw,
            outcome.message
        );
    }

    let after = account.current_balance().await.unwrap();
    assert!(after.approx_eq(balance));
    assert_eq!(account.transaction_count().await.unwrap(), count);

    session.close().await;
}
