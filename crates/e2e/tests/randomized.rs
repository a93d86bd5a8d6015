//! Live randomized flows driven by the generated test data.

#[path = "live/mod.rs"]
mod live;

use demobank_common::TxnStatus;
use demobank_datagen::{debit_amount, deposit_amount};
use demobank_harness::{AccountPage, BeneficiariesPage};

#[tokio::test]
async fn random_deposits_accumulate_on_the_balance() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let mut expected = account.current_balance().await.unwrap();

    for _ in 0..3 {
        let amount = deposit_amount();
        let outcome = account.deposit(amount).await.unwrap();
        assert_eq!(outcome.status, TxnStatus::Deposited, "{}", outcome.message);
        expected = expected + amount;

        let shown = account.current_balance().await.unwrap();
        assert!(
            shown.approx_eq(expected),
            "after depositing {}: shown {}, expected {}",
            amount,
            shown,
            expected
        );
    }

    session.close().await;
}

#[tokio::test]
async fn random_debits_stay_consistent_with_records() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let account = AccountPage::new(&session);
    let amount = debit_amount();

    let outcome = account.debit(amount).await.unwrap();
    assert_eq!(outcome.status, TxnStatus::Debited, "{}", outcome.message);

    let head = account
        .latest_transaction()
        .await
        .unwrap()
        .expect("no transaction after a debit");
    let recorded = head.signed_amount().unwrap();
    assert!(recorded.approx_eq(-amount), "recorded: {}", recorded);

    session.close().await;
}

#[tokio::test]
async fn random_beneficiary_round_trips_through_the_form() {
    let Some(session) = live::launch_signed_in().await else {
        return;
    };
    let page = BeneficiariesPage::new(&session);
    page.open().await.unwrap();

    let new = demobank_datagen::beneficiary();
    let row = page.create(&new).await.unwrap();
    assert!(row.matches(&new));

    page.delete(&row.id).await.unwrap();
    assert!(page.find_by_name(&new.name).await.unwrap().is_none());

    session.close().await;
}
