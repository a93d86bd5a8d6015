//! Account dashboard page object: balance, deposits, debits, transactions.

use demobank_common::{Money, TransactionRecord, TxnOutcome};
use tracing::debug;

use crate::browser::{js_string, BrowserSession};
use crate::error::{HarnessError, HarnessResult};
use crate::selectors;
use crate::wait::WaitConfig;

pub struct AccountPage<'a> {
    session: &'a BrowserSession,
    wait: WaitConfig,
}

impl<'a> AccountPage<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self {
            session,
            wait: WaitConfig::default(),
        }
    }

    pub fn with_wait(session: &'a BrowserSession, wait: WaitConfig) -> Self {
        Self { session, wait }
    }

    /// Parse the displayed balance. Fails hard if the balance text is
    /// absent or malformed.
    pub async fn current_balance(&self) -> HarnessResult<Money> {
        let text = self.session.text(selectors::ACCOUNT_BALANCE).await?;
        Money::parse(&text).map_err(|e| HarnessError::MalformedUiState {
            selector: selectors::ACCOUNT_BALANCE.to_string(),
            reason: e.to_string(),
        })
    }

    /// Submit a deposit and classify the resulting status message.
    pub async fn deposit(&self, amount: Money) -> HarnessResult<TxnOutcome> {
        self.submit(&amount.input_text(), selectors::DEPOSIT_BUTTON)
            .await
    }

    /// Submit a debit and classify the resulting status message.
    pub async fn debit(&self, amount: Money) -> HarnessResult<TxnOutcome> {
        self.submit(&amount.input_text(), selectors::DEBIT_BUTTON)
            .await
    }

    /// Deposit with raw input text, for exercising unparsable amounts.
    pub async fn deposit_raw(&self, raw: &str) -> HarnessResult<TxnOutcome> {
        self.submit(raw, selectors::DEPOSIT_BUTTON).await
    }

    /// Debit with raw input text.
    pub async fn debit_raw(&self, raw: &str) -> HarnessResult<TxnOutcome> {
        self.submit(raw, selectors::DEBIT_BUTTON).await
    }

    /// One fill + click sequence, then wait for the status line to settle.
    ///
    /// The status element is blanked first so the wait observes the message
    /// belonging to *this* submission, not a stale one.
    async fn submit(&self, raw_amount: &str, button: &str) -> HarnessResult<TxnOutcome> {
        debug!(amount = raw_amount, button, "submit transaction");
        self.clear_status().await?;
        self.session
            .fill(selectors::AMOUNT_INPUT, raw_amount)
            .await?;
        self.session.click(button).await?;
        self.session
            .wait_for_nonempty_text(selectors::STATUS_MESSAGE, self.wait)
            .await?;
        let message = self.session.text(selectors::STATUS_MESSAGE).await?;
        Ok(TxnOutcome::classify(&message))
    }

    async fn clear_status(&self) -> HarnessResult<()> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (el) el.textContent = '';
                return true;
            }})()"#,
            sel = js_string(selectors::STATUS_MESSAGE),
        );
        let _: bool = self.session.eval(js).await?;
        Ok(())
    }

    /// Trigger a balance refresh and return the shown text. Does not
    /// mutate the balance.
    pub async fn check_balance(&self) -> HarnessResult<String> {
        self.session.click(selectors::CHECK_BALANCE_BUTTON).await?;
        self.session
            .wait_for_nonempty_text(selectors::ACCOUNT_BALANCE, self.wait)
            .await?;
        self.session.text(selectors::ACCOUNT_BALANCE).await
    }

    /// Transaction rows as rendered, newest-first.
    pub async fn transactions(&self) -> HarnessResult<Vec<TransactionRecord>> {
        let js = format!(
            r#"Array.from(document.querySelectorAll({rows})).map(row => ({{
                description: (row.querySelector({desc})?.textContent ?? '').trim(),
                amount_text: (row.querySelector({amount})?.textContent ?? '').trim()
            }}))"#,
            rows = js_string(selectors::TRANSACTION_ROWS),
            desc = js_string(selectors::TRANSACTION_DESCRIPTION),
            amount = js_string(selectors::TRANSACTION_AMOUNT),
        );
        self.session.eval(js).await
    }

    pub async fn transaction_count(&self) -> HarnessResult<usize> {
        Ok(self.transactions().await?.len())
    }

    /// The newest transaction record, if any exist.
    pub async fn latest_transaction(&self) -> HarnessResult<Option<TransactionRecord>> {
        Ok(self.transactions().await?.into_iter().next())
    }
}
