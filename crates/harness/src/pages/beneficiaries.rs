//! Beneficiary page object: CRUD over the beneficiary list.
//!
//! Create goes through the form; update drives three sequential prompts
//! (name, then account, then bank) and delete a confirmation dialog, both
//! through a validated [`DialogQueue`].

use demobank_common::{BeneficiaryRecord, NewBeneficiary};
use tracing::debug;

use crate::browser::{js_string, BrowserSession};
use crate::dialog::DialogQueue;
use crate::error::HarnessResult;
use crate::selectors;
use crate::wait::{poll_until, WaitConfig};

pub struct BeneficiariesPage<'a> {
    session: &'a BrowserSession,
    wait: WaitConfig,
}

impl<'a> BeneficiariesPage<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self {
            session,
            wait: WaitConfig::default(),
        }
    }

    pub fn with_wait(session: &'a BrowserSession, wait: WaitConfig) -> Self {
        Self { session, wait }
    }

    /// Navigate to the beneficiary page.
    pub async fn open(&self) -> HarnessResult<()> {
        self.session.goto("/beneficiaries").await?;
        self.session
            .wait_for_selector(selectors::BENEFICIARY_NAME_INPUT, self.wait)
            .await
    }

    /// Submit the creation form and wait for the new row to render.
    pub async fn create(&self, fields: &NewBeneficiary) -> HarnessResult<BeneficiaryRecord> {
        debug!(name = %fields.name, "create beneficiary");
        self.session
            .fill(selectors::BENEFICIARY_NAME_INPUT, &fields.name)
            .await?;
        self.session
            .fill(selectors::BENEFICIARY_ACCOUNT_INPUT, &fields.account_number)
            .await?;
        self.session
            .fill(selectors::BENEFICIARY_BANK_INPUT, &fields.bank_name)
            .await?;
        self.session
            .click(selectors::BENEFICIARY_ADD_BUTTON)
            .await?;

        self.wait_for_row(fields).await
    }

    /// Beneficiary rows in render order.
    pub async fn list(&self) -> HarnessResult<Vec<BeneficiaryRecord>> {
        let js = format!(
            r#"Array.from(document.querySelectorAll({rows})).map(row => ({{
                id: row.getAttribute('data-beneficiary-id') ?? '',
                name: (row.querySelector({name})?.textContent ?? '').trim(),
                account_number: (row.querySelector({account})?.textContent ?? '').trim(),
                bank_name: (row.querySelector({bank})?.textContent ?? '').trim()
            }}))"#,
            rows = js_string(selectors::BENEFICIARY_ROWS),
            name = js_string(selectors::BENEFICIARY_NAME),
            account = js_string(selectors::BENEFICIARY_ACCOUNT),
            bank = js_string(selectors::BENEFICIARY_BANK),
        );
        self.session.eval(js).await
    }

    pub async fn count(&self) -> HarnessResult<usize> {
        Ok(self.list().await?.len())
    }

    /// The first row matching `name`, if any.
    pub async fn find_by_name(&self, name: &str) -> HarnessResult<Option<BeneficiaryRecord>> {
        Ok(self.list().await?.into_iter().find(|b| b.name == name))
    }

    /// Rewrite a beneficiary through the three sequential prompts:
    /// name, account, bank, in that order. Prompt count and ordering are
    /// validated against the fixture's replay; mismatches fail hard.
    pub async fn update(&self, id: &str, fields: &NewBeneficiary) -> HarnessResult<()> {
        debug!(id, name = %fields.name, "update beneficiary");
        let queue = update_queue(fields);
        queue.arm(self.session).await?;

        self.session
            .click(&selectors::beneficiary_edit(id))
            .await?;
        self.session
            .wait_for_text(&selectors::beneficiary_row(id), &fields.name, self.wait)
            .await?;

        queue.verify(self.session).await?;
        Ok(())
    }

    /// Remove a beneficiary, accepting its confirmation dialog.
    pub async fn delete(&self, id: &str) -> HarnessResult<()> {
        debug!(id, "delete beneficiary");
        let queue = DialogQueue::new().confirm();
        queue.arm(self.session).await?;

        self.session
            .click(&selectors::beneficiary_delete(id))
            .await?;
        self.session
            .wait_for_gone(&selectors::beneficiary_row(id), self.wait)
            .await?;

        queue.verify(self.session).await?;
        Ok(())
    }

    /// Poll until a row matching all submitted fields renders, then return it.
    async fn wait_for_row(&self, fields: &NewBeneficiary) -> HarnessResult<BeneficiaryRecord> {
        let condition = format!("beneficiary row for {:?}", fields.name);
        poll_until(&condition, self.wait, move || async move {
            Ok(self.list().await?.iter().any(|b| b.matches(fields)))
        })
        .await?;

        self.list()
            .await?
            .into_iter()
            .find(|b| b.matches(fields))
            .ok_or_else(|| crate::error::HarnessError::MalformedUiState {
                selector: selectors::BENEFICIARY_ROWS.to_string(),
                reason: format!("row for {:?} disappeared after rendering", fields.name),
            })
    }
}

/// Queue for the edit flow's prompts. Each reply is pinned to its prompt's
/// wording, so a prompt firing out of order misses its fragment and fails
/// as a [`crate::error::HarnessError::DialogOrder`].
fn update_queue(fields: &NewBeneficiary) -> DialogQueue {
    DialogQueue::new()
        .prompt_matching("name", fields.name.clone())
        .prompt_matching("account", fields.account_number.clone())
        .prompt_matching("bank", fields.bank_name.clone())
}
