//! Condition-polling wait primitives.
//!
//! UI settling is always observed by polling an explicit predicate under a
//! bounded timeout, never by fixed-duration sleeps. A wait that does not
//! complete within the timeout fails hard with [`HarnessError::WaitTimeout`].

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use crate::browser::BrowserSession;
use crate::error::{HarnessError, HarnessResult};

/// Timeout and poll interval for a wait.
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Poll `probe` until it returns true or the timeout elapses.
///
/// `condition` names the awaited state for the timeout error.
pub async fn poll_until<F, Fut>(
    condition: &str,
    config: WaitConfig,
    mut probe: F,
) -> HarnessResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = HarnessResult<bool>>,
{
    let deadline = Instant::now() + config.timeout;
    loop {
        if probe().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::WaitTimeout {
                condition: condition.to_string(),
                timeout_ms: config.timeout.as_millis() as u64,
            });
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}

impl BrowserSession {
    /// Wait until an element matching `selector` is attached.
    pub async fn wait_for_selector(
        &self,
        selector: &str,
        config: WaitConfig,
    ) -> HarnessResult<()> {
        poll_until(selector, config, move || async move {
            self.exists(selector).await
        })
        .await
    }

    /// Wait until no element matches `selector`.
    pub async fn wait_for_gone(&self, selector: &str, config: WaitConfig) -> HarnessResult<()> {
        let condition = format!("{selector} detached");
        poll_until(&condition, config, move || async move {
            Ok(!self.exists(selector).await?)
        })
        .await
    }

    /// Wait until the element's text contains `needle`.
    pub async fn wait_for_text(
        &self,
        selector: &str,
        needle: &str,
        config: WaitConfig,
    ) -> HarnessResult<()> {
        let condition = format!("{selector} to contain {needle:?}");
        poll_until(&condition, config, move || async move {
            Ok(self
                .text_opt(selector)
                .await?
                .is_some_and(|text| text.contains(needle)))
        })
        .await
    }

    /// Wait until the element's text is non-empty.
    pub async fn wait_for_nonempty_text(
        &self,
        selector: &str,
        config: WaitConfig,
    ) -> HarnessResult<()> {
        let condition = format!("{selector} to have text");
        poll_until(&condition, config, move || async move {
            Ok(self
                .text_opt(selector)
                .await?
                .is_some_and(|text| !text.is_empty()))
        })
        .await
    }

    /// Wait until the current URL contains `fragment`.
    pub async fn wait_for_url_contains(
        &self,
        fragment: &str,
        config: WaitConfig,
    ) -> HarnessResult<()> {
        let condition = format!("url to contain {fragment:?}");
        poll_until(&condition, config, move || async move {
            Ok(self.current_url().await?.contains(fragment))
        })
        .await
    }
}
