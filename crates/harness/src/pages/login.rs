//! Login page object.
//!
//! Signing in never returns an explicit failure: the fixture either moves to
//! the dashboard or shows an inline error, and the caller observes which via
//! [`LoginPage::is_authenticated`] / [`LoginPage::error_message`].

use demobank_common::Credentials;
use tracing::debug;

use crate::browser::BrowserSession;
use crate::error::HarnessResult;
use crate::selectors;
use crate::wait::{poll_until, WaitConfig};

pub struct LoginPage<'a> {
    session: &'a BrowserSession,
    wait: WaitConfig,
}

impl<'a> LoginPage<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self {
            session,
            wait: WaitConfig::default(),
        }
    }

    pub fn with_wait(session: &'a BrowserSession, wait: WaitConfig) -> Self {
        Self { session, wait }
    }

    /// Navigate to the login form.
    pub async fn open(&self) -> HarnessResult<()> {
        self.session.goto("/").await?;
        self.session
            .wait_for_selector(selectors::LOGIN_USERNAME, self.wait)
            .await
    }

    /// Submit credentials and wait for the UI to settle on either the
    /// dashboard or an inline error.
    pub async fn sign_in(&self, credentials: &Credentials) -> HarnessResult<()> {
        debug!(username = %credentials.username, "sign in");
        self.session
            .fill(selectors::LOGIN_USERNAME, &credentials.username)
            .await?;
        self.session
            .fill(selectors::LOGIN_PASSWORD, &credentials.password)
            .await?;
        self.session.click(selectors::LOGIN_SUBMIT).await?;

        let session = self.session;
        poll_until("dashboard or login error", self.wait, move || async move {
            Ok(session.exists(selectors::ACCOUNT_BALANCE).await?
                || session.exists(selectors::LOGIN_ERROR).await?)
        })
        .await
    }

    /// Whether the session reached the authenticated dashboard.
    pub async fn is_authenticated(&self) -> HarnessResult<bool> {
        self.session.exists(selectors::ACCOUNT_BALANCE).await
    }

    /// The inline login error, when one is shown.
    pub async fn error_message(&self) -> HarnessResult<Option<String>> {
        self.session.text_opt(selectors::LOGIN_ERROR).await
    }

    /// End the session and return to the unauthenticated state.
    pub async fn log_out(&self) -> HarnessResult<()> {
        self.session.click(selectors::LOGOUT_LINK).await?;
        self.session
            .wait_for_selector(selectors::LOGIN_USERNAME, self.wait)
            .await
    }
}
