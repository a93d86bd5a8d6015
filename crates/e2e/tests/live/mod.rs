//! Shared setup for live browser tests.
//!
//! These tests need a running fixture; they are gated on
//! `DEMOBANK_E2E_BASE_URL` and skip silently when it is unset, so plain
//! `cargo test` passes without a browser or fixture installed.

#![allow(dead_code)]

use demobank_common::Credentials;
use demobank_harness::{BrowserSession, LoginPage, SessionConfig};

pub const USERNAME: &str = "testuser";
pub const PASSWORD: &str = "testpass";

/// Launch a session against the configured fixture, or `None` to skip.
pub async fn launch() -> Option<BrowserSession> {
    let base_url = match std::env::var("DEMOBANK_E2E_BASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping live test: DEMOBANK_E2E_BASE_URL not set");
            return None;
        }
    };
    let config = SessionConfig {
        base_url,
        ..SessionConfig::default()
    };
    let session = BrowserSession::launch(config)
        .await
        .expect("browser launch");
    Some(session)
}

/// Launch and sign in with the seeded demo account.
pub async fn launch_signed_in() -> Option<BrowserSession> {
    let session = launch().await?;
    let login = LoginPage::new(&session);
    login.open().await.expect("open login page");
    login
        .sign_in(&Credentials::new(USERNAME, PASSWORD))
        .await
        .expect("sign in");
    assert!(
        login.is_authenticated().await.expect("auth check"),
        "seeded credentials were rejected"
    );
    Some(session)
}
