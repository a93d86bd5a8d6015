//! Browser session management over the Chrome DevTools Protocol.
//!
//! One [`BrowserSession`] owns one headless Chrome instance with a single
//! page, bound to the fixture's base URL. Scenarios get their own session
//! each, so no state is shared between them.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{HarnessError, HarnessResult};

/// Configuration for launching a browser session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the fixture under test
    pub base_url: String,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Browser window dimensions
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            headless: true,
            window_width: 1280,
            window_height: 720,
        }
    }
}

/// A live browser page bound to the fixture's base URL
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
    base_url: String,
}

/// Embed a Rust string as a JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

impl BrowserSession {
    /// Launch headless Chrome and open a blank page.
    pub async fn launch(config: SessionConfig) -> HarnessResult<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.window_width, config.window_height)
            .no_sandbox();
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(HarnessError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // Drive CDP events until the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;
        debug!(base_url = %config.base_url, "browser session launched");

        Ok(Self {
            browser,
            handler_task,
            page,
            base_url: config.base_url,
        })
    }

    /// The fixture base URL this session is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Navigate to a path relative to the base URL (or an absolute URL).
    pub async fn goto(&self, path: &str) -> HarnessResult<()> {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        };
        debug!(%url, "navigate");
        self.page.goto(url).await?;
        Ok(())
    }

    /// Current page URL.
    pub async fn current_url(&self) -> HarnessResult<String> {
        let url = self.page.url().await?;
        Ok(url.unwrap_or_default())
    }

    /// Current document title.
    pub async fn title(&self) -> HarnessResult<String> {
        let title: Option<String> = self.eval("document.title").await?;
        Ok(title.unwrap_or_default())
    }

    /// Click the element matching `selector`. Fails hard if it is absent.
    pub async fn click(&self, selector: &str) -> HarnessResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| HarnessError::ElementNotFound(selector.to_string()))?;
        element.click().await?;
        Ok(())
    }

    /// Fill an input: set its value and dispatch `input`/`change` events.
    pub async fn fill(&self, selector: &str, value: &str) -> HarnessResult<()> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.value = {val};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = js_string(selector),
            val = js_string(value),
        );
        let filled: bool = self.eval(js).await?;
        if !filled {
            return Err(HarnessError::ElementNotFound(selector.to_string()));
        }
        Ok(())
    }

    /// Trimmed text content of the element, failing hard when it is absent.
    pub async fn text(&self, selector: &str) -> HarnessResult<String> {
        self.text_opt(selector)
            .await?
            .ok_or_else(|| HarnessError::MalformedUiState {
                selector: selector.to_string(),
                reason: "element not found".to_string(),
            })
    }

    /// Trimmed text content, or `None` when the element is absent.
    pub async fn text_opt(&self, selector: &str) -> HarnessResult<Option<String>> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                return el === null ? null : el.textContent.trim();
            }})()"#,
            sel = js_string(selector),
        );
        self.eval(js).await
    }

    /// Whether an element matching `selector` is currently attached.
    pub async fn exists(&self, selector: &str) -> HarnessResult<bool> {
        let js = format!(
            "document.querySelector({sel}) !== null",
            sel = js_string(selector),
        );
        self.eval(js).await
    }

    /// Evaluate a JavaScript expression and deserialize its value.
    pub async fn eval<T: DeserializeOwned>(&self, js: impl Into<String>) -> HarnessResult<T> {
        let result = self.page.evaluate(js.into()).await?;
        result
            .into_value::<T>()
            .map_err(|e| HarnessError::Evaluate(e.to_string()))
    }

    /// Close the page and shut the browser down.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("browser close failed: {e}");
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("O'Brien \"Jr\""), r#""O'Brien \"Jr\"""#);
    }

    #[test]
    fn default_config_is_headless() {
        let config = SessionConfig::default();
        assert!(config.headless);
        assert!(config.base_url.starts_with("http://127.0.0.1"));
    }
}
