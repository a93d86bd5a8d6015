//! Declarative response queue for `prompt`/`confirm` dialogs.
//!
//! Beneficiary update/delete flows drive the fixture through sequential
//! browser dialogs. Responses are queued up front; arming the queue installs
//! page-side overrides for `window.prompt` and `window.confirm` that answer
//! from the queue and record every dialog that fires. After the interaction,
//! [`DialogQueue::verify`] reads the replay log back and hard-fails when the
//! dialog count or ordering differs from what was queued; a misassigned
//! response is a bug, not something to proceed past silently.

use serde::{Deserialize, Serialize};

use crate::browser::BrowserSession;
use crate::error::{HarnessError, HarnessResult};

/// One queued dialog response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum DialogResponse {
    /// Answer a `prompt` with this text.
    Prompt {
        reply: String,
        #[serde(skip)]
        message_contains: Option<String>,
    },
    /// Accept a `confirm`.
    Confirm {
        #[serde(skip)]
        message_contains: Option<String>,
    },
    /// Dismiss whatever dialog fires.
    Dismiss,
}

impl DialogResponse {
    fn expected_fragment(&self) -> Option<&str> {
        match self {
            DialogResponse::Prompt {
                message_contains, ..
            }
            | DialogResponse::Confirm { message_contains } => message_contains.as_deref(),
            DialogResponse::Dismiss => None,
        }
    }
}

/// What the page-side overrides recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogReplay {
    /// Dialogs answered from the queue.
    pub answered: usize,
    /// Dialogs that fired after the queue was exhausted.
    pub overflow: usize,
    /// Message text of every dialog, in firing order.
    pub messages: Vec<String>,
}

/// Ordered responses for the dialogs one interaction is expected to emit.
#[derive(Debug, Clone, Default)]
pub struct DialogQueue {
    responses: Vec<DialogResponse>,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a prompt reply.
    pub fn prompt(mut self, reply: impl Into<String>) -> Self {
        self.responses.push(DialogResponse::Prompt {
            reply: reply.into(),
            message_contains: None,
        });
        self
    }

    /// Queue a prompt reply that also asserts on the prompt's message text.
    pub fn prompt_matching(
        mut self,
        message_contains: impl Into<String>,
        reply: impl Into<String>,
    ) -> Self {
        self.responses.push(DialogResponse::Prompt {
            reply: reply.into(),
            message_contains: Some(message_contains.into()),
        });
        self
    }

    /// Queue acceptance of a `confirm`.
    pub fn confirm(mut self) -> Self {
        self.responses.push(DialogResponse::Confirm {
            message_contains: None,
        });
        self
    }

    /// Queue dismissal of the next dialog.
    pub fn dismiss(mut self) -> Self {
        self.responses.push(DialogResponse::Dismiss);
        self
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// The script that installs the page-side overrides.
    fn injection_script(&self) -> String {
        let queue = serde_json::to_string(&self.responses).unwrap_or_else(|_| "[]".to_string());
        format!(
            r#"(() => {{
                const queue = {queue};
                window.__dialogReplay = {{ answered: 0, overflow: 0, messages: [] }};
                const next = (message) => {{
                    const log = window.__dialogReplay;
                    log.messages.push(String(message));
                    if (log.answered >= queue.length) {{
                        log.overflow += 1;
                        return null;
                    }}
                    return queue[log.answered++];
                }};
                window.prompt = (message) => {{
                    const entry = next(message);
                    return entry && entry.kind === 'prompt' ? entry.reply : null;
                }};
                window.confirm = (message) => {{
                    const entry = next(message);
                    return !!entry && entry.kind !== 'dismiss';
                }};
                return true;
            }})()"#
        )
    }

    /// Install the overrides on the session's current page.
    pub async fn arm(&self, session: &BrowserSession) -> HarnessResult<()> {
        let armed: bool = session.eval(self.injection_script()).await?;
        if !armed {
            return Err(HarnessError::Evaluate(
                "dialog queue injection failed".to_string(),
            ));
        }
        Ok(())
    }

    /// Read the replay log back and validate it against the queue.
    pub async fn verify(&self, session: &BrowserSession) -> HarnessResult<DialogReplay> {
        let replay: Option<DialogReplay> =
            session.eval("window.__dialogReplay ?? null").await?;
        let replay = replay.ok_or_else(|| {
            HarnessError::Evaluate("dialog queue was never armed".to_string())
        })?;
        self.check_replay(&replay)?;
        Ok(replay)
    }

    /// Validate a replay log: every queued response consumed, nothing past
    /// the end of the queue, messages matching declared fragments in order.
    pub(crate) fn check_replay(&self, replay: &DialogReplay) -> HarnessResult<()> {
        let actual = replay.answered + replay.overflow;
        if replay.overflow > 0 || replay.answered != self.responses.len() {
            return Err(HarnessError::DialogMismatch {
                expected: self.responses.len(),
                actual,
            });
        }
        for (index, response) in self.responses.iter().enumerate() {
            if let Some(fragment) = response.expected_fragment() {
                let message = replay.messages.get(index).cloned().unwrap_or_default();
                if !message.contains(fragment) {
                    return Err(HarnessError::DialogOrder {
                        index,
                        expected: fragment.to_string(),
                        actual: message,
                    });
                }
            }
        }
        Ok(())
    }
}
