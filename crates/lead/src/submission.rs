use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use serde_json::Value;
use strum::{AsRefStr, Display};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{Error, LeadPayload, RelayConfig, RelayResponse, RelayTransport, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Lifecycle of one lead form. `error_message` is set iff `phase` is `Error`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    phase: Phase,
    error_message: Option<String>,
}

impl SubmissionState {
    pub fn idle() -> Self {
        Self::default()
    }

    fn submitting() -> Self {
        Self {
            phase: Phase::Submitting,
            error_message: None,
        }
    }

    fn success() -> Self {
        Self {
            phase: Phase::Success,
            error_message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            phase: Phase::Error,
            error_message: Some(message.into()),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == Phase::Success
    }

    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }
}

struct Inner {
    config: Arc<RelayConfig>,
    transport: Arc<dyn RelayTransport>,
    state: watch::Sender<SubmissionState>,
    generation: AtomicU64,
    lifetime: CancellationToken,
}

impl Inner {
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn publish(&self, generation: u64, next: SubmissionState) {
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }

            *state = next;
            true
        });

        if !applied {
            tracing::debug!(generation, "discarding stale submission result");
        }
    }
}

/// Posts lead payloads to the relay and tracks the outcome.
///
/// Does not guard against a second `submit` while one is pending; the
/// form disables its trigger during `Submitting`.
#[derive(Clone)]
pub struct SubmissionClient {
    inner: Arc<Inner>,
}

impl SubmissionClient {
    pub fn new(config: Arc<RelayConfig>, transport: Arc<dyn RelayTransport>) -> Self {
        let (state, _) = watch::channel(SubmissionState::idle());

        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                state,
                generation: AtomicU64::new(0),
                lifetime: CancellationToken::new(),
            }),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.state.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.inner.state.subscribe()
    }

    /// Back to `Idle` from any phase. A pending request keeps running but its
    /// result is dropped.
    pub fn reset(&self) {
        self.inner.next_generation();
        self.inner.state.send_replace(SubmissionState::idle());
    }

    /// Marks the owner as gone: later resolutions become no-ops.
    pub fn cancel(&self) {
        self.inner.lifetime.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.lifetime.is_cancelled()
    }

    pub async fn submit(&self, payload: LeadPayload) {
        if let Some(pending) = self.begin(payload) {
            pending.resolve().await;
        }
    }

    /// Moves to `Submitting` before returning and resolves on a spawned task.
    /// Returns `None` when the configuration check failed.
    pub fn dispatch(&self, payload: LeadPayload) -> Option<JoinHandle<()>> {
        self.begin(payload)
            .map(|pending| tokio::spawn(pending.resolve()))
    }

    fn begin(&self, payload: LeadPayload) -> Option<PendingSubmission> {
        let generation = self.inner.next_generation();

        let url = match self.inner.config.endpoint_url() {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(err = %err, "relay endpoint is not configured");
                self.inner
                    .publish(generation, SubmissionState::error(err.user_message()));

                return None;
            }
        };

        self.inner.publish(generation, SubmissionState::submitting());

        Some(PendingSubmission {
            inner: self.inner.clone(),
            generation,
            url,
            payload,
        })
    }
}

struct PendingSubmission {
    inner: Arc<Inner>,
    generation: u64,
    url: String,
    payload: LeadPayload,
}

impl PendingSubmission {
    #[tracing::instrument(skip_all, fields(subject = self.payload.subject(), generation = self.generation))]
    async fn resolve(self) {
        let outcome = match self.inner.transport.post_json(&self.url, &self.payload).await {
            Ok(response) => interpret(response),
            Err(err) => Err(err),
        };

        let next = match outcome {
            Ok(()) => {
                tracing::info!("lead submitted");
                SubmissionState::success()
            }
            Err(err) => {
                tracing::error!(err = %err, "lead submission failed");
                SubmissionState::error(err.user_message())
            }
        };

        if self.inner.lifetime.is_cancelled() {
            tracing::debug!("owner dropped, ignoring submission result");
            return;
        }

        self.inner.publish(self.generation, next);
    }
}

fn interpret(response: RelayResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    tracing::warn!(status = response.status, body = %response.body, "relay returned failure");

    let body: Value = serde_json::from_str(&response.body)?;
    let messages = body
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Err(Error::Rejected {
        status: response.status,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_success_range() {
        assert!(interpret(RelayResponse::new(200, "{\"ok\":true}")).is_ok());
        assert!(interpret(RelayResponse::new(204, "")).is_ok());
    }

    #[test]
    fn test_interpret_field_errors() {
        let err = interpret(RelayResponse::new(
            422,
            r#"{"errors":[{"field":"email","message":"email invalid"},{"message":"name required"}]}"#,
        ))
        .unwrap_err();

        assert_eq!(err.user_message(), "email invalid, name required");
    }

    #[test]
    fn test_interpret_without_errors_key() {
        let err = interpret(RelayResponse::new(500, r#"{"error":"boom"}"#)).unwrap_err();

        assert_eq!(err.user_message(), crate::RELAY_ERROR_MESSAGE);
    }

    #[test]
    fn test_interpret_non_json_body() {
        let err = interpret(RelayResponse::new(502, "<html>Bad gateway</html>")).unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.user_message(), crate::TRANSPORT_ERROR_MESSAGE);
    }

    #[test]
    fn test_state_invariant() {
        assert_eq!(SubmissionState::idle().error_message(), None);
        assert_eq!(SubmissionState::submitting().error_message(), None);
        assert_eq!(SubmissionState::success().error_message(), None);
        assert_eq!(SubmissionState::error("x").error_message(), Some("x"));
    }
}
