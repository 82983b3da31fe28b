use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use evoca_lead::{
    Error, FormSpec, LeadFormController, LeadPayload, RelayConfig, RelayResponse, RelayTransport,
    SubmissionClient,
};
use serde_json::Value;
use tokio::sync::Notify;

#[allow(dead_code)]
pub enum Reply {
    Status(u16, &'static str),
    Fail,
}

pub struct MockRelay {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, Value)>>,
}

#[allow(dead_code)]
impl MockRelay {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gate: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(vec![]),
        })
    }

    /// Holds every request until the returned gate is notified.
    pub fn gated(reply: Reply) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let relay = Arc::new(Self {
            reply,
            gate: Some(gate.clone()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(vec![]),
        });

        (relay, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayTransport for MockRelay {
    async fn post_json(&self, url: &str, payload: &LeadPayload) -> evoca_lead::Result<RelayResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((url.to_owned(), serde_json::to_value(payload)?));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.reply {
            Reply::Status(status, body) => Ok(RelayResponse::new(status, body)),
            Reply::Fail => Err(Error::Transport("connection refused (os error 111)".into())),
        }
    }
}

pub fn configured() -> Arc<RelayConfig> {
    Arc::new(RelayConfig::new("xyzabc"))
}

#[allow(dead_code)]
pub fn client(config: Arc<RelayConfig>, relay: Arc<MockRelay>) -> SubmissionClient {
    SubmissionClient::new(config, relay)
}

#[allow(dead_code)]
pub fn production_form(relay: Arc<MockRelay>) -> LeadFormController {
    LeadFormController::new(
        Arc::new(FormSpec::production()),
        SubmissionClient::new(configured(), relay),
    )
}

#[allow(dead_code)]
pub fn fill_production(form: &mut LeadFormController) -> evoca_lead::Result<()> {
    form.set_fields([
        ("name", "Ana"),
        ("email", "ana@x.com"),
        ("projectType", "Documental"),
        ("budget", "+30k USD"),
        ("details", "Rodaje en marzo"),
    ])
}
