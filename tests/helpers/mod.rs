//! Shared setup for router tests: an in-memory relay and an app built on it.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use evoca::{
    AppState,
    config::{Config, ObservabilityConfig, ServerConfig, SiteConfig},
};
use evoca_lead::{LeadPayload, RelayConfig, RelayResponse, RelayTransport};
use serde_json::Value;
use tokio::sync::Notify;

pub enum Reply {
    Status(u16, &'static str),
    Fail,
}

/// Relay double that records every posted body.
pub struct MockRelay {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    bodies: Mutex<Vec<Value>>,
}

impl MockRelay {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self::build(reply, None))
    }

    /// Holds every request until the returned gate is notified.
    pub fn gated(reply: Reply) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());

        (Arc::new(Self::build(reply, Some(gate.clone()))), gate)
    }

    fn build(reply: Reply, gate: Option<Arc<Notify>>) -> Self {
        Self {
            reply,
            gate,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            bodies: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests that ran to the end, past the gate.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayTransport for MockRelay {
    async fn post_json(&self, _url: &str, payload: &LeadPayload) -> evoca_lead::Result<RelayResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload)?);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);

        match self.reply {
            Reply::Status(status, body) => Ok(RelayResponse::new(status, body)),
            Reply::Fail => Err(evoca_lead::Error::Transport(
                "connection refused (os error 111)".into(),
            )),
        }
    }
}

pub fn config(relay: RelayConfig) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        relay,
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(relay: Arc<MockRelay>) -> Router {
    app_with(RelayConfig::new("xyzabc"), relay)
}

pub fn app_with(relay_config: RelayConfig, relay: Arc<MockRelay>) -> Router {
    evoca::create_app(AppState::new(config(relay_config), relay))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok(String::from_utf8(body.to_vec())?)
}

pub const PRODUCTION_FIELDS: [(&str, &str); 5] = [
    ("name", "Ana"),
    ("email", "ana@x.com"),
    ("projectType", "Documental"),
    ("budget", "+30k USD"),
    ("details", "Rodaje en marzo"),
];
