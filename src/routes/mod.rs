use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use evoca_lead::{
    FormSpec, FormVariant, LeadFormController, ModalShell, RelayConfig, RelayTransport,
    SubmissionClient,
};

use crate::{assets::AssetsService, config::Config, template::Template};

mod cine;
mod health;
mod index;
mod leads;
mod marketing;
mod privacy;
mod terms;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: Arc<RelayConfig>,
    pub transport: Arc<dyn RelayTransport>,
    production_form: Arc<FormSpec>,
    marketing_form: Arc<FormSpec>,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn RelayTransport>) -> Self {
        if !config.relay.is_configured() {
            tracing::warn!("relay endpoint id is not configured, lead forms will report an error");
        }

        Self {
            relay: Arc::new(config.relay.clone()),
            config,
            transport,
            production_form: Arc::new(FormSpec::production()),
            marketing_form: Arc::new(FormSpec::marketing()),
        }
    }

    pub fn form(&self, variant: FormVariant) -> Arc<FormSpec> {
        match variant {
            FormVariant::Production => self.production_form.clone(),
            FormVariant::Marketing => self.marketing_form.clone(),
        }
    }

    /// A closed modal around a fresh controller. Each request gets its own
    /// submission client so concurrent visitors never share state.
    pub fn lead_modal(&self, variant: FormVariant) -> ModalShell {
        let client = SubmissionClient::new(self.relay.clone(), self.transport.clone());
        let controller = LeadFormController::new(self.form(variant), client);

        ModalShell::new(controller, move || {
            tracing::debug!(%variant, "lead modal close requested");
        })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/cine", get(cine::page))
        .route("/marketing", get(marketing::page))
        .route("/privacidad", get(privacy::page))
        .route("/terminos", get(terms::page))
        .route("/leads/close", get(leads::close))
        .route("/leads/{variant}", get(leads::open).post(leads::submit))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
}
