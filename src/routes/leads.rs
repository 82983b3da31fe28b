use std::{collections::BTreeMap, str::FromStr};

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use evoca_lead::{FormVariant, FormView, LeadView, SuccessView};

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "partials/lead-form.html")]
pub struct LeadFormTemplate {
    pub form: FormView,
}

#[derive(askama::Template)]
#[template(path = "partials/lead-success.html")]
pub struct LeadSuccessTemplate {
    pub success: SuccessView,
}

fn render(template: &Template, view: LeadView) -> Response {
    match view {
        LeadView::Form(form) => template.render(LeadFormTemplate { form }),
        LeadView::Success(success) => template.render(LeadSuccessTemplate { success }),
    }
}

/// GET /leads/{variant} - opens the modal on a clean form.
pub async fn open(
    template: Template,
    State(app_state): State<AppState>,
    Path(variant): Path<String>,
) -> impl IntoResponse {
    let Ok(variant) = FormVariant::from_str(&variant) else {
        return template.not_found();
    };

    let mut modal = app_state.lead_modal(variant);

    match modal.render(true) {
        Some(view) => render(&template, view),
        None => Html("").into_response(),
    }
}

/// POST /leads/{variant} - validates, relays and answers with the modal in
/// its resulting phase: the form with field errors or the error banner, or
/// the confirmation screen.
///
/// The relay call runs on its own task, so a visitor who disconnects
/// mid-request does not abort the delivery.
pub async fn submit(
    template: Template,
    State(app_state): State<AppState>,
    Path(variant): Path<String>,
    Form(input): Form<BTreeMap<String, String>>,
) -> impl IntoResponse {
    let Ok(variant) = FormVariant::from_str(&variant) else {
        return template.not_found();
    };

    let mut modal = app_state.lead_modal(variant);
    modal.render(true);

    for (name, value) in input {
        if let Err(err) = modal.controller_mut().set_field(&name, value) {
            tracing::warn!(%variant, error = %err, "ignoring lead form input");
        }
    }

    if let Some(pending) = modal.controller_mut().dispatch() {
        if let Err(err) = pending.await {
            tracing::error!(%variant, error = %err, "lead submission task failed");

            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    tracing::info!(%variant, phase = %modal.controller().phase(), "lead form submitted");

    match modal.render(true) {
        Some(view) => render(&template, view),
        None => Html("").into_response(),
    }
}

/// GET /leads/close - backdrop and close button swap the modal out.
pub async fn close() -> impl IntoResponse {
    Html("")
}
