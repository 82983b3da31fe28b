use std::sync::Arc;

use evoca_lead::{
    Error, FormSpec, LeadFormController, LeadView, MARKETING_ROUTING_HINT,
    PRODUCTION_ROUTING_HINT, Phase, RelayConfig, SubmissionClient, TRANSPORT_ERROR_MESSAGE,
};
use helpers::{MockRelay, Reply};
use serde_json::json;

mod helpers;

#[tokio::test]
async fn set_field_is_a_shallow_merge() -> anyhow::Result<()> {
    let mut form = helpers::production_form(MockRelay::new(Reply::Status(200, "{}")));

    form.set_field("name", "Ana")?;
    form.set_field("budget", "+30k USD")?;

    assert_eq!(form.value("name"), Some("Ana"));
    assert_eq!(form.value("budget"), Some("+30k USD"));
    assert_eq!(form.value("projectType"), Some("Spot Publicitario"));
    assert_eq!(form.value("email"), Some(""));

    let err = form.set_field("website", "https://x.com").unwrap_err();
    assert!(matches!(err, Error::UnknownField(name) if name == "website"));

    Ok(())
}

#[tokio::test]
async fn submit_posts_fields_and_routing_hint() -> anyhow::Result<()> {
    let relay = MockRelay::new(Reply::Status(200, "{}"));
    let mut form = helpers::production_form(relay.clone());
    helpers::fill_production(&mut form)?;

    form.submit().await;

    assert_eq!(form.phase(), Phase::Success);
    assert_eq!(
        relay.requests()[0].1,
        json!({
            "name": "Ana",
            "email": "ana@x.com",
            "projectType": "Documental",
            "budget": "+30k USD",
            "details": "Rodaje en marzo",
            "_subject": PRODUCTION_ROUTING_HINT,
        })
    );

    Ok(())
}

#[tokio::test]
async fn invalid_fields_never_reach_the_relay() -> anyhow::Result<()> {
    let relay = MockRelay::new(Reply::Status(200, "{}"));
    let mut form = helpers::production_form(relay.clone());
    form.set_field("email", "ana")?;

    form.submit().await;

    assert_eq!(relay.calls(), 0);
    assert_eq!(form.phase(), Phase::Idle);

    let view = form.view();
    let view = view.as_form().expect("form is still shown");
    assert_eq!(
        view.field("name").and_then(|f| f.error.as_deref()),
        Some("Este campo es obligatorio.")
    );
    assert_eq!(
        view.field("email").and_then(|f| f.error.as_deref()),
        Some("Ingresa un email válido.")
    );
    assert!(view.field("details").unwrap().error.is_none());
    assert!(!view.has_error());

    Ok(())
}

#[tokio::test]
async fn submitting_disables_inputs_and_trigger() -> anyhow::Result<()> {
    let (relay, gate) = MockRelay::gated(Reply::Status(200, "{}"));
    let mut form = helpers::production_form(relay.clone());
    helpers::fill_production(&mut form)?;

    let handle = form.dispatch().expect("payload is valid");

    let view = form.view();
    let view = view.as_form().expect("form stays mounted while submitting");
    assert!(view.submit_disabled);
    assert_eq!(view.submit_label, "Enviando...");
    assert!(view.fields.iter().all(|f| f.disabled));

    // a second trigger while pending is ignored
    assert!(form.dispatch().is_none());

    gate.notify_one();
    handle.await?;

    assert_eq!(relay.calls(), 1);
    assert_eq!(form.phase(), Phase::Success);

    Ok(())
}

#[tokio::test]
async fn error_banner_keeps_entered_values() -> anyhow::Result<()> {
    let mut form = helpers::production_form(MockRelay::new(Reply::Fail));
    helpers::fill_production(&mut form)?;

    form.submit().await;

    let view = form.view();
    let view = view.as_form().expect("form is shown on error");
    assert!(view.has_error());
    assert_eq!(view.error_message(), TRANSPORT_ERROR_MESSAGE);
    assert!(!view.submit_disabled);
    assert_eq!(view.submit_label, "Enviar Propuesta");
    assert_eq!(view.field("name").unwrap().value, "Ana");
    assert_eq!(view.field("details").unwrap().value, "Rodaje en marzo");

    let budget = view.field("budget").unwrap();
    assert!(budget.is_select());
    assert!(
        budget
            .options
            .iter()
            .any(|o| o.value == "+30k USD" && o.selected)
    );

    Ok(())
}

#[tokio::test]
async fn success_view_echoes_email_only() -> anyhow::Result<()> {
    let mut form = helpers::production_form(MockRelay::new(Reply::Status(200, "{}")));
    helpers::fill_production(&mut form)?;

    form.submit().await;

    let LeadView::Success(view) = form.view() else {
        panic!("expected success view");
    };
    assert_eq!(view.email, "ana@x.com");
    assert_eq!(view.title, "¡Corte! Todo listo.");
    assert_eq!(view.close_label, "Volver al Cinema");

    Ok(())
}

#[tokio::test]
async fn marketing_variant_shares_the_controller() -> anyhow::Result<()> {
    let relay = MockRelay::new(Reply::Status(200, "{}"));
    let mut form = LeadFormController::new(
        Arc::new(FormSpec::marketing()),
        SubmissionClient::new(helpers::configured(), relay.clone()),
    );

    form.set_fields([
        ("name", "Juan Pérez"),
        ("email", "juan@empresa.com"),
        ("website", "https://www.tuempresa.com"),
        ("service", "CRO & UX"),
    ])?;
    form.submit().await;

    assert_eq!(form.phase(), Phase::Success);

    let requests = relay.requests();
    let body = &requests[0].1;
    assert_eq!(body["_subject"], MARKETING_ROUTING_HINT);
    assert_eq!(body["service"], "CRO & UX");
    assert_eq!(body["message"], "");

    Ok(())
}

#[tokio::test]
async fn unconfigured_relay_shows_config_banner() -> anyhow::Result<()> {
    let relay = MockRelay::new(Reply::Status(200, "{}"));
    let mut form = LeadFormController::new(
        Arc::new(FormSpec::production()),
        SubmissionClient::new(Arc::new(RelayConfig::default()), relay.clone()),
    );
    helpers::fill_production(&mut form)?;

    form.submit().await;

    assert_eq!(relay.calls(), 0);
    let view = form.view();
    assert_eq!(
        view.as_form().map(|f| f.error_message()),
        Some(evoca_lead::CONFIG_ERROR_MESSAGE)
    );

    Ok(())
}

#[tokio::test]
async fn dropping_the_form_cancels_its_client() -> anyhow::Result<()> {
    let (relay, gate) = MockRelay::gated(Reply::Status(200, "{}"));
    let mut form = helpers::production_form(relay.clone());
    helpers::fill_production(&mut form)?;

    let handle = form.dispatch().expect("payload is valid");
    let client = form.client().clone();
    drop(form);

    assert!(client.is_cancelled());

    gate.notify_one();
    handle.await?;

    assert_eq!(relay.calls(), 1);
    assert_eq!(client.phase(), Phase::Submitting);

    Ok(())
}
