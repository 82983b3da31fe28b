use std::{collections::BTreeMap, sync::Arc};

use tokio::task::JoinHandle;
use validator::ValidationErrors;

use crate::{
    Error, FieldKind, FieldSpec, FormSpec, FormVariant, LeadPayload, Phase, Result,
    SubmissionClient, SubmissionState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub required: bool,
    pub value: String,
    pub disabled: bool,
    pub options: Vec<OptionView>,
    pub error: Option<String>,
}

impl FieldView {
    pub fn is_select(&self) -> bool {
        self.input_type == "select"
    }

    pub fn is_textarea(&self) -> bool {
        self.input_type == "textarea"
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub variant: FormVariant,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error: Option<String>,
}

impl FormView {
    pub fn slug(&self) -> &'static str {
        self.variant.slug()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Confirmation screen. Carries no field state besides the echoed email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessView {
    pub variant: FormVariant,
    pub title: &'static str,
    pub body: &'static str,
    pub contact: &'static str,
    pub email: String,
    pub close_label: &'static str,
}

impl SuccessView {
    pub fn slug(&self) -> &'static str {
        self.variant.slug()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadView {
    Form(FormView),
    Success(SuccessView),
}

impl LeadView {
    pub fn as_form(&self) -> Option<&FormView> {
        match self {
            LeadView::Form(form) => Some(form),
            LeadView::Success(_) => None,
        }
    }

    pub fn as_success(&self) -> Option<&SuccessView> {
        match self {
            LeadView::Success(success) => Some(success),
            LeadView::Form(_) => None,
        }
    }
}

/// One lead-capture surface: field state, validation and rendering around a
/// [`SubmissionClient`].
pub struct LeadFormController {
    spec: Arc<FormSpec>,
    client: SubmissionClient,
    values: BTreeMap<String, String>,
    invalid: Option<ValidationErrors>,
    submitted_email: String,
}

impl LeadFormController {
    pub fn new(spec: Arc<FormSpec>, client: SubmissionClient) -> Self {
        let values = spec.initial_values();

        Self {
            spec,
            client,
            values,
            invalid: None,
            submitted_email: String::new(),
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn client(&self) -> &SubmissionClient {
        &self.client
    }

    pub fn state(&self) -> SubmissionState {
        self.client.state()
    }

    pub fn phase(&self) -> Phase {
        self.client.phase()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Updates one field, leaving the others untouched.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let Some(field) = self.spec.field(name) else {
            return Err(Error::UnknownField(name.to_owned()));
        };

        self.values.insert(field.name.to_owned(), value.into());

        Ok(())
    }

    pub fn set_fields<I, K, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in values {
            self.set_field(name.as_ref(), value)?;
        }

        Ok(())
    }

    /// Validates and builds the payload. `None` keeps the request off the wire.
    fn prepare(&mut self) -> Option<LeadPayload> {
        if self.phase() == Phase::Submitting {
            tracing::warn!(variant = %self.spec.variant(), "submit ignored while a request is pending");
            return None;
        }

        match self.spec.payload(&self.values) {
            Ok(payload) => {
                self.invalid = None;
                self.submitted_email = payload.email().unwrap_or_default().to_owned();
                Some(payload)
            }
            Err(Error::Validate(errors)) => {
                tracing::debug!(variant = %self.spec.variant(), errors = %errors, "lead form invalid");
                self.invalid = Some(errors);
                None
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to build lead payload");
                None
            }
        }
    }

    pub async fn submit(&mut self) {
        if let Some(payload) = self.prepare() {
            self.client.submit(payload).await;
        }
    }

    /// Fire-and-forget variant of [`Self::submit`]; the phase is `Submitting`
    /// when this returns a handle.
    pub fn dispatch(&mut self) -> Option<JoinHandle<()>> {
        let payload = self.prepare()?;

        self.client.dispatch(payload)
    }

    /// Fresh form: initial field values, no validation messages, `Idle`.
    pub fn reset(&mut self) {
        self.client.reset();
        self.values = self.spec.initial_values();
        self.invalid = None;
        self.submitted_email.clear();
    }

    pub fn view(&self) -> LeadView {
        let state = self.client.state();
        let labels = self.spec.labels();

        if state.is_success() {
            return LeadView::Success(SuccessView {
                variant: self.spec.variant(),
                title: labels.success_title,
                body: labels.success_body,
                contact: labels.success_contact,
                email: self.submitted_email.clone(),
                close_label: labels.close,
            });
        }

        let submitting = state.is_submitting();

        LeadView::Form(FormView {
            variant: self.spec.variant(),
            eyebrow: labels.eyebrow,
            title: labels.title,
            intro: labels.intro,
            fields: self
                .spec
                .fields()
                .iter()
                .map(|field| self.field_view(field, submitting))
                .collect(),
            submit_label: if submitting { labels.busy } else { labels.submit },
            submit_disabled: submitting,
            error: state.error_message().map(str::to_owned),
        })
    }

    fn field_view(&self, field: &FieldSpec, disabled: bool) -> FieldView {
        let value = self.value(field.name).unwrap_or_default().to_owned();

        let options = match &field.kind {
            FieldKind::Select(options) => options
                .iter()
                .map(|option| OptionView {
                    value: *option,
                    selected: *option == value,
                })
                .collect(),
            _ => vec![],
        };

        let error = self.invalid.as_ref().and_then(|errors| {
            errors
                .field_errors()
                .get(field.name)
                .and_then(|errs| errs.first())
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
        });

        FieldView {
            name: field.name,
            label: field.label,
            placeholder: field.placeholder,
            input_type: field.kind.input_type(),
            required: field.required,
            value,
            disabled,
            options,
            error,
        }
    }
}

impl Drop for LeadFormController {
    fn drop(&mut self) {
        self.client.cancel();
    }
}
