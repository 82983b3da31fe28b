use std::{borrow::Cow, collections::BTreeMap};

use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};
use validator::{ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::{
    Budget, LeadPayload, MarketingService, ProjectType, Result, catalog, catalog_default,
};

pub const PRODUCTION_ROUTING_HINT: &str = "Nuevo Lead de Cine - Evoca PRO";
pub const MARKETING_ROUTING_HINT: &str = "Nuevo Lead de Marketing - Evoca PRO";

#[derive(
    EnumString, Display, VariantArray, AsRefStr, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum FormVariant {
    #[strum(serialize = "cine")]
    Production,
    #[strum(serialize = "marketing")]
    Marketing,
}

impl FormVariant {
    /// Path segment of the variant's lead routes.
    pub fn slug(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Select(Vec<&'static str>),
    TextArea,
}

impl FieldKind {
    /// HTML input type, or the element name for selects and textareas.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Select(_) => "select",
            FieldKind::TextArea => "textarea",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind,
            required: false,
            default: "",
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn url(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    /// Select over a strum catalog, preselecting its default variant.
    pub fn select<T>(name: &'static str, label: &'static str) -> Self
    where
        T: VariantArray + AsRef<str> + Default + PartialEq,
    {
        let mut field = Self::new(name, label, FieldKind::Select(catalog::<T>()));
        field.default = catalog_default::<T>();
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn check(&self, value: &str) -> std::result::Result<(), ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            if self.required {
                return Err(invalid("required", "Este campo es obligatorio."));
            }

            return Ok(());
        }

        match &self.kind {
            FieldKind::Email if !value.validate_email() => {
                Err(invalid("email", "Ingresa un email válido."))
            }
            FieldKind::Url if !value.validate_url() => {
                Err(invalid("url", "Ingresa una URL válida (https://...)."))
            }
            FieldKind::Select(options) if !options.iter().any(|o| *o == value) => {
                Err(invalid("catalog", "Selecciona una opción de la lista."))
            }
            _ => Ok(()),
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Copy shown around the fields of one lead form.
#[derive(Debug, Clone, Default)]
pub struct FormLabels {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub submit: &'static str,
    pub busy: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub success_contact: &'static str,
    pub close: &'static str,
}

/// Everything that differs between lead forms; the controller logic is shared.
#[derive(Debug, Clone)]
pub struct FormSpec {
    variant: FormVariant,
    routing_hint: String,
    labels: FormLabels,
    fields: Vec<FieldSpec>,
}

pub struct FormSpecBuilder {
    spec: FormSpec,
}

impl FormSpecBuilder {
    pub fn labels(mut self, labels: FormLabels) -> Self {
        self.spec.labels = labels;
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.spec.fields.push(field);
        self
    }

    pub fn build(self) -> FormSpec {
        self.spec
    }
}

impl FormSpec {
    pub fn builder(variant: FormVariant, routing_hint: impl Into<String>) -> FormSpecBuilder {
        FormSpecBuilder {
            spec: FormSpec {
                variant,
                routing_hint: routing_hint.into(),
                labels: FormLabels::default(),
                fields: vec![],
            },
        }
    }

    pub fn for_variant(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Production => Self::production(),
            FormVariant::Marketing => Self::marketing(),
        }
    }

    pub fn production() -> Self {
        Self::builder(FormVariant::Production, PRODUCTION_ROUTING_HINT)
            .labels(FormLabels {
                eyebrow: "Comenzar Proyecto",
                title: "Cuéntanos tu Visión",
                intro: "",
                submit: "Enviar Propuesta",
                busy: "Enviando...",
                success_title: "¡Corte! Todo listo.",
                success_body: "Hemos recibido los detalles de tu proyecto. Nuestro productor ejecutivo revisará tu solicitud.",
                success_contact: "Te contactaremos para agendar una llamada de pre-producción a",
                close: "Volver al Cinema",
            })
            .field(
                FieldSpec::text("name", "Nombre / Empresa")
                    .required()
                    .placeholder("Tu nombre o el de tu marca"),
            )
            .field(
                FieldSpec::email("email", "Email de Contacto")
                    .required()
                    .placeholder("contacto@marca.com"),
            )
            .field(FieldSpec::select::<ProjectType>("projectType", "Tipo de Proyecto"))
            .field(FieldSpec::select::<Budget>("budget", "Presupuesto Est."))
            .field(
                FieldSpec::textarea("details", "Detalles del Proyecto").placeholder(
                    "Describe brevemente la idea, fecha de rodaje estimada, etc...",
                ),
            )
            .build()
    }

    pub fn marketing() -> Self {
        Self::builder(FormVariant::Marketing, MARKETING_ROUTING_HINT)
            .labels(FormLabels {
                eyebrow: "Diagnóstico Gratuito",
                title: "Analicemos tu presencia digital",
                intro: "Completa tus datos y nuestros expertos analizarán tu presencia digital.",
                submit: "Solicitar Análisis",
                busy: "Enviando...",
                success_title: "¡Solicitud Recibida!",
                success_body: "Nuestro equipo de estrategia revisará tu sitio web y te contactará en las próximas 24 horas con un plan inicial.",
                success_contact: "Enviaremos el plan inicial a",
                close: "Volver al sitio",
            })
            .field(
                FieldSpec::text("name", "Nombre Completo")
                    .required()
                    .placeholder("Ej. Juan Pérez"),
            )
            .field(
                FieldSpec::email("email", "Email Corporativo")
                    .required()
                    .placeholder("juan@empresa.com"),
            )
            .field(
                FieldSpec::url("website", "Sitio Web")
                    .required()
                    .placeholder("https://www.tuempresa.com"),
            )
            .field(FieldSpec::select::<MarketingService>(
                "service",
                "Servicio de Interés",
            ))
            .field(
                FieldSpec::textarea("message", "Mensaje Opcional")
                    .placeholder("Cuéntanos brevemente tus objetivos..."),
            )
            .build()
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn routing_hint(&self) -> &str {
        &self.routing_hint
    }

    pub fn labels(&self) -> &FormLabels {
        &self.labels
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn initial_values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.to_owned(), f.default.to_owned()))
            .collect()
    }

    pub fn validate(
        &self,
        values: &BTreeMap<String, String>,
    ) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in &self.fields {
            let value = values.get(field.name).map(String::as_str).unwrap_or_default();
            if let Err(err) = field.check(value) {
                errors.add(field.name, err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validated payload with every declared field and the routing hint.
    /// Values are sent as entered; whitespace is only ignored by validation.
    pub fn payload(&self, values: &BTreeMap<String, String>) -> Result<LeadPayload> {
        self.validate(values)?;

        let mut payload = LeadPayload::new(self.routing_hint.as_str());
        for field in &self.fields {
            let value = values.get(field.name).map(String::as_str).unwrap_or_default();
            payload.insert(field.name, value);
        }

        Ok(payload)
    }
}
