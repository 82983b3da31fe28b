use axum::response::IntoResponse;
use evoca_lead::FormVariant;

use crate::{
    page::{Faq, Page, Seo, ServiceCard, Step},
    template::Template,
};

const VALUE_PROPS: [&str; 3] = [
    "Estrategias Data-Driven",
    "Certificados en Google Analytics 4",
    "Optimización de Conversión (CRO)",
];

const HIGHLIGHTS: [&str; 3] = [
    "Auditoría 360° de tu presencia digital actual.",
    "Dashboards personalizados para control total.",
    "Escalabilidad para mercados nacionales e internacionales.",
];

const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        title: "Estrategia E-commerce",
        description: "Auditoría de UX/UI, recuperación de carritos abandonados y estrategias de fidelización (LTV).",
    },
    ServiceCard {
        title: "Paid Media (Ads)",
        description: "Gestión avanzada de Google Ads, Meta Ads y LinkedIn Ads con enfoque en CPA y ROAS.",
    },
    ServiceCard {
        title: "Analítica Web (GA4)",
        description: "Implementación técnica, configuración de eventos de conversión y Server-Side Tracking.",
    },
    ServiceCard {
        title: "CRO & Experimentación",
        description: "A/B testing continuo en landing pages para mejorar la tasa de conversión sin aumentar el tráfico.",
    },
    ServiceCard {
        title: "Desarrollo Web",
        description: "Sitios corporativos y tiendas WooCommerce optimizados para SEO y velocidad de carga.",
    },
    ServiceCard {
        title: "CRM & Automation",
        description: "Email marketing automatizado y segmentación de base de datos para nutrir leads.",
    },
];

const STEPS: [Step; 4] = [
    Step {
        number: "1",
        title: "Diagnóstico",
        description: "Auditoría profunda de activos digitales y competencia.",
    },
    Step {
        number: "2",
        title: "Estrategia",
        description: "Definición de canales, budget y KPIs principales.",
    },
    Step {
        number: "3",
        title: "Ejecución",
        description: "Lanzamiento de campañas y optimizaciones técnicas.",
    },
    Step {
        number: "4",
        title: "Optimización",
        description: "Mejora continua basada en datos de rendimiento.",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "¿Cuánto tiempo se tarda en ver resultados?",
        answer: "Aunque los resultados iniciales pueden verse en el primer mes, las estrategias robustas suelen mostrar un impacto significativo entre 3 y 6 meses.",
    },
    Faq {
        question: "¿Es necesario tener un equipo interno?",
        answer: "No es indispensable. Funcionamos como una extensión de tu equipo, encargándonos de la parte técnica y estratégica.",
    },
    Faq {
        question: "¿Trabajan campañas internacionales?",
        answer: "Sí. Diseñamos y gestionamos campañas geolocalizadas tanto a nivel nacional como en mercados internacionales.",
    },
];

#[derive(askama::Template)]
#[template(path = "marketing.html")]
pub struct MarketingTemplate {
    pub seo: Seo,
    pub back: &'static str,
    pub lead_form: &'static str,
    pub value_props: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub services: &'static [ServiceCard],
    pub steps: &'static [Step],
    pub faqs: &'static [Faq],
}

pub async fn page(template: Template) -> impl IntoResponse {
    let page = Page::Marketing;

    template.render(MarketingTemplate {
        seo: template.seo(page, &FAQS),
        back: page.back().path(),
        lead_form: page.lead_form().map(FormVariant::slug).unwrap_or_default(),
        value_props: &VALUE_PROPS,
        highlights: &HIGHLIGHTS,
        services: &SERVICES,
        steps: &STEPS,
        faqs: &FAQS,
    })
}
