use evoca_lead::FormVariant;
use serde_json::{Value, json};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::config::SiteConfig;

pub const SITE_NAME: &str = "Evoca PRO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr, EnumString, VariantArray)]
pub enum Page {
    #[strum(serialize = "/")]
    Home,
    #[strum(serialize = "/cine")]
    Film,
    #[strum(serialize = "/marketing")]
    Marketing,
    #[strum(serialize = "/privacidad")]
    Privacy,
    #[strum(serialize = "/terminos")]
    Terms,
}

/// One entry of a page FAQ, rendered as `<details>` and mirrored in JSON-LD.
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

impl Page {
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Target of the "Volver" link. Every page goes back to the landing.
    pub fn back(self) -> Page {
        Page::Home
    }

    pub fn lead_form(self) -> Option<FormVariant> {
        match self {
            Page::Film => Some(FormVariant::Production),
            Page::Marketing => Some(FormVariant::Marketing),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Page::Home => "Agencia Creativa y Estratégica",
            Page::Film => "Productora Audiovisual Corporativa y Cine Publicitario",
            Page::Marketing => "Agencia de Marketing Digital y Analítica Web",
            Page::Privacy => "Política de Privacidad",
            Page::Terms => "Términos y Condiciones",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Page::Home => {
                "Evoca PRO une lo mejor de dos mundos: Marketing Digital basado en datos y Producción Audiovisual Cinematográfica."
            }
            Page::Film => {
                "Elevamos tu marca con video de calidad cinematográfica. Especialistas en spots publicitarios, videos corporativos, drones y motion graphics."
            }
            Page::Marketing => {
                "Especialistas en Google Analytics 4 (GA4), Paid Media, CRO y Estrategias de E-commerce. Toma decisiones basadas en datos, no en intuición."
            }
            Page::Privacy => "Política de Tratamiento de Datos Personales de Evoca PRO.",
            Page::Terms => "Condiciones de uso de los servicios de Evoca PRO.",
        }
    }

    fn keywords(self) -> Option<&'static str> {
        match self {
            Page::Home => Some(
                "marketing digital, producción audiovisual, analítica web, video corporativo, agencia creativa",
            ),
            Page::Film => Some(
                "productora audiovisual, video corporativo, spot publicitario, drones, motion graphics, documental",
            ),
            Page::Marketing => Some(
                "marketing digital, analítica web, ga4, google ads, estrategia ecommerce, cro, auditoría seo",
            ),
            Page::Privacy | Page::Terms => None,
        }
    }

    fn schema(self, site: &SiteConfig, faqs: &[Faq]) -> Option<Value> {
        let base = site.base_url.trim_end_matches('/');

        let service = |name: &str, description: &str| {
            json!({
                "@context": "https://schema.org",
                "@graph": [
                    {
                        "@type": "ProfessionalService",
                        "name": name,
                        "description": description,
                        "url": format!("{base}{}", self.path()),
                        "priceRange": "$$$",
                    },
                    {
                        "@type": "FAQPage",
                        "mainEntity": faqs.iter().map(|faq| json!({
                            "@type": "Question",
                            "name": faq.question,
                            "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
                        })).collect::<Vec<_>>(),
                    },
                ],
            })
        };

        match self {
            Page::Home => Some(json!({
                "@context": "https://schema.org",
                "@type": "Organization",
                "name": SITE_NAME,
                "url": base,
                "logo": format!("{base}/static/img/evocapro-logo-orange.png"),
                "description": "Agencia especializada en Marketing Digital y Producción Audiovisual.",
                "sameAs": [
                    "https://www.linkedin.com/company/evocapro",
                    "https://www.instagram.com/evocapro",
                ],
            })),
            Page::Film => Some(service(
                "Evoca PRO - Producción Audiovisual",
                "Productora audiovisual especializada en video corporativo, spots publicitarios, documentales y contenido cinematográfico para marcas.",
            )),
            Page::Marketing => Some(service(
                "Evoca PRO - Marketing Digital",
                "Agencia de marketing digital especializada en analítica web, estrategia e-commerce, CRO y publicidad pagada (Ads).",
            )),
            Page::Privacy | Page::Terms => None,
        }
    }
}

/// Head metadata of a page: title, description, canonical URL, Open Graph,
/// Twitter card and JSON-LD.
#[derive(Debug, Clone)]
pub struct Seo {
    pub title: String,
    pub description: &'static str,
    pub keywords: Option<&'static str>,
    pub canonical: String,
    pub og_image: String,
    pub schema: Option<String>,
}

impl Seo {
    pub fn new(page: Page, site: &SiteConfig, faqs: &[Faq]) -> Self {
        let base = site.base_url.trim_end_matches('/');
        let canonical = match page {
            Page::Home => base.to_owned(),
            _ => format!("{base}{}", page.path()),
        };

        Self {
            title: format!("{} | {SITE_NAME}", page.title()),
            description: page.description(),
            keywords: page.keywords(),
            canonical,
            og_image: site.og_image.clone(),
            // `</` cannot appear inside the script element
            schema: page
                .schema(site, faqs)
                .map(|schema| schema.to_string().replace('<', "\\u003c")),
        }
    }

    pub fn not_found(site: &SiteConfig) -> Self {
        Self {
            title: format!("Página no encontrada | {SITE_NAME}"),
            description: "La página que buscas no existe.",
            keywords: None,
            canonical: site.base_url.trim_end_matches('/').to_owned(),
            og_image: site.og_image.clone(),
            schema: None,
        }
    }
}
