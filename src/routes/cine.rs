use axum::response::IntoResponse;
use evoca_lead::FormVariant;

use crate::{
    page::{Faq, Page, Seo, ServiceCard, Stat, Step},
    template::Template,
};

const STATS: [Stat; 4] = [
    Stat { value: "10+", label: "Años de Experiencia" },
    Stat { value: "250+", label: "Proyectos Entregados" },
    Stat { value: "14", label: "Premios Creativos" },
    Stat { value: "6K", label: "Calidad de Producción" },
];

const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        title: "Spot Publicitario",
        description: "Comerciales de alto nivel para TV y Digital. Creamos piezas memorables que impulsan ventas y posicionamiento.",
    },
    ServiceCard {
        title: "Video Corporativo",
        description: "Comunica la cultura, valores y procesos de tu empresa. Ideal para inducción, inversores o B2B.",
    },
    ServiceCard {
        title: "Cobertura de Eventos",
        description: "Aftermovies dinámicos de congresos, lanzamientos y activaciones de marca.",
    },
    ServiceCard {
        title: "Motion Graphics 2D/3D",
        description: "Explicación de productos complejos a través de animación. Infografías animadas y branding visual.",
    },
    ServiceCard {
        title: "Fotografía Publicitaria",
        description: "Producción fotográfica para e-commerce, campañas de moda, gastronomía y arquitectura.",
    },
    ServiceCard {
        title: "Drones & Aéreos",
        description: "Tomas aéreas espectaculares con pilotos certificados y drones de última generación (FPV y Cine).",
    },
];

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Pre-Producción",
        description: "Desarrollo de guion, storyboard, scouting de locaciones y casting. Aquí se construye el éxito del proyecto.",
    },
    Step {
        number: "02",
        title: "Rodaje",
        description: "Ejecución técnica con directores, iluminadores y sonidistas expertos. Grabación en 4K/6K RAW.",
    },
    Step {
        number: "03",
        title: "Post-Producción",
        description: "Edición offline/online, diseño sonoro, corrección de color y motion graphics.",
    },
    Step {
        number: "04",
        title: "Entrega Multiformato",
        description: "Adaptación de piezas para todas las plataformas: Instagram Reels, YouTube, TV y Web.",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "¿Cuánto tiempo tarda un proyecto promedio de video?",
        answer: "Un video corporativo estándar toma entre 2 a 4 semanas. Proyectos más complejos como documentales o comerciales con VFX pueden requerir de 6 a 8 semanas.",
    },
    Faq {
        question: "¿Ustedes proveen los actores y locaciones?",
        answer: "Sí. Nos encargamos de toda la logística de producción, incluyendo casting de talento, scouting de locaciones, permisos y catering.",
    },
    Faq {
        question: "¿Entregan los archivos editables?",
        answer: "Normalmente entregamos los masters finales. La entrega de proyectos editables (XML, Premiere) y material crudo (RAW) se puede negociar como un adicional al presupuesto.",
    },
];

#[derive(askama::Template)]
#[template(path = "cine.html")]
pub struct CineTemplate {
    pub seo: Seo,
    pub back: &'static str,
    pub lead_form: &'static str,
    pub stats: &'static [Stat],
    pub services: &'static [ServiceCard],
    pub steps: &'static [Step],
    pub faqs: &'static [Faq],
}

pub async fn page(template: Template) -> impl IntoResponse {
    let page = Page::Film;

    template.render(CineTemplate {
        seo: template.seo(page, &FAQS),
        back: page.back().path(),
        lead_form: page.lead_form().map(FormVariant::slug).unwrap_or_default(),
        stats: &STATS,
        services: &SERVICES,
        steps: &STEPS,
        faqs: &FAQS,
    })
}
